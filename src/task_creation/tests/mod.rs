//! Unit tests for the task creation flow and posting service.

mod flow_tests;
