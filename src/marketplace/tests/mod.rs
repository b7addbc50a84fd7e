//! Unit tests for marketplace entities, collections, and query services.

mod service_tests;
