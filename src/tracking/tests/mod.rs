//! Unit tests for job tracking.

mod live_tests;
mod pipeline_tests;
mod support;
