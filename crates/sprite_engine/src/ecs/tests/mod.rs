//! Cross-system tests that drive the full frame pipeline

mod pipeline_integration;
