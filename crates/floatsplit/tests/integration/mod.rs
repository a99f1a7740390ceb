//! Integration tests for the split codec.
//!
//! These tests drive the public API end to end: encode, serialize,
//! transmit a primary-only container, and decode both ways.

mod container_workflow;
mod scenarios;
