// src/run/mod.rs
// =============================================================================
// This module runs a batch of URLs through the fetch/save/report pipeline.
//
// Features:
// - Every URL is processed concurrently and independently
// - One URL failing never affects the others
// - An empty URL list is rejected before anything starts
// =============================================================================

mod pipeline;

pub use pipeline::{run, PageStatus, RunError};
