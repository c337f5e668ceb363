// src/middleware/mod.rs

pub mod trace;

pub use trace::trace_requests;
