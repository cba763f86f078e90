//! # holical-core
//!
//! Core types and error definitions for holical.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the error hierarchy with its `ensure!` macro, and the
//! freshness policy a host uses to decide whether a previously
//! fetched holiday payload can be reused.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Freshness policy for per-year holiday payloads.
pub mod freshness;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use freshness::CachePolicy;
