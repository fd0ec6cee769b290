//! Structural diff engine for jsoncmp.
//!
//! Walks two decoded documents side by side and enumerates every divergence
//! found: keys missing on either side, shape mismatches, array length
//! mismatches and scalar value mismatches. Each finding is tagged with the
//! path at which it occurred.
//!
//! Arrays are compared strictly by position. The engine reports all
//! divergences, it does not try to produce a minimal edit script.
//!
//! # Key Types
//!
//! - [`compare`] / [`ComparisonResult`] -- Entry point and its output
//! - [`DiscrepancyRecord`] / [`DiscrepancyKind`] -- A single finding
//! - [`Path`] / [`PathSegment`] -- Location of a finding (`a.b[2].c`)

pub mod engine;
pub mod path;
pub mod record;

pub use engine::{compare, ComparisonResult, DIFFERENCES_HEADER, IDENTICAL_SUMMARY};
pub use path::{Path, PathSegment};
pub use record::{DiscrepancyKind, DiscrepancyRecord, MISSING_MARKER};
