//! Candidate selection utilities.
//!
//! The sorted accumulator backs both per-cell neighbor pruning and the final
//! top-K laser selection.

pub(crate) mod accumulator;
