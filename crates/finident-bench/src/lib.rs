//! Identifier corpus generator and benchmark utilities for finident.
//!
//! This crate produces deterministic corpora of valid identifiers (and
//! corrupted copies of them) for benchmarking and property-based testing
//! of `finident-core`.

pub mod generator;

pub use generator::{
    SizeTier, corrupt, generate_bics, generate_cards, generate_ibans, generate_routing_numbers,
};
