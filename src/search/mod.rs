//! Query matching and ordering of definitions
//!
//! Provides the pure filtering step of the browser:
//! 1. Split the query into lower-cased terms
//! 2. Keep definitions whose kind name contains the raw query, or whose
//!    search key contains every term
//! 3. Order the survivors by sort key, keeping input order on ties

pub mod engine;

pub use engine::{SearchKeys, SearchResults, query_terms, run};
