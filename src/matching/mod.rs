//! Fuzzy matching utilities for contact names.
//!
//! This module provides similarity scoring used to suggest existing contact
//! names when an exact lookup misses.

pub mod name_matcher;

pub use name_matcher::{NameMatch, NameMatcher};
