//! Map integration tests
//!
//! Organized by concern: construction and reads, mutators, error
//! classification, and the algebraic laws every mutator must respect.

mod basic;
mod errors;
