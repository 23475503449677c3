//! Value integration tests
//!
//! Covers the `Value` dispatcher and each typed view it routes to.

mod collection;
mod dispatch;
mod number;
