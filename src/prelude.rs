//! Prelude module for `approx_dates` crate.
//!
//! Re-exports commonly used derive macros from `derive_more`.

#[allow(unused_imports)]
pub use derive_more::{Display, From};
