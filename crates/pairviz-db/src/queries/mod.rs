//! Database query implementations.

pub mod pairs;
pub mod tokens;
