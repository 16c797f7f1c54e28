//! Path network: which connection points are joined, and how often each
//! is touched.
//!
//! - `network`: the [`PathNetwork`] value and its read queries
//! - `calculator`: [`PathCalculator`], which builds a network from a board

pub mod calculator;
pub mod network;

pub use calculator::PathCalculator;
pub use network::PathNetwork;
