//! # packer-graph
//!
//! The pack calculator. Builds a transient graph of reachable remaining
//! quantities by subtracting pack sizes, prunes it down to the candidate with
//! the smallest overshoot, and reads the packs off a minimum-hop path.

pub mod calculator;
pub mod graph;
pub mod headroom;
pub mod path;

pub use calculator::{calculate, GraphPackCalculator};
pub use graph::{PruneResult, QuantityGraph};
pub use headroom::Headroom;
pub use path::QuantityPath;
