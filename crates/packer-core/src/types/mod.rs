//! Shared data types for the calculator and its collaborators.

pub mod collections;
pub mod packs;

pub use collections::{FxHashMap, FxHashSet};
pub use packs::{PackSize, Quantity, RequiredPacks};
