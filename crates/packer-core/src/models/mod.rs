//! Boundary models shared by front ends.

pub mod response;

pub use response::Response;
