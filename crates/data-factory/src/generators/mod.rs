//! Composite generators built on the random source and selection engine.
//!
//! These functions take the random source explicitly so they can run without
//! a [`crate::DataFactory`]; the facade forwards to them with its own source.

pub mod dates;
pub mod text;
