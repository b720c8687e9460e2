//! Domain types and pure logic for the automation control API simulator.
//!
//! Nothing in this crate touches the network or the database.

pub mod document;
pub mod error;
pub mod simulation;
pub mod types;
pub mod validation;
