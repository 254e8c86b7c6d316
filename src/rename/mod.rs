//! Rename - discovery, conflict resolution and the dry/wet run loop

pub mod resolve;
pub mod runner;
pub mod walk;
