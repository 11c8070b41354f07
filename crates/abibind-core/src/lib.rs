#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for compiled contract artifacts.
//!
//! Two layers:
//! - **Artifact layer**: 1:1 mapping to a Hardhat artifact file
//!   (`artifacts/**/<Name>.json`)
//! - **Interface layer**: typed view over the ABI members inside it
//!
//! The ABI itself is kept as raw JSON on the artifact so that consumers can
//! re-emit it verbatim; the typed view is derived from it on demand.

mod abi;
mod artifact;
pub mod colors;
pub mod utils;

#[cfg(test)]
mod utils_tests;

pub use abi::{
    Constructor, CustomError, Event, Fallback, Function, Member, Param, Receive, StateMutability,
};
pub use artifact::Artifact;
pub use colors::Colors;
