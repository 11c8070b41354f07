//! Interface classification.
//!
//! Splits a raw JSON ABI into the member groups the generators work with.

mod classify;


pub use classify::Interface;
