//! TypeScript binding generation from a classified ABI.
//!
//! The binding is an ethers v6 style contract interface plus supporting
//! declarations (event payloads, constructor parameters, deploy helper) and
//! a verbatim copy of the ABI.

mod binding;
mod config;
mod emitter;
mod naming;
mod render;
mod types;


pub use binding::Binding;
pub use config::Config;
pub use emitter::Emitter;
pub use naming::Names;
pub use types::{TsType, map_type};
