//! abibind: typed TypeScript bindings from compiled contract artifacts.
//!
//! This crate provides the extraction pipeline:
//! - `artifact` - locating and loading artifacts from the artifacts tree
//! - `analyze` - classifying ABI members into functions, events, constructor
//! - `typegen` - TypeScript binding generation
//! - `report` - human-readable interface summary
//! - `pipeline` - the compile → locate → classify → generate → persist run
//!
//! # Example
//!
//! ```
//! use abibind_lib::analyze::Interface;
//! use abibind_lib::typegen::typescript::{Config, Emitter};
//!
//! let abi = serde_json::json!([
//!     { "type": "function", "name": "cap", "inputs": [],
//!       "outputs": [{ "name": "", "type": "uint256" }], "stateMutability": "view" }
//! ]);
//! let interface = Interface::classify(&abi).unwrap();
//! let binding = Emitter::new(&interface, &abi, "Token", Config::new()).emit();
//! assert!(binding.typescript().contains("cap(): Promise<bigint>;"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io;
use std::path::PathBuf;

pub mod analyze;
pub mod artifact;
pub mod pipeline;
pub mod report;
pub mod typegen;

#[cfg(test)]
mod report_tests;
#[cfg(test)]
pub mod test_utils;

pub use analyze::Interface;
pub use artifact::{ArtifactStore, find_artifact};
pub use pipeline::{
    CommandCompiler, Compiler, Extraction, OutputKind, OutputPaths, Pipeline, PipelineConfig, Stage,
};
pub use report::Report;

/// Errors that can abort an extraction run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("artifact `{file_name}` not found under `{}`", root.display())]
    ArtifactNotFound { root: PathBuf, file_name: String },

    #[error("failed to read artifact `{}`: {source}", path.display())]
    ArtifactRead { path: PathBuf, source: io::Error },

    #[error("invalid artifact `{}`: {source}", path.display())]
    InvalidArtifact {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("malformed interface: {0}")]
    MalformedInterface(String),

    #[error("compilation failed: `{command}` {status}{}", diagnostics_suffix(.diagnostics))]
    CompilationFailed {
        command: String,
        status: String,
        diagnostics: String,
    },

    #[error("failed to write `{}`: {source}", path.display())]
    PersistenceFailed { path: PathBuf, source: io::Error },
}

impl Error {
    /// Operator-facing next step, when there is one.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Error::ArtifactNotFound { .. } => Some(
                "compile the contracts first (e.g. `npx hardhat compile`) and retry, \
                 or use `abibind compile-and-extract`",
            ),
            Error::InvalidArtifact { .. } | Error::MalformedInterface(_) => Some(
                "the compiler output looks damaged; clean and recompile \
                 (e.g. `npx hardhat clean && npx hardhat compile`)",
            ),
            Error::PersistenceFailed { .. } => {
                Some("check that the output directory is writable")
            }
            Error::ArtifactRead { .. } | Error::CompilationFailed { .. } => None,
        }
    }
}

fn diagnostics_suffix(diagnostics: &str) -> String {
    let trimmed = diagnostics.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{trimmed}")
    }
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
