//! The external compile step.

use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use crate::{Error, Result};

/// Produces the artifacts tree before extraction.
pub trait Compiler {
    /// Run to completion. Failure carries the compiler's own diagnostics.
    fn compile(&self) -> Result<()>;
}

impl<C: Compiler + ?Sized> Compiler for &C {
    fn compile(&self) -> Result<()> {
        (**self).compile()
    }
}

/// Runs an external command (by default `npx hardhat compile`) as a blocking
/// child process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandCompiler {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl Default for CommandCompiler {
    fn default() -> Self {
        Self::new("npx", ["hardhat", "compile"])
    }
}

impl CommandCompiler {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: None,
        }
    }

    /// Split a command line on whitespace. No shell quoting is applied.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut words = command_line.split_whitespace();
        let program = words.next()?;
        Some(Self::new(program, words))
    }

    /// Run the command from `dir` instead of the current directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl fmt::Display for CommandCompiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

impl Compiler for CommandCompiler {
    fn compile(&self) -> Result<()> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        info!(command = %self, "compiling contracts");
        let output = command.output().map_err(|e| Error::CompilationFailed {
            command: self.to_string(),
            status: format!("could not be started: {e}"),
            diagnostics: String::new(),
        })?;

        if !output.status.success() {
            let mut diagnostics = String::from_utf8_lossy(&output.stderr).into_owned();
            diagnostics.push_str(&String::from_utf8_lossy(&output.stdout));
            return Err(Error::CompilationFailed {
                command: self.to_string(),
                status: format!("failed with {}", output.status),
                diagnostics,
            });
        }

        debug!(command = %self, "compilation finished");
        Ok(())
    }
}
