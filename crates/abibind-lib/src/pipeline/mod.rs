//! The extraction run: compile → locate → classify → generate → persist.
//!
//! One [`Pipeline`] drives every run. Compilation is an optional first
//! transition; any error moves the pipeline to [`Stage::Failed`] and is
//! returned unchanged.

mod compile;
mod persist;


use std::fmt;
use std::path::{Path, PathBuf};

use abibind_core::{Artifact, Colors};
use tracing::{debug, info};

use crate::analyze::Interface;
use crate::artifact::ArtifactStore;
use crate::report::Report;
use crate::typegen::typescript::{Binding, Config, Emitter};
use crate::Result;

pub use compile::{CommandCompiler, Compiler};
use persist::write_output;

/// Where a pipeline currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Compiling,
    Locating,
    Classifying,
    Generating,
    /// All outputs written.
    Persisted,
    Failed,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::Compiling => "compiling",
            Stage::Locating => "locating",
            Stage::Classifying => "classifying",
            Stage::Generating => "generating",
            Stage::Persisted => "persisted",
            Stage::Failed => "failed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output file locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub abi_json: PathBuf,
    pub typescript: PathBuf,
    pub module: PathBuf,
}

impl OutputPaths {
    /// `<dir>/<name>-abi.json`, `<dir>/<name>-interface.ts`, `<dir>/<name>-abi.js`.
    pub fn in_dir(dir: &Path, contract: &str) -> Self {
        Self {
            abi_json: dir.join(format!("{contract}-abi.json")),
            typescript: dir.join(format!("{contract}-interface.ts")),
            module: dir.join(format!("{contract}-abi.js")),
        }
    }
}

/// Which output a written file is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    AbiJson,
    TypeScript,
    Module,
}

impl OutputKind {
    pub fn label(self) -> &'static str {
        match self {
            OutputKind::AbiJson => "ABI",
            OutputKind::TypeScript => "TypeScript interface",
            OutputKind::Module => "JavaScript module",
        }
    }
}

/// Settings for one run.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub(crate) contract: String,
    pub(crate) artifacts_dir: PathBuf,
    pub(crate) outputs: OutputPaths,
    pub(crate) skip_compile: bool,
    pub(crate) emit_module: bool,
    pub(crate) embed_bytecode: bool,
    pub(crate) include_abi: bool,
    pub(crate) export: bool,
    pub(crate) colors: Colors,
}

impl PipelineConfig {
    pub const DEFAULT_ARTIFACTS_DIR: &'static str = "artifacts";
    pub const DEFAULT_OUT_DIR: &'static str = "abi";

    pub fn new(contract: impl Into<String>) -> Self {
        let contract = contract.into();
        Self {
            outputs: OutputPaths::in_dir(Path::new(Self::DEFAULT_OUT_DIR), &contract),
            contract,
            artifacts_dir: PathBuf::from(Self::DEFAULT_ARTIFACTS_DIR),
            skip_compile: false,
            emit_module: true,
            embed_bytecode: false,
            include_abi: false,
            export: true,
            colors: Colors::OFF,
        }
    }

    pub fn contract(&self) -> &str {
        &self.contract
    }

    pub fn outputs(&self) -> &OutputPaths {
        &self.outputs
    }

    pub fn artifacts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifacts_dir = dir.into();
        self
    }

    /// Place all outputs in `dir` under their default names.
    pub fn out_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.outputs = OutputPaths::in_dir(dir.as_ref(), &self.contract);
        self
    }

    pub fn output_paths(mut self, outputs: OutputPaths) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn skip_compile(mut self, value: bool) -> Self {
        self.skip_compile = value;
        self
    }

    pub fn emit_module(mut self, value: bool) -> Self {
        self.emit_module = value;
        self
    }

    pub fn embed_bytecode(mut self, value: bool) -> Self {
        self.embed_bytecode = value;
        self
    }

    pub fn include_abi(mut self, value: bool) -> Self {
        self.include_abi = value;
        self
    }

    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }
}

/// Everything a successful run produced.
#[derive(Debug)]
pub struct Extraction {
    pub artifact_path: PathBuf,
    pub artifact: Artifact,
    pub interface: Interface,
    /// Rendered terminal report
    pub report: String,
    pub binding: Binding,
    /// Files written, in write order
    pub written: Vec<(OutputKind, PathBuf)>,
}

/// Extraction state machine.
pub struct Pipeline<C> {
    config: PipelineConfig,
    compiler: C,
    stage: Stage,
}

impl<C: Compiler> Pipeline<C> {
    pub fn new(config: PipelineConfig, compiler: C) -> Self {
        Self {
            config,
            compiler,
            stage: Stage::Idle,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Run every stage to completion. Running again starts over from `Idle`.
    pub fn run(&mut self) -> Result<Extraction> {
        self.stage = Stage::Idle;
        let result = self.run_stages();
        if let Err(e) = &result {
            debug!(stage = %self.stage, error = %e, "extraction failed");
            self.enter(Stage::Failed);
        }
        result
    }

    fn enter(&mut self, stage: Stage) {
        debug!(from = %self.stage, to = %stage, "stage transition");
        self.stage = stage;
    }

    fn run_stages(&mut self) -> Result<Extraction> {
        if !self.config.skip_compile {
            self.enter(Stage::Compiling);
            self.compiler.compile()?;
        }

        self.enter(Stage::Locating);
        let store = ArtifactStore::new(&self.config.artifacts_dir);
        let (artifact_path, artifact) = store.load(&self.config.contract)?;
        info!(path = %artifact_path.display(), "found artifact");

        self.enter(Stage::Classifying);
        let interface = Interface::classify(&artifact.abi)?;

        self.enter(Stage::Generating);
        let report = Report::new(&interface, &artifact)
            .include_abi(self.config.include_abi)
            .render(self.config.colors);
        let mut emit_config = Config::new().export(self.config.export);
        if self.config.embed_bytecode {
            emit_config = emit_config.bytecode(artifact.bytecode.as_str());
        }
        let binding =
            Emitter::new(&interface, &artifact.abi, &self.config.contract, emit_config).emit();

        let mut written = Vec::new();
        let outputs = &self.config.outputs;
        write_output(&outputs.abi_json, &format!("{:#}", artifact.abi))?;
        written.push((OutputKind::AbiJson, outputs.abi_json.clone()));
        write_output(&outputs.typescript, &binding.typescript())?;
        written.push((OutputKind::TypeScript, outputs.typescript.clone()));
        if self.config.emit_module {
            write_output(&outputs.module, &binding.module)?;
            written.push((OutputKind::Module, outputs.module.clone()));
        }
        self.enter(Stage::Persisted);

        info!(
            contract = %self.config.contract,
            files = written.len(),
            "extraction completed"
        );
        Ok(Extraction {
            artifact_path,
            artifact,
            interface,
            report,
            binding,
            written,
        })
    }
}
