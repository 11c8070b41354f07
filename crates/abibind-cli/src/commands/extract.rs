use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use abibind_core::Colors;
use abibind_lib::{CommandCompiler, Error, Extraction, Pipeline, PipelineConfig};

pub struct ExtractArgs {
    pub contract: String,
    pub artifacts_dir: PathBuf,
    pub out_dir: PathBuf,
    pub module: bool,
    pub embed_bytecode: bool,
    pub export: bool,
    pub print_abi: bool,
    pub quiet: bool,
    pub color: bool,
    /// Colorize log lines on stderr
    pub log_color: bool,
    /// Compile first with this command; `None` extracts from existing artifacts.
    pub compile_cmd: Option<String>,
}

pub fn run(args: ExtractArgs) -> ExitCode {
    let code = execute(&args, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(code)
}

/// Run one extraction, writing the summary to `out` and the failure message
/// to `err`. Returns the process exit code.
pub(crate) fn execute(args: &ExtractArgs, out: &mut impl Write, err: &mut impl Write) -> u8 {
    let colors = Colors::new(args.color);
    let compiler = match &args.compile_cmd {
        None => CommandCompiler::default(),
        Some(cmd) => match CommandCompiler::parse(cmd) {
            Some(compiler) => compiler,
            None => {
                let _ = writeln!(err, "error: compile command cannot be blank");
                return 1;
            }
        },
    };
    let mut pipeline = Pipeline::new(pipeline_config(args, colors), compiler);

    match pipeline.run() {
        Ok(extraction) => {
            if !args.quiet {
                let _ = write!(out, "{}", summary(&extraction, colors));
            }
            0
        }
        Err(e) => {
            let _ = write!(err, "{}", render_error(&e));
            1
        }
    }
}

pub(crate) fn pipeline_config(args: &ExtractArgs, colors: Colors) -> PipelineConfig {
    PipelineConfig::new(args.contract.as_str())
        .artifacts_dir(&args.artifacts_dir)
        .out_dir(&args.out_dir)
        .skip_compile(args.compile_cmd.is_none())
        .emit_module(args.module)
        .embed_bytecode(args.embed_bytecode)
        .export(args.export)
        .include_abi(args.print_abi)
        .colors(colors)
}

/// Stdout text for a successful run: where the artifact was, the report,
/// then every written file.
pub(crate) fn summary(extraction: &Extraction, c: Colors) -> String {
    let mut out = format!(
        "Found artifact at: {}\n\n",
        extraction.artifact_path.display()
    );
    out.push_str(&extraction.report);
    out.push('\n');
    for (kind, path) in &extraction.written {
        let _ = writeln!(out, "{} saved to: {}", kind.label(), path.display());
    }
    let _ = writeln!(
        out,
        "\n{}ABI extraction completed successfully!{}",
        c.green, c.reset
    );
    out
}

pub(crate) fn render_error(e: &Error) -> String {
    let mut out = format!("error: {e}\n");
    if let Some(hint) = e.remediation() {
        let _ = writeln!(out, "hint: {hint}");
    }
    out
}
