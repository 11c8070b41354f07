//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so `extract` and `compile-and-extract` stay in sync.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Arg, ArgAction, value_parser};

/// Contract name (positional).
pub fn contract_arg() -> Arg {
    Arg::new("contract")
        .value_name("CONTRACT")
        .required(true)
        .value_parser(NonEmptyStringValueParser::new())
        .help("Contract name, as in the artifact file name (e.g. gCOTI)")
}

/// Artifacts tree root (--artifacts).
pub fn artifacts_arg() -> Arg {
    Arg::new("artifacts")
        .long("artifacts")
        .value_name("DIR")
        .default_value("artifacts")
        .value_parser(value_parser!(PathBuf))
        .help("Compiled artifacts directory")
}

/// Output directory (-o/--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .short('o')
        .long("out-dir")
        .value_name("DIR")
        .default_value("abi")
        .value_parser(value_parser!(PathBuf))
        .help("Directory for the generated files")
}

/// Skip the CommonJS module (--no-module).
pub fn no_module_arg() -> Arg {
    Arg::new("no_module")
        .long("no-module")
        .action(ArgAction::SetTrue)
        .help("Don't write the <CONTRACT>-abi.js module")
}

/// Embed creation bytecode (--embed-bytecode).
pub fn embed_bytecode_arg() -> Arg {
    Arg::new("embed_bytecode")
        .long("embed-bytecode")
        .action(ArgAction::SetTrue)
        .help("Fill the <CONTRACT>_BYTECODE constant from the artifact")
}

/// Don't export declarations (--no-export).
pub fn no_export_arg() -> Arg {
    Arg::new("no_export")
        .long("no-export")
        .action(ArgAction::SetTrue)
        .help("Don't export generated declarations")
}

/// Print the ABI itself in the report (--print-abi).
pub fn print_abi_arg() -> Arg {
    Arg::new("print_abi")
        .long("print-abi")
        .action(ArgAction::SetTrue)
        .help("Print the full ABI JSON before the summary")
}

/// Suppress the report (-q/--quiet).
pub fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .short('q')
        .long("quiet")
        .action(ArgAction::SetTrue)
        .help("Only print errors")
}

/// Compile command (--compile-cmd).
pub fn compile_cmd_arg() -> Arg {
    Arg::new("compile_cmd")
        .long("compile-cmd")
        .value_name("CMD")
        .default_value("npx hardhat compile")
        .value_parser(non_blank)
        .help("Command that compiles the contracts")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for progress, -vv for debug logs)")
}

fn non_blank(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("command cannot be blank".to_string());
    }
    Ok(value.to_string())
}
