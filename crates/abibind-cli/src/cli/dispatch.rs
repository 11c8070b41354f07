//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::extract::ExtractArgs;

pub struct ExtractParams {
    pub contract: String,
    pub artifacts: PathBuf,
    pub out_dir: PathBuf,
    pub no_module: bool,
    pub embed_bytecode: bool,
    pub no_export: bool,
    pub print_abi: bool,
    pub quiet: bool,
    pub color: ColorChoice,
}

impl ExtractParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            contract: m.get_one::<String>("contract").cloned().unwrap_or_default(),
            artifacts: m
                .get_one::<PathBuf>("artifacts")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("artifacts")),
            out_dir: m
                .get_one::<PathBuf>("out_dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("abi")),
            no_module: m.get_flag("no_module"),
            embed_bytecode: m.get_flag("embed_bytecode"),
            no_export: m.get_flag("no_export"),
            print_abi: m.get_flag("print_abi"),
            quiet: m.get_flag("quiet"),
            color: parse_color(m),
        }
    }
}

impl From<ExtractParams> for ExtractArgs {
    fn from(p: ExtractParams) -> Self {
        Self {
            contract: p.contract,
            artifacts_dir: p.artifacts,
            out_dir: p.out_dir,
            module: !p.no_module,
            embed_bytecode: p.embed_bytecode,
            export: !p.no_export,
            print_abi: p.print_abi,
            quiet: p.quiet,
            color: p.color.should_colorize(),
            log_color: p.color.colorize_logs(),
            compile_cmd: None,
        }
    }
}

pub struct BuildParams {
    pub extract: ExtractParams,
    pub compile_cmd: String,
}

impl BuildParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            extract: ExtractParams::from_matches(m),
            compile_cmd: m
                .get_one::<String>("compile_cmd")
                .cloned()
                .unwrap_or_else(|| "npx hardhat compile".to_string()),
        }
    }
}

impl From<BuildParams> for ExtractArgs {
    fn from(p: BuildParams) -> Self {
        Self {
            compile_cmd: Some(p.compile_cmd),
            ..p.extract.into()
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
