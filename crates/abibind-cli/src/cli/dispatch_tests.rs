//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{compile_and_extract_command, extract_command};
use crate::commands::extract::ExtractArgs;

#[test]
fn extract_defaults() {
    let m = extract_command()
        .try_get_matches_from(["extract", "gCOTI"])
        .unwrap();
    let params = ExtractParams::from_matches(&m);
    assert_eq!(params.color, ColorChoice::Auto);

    let args: ExtractArgs = params.into();
    assert_eq!(args.contract, "gCOTI");
    assert_eq!(args.artifacts_dir, PathBuf::from("artifacts"));
    assert_eq!(args.out_dir, PathBuf::from("abi"));
    assert!(args.module);
    assert!(args.export);
    assert!(!args.embed_bytecode);
    assert!(!args.print_abi);
    assert!(!args.quiet);
    assert_eq!(args.compile_cmd, None);
}

#[test]
fn extract_flags() {
    let m = extract_command()
        .try_get_matches_from([
            "extract",
            "Token",
            "--artifacts",
            "out/artifacts",
            "-o",
            "web/abi",
            "--no-module",
            "--embed-bytecode",
            "--no-export",
            "--print-abi",
            "-q",
            "--color",
            "always",
        ])
        .unwrap();
    let params = ExtractParams::from_matches(&m);

    assert_eq!(params.color, ColorChoice::Always);
    let args: ExtractArgs = params.into();
    assert_eq!(args.artifacts_dir, PathBuf::from("out/artifacts"));
    assert_eq!(args.out_dir, PathBuf::from("web/abi"));
    assert!(!args.module);
    assert!(args.embed_bytecode);
    assert!(!args.export);
    assert!(args.print_abi);
    assert!(args.quiet);
    assert!(args.color);
}

#[test]
fn extract_requires_contract() {
    let result = extract_command().try_get_matches_from(["extract"]);
    assert!(result.is_err());

    let result = extract_command().try_get_matches_from(["extract", ""]);
    assert!(result.is_err());
}

#[test]
fn extract_rejects_compile_cmd() {
    let result =
        extract_command().try_get_matches_from(["extract", "gCOTI", "--compile-cmd", "make"]);
    assert!(result.is_err());
}

#[test]
fn compile_and_extract_rejects_blank_command() {
    for blank in ["", "   ", "\t"] {
        let result = compile_and_extract_command().try_get_matches_from([
            "compile-and-extract",
            "gCOTI",
            "--compile-cmd",
            blank,
        ]);
        assert!(result.is_err(), "{blank:?} accepted");
    }
}

#[test]
fn log_colors_follow_color_flag() {
    assert!(ColorChoice::Always.colorize_logs());
    assert!(!ColorChoice::Never.colorize_logs());

    let m = extract_command()
        .try_get_matches_from(["extract", "gCOTI", "--color", "never"])
        .unwrap();
    let args: ExtractArgs = ExtractParams::from_matches(&m).into();
    assert!(!args.log_color);
    assert!(!args.color);
}

#[test]
fn compile_and_extract_default_command() {
    let m = compile_and_extract_command()
        .try_get_matches_from(["compile-and-extract", "gCOTI"])
        .unwrap();
    let args: ExtractArgs = BuildParams::from_matches(&m).into();

    assert_eq!(args.contract, "gCOTI");
    assert_eq!(args.compile_cmd.as_deref(), Some("npx hardhat compile"));
    assert!(args.module);
}

#[test]
fn compile_and_extract_custom_command() {
    let m = compile_and_extract_command()
        .try_get_matches_from([
            "compile-and-extract",
            "gCOTI",
            "--compile-cmd",
            "pnpm hardhat compile",
            "--no-module",
        ])
        .unwrap();
    let args: ExtractArgs = BuildParams::from_matches(&m).into();

    assert_eq!(args.compile_cmd.as_deref(), Some("pnpm hardhat compile"));
    assert!(!args.module);
}

#[test]
fn build_alias_dispatches_to_compile_and_extract() {
    let m = build_cli()
        .try_get_matches_from(["abibind", "-vv", "build", "gCOTI"])
        .unwrap();

    let (name, sub) = m.subcommand().unwrap();
    assert_eq!(name, "compile-and-extract");
    assert_eq!(m.get_count("verbose"), 2);
    assert_eq!(
        BuildParams::from_matches(sub).extract.contract,
        "gCOTI"
    );
}

#[test]
fn verbose_after_subcommand() {
    let m = build_cli()
        .try_get_matches_from(["abibind", "extract", "gCOTI", "-v"])
        .unwrap();

    let (_, sub) = m.subcommand().unwrap();
    assert_eq!(sub.get_count("verbose"), 1);
}

#[test]
fn subcommand_required() {
    assert!(build_cli().try_get_matches_from(["abibind"]).is_err());
}

#[test]
fn help_lists_shared_flags() {
    let help = compile_and_extract_command().render_help().to_string();

    for flag in [
        "--artifacts",
        "--out-dir",
        "--no-module",
        "--embed-bytecode",
        "--print-abi",
        "--quiet",
        "--color",
        "--compile-cmd",
    ] {
        assert!(help.contains(flag), "missing {flag} in:\n{help}");
    }
}
