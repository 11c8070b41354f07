//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Args shared by every extraction command.
fn with_extract_args(cmd: Command) -> Command {
    cmd.arg(contract_arg())
        .arg(artifacts_arg())
        .arg(out_dir_arg())
        .arg(no_module_arg())
        .arg(embed_bytecode_arg())
        .arg(no_export_arg())
        .arg(print_abi_arg())
        .arg(quiet_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("abibind")
        .about("Typed TypeScript bindings from compiled contract artifacts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(extract_command())
        .subcommand(compile_and_extract_command())
}

/// Extract from an existing artifacts tree.
pub fn extract_command() -> Command {
    let cmd = Command::new("extract")
        .about("Generate bindings from already compiled artifacts")
        .after_help(
            r#"OUTPUTS:
  <DIR>/<CONTRACT>-abi.json        ABI, verbatim
  <DIR>/<CONTRACT>-interface.ts    typed ethers v6 interfaces
  <DIR>/<CONTRACT>-abi.js          CommonJS module (unless --no-module)

EXAMPLES:
  abibind extract gCOTI                         # artifacts/ -> abi/
  abibind extract gCOTI -o web/src/abi          # custom output dir
  abibind extract gCOTI --artifacts out/hh      # custom artifacts dir"#,
        );

    with_extract_args(cmd)
}

/// Compile, then extract.
pub fn compile_and_extract_command() -> Command {
    let cmd = Command::new("compile-and-extract")
        .visible_alias("build")
        .about("Compile the contracts, then generate bindings")
        .after_help(
            r#"EXAMPLES:
  abibind build gCOTI                                  # npx hardhat compile
  abibind build gCOTI --compile-cmd "pnpm hardhat compile""#,
        )
        .arg(compile_cmd_arg());

    with_extract_args(cmd)
}
