use abibind_core::{Artifact, Colors};
use indoc::indoc;
use serde_json::json;

use crate::Report;
use crate::analyze::Interface;
use crate::test_utils::{artifact_json, gcoti_abi};

fn artifact(json: &str) -> Artifact {
    Artifact::from_json(json).unwrap()
}

#[test]
fn gcoti_report() {
    let artifact = artifact(&artifact_json("gCOTI", &gcoti_abi()));
    let interface = Interface::classify(&artifact.abi).unwrap();

    let out = Report::new(&interface, &artifact).render(Colors::OFF);

    insta::assert_snapshot!(out, @r"
    CONTRACT FUNCTIONS:
    ===================
    1. cap() -> uint256 (view)
    2. transfer(address to, uint256 amount) -> bool (nonpayable)

    CONTRACT EVENTS:
    ================
    1. Transfer(address from, address to, uint256 value)

    CONSTRUCTOR:
    ============
    constructor(address initialOwner, address recipient, uint256 totalSupply)

    CONTRACT DETAILS:
    =================
    Contract Name: gCOTI
    Source Name: contracts/gCOTI.sol
    Compiler Version: Unknown
    Bytecode size: 5 bytes
    Deployed bytecode size: 3 bytes
    ");
}

#[test]
fn empty_sections_and_no_constructor() {
    let artifact = artifact(indoc! {r#"
        {
          "contractName": "Empty",
          "sourceName": "contracts/Empty.sol",
          "abi": [],
          "bytecode": "",
          "deployedBytecode": "0x"
        }
    "#});
    let interface = Interface::classify(&artifact.abi).unwrap();

    let out = Report::new(&interface, &artifact).render(Colors::OFF);

    assert_eq!(
        out,
        indoc! {"
            CONTRACT FUNCTIONS:
            ===================
            (none)

            CONTRACT EVENTS:
            ================
            (none)

            CONTRACT DETAILS:
            =================
            Contract Name: Empty
            Source Name: contracts/Empty.sol
            Compiler Version: Unknown
            Bytecode size: -1 bytes
            Deployed bytecode size: 0 bytes
        "}
    );
}

#[test]
fn compiler_version_from_metadata() {
    let doc = json!({
        "contractName": "Token",
        "sourceName": "contracts/Token.sol",
        "abi": [],
        "bytecode": "0x00",
        "deployedBytecode": "0x00",
        "metadata": "{\"compiler\":{\"version\":\"0.8.20+commit.a1b79de6\"},\"language\":\"Solidity\"}"
    });
    let artifact = artifact(&doc.to_string());
    let interface = Interface::classify(&artifact.abi).unwrap();

    let out = Report::new(&interface, &artifact).render(Colors::OFF);

    assert!(out.contains("Compiler Version: 0.8.20+commit.a1b79de6\n"));
}

#[test]
fn function_with_several_outputs_and_unnamed_params() {
    let abi = json!([
        { "type": "function", "name": "getReserves", "inputs": [{ "name": "", "type": "uint8" }],
          "outputs": [{ "name": "", "type": "uint112" }, { "name": "", "type": "uint32" }],
          "stateMutability": "view" },
        { "type": "function", "name": "sync", "inputs": [], "outputs": [], "constant": false }
    ]);
    let artifact = artifact(&artifact_json("Pair", &abi));
    let interface = Interface::classify(&artifact.abi).unwrap();

    let out = Report::new(&interface, &artifact).render(Colors::OFF);

    assert!(out.contains("1. getReserves(uint8) -> uint112, uint32 (view)\n"));
    assert!(out.contains("2. sync() -> void (nonpayable)\n"));
}

#[test]
fn includes_pretty_abi_when_asked() {
    let abi = json!([{ "type": "receive", "stateMutability": "payable" }]);
    let artifact = artifact(&artifact_json("Sink", &abi));
    let interface = Interface::classify(&artifact.abi).unwrap();

    let out = Report::new(&interface, &artifact)
        .include_abi(true)
        .render(Colors::OFF);

    assert!(out.starts_with(indoc! {r#"
        CONTRACT ABI:
        =============
        [
          {
            "type": "receive",
            "stateMutability": "payable"
          }
        ]

        CONTRACT FUNCTIONS:
    "#}));
}

#[test]
fn colored_output() {
    let artifact = artifact(&artifact_json("gCOTI", &gcoti_abi()));
    let interface = Interface::classify(&artifact.abi).unwrap();

    let out = Report::new(&interface, &artifact).render(Colors::ON);

    assert!(out.starts_with("\x1b[1mCONTRACT FUNCTIONS:\x1b[0m\n"));
    assert!(out.contains("\x1b[34mcap\x1b[0m"));
    assert!(out.contains("\x1b[32muint256\x1b[0m amount"));
    assert!(out.contains("\x1b[33m(view)\x1b[0m"));
}
