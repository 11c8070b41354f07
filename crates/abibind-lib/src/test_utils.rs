//! Test fixtures and snapshot macros.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

/// Inline snapshot of the declarations of a generated binding.
///
/// The verbatim ABI constant is left out; it is covered by round-trip tests.
#[macro_export]
macro_rules! shot_binding {
    ($abi:expr, $name:literal, @$snapshot:literal) => {{
        let abi: serde_json::Value = $abi;
        let interface = $crate::analyze::Interface::classify(&abi).unwrap();
        let binding = $crate::typegen::typescript::Emitter::new(
            &interface,
            &abi,
            $name,
            $crate::typegen::typescript::Config::new(),
        )
        .emit();
        insta::with_settings!({ omit_expression => true }, {
            insta::assert_snapshot!(binding.declarations(), @$snapshot);
        });
    }};
}

/// The gCOTI governance token ABI: payable constructor, one view function,
/// one mutating function and one event.
pub fn gcoti_abi() -> Value {
    json!([
        {
            "inputs": [
                { "internalType": "address", "name": "initialOwner", "type": "address" },
                { "internalType": "address", "name": "recipient", "type": "address" },
                { "internalType": "uint256", "name": "totalSupply", "type": "uint256" }
            ],
            "stateMutability": "payable",
            "type": "constructor"
        },
        {
            "anonymous": false,
            "inputs": [
                { "indexed": true, "internalType": "address", "name": "from", "type": "address" },
                { "indexed": true, "internalType": "address", "name": "to", "type": "address" },
                { "indexed": false, "internalType": "uint256", "name": "value", "type": "uint256" }
            ],
            "name": "Transfer",
            "type": "event"
        },
        {
            "inputs": [],
            "name": "cap",
            "outputs": [{ "internalType": "uint256", "name": "", "type": "uint256" }],
            "stateMutability": "view",
            "type": "function"
        },
        {
            "inputs": [
                { "internalType": "address", "name": "to", "type": "address" },
                { "internalType": "uint256", "name": "amount", "type": "uint256" }
            ],
            "name": "transfer",
            "outputs": [{ "internalType": "bool", "name": "", "type": "bool" }],
            "stateMutability": "nonpayable",
            "type": "function"
        }
    ])
}

/// A Hardhat artifact document wrapping `abi`.
pub fn artifact_json(contract: &str, abi: &Value) -> String {
    let artifact = json!({
        "_format": "hh-sol-artifact-1",
        "contractName": contract,
        "sourceName": format!("contracts/{contract}.sol"),
        "abi": abi,
        "bytecode": "0x6080604052",
        "deployedBytecode": "0x608060",
        "linkReferences": {},
        "deployedLinkReferences": {}
    });
    format!("{artifact:#}")
}

/// Write `contents` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}
