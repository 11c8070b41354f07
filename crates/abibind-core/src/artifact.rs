//! Hardhat artifact files.

use serde::Deserialize;

/// Compiled contract as written by the external compiler.
///
/// `abi` stays raw JSON (object key order preserved) so it can be written
/// back out unchanged.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    #[serde(default)]
    pub source_name: String,
    pub abi: serde_json::Value,
    /// Creation code, `0x`-prefixed hex.
    #[serde(default)]
    pub bytecode: String,
    /// Runtime code, `0x`-prefixed hex.
    #[serde(default)]
    pub deployed_bytecode: String,
    /// Solidity metadata, itself a JSON document encoded as a string.
    #[serde(default)]
    pub metadata: Option<String>,
}

impl Artifact {
    /// Parse artifact file content.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Compiler version recorded in the metadata, if any.
    ///
    /// Unparseable metadata is treated the same as missing metadata.
    pub fn compiler_version(&self) -> Option<String> {
        let metadata = self.metadata.as_deref()?;
        let value: serde_json::Value = serde_json::from_str(metadata).ok()?;
        value
            .get("compiler")?
            .get("version")?
            .as_str()
            .map(str::to_owned)
    }

    /// Creation code size in bytes.
    pub fn bytecode_size(&self) -> i64 {
        payload_size(&self.bytecode)
    }

    /// Runtime code size in bytes.
    pub fn deployed_bytecode_size(&self) -> i64 {
        payload_size(&self.deployed_bytecode)
    }
}

/// Byte length of a `0x`-prefixed hex payload: half the string length, minus
/// one for the two prefix characters. An empty string yields `-1`.
pub(crate) fn payload_size(hex: &str) -> i64 {
    hex.len() as i64 / 2 - 1
}
