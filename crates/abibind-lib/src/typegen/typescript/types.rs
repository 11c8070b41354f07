//! Solidity ABI type → TypeScript type mapping.

use std::fmt;

/// TypeScript type used in generated signatures.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TsType {
    /// Any integer width; 256-bit values do not fit in `number`.
    BigInt,
    Boolean,
    /// Addresses, strings and hex-encoded bytes.
    String,
    Array(Box<TsType>),
    /// Tuples, function types and anything unrecognised.
    Any,
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsType::BigInt => f.write_str("bigint"),
            TsType::Boolean => f.write_str("boolean"),
            TsType::String => f.write_str("string"),
            TsType::Array(inner) => write!(f, "{inner}[]"),
            TsType::Any => f.write_str("any"),
        }
    }
}

/// Map an ABI type string to its TypeScript type. Never fails.
///
/// Array suffixes (`[]`, `[N]`) are peeled first, so `uint256[]` maps to
/// `bigint[]` rather than being caught by the integer rule.
pub fn map_type(ty: &str) -> TsType {
    if let Some(base) = strip_array_suffix(ty) {
        return TsType::Array(Box::new(map_type(base)));
    }
    if ty.contains("int") {
        return TsType::BigInt;
    }
    match ty {
        "bool" => TsType::Boolean,
        "address" | "string" => TsType::String,
        _ if is_bytes(ty) => TsType::String,
        _ => TsType::Any,
    }
}

/// `T[]` / `T[N]` → `T`.
fn strip_array_suffix(ty: &str) -> Option<&str> {
    let rest = ty.strip_suffix(']')?;
    let open = rest.rfind('[')?;
    let size = &rest[open + 1..];
    size.bytes()
        .all(|b| b.is_ascii_digit())
        .then(|| &rest[..open])
}

/// `bytes` or `bytes1` … `bytes32`.
fn is_bytes(ty: &str) -> bool {
    match ty.strip_prefix("bytes") {
        Some("") => true,
        Some(width) => width.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}
