//! Typed ABI members.
//!
//! Solidity's JSON ABI is an array of objects discriminated by a `type`
//! field. Members are deserialized one at a time so callers can report the
//! index of a malformed entry.

use std::fmt;

use serde::Deserialize;

/// One entry of a JSON ABI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Member {
    Function(Function),
    Event(Event),
    Constructor(Constructor),
    Error(CustomError),
    Fallback(Fallback),
    Receive(Receive),
}

impl Member {
    /// Parse a single ABI entry.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }

    /// The `type` tag this member was parsed from.
    pub fn kind(&self) -> &'static str {
        match self {
            Member::Function(_) => "function",
            Member::Event(_) => "event",
            Member::Constructor(_) => "constructor",
            Member::Error(_) => "error",
            Member::Fallback(_) => "fallback",
            Member::Receive(_) => "receive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<Param>,
    #[serde(default)]
    pub outputs: Vec<Param>,
    #[serde(default)]
    pub state_mutability: Option<StateMutability>,
    /// Pre-0.5 compilers: `constant: true` means view.
    #[serde(default)]
    pub constant: Option<bool>,
    /// Pre-0.5 compilers: `payable: true` means payable.
    #[serde(default)]
    pub payable: Option<bool>,
}

impl Function {
    /// Effective mutability, falling back to the legacy `constant`/`payable`
    /// flags when `stateMutability` is absent.
    pub fn mutability(&self) -> StateMutability {
        if let Some(m) = self.state_mutability {
            return m;
        }
        match (self.constant, self.payable) {
            (Some(true), _) => StateMutability::View,
            (_, Some(true)) => StateMutability::Payable,
            _ => StateMutability::Nonpayable,
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.mutability().is_read_only()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<Param>,
    #[serde(default)]
    pub anonymous: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    #[serde(default)]
    pub inputs: Vec<Param>,
    #[serde(default)]
    pub state_mutability: Option<StateMutability>,
}

/// Custom error (`error Unauthorized(address caller);`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomError {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fallback {
    #[serde(default)]
    pub state_mutability: Option<StateMutability>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receive {
    #[serde(default)]
    pub state_mutability: Option<StateMutability>,
}

/// Function, event or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    /// Empty for unnamed parameters (common for outputs).
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub internal_type: Option<String>,
    #[serde(default)]
    pub indexed: Option<bool>,
    #[serde(default)]
    pub components: Vec<Param>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    Nonpayable,
    Payable,
}

impl StateMutability {
    /// `view` and `pure` calls return decoded values instead of a transaction.
    pub fn is_read_only(self) -> bool {
        matches!(self, StateMutability::View | StateMutability::Pure)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StateMutability::Pure => "pure",
            StateMutability::View => "view",
            StateMutability::Nonpayable => "nonpayable",
            StateMutability::Payable => "payable",
        }
    }
}

impl fmt::Display for StateMutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
