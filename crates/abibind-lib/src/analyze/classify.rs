use abibind_core::{Constructor, Event, Function, Member};
use serde_json::Value;
use tracing::debug;

use crate::{Error, Result};

/// ABI members grouped by kind.
///
/// Each group keeps the relative order the members had in the ABI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interface {
    pub functions: Vec<Function>,
    pub events: Vec<Event>,
    pub constructor: Option<Constructor>,
    /// Custom errors, fallback and receive: not part of the typed projection.
    pub others: Vec<Member>,
}

impl Interface {
    /// Classify a raw JSON ABI in a single pass.
    ///
    /// Any structural problem fails the whole ABI; there is no partial result.
    pub fn classify(abi: &Value) -> Result<Self> {
        let Some(members) = abi.as_array() else {
            return Err(Error::MalformedInterface(format!(
                "expected an array of members, found {}",
                json_kind(abi)
            )));
        };

        let mut interface = Self::default();
        for (index, value) in members.iter().enumerate() {
            if !value.is_object() {
                return Err(Error::MalformedInterface(format!(
                    "member #{index} is {}, expected an object",
                    json_kind(value)
                )));
            }

            let member = Member::from_value(value)
                .map_err(|e| Error::MalformedInterface(format!("member #{index}: {e}")))?;

            match member {
                Member::Function(func) => interface.functions.push(func),
                Member::Event(event) => interface.events.push(event),
                Member::Constructor(ctor) => {
                    if interface.constructor.is_some() {
                        return Err(Error::MalformedInterface(format!(
                            "member #{index}: more than one constructor"
                        )));
                    }
                    interface.constructor = Some(ctor);
                }
                other => interface.others.push(other),
            }
        }

        debug!(
            functions = interface.functions.len(),
            events = interface.events.len(),
            constructor = interface.constructor.is_some(),
            others = interface.others.len(),
            "classified interface"
        );
        Ok(interface)
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
            && self.events.is_empty()
            && self.constructor.is_none()
            && self.others.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
