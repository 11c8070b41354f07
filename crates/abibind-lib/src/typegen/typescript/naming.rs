//! Names of generated declarations and parameters.

use std::collections::HashSet;

use abibind_core::Param;
use abibind_core::utils::{is_identifier, to_screaming_snake_case, upper_first};

/// Declaration names derived from a contract name.
///
/// For `gCOTI`: `GCOTIContract`, `GCOTIEvents`, `GCOTIConstructorParams`,
/// `GCOTI_ABI`, `GCOTI_BYTECODE`, `DeployGCOTI`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Names {
    pub contract: String,
    pub events: String,
    pub constructor_params: String,
    pub abi_const: String,
    pub bytecode_const: String,
    pub deploy: String,
}

impl Names {
    pub fn new(contract_name: &str) -> Self {
        let prefix = upper_first(contract_name);
        let const_prefix = to_screaming_snake_case(&prefix);
        Self {
            contract: format!("{prefix}Contract"),
            events: format!("{prefix}Events"),
            constructor_params: format!("{prefix}ConstructorParams"),
            abi_const: format!("{const_prefix}_ABI"),
            bytecode_const: format!("{const_prefix}_BYTECODE"),
            deploy: format!("Deploy{prefix}"),
        }
    }
}

/// Parameter names usable in TypeScript, one per param.
///
/// Unnamed, unusable or repeated names become positional `argN`. A positional
/// name that a real parameter already uses gets `_` appended until it is free.
pub(super) fn param_names(params: &[Param]) -> Vec<String> {
    let mut taken: HashSet<&str> = HashSet::new();
    let mut keep = vec![false; params.len()];
    for (i, param) in params.iter().enumerate() {
        keep[i] = is_identifier(&param.name) && taken.insert(param.name.as_str());
    }

    let mut used: HashSet<String> = taken.iter().map(|s| s.to_string()).collect();
    params
        .iter()
        .zip(keep)
        .enumerate()
        .map(|(index, (param, keep))| {
            if keep {
                return param.name.clone();
            }
            let mut name = format!("arg{index}");
            while used.contains(&name) {
                name.push('_');
            }
            used.insert(name.clone());
            name
        })
        .collect()
}
