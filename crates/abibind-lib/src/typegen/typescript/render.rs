//! Output rendering methods.

use std::collections::HashSet;
use std::fmt::Write as _;

use abibind_core::{Function, Param};
use tracing::warn;

use super::Emitter;
use super::naming::param_names;
use super::types::map_type;

/// Return type of state-mutating calls: a pending transaction, not a value.
const TX_RESPONSE: &str = "ethers.ContractTransactionResponse";

impl Emitter<'_> {
    fn export(&self) -> &'static str {
        if self.config.export { "export " } else { "" }
    }

    pub(super) fn render_header(&self) -> String {
        format!(
            "// Generated TypeScript interface for {} contract\n\
             // This file is auto-generated - do not edit manually\n\
             import {{ ethers }} from 'ethers';\n",
            self.contract_name
        )
    }

    pub(super) fn render_contract_interface(&self) -> String {
        let mut out = format!(
            "{}interface {} extends ethers.Contract {{\n",
            self.export(),
            self.names.contract
        );
        for func in &self.interface.functions {
            let _ = writeln!(
                out,
                "  {}({}): Promise<{}>;",
                func.name,
                param_list(&func.inputs),
                return_type(func)
            );
        }
        out.push_str("}\n");
        out
    }

    pub(super) fn render_events(&self) -> Option<String> {
        if self.interface.events.is_empty() {
            return None;
        }

        let mut out = format!("{}interface {} {{\n", self.export(), self.names.events);
        let mut seen = HashSet::new();
        for event in &self.interface.events {
            // Overloaded events would be duplicate properties; first one wins.
            if !seen.insert(event.name.as_str()) {
                warn!(event = %event.name, "skipping overloaded event in events map");
                continue;
            }
            let fields = typed_params(&event.inputs);
            if fields.is_empty() {
                let _ = writeln!(out, "  {}: {{}};", event.name);
            } else {
                let _ = writeln!(out, "  {}: {{ {} }};", event.name, fields.join(", "));
            }
        }
        out.push_str("}\n");
        Some(out)
    }

    pub(super) fn render_constructor_params(&self) -> Option<String> {
        let ctor = self.interface.constructor.as_ref()?;

        let mut out = format!(
            "{}type {} = ",
            self.export(),
            self.names.constructor_params
        );
        if ctor.inputs.is_empty() {
            out.push_str("{};\n");
            return Some(out);
        }
        out.push_str("{\n");
        for field in typed_params(&ctor.inputs) {
            let _ = writeln!(out, "  {field};");
        }
        out.push_str("};\n");
        Some(out)
    }

    pub(super) fn render_abi_constant(&self) -> String {
        format!(
            "{}const {} = {:#} as const;\n",
            self.export(),
            self.names.abi_const,
            self.abi
        )
    }

    pub(super) fn render_bytecode_constant(&self) -> String {
        format!(
            "{}const {} = \"{}\";\n",
            self.export(),
            self.names.bytecode_const,
            self.config.bytecode.as_deref().unwrap_or_default()
        )
    }

    pub(super) fn render_deploy_type(&self) -> String {
        let mut params = vec!["signer: ethers.Signer".to_string()];
        if let Some(ctor) = &self.interface.constructor {
            params.extend(typed_params(&ctor.inputs));
        }

        format!(
            "{}type {} = (\n  {}\n) => Promise<{}>;\n",
            self.export(),
            self.names.deploy,
            params.join(",\n  "),
            self.names.contract
        )
    }

    pub(super) fn render_module(&self) -> String {
        format!(
            "// {} Contract ABI\nmodule.exports = {:#};\n",
            self.contract_name, self.abi
        )
    }
}

/// `name: Type` for each param, with names made unique.
fn typed_params(params: &[Param]) -> Vec<String> {
    params
        .iter()
        .zip(param_names(params))
        .map(|(p, name)| format!("{}: {}", name, map_type(&p.ty)))
        .collect()
}

fn param_list(params: &[Param]) -> String {
    typed_params(params).join(", ")
}

/// `view`/`pure` calls resolve to the decoded outputs; everything else
/// resolves to a transaction response.
fn return_type(func: &Function) -> String {
    if !func.is_read_only() {
        return TX_RESPONSE.to_string();
    }
    match func.outputs.as_slice() {
        [] => "void".to_string(),
        [single] => map_type(&single.ty).to_string(),
        outputs => {
            let types: Vec<String> = outputs.iter().map(|o| map_type(&o.ty).to_string()).collect();
            format!("[{}]", types.join(", "))
        }
    }
}
