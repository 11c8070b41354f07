//! Core emitter struct and main emit logic.

use serde_json::Value;
use tracing::debug;

use super::{Binding, Config, Names};
use crate::analyze::Interface;

/// TypeScript emitter for one contract.
pub struct Emitter<'a> {
    pub(super) interface: &'a Interface,
    /// Raw ABI, re-emitted verbatim in the constants
    pub(super) abi: &'a Value,
    pub(super) contract_name: &'a str,
    pub(super) names: Names,
    pub(super) config: Config,
}

impl<'a> Emitter<'a> {
    pub fn new(
        interface: &'a Interface,
        abi: &'a Value,
        contract_name: &'a str,
        config: Config,
    ) -> Self {
        Self {
            interface,
            abi,
            contract_name,
            names: Names::new(contract_name),
            config,
        }
    }

    /// Emit all blocks. Output depends only on the inputs, so emitting twice
    /// yields identical text.
    pub fn emit(self) -> Binding {
        let binding = Binding {
            header: self.render_header(),
            contract_interface: self.render_contract_interface(),
            events: self.render_events(),
            constructor_params: self.render_constructor_params(),
            abi_constant: self.render_abi_constant(),
            bytecode_constant: self.render_bytecode_constant(),
            deploy_type: self.render_deploy_type(),
            module: self.render_module(),
        };

        debug!(
            contract = self.contract_name,
            functions = self.interface.functions.len(),
            events = self.interface.events.len(),
            "generated typescript binding"
        );
        binding
    }
}
