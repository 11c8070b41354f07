/// Generated TypeScript binding, one field per emitted block.
///
/// Every block ends with a newline; [`Binding::typescript`] separates blocks
/// with one blank line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    /// Generated-file banner and the `ethers` import
    pub header: String,
    /// `<Name>Contract` interface with one signature per function
    pub contract_interface: String,
    /// `<Name>Events` payload map; `None` when the ABI has no events
    pub events: Option<String>,
    /// `<Name>ConstructorParams`; `None` when the ABI has no constructor
    pub constructor_params: Option<String>,
    /// Verbatim ABI as a `const` literal
    pub abi_constant: String,
    pub bytecode_constant: String,
    /// `Deploy<Name>` function type
    pub deploy_type: String,
    /// CommonJS module exporting the same ABI
    pub module: String,
}

impl Binding {
    /// Full content of the `.ts` binding file.
    pub fn typescript(&self) -> String {
        let mut blocks = vec![self.header.as_str(), self.contract_interface.as_str()];
        blocks.extend(self.events.as_deref());
        blocks.extend(self.constructor_params.as_deref());
        blocks.push(&self.abi_constant);
        blocks.push(&self.bytecode_constant);
        blocks.push(&self.deploy_type);
        blocks.join("\n")
    }

    /// Type declarations only, without the ABI and bytecode constants.
    pub fn declarations(&self) -> String {
        let mut blocks = vec![self.header.as_str(), self.contract_interface.as_str()];
        blocks.extend(self.events.as_deref());
        blocks.extend(self.constructor_params.as_deref());
        blocks.push(&self.deploy_type);
        blocks.join("\n")
    }
}
