//! Human-readable summary of a contract interface.

use std::fmt::Write as _;

use abibind_core::{Artifact, Colors, Param};

use crate::analyze::Interface;

/// Terminal report for one extracted contract.
pub struct Report<'a> {
    interface: &'a Interface,
    artifact: &'a Artifact,
    include_abi: bool,
}

impl<'a> Report<'a> {
    pub fn new(interface: &'a Interface, artifact: &'a Artifact) -> Self {
        Self {
            interface,
            artifact,
            include_abi: false,
        }
    }

    /// Print the full pretty ABI before the summary sections.
    pub fn include_abi(mut self, value: bool) -> Self {
        self.include_abi = value;
        self
    }

    pub fn render(&self, colors: Colors) -> String {
        let mut sections = Vec::new();
        if self.include_abi {
            sections.push(section(colors, "CONTRACT ABI", &format!("{:#}\n", self.artifact.abi)));
        }
        sections.push(section(colors, "CONTRACT FUNCTIONS", &self.functions(colors)));
        sections.push(section(colors, "CONTRACT EVENTS", &self.events(colors)));
        if let Some(body) = self.constructor(colors) {
            sections.push(section(colors, "CONSTRUCTOR", &body));
        }
        sections.push(section(colors, "CONTRACT DETAILS", &self.details(colors)));
        sections.join("\n")
    }

    fn functions(&self, c: Colors) -> String {
        let mut out = String::new();
        for (i, func) in self.interface.functions.iter().enumerate() {
            let outputs = if func.outputs.is_empty() {
                "void".to_string()
            } else {
                func.outputs
                    .iter()
                    .map(|o| format!("{}{}{}", c.green, o.ty, c.reset))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let _ = writeln!(
                out,
                "{}{}.{} {}{}{}({}) -> {} {}({}){}",
                c.dim,
                i + 1,
                c.reset,
                c.blue,
                func.name,
                c.reset,
                signature(c, &func.inputs),
                outputs,
                c.yellow,
                func.mutability(),
                c.reset
            );
        }
        none_if_empty(out)
    }

    fn events(&self, c: Colors) -> String {
        let mut out = String::new();
        for (i, event) in self.interface.events.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}{}.{} {}{}{}({})",
                c.dim,
                i + 1,
                c.reset,
                c.blue,
                event.name,
                c.reset,
                signature(c, &event.inputs)
            );
        }
        none_if_empty(out)
    }

    fn constructor(&self, c: Colors) -> Option<String> {
        let ctor = self.interface.constructor.as_ref()?;
        Some(format!(
            "{}constructor{}({})\n",
            c.blue,
            c.reset,
            signature(c, &ctor.inputs)
        ))
    }

    fn details(&self, c: Colors) -> String {
        let artifact = self.artifact;
        let compiler = artifact
            .compiler_version()
            .unwrap_or_else(|| "Unknown".to_string());

        let mut out = String::new();
        let mut line = |label: &str, value: &str| {
            let _ = writeln!(out, "{}{}:{} {}", c.dim, label, c.reset, value);
        };
        line("Contract Name", &artifact.contract_name);
        line("Source Name", &artifact.source_name);
        line("Compiler Version", &compiler);
        line("Bytecode size", &format!("{} bytes", artifact.bytecode_size()));
        line(
            "Deployed bytecode size",
            &format!("{} bytes", artifact.deployed_bytecode_size()),
        );
        out
    }
}

/// Heading, `=` underline of the same width, then the body.
fn section(c: Colors, title: &str, body: &str) -> String {
    let heading = format!("{title}:");
    format!(
        "{}{}{}\n{}{}{}\n{}",
        c.bold,
        heading,
        c.reset,
        c.dim,
        "=".repeat(heading.len()),
        c.reset,
        body
    )
}

/// `type name, type name` in Solidity order.
fn signature(c: Colors, params: &[Param]) -> String {
    params
        .iter()
        .map(|p| {
            if p.name.is_empty() {
                format!("{}{}{}", c.green, p.ty, c.reset)
            } else {
                format!("{}{}{} {}", c.green, p.ty, c.reset, p.name)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn none_if_empty(out: String) -> String {
    if out.is_empty() {
        "(none)\n".to_string()
    } else {
        out
    }
}
