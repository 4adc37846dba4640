//! Global collector — file-scoped `var` declarations, split into plain
//! globals and scene-tree nodes.

use crate::parser::classify::{is_global_var, is_node_var};

const FENCE_OPEN: &str = "```gdscript";
const FENCE_CLOSE: &str = "```";

/// Declarations in file order, kept verbatim.
#[derive(Debug, Default)]
pub struct Globals {
    pub vars: Vec<String>,
    pub nodes: Vec<String>,
}

impl Globals {
    /// Number of plain global variables; scene-tree nodes are not counted.
    pub fn count(&self) -> usize {
        self.vars.len()
    }

    /// Two fenced blocks separated by a blank line. Empty groups still get a fence.
    pub fn render(&self) -> String {
        format!("{}\n\n{}", fenced(&self.vars), fenced(&self.nodes))
    }
}

pub fn collect(input: &str) -> Globals {
    let mut globals = Globals::default();
    for line in input.lines() {
        if is_global_var(line) {
            globals.vars.push(line.trim_end().to_string());
        } else if is_node_var(line) {
            globals.nodes.push(line.trim_end().to_string());
        }
    }
    globals
}

fn fenced(lines: &[String]) -> String {
    let mut out = String::from(FENCE_OPEN);
    out.push('\n');
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(FENCE_CLOSE);
    out
}
