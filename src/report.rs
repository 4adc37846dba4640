//! Report assembler — inventory table, entry-point summary, class placeholder.

use crate::inventory;
use crate::model::SourceFile;
use crate::parser::{globals, outline};
use crate::toc;
use tracing::debug;

/// Names the report needs besides the discovered files.
pub struct ReportConfig<'a> {
    /// Entry-point script rendered in full
    pub main_name: &'a str,
    /// Class file that gets the placeholder summary
    pub class_name: &'a str,
    /// File name of the report itself, used as the TOC link target
    pub target: &'a str,
    pub with_globals: bool,
}

/// Assemble the full markdown document.
pub fn render(files: &[SourceFile], main: &SourceFile, config: &ReportConfig) -> String {
    let rows = inventory::build_rows(files, config.main_name);

    let mut out = inventory::render_table(&rows, config.with_globals);
    out.push_str("\n\n");
    out.push_str(&main_summary(main, config.target));
    out.push('\n');
    out.push_str(&class_summary(config.class_name));
    out
}

/// Outline of the entry-point file with its usage note and TOC.
pub fn main_summary(main: &SourceFile, target: &str) -> String {
    let mut sections = outline::build(&main.text);
    let globals = globals::collect(&main.text);
    if !outline::splice_globals(&mut sections, globals.render()) {
        debug!("no `{}` heading in {}", outline::GLOBALS_HEADING, main.name);
    }

    let ready = outline::ready_line(&sections);
    let process = outline::process_line(&sections);
    let length = inventory::effective_lines(&main.text);

    let toc_text = sections
        .toc
        .iter()
        .map(|entry| toc::render_toc_item(entry, target))
        .collect::<Vec<_>>()
        .join("\n");
    let body = sections.fragments.join("\n");

    format!(
        "## Summary

    {name}: {length} lines

Read {name} by starting at the `_ready()` callback on line
{ready}.

All drawing happens in the `_process()` callback on line
{process}.

## Table of Contents

{toc_text}

{body}
",
        name = main.name,
    )
}

/// Fixed placeholder; the class file itself is not read.
pub fn class_summary(class_name: &str) -> String {
    format!("## {}\n\n_Class summary not generated yet._\n", class_name)
}
