//! File inventory — kind, effective size and global count per script.

use crate::model::{FileKind, InventoryRow, SourceFile};
use crate::parser::classify::{is_blank, is_comment};
use crate::parser::globals;

const CLASS_NAME: &str = "class_name";
const EXTENDS: &str = "extends";
const MAIN_SCRIPT_NOTE: &str = " <--- THIS IS THE MAIN SCRIPT";

const TITLE: &str = "# File Summary\n\n";
const HEADER_WITH_GLOBALS: &str = "   type |  GDScript file  | nlines | nglobals | details\n\
                                   ------- | --------------- | ------ | -------- | -------\n";
const HEADER_PLAIN: &str = "   type |  GDScript file  | nlines | details\n\
                            ------- | --------------- | ------ | -------\n";

/// Lines that are neither blank nor comments (doc comments included).
pub fn effective_lines(text: &str) -> usize {
    text.lines()
        .filter(|line| !is_blank(line) && !is_comment(line))
        .count()
}

/// Infer the declared kind from the first code line.
///
/// An `extends` line is promoted to `class` when the physically next line
/// declares a `class_name`.
pub fn infer_kind(text: &str, is_main: bool) -> (FileKind, String) {
    let lines: Vec<&str> = text.lines().collect();
    let Some(idx) = lines
        .iter()
        .position(|line| !is_blank(line) && !is_comment(line))
    else {
        return (FileKind::Unknown, "first line: ".to_string());
    };
    let first = lines[idx].trim();

    if first.starts_with(CLASS_NAME) {
        return (FileKind::Class, format!("defines `{}`", first));
    }

    if first.starts_with(EXTENDS) {
        let next = lines.get(idx + 1).map(|line| line.trim());
        if let Some(class_line) = next.filter(|line| line.starts_with(CLASS_NAME)) {
            return (
                FileKind::Class,
                format!("defines `{}` ({})", class_line, first),
            );
        }
        let mut detail = first.to_string();
        if is_main {
            detail.push_str(MAIN_SCRIPT_NOTE);
        }
        return (FileKind::Script, detail);
    }

    (FileKind::Unknown, format!("first line: {}", first))
}

/// One row per file, grouped by kind and sorted longest-first within a group.
pub fn build_rows(files: &[SourceFile], main_name: &str) -> Vec<InventoryRow> {
    let mut rows: Vec<InventoryRow> = files
        .iter()
        .map(|file| {
            let (kind, detail) = infer_kind(&file.text, file.name == main_name);
            InventoryRow {
                kind,
                name: file.name.clone(),
                lines: effective_lines(&file.text),
                globals: globals::collect(&file.text).count(),
                detail,
            }
        })
        .collect();
    // sort_by is stable: ties keep discovery order
    rows.sort_by(|a, b| a.kind.cmp(&b.kind).then(b.lines.cmp(&a.lines)));
    rows
}

/// Render the title and the pipe table.
pub fn render_table(rows: &[InventoryRow], with_globals: bool) -> String {
    let mut out = String::from(TITLE);
    out.push_str(if with_globals {
        HEADER_WITH_GLOBALS
    } else {
        HEADER_PLAIN
    });
    for row in rows {
        if with_globals {
            out.push_str(&format!(
                "{:>7} | {:>15} | {:>6} | {:>8} | {}\n",
                row.kind, row.name, row.lines, row.globals, row.detail
            ));
        } else {
            out.push_str(&format!(
                "{:>7} | {:>15} | {:>6} | {}\n",
                row.kind, row.name, row.lines, row.detail
            ));
        }
    }
    out
}
