//! Data model shared by the scan and report stages.

use std::fmt;
use std::path::PathBuf;

/// A discovered `.gd` file, read fully into memory.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub name: String,
    pub text: String,
}

/// Declared kind of a script, inferred from its first code line.
///
/// The derive order is the grouping order of the inventory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileKind {
    Class,
    Script,
    Unknown,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileKind::Class => "class",
            FileKind::Script => "script",
            FileKind::Unknown => "unknown",
        };
        // `pad` so width/alignment specs like {:>7} apply
        f.pad(s)
    }
}

/// Tag for one line of source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `# | name |`, `# [ name ]`, `# < name >`
    Heading { level: u8, name: String },
    /// `func ...`; `complete` is false when the signature continues on later lines
    FunctionStart { complete: bool },
    /// Interior or closing line of a multiline signature
    FunctionContinuation,
    /// `## \brief Title`
    DocBrief { title: String },
    /// `## text`
    DocComment { text: String },
    /// Line with a `get_node(...)` call
    NodeRef { path: String },
    GlobalVar,
    NodeVar,
    Comment,
    Blank,
    Plain,
}

/// One row of the file index table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    pub kind: FileKind,
    pub name: String,
    pub lines: usize,
    pub globals: usize,
    pub detail: String,
}

/// A level-1 heading, kept for the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub line: usize,
    pub name: String,
}

/// Rendered outline of one file.
#[derive(Debug, Default)]
pub struct Outline {
    pub fragments: Vec<String>,
    pub toc: Vec<TocEntry>,
}
