//! Outline builder — line-by-line state machine over one file.
//!
//! Turns headings, function signatures, doc comments and `get_node()` paths
//! into markdown fragments, in file order.

use crate::model::{LineKind, Outline, TocEntry};
use crate::parser::classify::classify;

/// Fragment after which the collected globals block is spliced in.
pub const GLOBALS_HEADING: &str = "## Globals";

const READY_MARKER: &str = "_ready(";
const PROCESS_MARKER: &str = "_process(";

// -- Scanner state ------------------------------------------------------------

/// Cross-line state carried through a single forward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanState {
    #[default]
    Normal,
    /// Inside a `func` signature that has not yet seen `)`
    InFunctionContinuation,
    /// Inside a doc block opened by `## \brief`
    InDocBlock,
}

#[derive(Default)]
struct Scanner {
    state: ScanState,
    outline: Outline,
}

// -- Public API ---------------------------------------------------------------

/// Build the outline for one file.
pub fn build(input: &str) -> Outline {
    let mut scanner = Scanner::default();
    for (idx, line) in input.lines().enumerate() {
        scanner.process_line(idx + 1, line);
    }
    scanner.outline
}

/// Insert `block` right after the first `## Globals` fragment.
///
/// Returns false when there is no such heading; the outline is untouched.
pub fn splice_globals(outline: &mut Outline, block: String) -> bool {
    match outline.fragments.iter().position(|f| f == GLOBALS_HEADING) {
        Some(pos) => {
            outline.fragments.insert(pos + 1, block);
            true
        }
        None => false,
    }
}

/// Line number of the `_ready()` callback, `"0"` when absent.
pub fn ready_line(outline: &Outline) -> String {
    callback_line(outline, READY_MARKER)
}

/// Line number of the `_process()` callback, `"0"` when absent.
pub fn process_line(outline: &Outline) -> String {
    callback_line(outline, PROCESS_MARKER)
}

/// Text before the first `:` of the first fragment containing `marker`.
/// Not validated as a number.
fn callback_line(outline: &Outline, marker: &str) -> String {
    outline
        .fragments
        .iter()
        .find(|f| f.contains(marker))
        .map(|f| f.split(':').next().unwrap_or_default().trim().to_string())
        .unwrap_or_else(|| "0".to_string())
}

// -- Line processing ----------------------------------------------------------

impl Scanner {
    fn process_line(&mut self, line_num: usize, line: &str) {
        let kind = if self.state == ScanState::InFunctionContinuation {
            LineKind::FunctionContinuation
        } else {
            classify(line)
        };

        let next = match (&kind, self.state) {
            (LineKind::FunctionContinuation, _) if line.contains(')') => ScanState::Normal,
            (LineKind::FunctionContinuation, _) => ScanState::InFunctionContinuation,
            (LineKind::FunctionStart { complete: false }, _) => ScanState::InFunctionContinuation,
            (LineKind::DocBrief { .. }, _) => ScanState::InDocBlock,
            (LineKind::DocComment { .. }, ScanState::InDocBlock) => ScanState::InDocBlock,
            _ => ScanState::Normal,
        };

        if let Some(fragment) = self.render(line_num, line, kind) {
            self.outline.fragments.push(fragment);
        }
        self.state = next;
    }

    fn render(&mut self, line_num: usize, line: &str, kind: LineKind) -> Option<String> {
        match kind {
            LineKind::Heading { level, name } => {
                if level == 1 {
                    self.outline.toc.push(TocEntry {
                        line: line_num,
                        name: name.clone(),
                    });
                }
                let hashes = "#".repeat(usize::from(level) + 1);
                Some(format!("{} {}", hashes, name))
            }
            LineKind::FunctionStart { .. } => Some(format!("    {} : {}", line_num, line.trim())),
            LineKind::FunctionContinuation => Some(format!("        {}", line.trim())),
            LineKind::DocBrief { title } => Some(format!("**{}**", title)),
            LineKind::DocComment { text } if self.state == ScanState::InDocBlock => {
                if text.is_empty() {
                    Some(">".to_string())
                } else {
                    Some(format!("> *{}*", text))
                }
            }
            LineKind::DocComment { text } => Some(text),
            LineKind::NodeRef { path } => Some(format!("    {}", path)),
            LineKind::GlobalVar
            | LineKind::NodeVar
            | LineKind::Comment
            | LineKind::Blank
            | LineKind::Plain => None,
        }
    }
}
