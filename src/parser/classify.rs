//! Single-line classifier — ordered rule table, first match wins.
//!
//! Heading markers are ad hoc comment boxes:
//!
//! ```text
//! # | level 1 |
//! # ====[ level 2 ]====
//! # ---< level 3 >---
//! ```

use crate::model::LineKind;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

// Text after the first pipe up to the next pipe or end of line
static RE_HEADING_1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[^|]*\|([^|]*)").unwrap());

// Text after the first opener, stopping at a closer, a second opener or end of line
static RE_HEADING_2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[ (.*?)(?: \]|\[ |$)").unwrap());

static RE_HEADING_3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"< (.*?)(?: >|< |$)").unwrap());

// The first parenthesis on the line, not necessarily the get_node one;
// a nested call cuts the argument short: get_node(str(p)) -> str
static RE_PAREN_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^(]*\(([^()]*)").unwrap());

const COMMENT: &str = "#";
const DOC_COMMENT: &str = "##";
const BRIEF: &str = "\\brief";
const FUNC: &str = "func ";
const GET_NODE: &str = "get_node(";
const PRELOAD: &str = "preload(";
const VAR_KEYWORDS: &[&str] = &["var ", "onready var ", "@onready var "];
const ONREADY_KEYWORDS: &[&str] = &["onready var ", "@onready var "];

// -- Rule table ---------------------------------------------------------------

type Rule = fn(&str) -> Option<LineKind>;

/// Precedence is the slice order.
const RULES: &[Rule] = &[
    heading_1,
    heading_2,
    heading_3,
    function_start,
    doc_brief,
    doc_comment,
    node_ref,
    global_var,
    node_var,
    comment,
    blank,
];

/// Classify one line (without its terminator).
///
/// Continuation lines of a multiline signature are never passed here; the
/// outline scanner tags them from its own state.
pub fn classify(line: &str) -> LineKind {
    RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or(LineKind::Plain)
}

// -- Rules --------------------------------------------------------------------

fn heading_1(line: &str) -> Option<LineKind> {
    if !(line.starts_with(COMMENT) && line.contains("| ") && line.contains(" |")) {
        return None;
    }
    let name = RE_HEADING_1
        .captures(line)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default();
    Some(LineKind::Heading { level: 1, name })
}

fn heading_2(line: &str) -> Option<LineKind> {
    bracketed(line, "[ ", " ]", &RE_HEADING_2).map(|name| LineKind::Heading { level: 2, name })
}

fn heading_3(line: &str) -> Option<LineKind> {
    bracketed(line, "< ", " >", &RE_HEADING_3).map(|name| LineKind::Heading { level: 3, name })
}

/// Shared shape of level 2/3 headings. The name is not trimmed.
fn bracketed(line: &str, open: &str, close: &str, re: &Regex) -> Option<String> {
    if !(line.starts_with(COMMENT) && line.contains(open) && line.contains(close)) {
        return None;
    }
    Some(
        re.captures(line)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default(),
    )
}

fn function_start(line: &str) -> Option<LineKind> {
    line.starts_with(FUNC).then(|| LineKind::FunctionStart {
        complete: line.contains(')'),
    })
}

fn doc_brief(line: &str) -> Option<LineKind> {
    if !(is_doc_comment(line) && line.contains(BRIEF)) {
        return None;
    }
    let title = doc_text(line).replacen(BRIEF, "", 1).trim().to_string();
    Some(LineKind::DocBrief { title })
}

fn doc_comment(line: &str) -> Option<LineKind> {
    is_doc_comment(line).then(|| LineKind::DocComment {
        text: doc_text(line).to_string(),
    })
}

fn node_ref(line: &str) -> Option<LineKind> {
    if !line.contains(GET_NODE) {
        return None;
    }
    let path = RE_PAREN_ARG
        .captures(line)
        .map(|caps| caps[1].trim_matches('"').to_string())
        .unwrap_or_default();
    Some(LineKind::NodeRef { path })
}

fn global_var(line: &str) -> Option<LineKind> {
    is_global_var(line).then_some(LineKind::GlobalVar)
}

fn node_var(line: &str) -> Option<LineKind> {
    is_node_var(line).then_some(LineKind::NodeVar)
}

fn comment(line: &str) -> Option<LineKind> {
    is_comment(line).then_some(LineKind::Comment)
}

fn blank(line: &str) -> Option<LineKind> {
    is_blank(line).then_some(LineKind::Blank)
}

// -- Predicates ---------------------------------------------------------------

pub fn is_comment(line: &str) -> bool {
    line.trim().starts_with(COMMENT)
}

fn is_doc_comment(line: &str) -> bool {
    line.trim().starts_with(DOC_COMMENT)
}

pub fn is_blank(line: &str) -> bool {
    line.is_empty()
}

fn has_lookup(line: &str) -> bool {
    line.contains(GET_NODE) || line.contains(PRELOAD)
}

/// File-scoped `var` not initialised from the scene tree or a preload.
pub fn is_global_var(line: &str) -> bool {
    VAR_KEYWORDS.iter().any(|kw| line.starts_with(kw)) && !has_lookup(line)
}

/// `onready var` initialised from `get_node(...)` or `preload(...)`.
pub fn is_node_var(line: &str) -> bool {
    ONREADY_KEYWORDS.iter().any(|kw| line.starts_with(kw)) && has_lookup(line)
}

/// Doc comment body: leading markers stripped, then trimmed.
fn doc_text(line: &str) -> &str {
    line.trim().trim_start_matches('#').trim()
}
