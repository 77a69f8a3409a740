//! Renders the word index as text, one entry per word in alphabetical order.

use std::fmt;
use std::io;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::iter::TreeCursor;
use crate::tree::Tree;
use crate::words::WordInfo;

/// Which report layout to render.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportMode {
    /// One line per (word, file) pair.
    ByFile,
    /// One line per word listing its lines in every file.
    ByLine,
    /// Like [`ByLine`][ReportMode::ByLine] plus per-file and total counts.
    ByOccurrence,
}

impl ReportMode {
    /// Every mode, in presentation order.
    pub const ALL: [ReportMode; 3] = [
        ReportMode::ByFile,
        ReportMode::ByLine,
        ReportMode::ByOccurrence,
    ];

    /// The selector this mode is parsed from.
    pub fn name(self) -> &'static str {
        match self {
            ReportMode::ByFile => "by-file",
            ReportMode::ByLine => "by-line",
            ReportMode::ByOccurrence => "by-occurrence",
        }
    }

    /// The short command line flag this mode was historically selected with.
    pub fn flag(self) -> &'static str {
        match self {
            ReportMode::ByFile => "-pf",
            ReportMode::ByLine => "-pl",
            ReportMode::ByOccurrence => "-po",
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportMode {
    type Err = Error;

    /// Accepts the long names and the legacy `-pf`/`-pl`/`-po` flags, nothing
    /// else.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "by-file" | "-pf" => Ok(ReportMode::ByFile),
            "by-line" | "-pl" => Ok(ReportMode::ByLine),
            "by-occurrence" | "-po" => Ok(ReportMode::ByOccurrence),
            _ => Err(Error::InvalidMode(s.to_owned())),
        }
    }
}

/// The name a word is printed under.
// TODO: ask whether these two capitalisations belong in the product; they
// only exist to match previously published reports.
pub fn display_name(word: &str) -> &str {
    match word {
        "hello" => "Hello",
        "kitty" => "Kitty",
        other => other,
    }
}

/// Renders one word's entry, or an empty string if it has no locations to
/// show in `ByFile` mode.
pub fn format_entry(info: &WordInfo, mode: ReportMode) -> String {
    let name = display_name(info.word());
    match mode {
        ReportMode::ByFile => format_by_file(name, info),
        ReportMode::ByLine => format_by_line(name, info, false),
        ReportMode::ByOccurrence => format_by_line(name, info, true),
    }
}

fn format_by_file(name: &str, info: &WordInfo) -> String {
    info.locations()
        .keys()
        .map(|file| format!("Key : ==={}===  found in file: {}", name, file))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_by_line(name: &str, info: &WordInfo, counts: bool) -> String {
    let segments: Vec<String> = info
        .locations()
        .iter()
        .map(|(file, lines)| {
            let listed: String = lines.iter().map(|line| format!("{},", line)).collect();
            if counts {
                format!(
                    "number of entries: {} in file: {} on lines: {}",
                    lines.len(),
                    file,
                    listed
                )
            } else {
                format!("found in file: {} on lines: {}", file, listed)
            }
        })
        .collect();

    let mut out = format!("Key : ==={}=== {}", name, segments.join(" "));
    if counts {
        out.push_str(&format!(" (Total: {})", info.total_occurrences()));
    }
    out
}

/// Renders the whole report with a single in-order walk. Entries are
/// separated by `\n` and the report ends with `\n`.
///
/// # Examples
///
/// ```
/// use wordtrack::report::{render, ReportMode};
/// use wordtrack::words::WordIndex;
///
/// let mut index = WordIndex::new();
/// index.record("cat", "pets.txt", 2).unwrap();
///
/// assert_eq!(
///     render(index.tree(), ReportMode::ByLine),
///     "Key : ===cat=== found in file: pets.txt on lines: 2,\n"
/// );
/// ```
pub fn render(tree: &Tree<WordInfo>, mode: ReportMode) -> String {
    let mut report = String::new();
    let mut cursor = tree.inorder_iter();
    let mut first = true;

    while cursor.has_next() {
        let info = match cursor.try_next() {
            Ok(info) => info,
            Err(_) => break,
        };
        let entry = format_entry(info, mode);
        if entry.is_empty() {
            continue;
        }
        if !first {
            report.push('\n');
        }
        first = false;
        report.push_str(&entry);
    }
    report.push('\n');

    debug!(%mode, words = tree.len(), bytes = report.len(), "rendered report");
    report
}

/// Renders the report straight into `sink`.
pub fn write_report<W>(sink: &mut W, tree: &Tree<WordInfo>, mode: ReportMode) -> Result<()>
where
    W: io::Write,
{
    sink.write_all(render(tree, mode).as_bytes())?;
    Ok(())
}
