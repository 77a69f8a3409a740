//! The end-to-end pipeline: load the index, ingest a text file, save, and
//! render a report.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::TrackerConfig;
use crate::error::{Error, Result};
use crate::report::{self, ReportMode};
use crate::repository::Repository;
use crate::words::{SourceLine, WordIndex};

/// Reads `path` into numbered lines. Lines are recorded under the file's
/// final path component, numbered from 1.
pub fn read_source(path: &Path) -> Result<Vec<SourceLine>> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or(Error::NullArgument("input file name"))?;

    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let number = line_number(i).ok_or_else(|| Error::TooManyLines(file_name.clone()))?;
        lines.push(SourceLine::new(file_name.clone(), number, line?));
    }
    Ok(lines)
}

/// The 1-based line number for the `index`th line, if it fits in a `u32`.
fn line_number(index: usize) -> Option<u32> {
    index.checked_add(1).and_then(|n| u32::try_from(n).ok())
}

/// A word index bound to the repository it was loaded from.
#[derive(Debug)]
pub struct WordTracker {
    config: TrackerConfig,
    repository: Repository,
    index: WordIndex,
}

impl WordTracker {
    /// Loads the index named by `config`.
    pub fn open(config: TrackerConfig) -> Result<Self> {
        let repository = Repository::new(config.repository.clone());
        let index = WordIndex::from(repository.load()?);
        Ok(Self {
            config,
            repository,
            index,
        })
    }

    /// The index as it currently stands.
    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Ingests every line of the file at `path`. Returns the number of words
    /// recorded.
    pub fn ingest_file(&mut self, path: &Path) -> Result<usize> {
        let lines = read_source(path)?;
        let line_count = lines.len();
        let recorded = self.index.ingest(lines)?;
        info!(
            path = %path.display(),
            lines = line_count,
            words = recorded,
            distinct = self.index.len(),
            "ingested file"
        );
        Ok(recorded)
    }

    /// Writes the index back to the repository, unless persistence is off.
    pub fn save(&self) -> Result<()> {
        if !self.config.persist {
            debug!("persistence disabled, not saving");
            return Ok(());
        }
        self.repository.save(self.index.tree())
    }

    /// The report for `mode`, including its `Displaying ... format` header.
    pub fn report(&self, mode: ReportMode) -> String {
        format!(
            "Displaying {} format\n{}",
            mode.flag(),
            report::render(self.index.tree(), mode)
        )
    }
}

/// Runs the whole pipeline for one input file and returns the report text.
///
/// The mode is checked before anything else, so an invalid selector leaves
/// the repository and `output` untouched. With `output` set the report is
/// written there as well as returned.
pub fn run(
    config: TrackerConfig,
    input: &Path,
    mode: &str,
    output: Option<&Path>,
) -> Result<String> {
    let mode: ReportMode = mode.parse().map_err(|e| {
        warn!(mode, "rejecting report mode");
        e
    })?;

    let mut tracker = WordTracker::open(config)?;
    tracker.ingest_file(input)?;
    tracker.save()?;

    let text = tracker.report(mode);
    if let Some(output) = output {
        fs::write(output, &text)?;
        info!(path = %output.display(), "exported report");
    }
    Ok(text)
}
