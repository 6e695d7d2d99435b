use crate::consts;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One line of the leaderboard
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighscoreEntry {
    /// Player name, always uppercase
    pub(crate) name: String,
    pub(crate) score: u32,
}

impl HighscoreEntry {
    /// Create an entry, uppercasing `name`
    pub(crate) fn new(name: &str, score: u32) -> HighscoreEntry {
        HighscoreEntry {
            name: name.to_uppercase(),
            score,
        }
    }
}

/// The leaderboard: entries unique by name and, after
/// [`HighscoreTable::normalize()`], sorted by descending score and bounded in
/// length.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct HighscoreTable(Vec<HighscoreEntry>);

impl HighscoreTable {
    pub(crate) fn entries(&self) -> &[HighscoreEntry] {
        &self.0
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first `n` entries
    pub(crate) fn top(&self, n: usize) -> impl Iterator<Item = &HighscoreEntry> {
        self.0.iter().take(n)
    }

    /// The score at the top of the table, or 0 if it is empty
    pub(crate) fn best(&self) -> u32 {
        self.0.first().map_or(0, |e| e.score)
    }

    /// Record `score` for `name`.  If the name is new, it is appended;
    /// otherwise its score is raised if `score` is strictly greater.  An empty
    /// name is recorded as [`PLACEHOLDER_NAME`][consts::PLACEHOLDER_NAME].
    pub(crate) fn record_or_update(&mut self, name: &str, score: u32) {
        let name = if name.is_empty() {
            consts::PLACEHOLDER_NAME
        } else {
            name
        };
        let entry = HighscoreEntry::new(name, score);
        match self.0.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => {
                if score > existing.score {
                    existing.score = score;
                }
            }
            None => self.0.push(entry),
        }
    }

    /// Merge entries with the same name, sort by descending score (keeping
    /// the relative order of ties), and keep only the first `limit` entries.
    pub(crate) fn normalize(&mut self, limit: usize) {
        let mut entries = merge(std::mem::take(&mut self.0));
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(limit);
        self.0 = entries;
    }

    /// Parse the leaderboard file format: one whitespace-separated name and
    /// score per line.  Lines that are not valid UTF-8 or that do not start
    /// with a name and a non-negative integer are skipped, and anything after
    /// the score is ignored.
    pub(crate) fn parse(src: &[u8]) -> HighscoreTable {
        let mut entries = Vec::new();
        for (lineno, line) in src.split(|&b| b == b'\n').enumerate() {
            let Ok(line) = std::str::from_utf8(line) else {
                log::warn!(
                    "Skipping leaderboard line {} with invalid UTF-8",
                    lineno + 1
                );
                continue;
            };
            let mut words = line.split_whitespace();
            match (words.next(), words.next().map(str::parse::<u32>)) {
                (None, _) => (),
                (Some(name), Some(Ok(score))) => {
                    entries.push(HighscoreEntry::new(name, score));
                }
                _ => log::warn!(
                    "Skipping malformed leaderboard line {}: {line:?}",
                    lineno + 1
                ),
            }
        }
        HighscoreTable(entries)
    }

    /// Render the table in the leaderboard file format
    pub(crate) fn to_text(&self) -> String {
        let mut s = String::new();
        for entry in &self.0 {
            let _ = writeln!(s, "{} {}", entry.name, entry.score);
        }
        s
    }

    /// Read a leaderboard from `path` and normalize it to
    /// [`HIGHSCORE_CAPACITY`][consts::HIGHSCORE_CAPACITY].  A missing file
    /// yields an empty table.
    pub(crate) fn load(path: &Path) -> Result<HighscoreTable, LoadError> {
        let src = match fs_err::read(path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No leaderboard at {}; starting empty", path.display());
                return Ok(HighscoreTable::default());
            }
            Err(e) => return Err(LoadError::read(e)),
        };
        let mut table = HighscoreTable::parse(&src);
        table.normalize(consts::HIGHSCORE_CAPACITY);
        log::debug!(
            "Loaded {} leaderboard entries from {}",
            table.0.len(),
            path.display()
        );
        Ok(table)
    }

    /// Overwrite the file at `path` with this table, creating parent
    /// directories as needed
    pub(crate) fn save(&self, path: &Path) -> Result<(), SaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        fs_err::write(path, self.to_text()).map_err(SaveError::write)?;
        Ok(())
    }
}

impl FromIterator<HighscoreEntry> for HighscoreTable {
    fn from_iter<I: IntoIterator<Item = HighscoreEntry>>(iter: I) -> HighscoreTable {
        HighscoreTable(iter.into_iter().collect())
    }
}

/// Collapse entries sharing a name (compared case-insensitively) into one
/// uppercase-named entry holding the highest of their scores.  Names keep the
/// order in which they were first seen.
pub(crate) fn merge(entries: Vec<HighscoreEntry>) -> Vec<HighscoreEntry> {
    let mut merged: Vec<HighscoreEntry> = Vec::with_capacity(entries.len());
    for HighscoreEntry { name, score } in entries {
        let name = name.to_uppercase();
        match merged.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.score = existing.score.max(score),
            None => merged.push(HighscoreEntry { name, score }),
        }
    }
    merged
}

/// Somewhere to persist the leaderboard when a run ends
pub(crate) trait ScoreSink {
    fn save(&mut self, table: &HighscoreTable) -> Result<(), SaveError>;
}

/// The leaderboard file on disk
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighscoreFile {
    path: PathBuf,
}

impl HighscoreFile {
    pub(crate) fn new(path: PathBuf) -> HighscoreFile {
        HighscoreFile { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn load(&self) -> Result<HighscoreTable, LoadError> {
        HighscoreTable::load(&self.path)
    }
}

impl ScoreSink for HighscoreFile {
    fn save(&mut self, table: &HighscoreTable) -> Result<(), SaveError> {
        table.save(&self.path)?;
        log::info!("Saved leaderboard to {}", self.path.display());
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high scores to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to write high scores file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high scores from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high scores file")]
    Read(#[source] std::io::Error),
}
