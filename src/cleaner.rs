use anyhow::{Context as AnyhowContext, Result};
use log::{debug, info, trace};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use crate::filter::{Rule, ValidityFilter};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Strip surrounding whitespace and lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Counters for one cleaning pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub lines_read: usize,
    pub kept: usize,
    pub duplicates: usize,
    pub rejected: BTreeMap<Rule, usize>,
}

impl CleanStats {
    pub fn total_rejected(&self) -> usize {
        self.rejected.values().sum()
    }
}

/// Unique, valid entries in ascending code-point order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedList {
    pub entries: Vec<String>,
    pub stats: CleanStats,
}

impl CleanedList {
    /// One entry per line, each terminated by `\n`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.entries.iter().map(|e| e.len() + 1).sum());
        for entry in &self.entries {
            out.push_str(entry);
            out.push('\n');
        }
        out
    }
}

pub struct GewerkeCleaner {
    filter: ValidityFilter,
}

impl GewerkeCleaner {
    pub fn new(filter: ValidityFilter) -> Self {
        Self { filter }
    }

    pub fn clean_content(&self, content: &str) -> CleanedList {
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
        // \r\n and lone \r both end a line
        let content = content.replace("\r\n", "\n").replace('\r', "\n");
        let mut stats = CleanStats::default();
        let mut cleaned: HashSet<String> = HashSet::new();

        for line in content.lines() {
            stats.lines_read += 1;
            let entry = normalize(line);

            if let Some(rule) = self.filter.rejection(&entry) {
                trace!("Rejected {:?} ({})", entry, rule);
                *stats.rejected.entry(rule).or_insert(0) += 1;
                continue;
            }

            if !cleaned.insert(entry) {
                stats.duplicates += 1;
            }
        }

        let mut entries: Vec<String> = cleaned.into_iter().collect();
        entries.sort_unstable();
        stats.kept = entries.len();

        CleanedList { entries, stats }
    }

    /// Read `input`, clean it and overwrite `output` with the result.
    pub fn clean(&self, input: &Path, output: &Path) -> Result<CleanStats> {
        debug!("Reading entries from {}", input.display());
        let content = fs::read_to_string(input)
            .with_context(|| format!("Failed to read input file: {}", input.display()))?;

        let cleaned = self.clean_content(&content);

        fs::write(output, cleaned.render())
            .with_context(|| format!("Failed to write output file: {}", output.display()))?;

        let stats = cleaned.stats;
        info!(
            "Read {} lines, kept {}, collapsed {} duplicates, rejected {}",
            stats.lines_read,
            stats.kept,
            stats.duplicates,
            stats.total_rejected()
        );
        for (rule, count) in &stats.rejected {
            debug!("  {}: {}", rule, count);
        }

        Ok(stats)
    }
}

impl Default for GewerkeCleaner {
    fn default() -> Self {
        Self::new(ValidityFilter::default())
    }
}
