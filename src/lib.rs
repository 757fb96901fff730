//! report-folders: folder view for a notebook report server
//!
//! The report server lists every report that has at least one result as a
//! flat JSON map keyed by slash-delimited report paths. This library turns
//! that map into a one-level folder view: a breadcrumb trail for the current
//! folder, folder cards for immediate subfolders and report cards for the
//! reports living directly in the folder.

pub mod cards;
pub mod config;
pub mod indexer;
pub mod navigation;
pub mod path;
pub mod reporter;
pub mod source;
pub mod view;

pub use cards::{render_cards, Card};
pub use indexer::{index_folder, FolderIndex, FolderInfo, LeafReport};
pub use navigation::{breadcrumbs, Breadcrumb};
pub use path::{current_folder, entry_after_level};
pub use source::{FetchError, ReportSource};
pub use view::{FolderView, NavigationOutcome, Page, PageState};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// One executed-report aggregate as served by the report server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Full slash-delimited report path (no leading slash)
    pub report_name: String,
    /// Human-readable time since the last run, e.g. "3 hours"
    pub time_diff: String,
    /// Number of manual runs
    pub count: u64,
    /// Number of scheduled runs
    pub scheduler_runs: u64,
}

impl ReportEntry {
    pub fn new(report_name: &str, time_diff: &str, count: u64, scheduler_runs: u64) -> Self {
        Self {
            report_name: report_name.to_string(),
            time_diff: time_diff.to_string(),
            count,
            scheduler_runs,
        }
    }
}

/// Display key -> report entry, in the order the server sent them.
///
/// Keys are only labels: the server may shorten them, so all path logic
/// reads `ReportEntry::report_name` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportMap {
    entries: Vec<(String, ReportEntry)>,
    /// Key -> index into `entries`
    positions: HashMap<String, usize>,
}

impl ReportMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry stored under `key`. A replaced entry keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, entry: ReportEntry) {
        let key = key.into();
        match self.positions.get(&key) {
            Some(&pos) => self.entries[pos].1 = entry,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, entry));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ReportEntry> {
        self.positions.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in scan order
    pub fn values(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    /// Keep only the entries for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&ReportEntry) -> bool) {
        self.entries.retain(|(_, entry)| keep(entry));
        self.positions = self
            .entries
            .iter()
            .enumerate()
            .map(|(pos, (key, _))| (key.clone(), pos))
            .collect();
    }
}

impl FromIterator<(String, ReportEntry)> for ReportMap {
    fn from_iter<I: IntoIterator<Item = (String, ReportEntry)>>(iter: I) -> Self {
        let mut map = ReportMap::new();
        for (key, entry) in iter {
            map.insert(key, entry);
        }
        map
    }
}

impl FromIterator<ReportEntry> for ReportMap {
    /// Builds a map keyed by each entry's own `report_name`
    fn from_iter<I: IntoIterator<Item = ReportEntry>>(iter: I) -> Self {
        iter.into_iter()
            .map(|entry| (entry.report_name.clone(), entry))
            .collect()
    }
}

impl Serialize for ReportMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

struct ReportMapVisitor;

impl<'de> Visitor<'de> for ReportMapVisitor {
    type Value = ReportMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping report keys to report entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = ReportMap::new();
        while let Some((key, entry)) = access.next_entry::<String, ReportEntry>()? {
            map.insert(key, entry);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for ReportMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ReportMapVisitor)
    }
}
