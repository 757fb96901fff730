//! Partition report entries into the subfolders and reports of one folder

use crate::path::{entry_after_level, folder_depth};
use crate::{ReportEntry, ReportMap};
use serde::Serialize;
use std::collections::HashMap;

/// An immediate subfolder of the current folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderInfo {
    /// Single path segment, no slashes
    pub path_name: String,
    /// `current_folder + path_name`, no trailing slash
    pub path: String,
    /// Entries anywhere below this subfolder
    pub report_count: usize,
}

/// A report living directly in the current folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafReport {
    pub display_name: String,
    pub entry: ReportEntry,
}

/// One-level view of a folder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderIndex {
    /// In order of first appearance while scanning
    pub subfolders: Vec<FolderInfo>,
    /// In scan order
    pub leaf_reports: Vec<LeafReport>,
}

impl FolderIndex {
    pub fn is_empty(&self) -> bool {
        self.subfolders.is_empty() && self.leaf_reports.is_empty()
    }

    /// Total number of entries reachable from this folder
    pub fn total_reports(&self) -> usize {
        self.subfolders.iter().map(|f| f.report_count).sum::<usize>() + self.leaf_reports.len()
    }
}

/// Index `entries` relative to `current_folder` (`""` or a path ending in `/`).
///
/// Entries outside the folder are skipped, so a response the server already
/// filtered and a full map give the same result. An entry equal to the folder
/// itself, or one whose next segment is empty (`a//x` under `a/`), is dropped.
pub fn index_folder(current_folder: &str, entries: &ReportMap) -> FolderIndex {
    let mut index = FolderIndex::default();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let level = folder_depth(current_folder);

    for entry in entries.values() {
        let Some(remaining) = entry.report_name.strip_prefix(current_folder) else {
            continue;
        };

        if remaining.is_empty() {
            log::debug!("dropping entry equal to its folder: {:?}", entry.report_name);
            continue;
        }

        match remaining.split_once('/') {
            Some(("", _)) => {
                log::debug!("dropping entry with empty segment: {:?}", entry.report_name);
            }
            Some((name, _)) => {
                let path = format!("{}{}", current_folder, name);
                match positions.get(&path) {
                    Some(&pos) => index.subfolders[pos].report_count += 1,
                    None => {
                        positions.insert(path.clone(), index.subfolders.len());
                        index.subfolders.push(FolderInfo {
                            path_name: name.to_string(),
                            path,
                            report_count: 1,
                        });
                    }
                }
            }
            None => index.leaf_reports.push(LeafReport {
                display_name: entry_after_level(&entry.report_name, level).to_string(),
                entry: entry.clone(),
            }),
        }
    }

    index
}
