//! Card descriptors for the card grid

use crate::indexer::FolderIndex;
use crate::path::{folder_href, result_listing_href};
use serde::Serialize;

/// A card in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Card {
    #[serde(rename_all = "camelCase")]
    Folder {
        label: String,
        href: String,
        report_count: usize,
    },
    #[serde(rename_all = "camelCase")]
    Report {
        label: String,
        href: String,
        time_diff: String,
        runs: u64,
        scheduler_runs: u64,
        /// Full report path, shown as the card footer
        report_name: String,
    },
}

impl Card {
    pub fn label(&self) -> &str {
        match self {
            Card::Folder { label, .. } | Card::Report { label, .. } => label,
        }
    }

    pub fn href(&self) -> &str {
        match self {
            Card::Folder { href, .. } | Card::Report { href, .. } => href,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Card::Folder { .. })
    }
}

/// Folder cards in first-seen order, then report cards in scan order
pub fn render_cards(index: &FolderIndex) -> Vec<Card> {
    let folders = index.subfolders.iter().map(|folder| Card::Folder {
        label: folder.path_name.clone(),
        href: folder_href(&folder.path),
        report_count: folder.report_count,
    });

    let reports = index.leaf_reports.iter().map(|leaf| Card::Report {
        label: leaf.display_name.clone(),
        href: result_listing_href(&leaf.entry.report_name),
        time_diff: leaf.entry.time_diff.clone(),
        runs: leaf.entry.count,
        scheduler_runs: leaf.entry.scheduler_runs,
        report_name: leaf.entry.report_name.clone(),
    });

    folders.chain(reports).collect()
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::indexer::index_folder;
    use crate::{ReportEntry, ReportMap};
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn folder_cards_always_come_first(
            names in prop::collection::vec(
                prop::collection::vec(prop::sample::select(vec!["x", "y", "z"]), 1..4)
                    .prop_map(|s| s.join("/")),
                0..20,
            )
        ) {
            let map: ReportMap = names
                .iter()
                .map(|n| ReportEntry::new(n, "1 hour", 1, 0))
                .collect();
            let cards = render_cards(&index_folder("", &map));
            let folder_count = cards.iter().filter(|c| c.is_folder()).count();
            prop_assert!(cards[..folder_count].iter().all(|c| c.is_folder()));
        }
    }
}
