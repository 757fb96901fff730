//! Breadcrumb trail above the card grid

use crate::path::folder_href;
use serde::Serialize;

/// Label of the root link
pub const ROOT_LABEL: &str = "Start";

/// One fragment of the breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Breadcrumb {
    /// An ancestor folder (or the root)
    Link { label: String, href: String },
    /// The folder being shown; not a link
    Active { label: String },
}

impl Breadcrumb {
    pub fn label(&self) -> &str {
        match self {
            Breadcrumb::Link { label, .. } | Breadcrumb::Active { label } => label,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            Breadcrumb::Link { href, .. } => Some(href),
            Breadcrumb::Active { .. } => None,
        }
    }
}

/// Breadcrumbs for `current_folder`: nothing at the root, otherwise `Start`,
/// a link per ancestor segment and the last segment as active text.
pub fn breadcrumbs(current_folder: &str) -> Vec<Breadcrumb> {
    let segments: Vec<&str> = current_folder.split('/').filter(|s| !s.is_empty()).collect();
    let Some((last, ancestors)) = segments.split_last() else {
        return Vec::new();
    };

    let mut trail = Vec::with_capacity(segments.len() + 1);
    trail.push(Breadcrumb::Link {
        label: ROOT_LABEL.to_string(),
        href: "/".to_string(),
    });

    let mut prefix = String::new();
    for segment in ancestors {
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(segment);
        trail.push(Breadcrumb::Link {
            label: segment.to_string(),
            href: folder_href(&prefix),
        });
    }

    trail.push(Breadcrumb::Active {
        label: last.to_string(),
    });
    trail
}
