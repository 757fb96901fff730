//! Folder view orchestration: location -> fetch -> index -> page
//!
//! Every navigation takes a request token before fetching. When the fetch
//! returns, the page is committed only if no newer navigation has started in
//! the meantime, so a slow response for an old folder can never replace the
//! page of a newer one.

use crate::cards::{render_cards, Card};
use crate::indexer::index_folder;
use crate::navigation::{breadcrumbs, Breadcrumb};
use crate::path::current_folder;
use crate::source::ReportSource;
use crate::ReportMap;
use globset::GlobSet;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Everything shown for one folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub current_folder: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub cards: Vec<Card>,
}

impl Page {
    /// Build the page for `folder` from a fetched map
    pub fn build(folder: &str, map: &ReportMap) -> Self {
        Self {
            current_folder: folder.to_string(),
            breadcrumbs: breadcrumbs(folder),
            cards: render_cards(&index_folder(folder, map)),
        }
    }

    pub fn folder_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_folder())
    }

    pub fn report_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| !c.is_folder())
    }
}

/// What the user sees after a navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PageState {
    Loaded(Page),
    /// Transport, status, malformed and empty responses all end here
    #[serde(rename_all = "camelCase")]
    Failed { current_folder: String },
}

impl PageState {
    pub fn current_folder(&self) -> &str {
        match self {
            PageState::Loaded(page) => &page.current_folder,
            PageState::Failed { current_folder } => current_folder,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, PageState::Loaded(_))
    }
}

/// Result of one `navigate` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The page was committed
    Committed(PageState),
    /// A newer navigation started while this one was fetching; nothing was committed
    Stale { token: u64, latest: u64 },
}

/// Drives one folder view over a report source
pub struct FolderView<S: ReportSource> {
    source: S,
    hidden: Option<GlobSet>,
    latest_token: AtomicU64,
    committed: Mutex<Option<PageState>>,
}

impl<S: ReportSource> FolderView<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            hidden: None,
            latest_token: AtomicU64::new(0),
            committed: Mutex::new(None),
        }
    }

    /// Hide reports whose `report_name` matches any of these globs
    pub fn with_hidden(mut self, hidden: GlobSet) -> Self {
        self.hidden = Some(hidden);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Start a navigation and return its token
    pub fn begin(&self) -> u64 {
        self.latest_token.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Token of the most recent navigation (0 before the first)
    pub fn latest_token(&self) -> u64 {
        self.latest_token.load(Ordering::SeqCst)
    }

    /// Load the page for a URL path (`/`, `/folder/a/b`) and commit it
    pub fn navigate(&self, url_path: &str) -> NavigationOutcome {
        let folder = current_folder(url_path);
        let token = self.begin();
        let state = self.load(&folder);
        self.commit(token, state)
    }

    /// Fetch and render `folder` without touching the committed page
    pub fn load(&self, folder: &str) -> PageState {
        match self.source.fetch(folder) {
            Ok(mut map) => {
                if let Some(ref hidden) = self.hidden {
                    map.retain(|entry| !hidden.is_match(&entry.report_name));
                }
                PageState::Loaded(Page::build(folder, &map))
            }
            Err(e) => {
                log::warn!("failed to load reports from {}: {}", self.source.describe(), e);
                PageState::Failed {
                    current_folder: folder.to_string(),
                }
            }
        }
    }

    /// Commit `state` if `token` is still the latest navigation
    pub fn commit(&self, token: u64, state: PageState) -> NavigationOutcome {
        let mut committed = match self.committed.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Checked under the lock so a newer commit cannot interleave
        let latest = self.latest_token();
        if token != latest {
            log::debug!(
                "discarding response for {:?} (token {} < {})",
                state.current_folder(),
                token,
                latest
            );
            return NavigationOutcome::Stale { token, latest };
        }
        *committed = Some(state.clone());
        NavigationOutcome::Committed(state)
    }

    /// The page currently on display, if any navigation has committed
    pub fn current(&self) -> Option<PageState> {
        match self.committed.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
