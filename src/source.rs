//! Where report maps come from: the report server, a saved snapshot, or memory

use crate::path::{encode_folder, reports_endpoint, REPORTS_ENDPOINT};
use crate::ReportMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a report map could not be loaded
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed report map: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("no reports returned")]
    Empty,
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fetches the report map for a folder.
///
/// Implementations may return only the entries under `folder` or the full map;
/// the indexer filters either way.
pub trait ReportSource: Send + Sync {
    fn fetch(&self, folder: &str) -> Result<ReportMap, FetchError>;

    /// Human-readable origin, used in log lines
    fn describe(&self) -> String;
}

impl<T: ReportSource + ?Sized> ReportSource for Box<T> {
    fn fetch(&self, folder: &str) -> Result<ReportMap, FetchError> {
        (**self).fetch(folder)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Parse a report map from a JSON body; an empty object counts as a failure
pub fn parse_report_map(body: &str) -> Result<ReportMap, FetchError> {
    let map: ReportMap = serde_json::from_str(body)?;
    if map.is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(map)
}

/// Report server over HTTP
#[cfg(feature = "http")]
pub struct HttpReportSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpReportSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Full request URL for `folder`, each folder segment percent-encoded
    pub fn url_for(&self, folder: &str) -> String {
        request_url(&self.base_url, folder)
    }
}

#[cfg(feature = "http")]
impl ReportSource for HttpReportSource {
    fn fetch(&self, folder: &str) -> Result<ReportMap, FetchError> {
        let url = self.url_for(folder);
        log::debug!("fetching {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        parse_report_map(&body)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Request URL for `folder` on the server at `base_url`
pub fn request_url(base_url: &str, folder: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if folder.is_empty() {
        format!("{}{}", base, REPORTS_ENDPOINT)
    } else {
        format!("{}{}/folder/{}", base, REPORTS_ENDPOINT, encode_folder(folder))
    }
}

/// A saved JSON response of the reports endpoint, re-read on every fetch
pub struct FileReportSource {
    path: PathBuf,
}

impl FileReportSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ReportSource for FileReportSource {
    fn fetch(&self, folder: &str) -> Result<ReportMap, FetchError> {
        log::debug!("reading {} for {}", self.path.display(), reports_endpoint(folder));
        let body = fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_report_map(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A fixed in-memory map
pub struct StaticReportSource {
    map: ReportMap,
}

impl StaticReportSource {
    pub fn new(map: ReportMap) -> Self {
        Self { map }
    }
}

impl ReportSource for StaticReportSource {
    fn fetch(&self, _folder: &str) -> Result<ReportMap, FetchError> {
        if self.map.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(self.map.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory reports", self.map.len())
    }
}
