//! URL path parsing and link building for the folder view

use std::borrow::Cow;

/// URL prefix of a folder page
pub const FOLDER_PREFIX: &str = "/folder/";

/// URL prefix of a report's result listing page
pub const RESULT_LISTING_PREFIX: &str = "/result_listing/";

/// Server endpoint listing every report with at least one result
pub const REPORTS_ENDPOINT: &str = "/core/get_all_templates_with_results";

/// Derive the current folder from a URL path.
///
/// `/folder/a/b%20c` gives `a/b c/`; anything outside `/folder/` is the root (`""`).
/// Empty segments are dropped, so the result is `""` or ends in exactly one `/`.
/// A remainder that does not percent-decode to UTF-8 is used undecoded.
pub fn current_folder(url_path: &str) -> String {
    let Some(rest) = url_path.strip_prefix(FOLDER_PREFIX) else {
        return String::new();
    };
    match urlencoding::decode(rest) {
        Ok(decoded) => normalize_folder(&decoded),
        Err(_) => normalize_folder(rest),
    }
}

/// Strip `level` leading segments from `path`.
///
/// Each strip drops everything up to and including the first `/`; stripping a
/// string without a `/` leaves `""`.
pub fn entry_after_level(path: &str, level: usize) -> &str {
    let mut rest = path;
    for _ in 0..level {
        rest = match rest.find('/') {
            Some(idx) => &rest[idx + 1..],
            None => "",
        };
    }
    rest
}

/// Number of non-empty segments in a folder string
pub fn folder_depth(folder: &str) -> usize {
    folder.split('/').filter(|s| !s.is_empty()).count()
}

/// Normalize a bare folder (`a/b`, `/a/b/`, `a//b`) to the `a/b/` form; root is `""`
pub fn normalize_folder(folder: &str) -> String {
    let mut normalized = String::new();
    for segment in folder.split('/').filter(|s| !s.is_empty()) {
        normalized.push_str(segment);
        normalized.push('/');
    }
    normalized
}

/// Link to a folder page. `path` carries no trailing slash.
pub fn folder_href(path: &str) -> String {
    format!("{}{}", FOLDER_PREFIX, path)
}

/// Link to a report's result listing
pub fn result_listing_href(report_name: &str) -> String {
    format!("{}{}", RESULT_LISTING_PREFIX, report_name)
}

/// URL path of the page showing `folder`: `/` for the root, `/folder/a/b` otherwise
pub fn location_for_folder(folder: &str) -> String {
    let trimmed = folder.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        folder_href(trimmed)
    }
}

/// Reports endpoint for `folder`, with the folder appended verbatim so the
/// server can pre-filter.
pub fn reports_endpoint(folder: &str) -> String {
    if folder.is_empty() {
        REPORTS_ENDPOINT.to_string()
    } else {
        format!("{}{}{}", REPORTS_ENDPOINT, "/folder/", folder)
    }
}

/// Percent-encode each segment of a folder, keeping the `/` separators
pub fn encode_folder(folder: &str) -> String {
    folder
        .split('/')
        .map(urlencoding::encode)
        .collect::<Vec<Cow<'_, str>>>()
        .join("/")
}
