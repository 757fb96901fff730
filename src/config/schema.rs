//! Config schema and deserialization

use serde::Deserialize;

/// Default report server address
pub const DEFAULT_SERVER: &str = "http://localhost:11828";

/// Default HTML page title
pub const DEFAULT_TITLE: &str = "Notebooker";

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored terminal output (default)
    #[default]
    Console,
    Json,
    Html,
}

/// Root config structure for .reportfoldersrc.json
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Base URL of the report server
    #[serde(default)]
    pub server: Option<String>,

    /// Glob patterns matched against report names; matches are not shown
    #[serde(default)]
    pub hide: Vec<String>,

    /// Title of the generated HTML page
    #[serde(default)]
    pub title: Option<String>,

    /// Output format when no --json/--html flag is given
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_server: Option<&str>, cli_format: Option<OutputFormat>) -> Self {
        if let Some(server) = cli_server {
            self.server = Some(server.to_string());
        }
        if cli_format.is_some() {
            self.format = cli_format;
        }
        self
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.server.is_none() {
            self.server = base.server;
        }
        if self.title.is_none() {
            self.title = base.title;
        }
        if self.format.is_none() {
            self.format = base.format;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }

        let mut all_hidden = base.hide;
        all_hidden.append(&mut self.hide);
        self.hide = all_hidden;
    }

    pub fn server(&self) -> &str {
        self.server.as_deref().unwrap_or(DEFAULT_SERVER)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}
