//! Console reporter with colored output

use crate::cards::Card;
use crate::navigation::Breadcrumb;
use crate::view::{Page, PageState};
use colored::Colorize;
use std::fmt::Write;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show the original report name under each report card
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    pub fn render(&self, state: &PageState) -> String {
        match state {
            PageState::Loaded(page) => self.render_page(page),
            PageState::Failed { current_folder } => {
                format!("{}\n", self.failed_line(current_folder))
            }
        }
    }

    /// One line per card (label and link)
    pub fn render_quiet(&self, state: &PageState) -> String {
        let mut out = String::new();
        match state {
            PageState::Loaded(page) => {
                for card in &page.cards {
                    let _ = writeln!(out, "{}\t{}", card.label(), card.href());
                }
            }
            PageState::Failed { current_folder } => {
                let _ = writeln!(out, "{}", self.failed_line(current_folder));
            }
        }
        out
    }

    fn render_page(&self, page: &Page) -> String {
        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.bold(&self.trail(&page.breadcrumbs, &page.current_folder)));
        let _ = writeln!(out);

        if page.cards.is_empty() {
            let _ = writeln!(out, "   {}", self.dimmed("No reports in this folder"));
            return out;
        }

        for card in &page.cards {
            self.write_card(&mut out, card);
        }

        let folders = page.folder_cards().count();
        let reports = page.report_cards().count();
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "   {}",
            self.dimmed(&format!("{} folder(s), {} report(s)", folders, reports))
        );
        out
    }

    fn trail(&self, trail: &[Breadcrumb], current_folder: &str) -> String {
        if trail.is_empty() {
            return format!("📁 {}", if current_folder.is_empty() { "/" } else { current_folder });
        }
        let labels: Vec<&str> = trail.iter().map(|b| b.label()).collect();
        format!("📁 {}", labels.join(" › "))
    }

    fn write_card(&self, out: &mut String, card: &Card) {
        match card {
            Card::Folder {
                label,
                href,
                report_count,
            } => {
                let _ = writeln!(
                    out,
                    "   {} {}  {}  {}",
                    self.cyan("▸"),
                    self.bold(label),
                    self.dimmed(&format!("({} reports)", report_count)),
                    self.dimmed(href)
                );
            }
            Card::Report {
                label,
                href,
                time_diff,
                runs,
                scheduler_runs,
                report_name,
            } => {
                let _ = writeln!(
                    out,
                    "   {} {}  last ran {} ago  runs: {}  scheduler runs: {}",
                    self.green("•"),
                    self.bold(label),
                    time_diff,
                    runs,
                    scheduler_runs
                );
                if self.verbose {
                    let _ = writeln!(
                        out,
                        "       {} {}  {}",
                        self.dimmed("↳"),
                        self.dimmed(&format!("Original report name: {}", report_name)),
                        self.dimmed(href)
                    );
                }
            }
        }
    }

    fn failed_line(&self, current_folder: &str) -> String {
        let folder = if current_folder.is_empty() { "/" } else { current_folder };
        let label = if self.use_colors {
            "Error".red().bold().to_string()
        } else {
            "Error".to_string()
        };
        format!("{}: Failed to load reports for {}", label, folder)
    }

    fn bold(&self, s: &str) -> String {
        if self.use_colors {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn dimmed(&self, s: &str) -> String {
        if self.use_colors {
            s.dimmed().to_string()
        } else {
            s.to_string()
        }
    }

    fn cyan(&self, s: &str) -> String {
        if self.use_colors {
            s.cyan().to_string()
        } else {
            s.to_string()
        }
    }

    fn green(&self, s: &str) -> String {
        if self.use_colors {
            s.green().to_string()
        } else {
            s.to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReportEntry, ReportMap};

    fn page(folder: &str) -> PageState {
        let map: ReportMap = vec![
            ReportEntry::new("a/report", "1 hour", 3, 2),
            ReportEntry::new("a/sub/x", "2 days", 1, 0),
        ]
        .into_iter()
        .collect();
        PageState::Loaded(Page::build(folder, &map))
    }

    #[test]
    fn test_render_lists_folders_before_reports() {
        let out = ConsoleReporter::new().without_colors().render(&page("a/"));
        assert!(out.contains("Start › a"));
        let folder_pos = out.find("▸ sub").unwrap();
        let report_pos = out.find("• report").unwrap();
        assert!(folder_pos < report_pos);
        assert!(out.contains("(1 reports)"));
        assert!(out.contains("runs: 3  scheduler runs: 2"));
        assert!(out.contains("1 folder(s), 1 report(s)"));
    }

    #[test]
    fn test_verbose_shows_original_name() {
        let out = ConsoleReporter::new()
            .without_colors()
            .verbose()
            .render(&page("a/"));
        assert!(out.contains("Original report name: a/report"));
    }

    #[test]
    fn test_failed_page() {
        let out = ConsoleReporter::new().without_colors().render(&PageState::Failed {
            current_folder: String::new(),
        });
        assert_eq!(out, "Error: Failed to load reports for /\n");
    }

    #[test]
    fn test_quiet_lists_links() {
        let out = ConsoleReporter::new().without_colors().render_quiet(&page("a/"));
        assert_eq!(out, "sub\t/folder/a/sub\nreport\t/result_listing/a/report\n");
    }

    #[test]
    fn test_empty_folder() {
        let out = ConsoleReporter::new().without_colors().render(&page("zzz/"));
        assert!(out.contains("No reports in this folder"));
    }
}
