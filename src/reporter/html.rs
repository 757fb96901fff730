//! HTML reporter: renders a folder page as a self-contained HTML document
//!
//! The breadcrumb trail goes into `#folderNavigationPanel`, the cards into
//! `#cardContainer`. A failed load keeps both regions empty and shows
//! `#failedLoad` instead.

use crate::cards::Card;
use crate::navigation::Breadcrumb;
use crate::view::{Page, PageState};
use chrono::Local;

/// Escape text for HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reporter that generates a self-contained HTML page
pub struct HtmlReporter {
    title: String,
    /// Render the generation time into the page footer
    timestamp: bool,
}

impl HtmlReporter {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            timestamp: true,
        }
    }

    /// Leave the generation time out (stable output)
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = false;
        self
    }

    /// Generate the full HTML page
    pub fn report(&self, state: &PageState) -> String {
        let (navigation, cards, failed) = match state {
            PageState::Loaded(page) => (
                Self::render_navigation(&page.breadcrumbs),
                Self::render_cards(page),
                false,
            ),
            PageState::Failed { .. } => (String::new(), String::new(), true),
        };

        let mut html = String::with_capacity(8_192);
        html.push_str(&self.template_head());
        html.push_str("<div class=\"ui container\">\n");
        html.push_str("<div class=\"ui breadcrumb\" id=\"folderNavigationPanel\">");
        html.push_str(&navigation);
        html.push_str("</div>\n");
        html.push_str("<div class=\"ui negative message\" id=\"failedLoad\"");
        if !failed {
            html.push_str(" style=\"display:none\"");
        }
        html.push_str(">Failed to load reports. Is the report server reachable?</div>\n");
        html.push_str("<div class=\"ui cards\" id=\"cardContainer\">");
        html.push_str(&cards);
        html.push_str("</div>\n");
        if self.timestamp {
            html.push_str("<footer class=\"meta\">Generated ");
            html.push_str(&Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
            html.push_str("</footer>\n");
        }
        html.push_str("</div>\n</body>\n</html>\n");
        html
    }

    /// Breadcrumb region: ancestor links, then the active folder as text
    pub fn render_navigation(trail: &[Breadcrumb]) -> String {
        let mut html = String::new();
        for crumb in trail {
            match crumb {
                Breadcrumb::Link { label, href } => {
                    html.push_str("<a class=\"section\" href=\"");
                    html.push_str(&escape_html(href));
                    html.push_str("\">");
                    html.push_str(&escape_html(label));
                    html.push_str("</a><span class=\"divider\">/</span>");
                }
                Breadcrumb::Active { label } => {
                    html.push_str("<div class=\"active section\">");
                    html.push_str(&escape_html(label));
                    html.push_str("</div>");
                }
            }
        }
        html
    }

    /// Card region, folder cards first
    pub fn render_cards(page: &Page) -> String {
        let mut html = String::new();
        for card in &page.cards {
            html.push_str(&Self::render_card(card));
        }
        html
    }

    fn render_card(card: &Card) -> String {
        match card {
            Card::Folder {
                label,
                href,
                report_count,
            } => format!(
                concat!(
                    "<a class=\"ui card folder\" href=\"{href}\">",
                    "<div class=\"content\"><h1><i class=\"folder icon\"></i>{label}</h1>",
                    "<div class=\"ui statistic\"><div class=\"value\">{count}</div>",
                    "<div class=\"label\">Reports</div></div></div></a>\n"
                ),
                href = escape_html(href),
                label = escape_html(label),
                count = report_count,
            ),
            Card::Report {
                label,
                href,
                time_diff,
                runs,
                scheduler_runs,
                report_name,
            } => format!(
                concat!(
                    "<a class=\"ui card report\" href=\"{href}\" title=\"{name}\">",
                    "<div class=\"content\"><h1>{label}</h1>",
                    "<div class=\"meta\"><span class=\"date\">Last ran {time_diff} ago</span></div>",
                    "<div class=\"ui statistic\"><div class=\"value\">{runs}</div>",
                    "<div class=\"label\">Runs</div></div>",
                    "<div class=\"ui statistic\"><div class=\"value\">{scheduler_runs}</div>",
                    "<div class=\"label\">Scheduler Runs</div></div></div>",
                    "<div class=\"extra content\"><span>Original report name: {name}</span></div></a>\n"
                ),
                href = escape_html(href),
                name = escape_html(report_name),
                label = escape_html(label),
                time_diff = escape_html(time_diff),
                runs = runs,
                scheduler_runs = scheduler_runs,
            ),
        }
    }

    // ─── HTML template pieces ────────────────────────────────────────────

    fn template_head(&self) -> String {
        let mut head = String::from(
            r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>"##,
        );
        head.push_str(&escape_html(&self.title));
        head.push_str(
            r##"</title>
<style>
:root{--bg:#f7f7f9;--surface:#fff;--border:#e2e2e6;--text:#1f1f24;--muted:#71717a;--blue:#2563eb;--red:#dc2626;--radius:8px}
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,Oxygen,sans-serif;background:var(--bg);color:var(--text);line-height:1.5}
.ui.container{max-width:1200px;margin:0 auto;padding:1.5rem}
.ui.breadcrumb{font-size:.9375rem;margin-bottom:1rem;min-height:1.5rem}
.ui.breadcrumb a.section{color:var(--blue);text-decoration:none}
.ui.breadcrumb .divider{color:var(--muted);margin:0 .375rem}
.ui.breadcrumb .active.section{display:inline;font-weight:700}
.ui.negative.message{background:#fef2f2;border:1px solid var(--red);color:var(--red);border-radius:var(--radius);padding:.75rem 1rem;margin-bottom:1rem}
.ui.cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(240px,1fr));gap:1rem}
.ui.card{display:flex;flex-direction:column;background:var(--surface);border:1px solid var(--border);border-radius:var(--radius);color:inherit;text-decoration:none;transition:box-shadow .15s}
.ui.card:hover{box-shadow:0 2px 8px rgba(0,0,0,.08)}
.ui.card .content{padding:1rem;flex:1}
.ui.card h1{font-size:1.125rem;margin-bottom:.5rem;overflow-wrap:anywhere}
.ui.card.folder h1{color:var(--blue)}
.ui.card .meta{font-size:.8125rem;color:var(--muted);margin-bottom:.5rem}
.ui.statistic{display:inline-block;text-align:center;margin-right:1.25rem}
.ui.statistic .value{font-size:1.5rem;font-weight:700}
.ui.statistic .label{font-size:.6875rem;text-transform:uppercase;color:var(--muted)}
.ui.card .extra.content{flex:0;border-top:1px solid var(--border);font-size:.75rem;color:var(--muted);overflow-wrap:anywhere}
footer.meta{margin-top:1.5rem;font-size:.75rem;color:var(--muted)}
</style>
</head>
<body>
"##,
        );
        head
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TITLE)
    }
}
