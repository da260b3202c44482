// Thu Oct 15 2026 - Alex

use crate::output::ResolutionReport;
use colored::*;

pub struct SummaryPrinter {
    use_color: bool,
}

impl SummaryPrinter {
    pub fn new() -> Self {
        Self { use_color: true }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn render(&self, report: &ResolutionReport) -> String {
        let mut out = String::new();
        let stats = &report.statistics;

        out.push_str(&format!("{}\n", self.paint("Resolution Summary", |s| s.cyan().bold())));
        out.push_str(&format!("{}\n", self.paint(&"=".repeat(50), |s| s.cyan())));
        let unresolved = stats.unresolved.to_string();
        out.push_str(&format!(
            "  Signatures: {}  Resolved: {}  Unresolved: {}  Rate: {:.1}%\n",
            stats.total_signatures,
            self.paint(&stats.resolved.to_string(), |s| s.green()),
            if stats.unresolved > 0 {
                self.paint(&unresolved, |s| s.red())
            } else {
                unresolved
            },
            report.resolution_rate() * 100.0
        ));

        if !report.resolved.is_empty() {
            out.push('\n');
        }
        for entry in &report.resolved {
            let window = match entry.window {
                Some(w) => format!("[{}..{})", w.start, w.end),
                None => "-".to_string(),
            };
            let marker = if entry.is_ambiguous() {
                self.paint("[?]", |s| s.yellow())
            } else {
                self.paint("[+]", |s| s.green())
            };
            out.push_str(&format!(
                "{} {:<24} {}.{}{} {}\n",
                marker,
                entry.signature,
                entry.class,
                entry.method,
                entry.descriptor,
                self.paint(&window, |s| s.dimmed())
            ));
        }

        for name in &report.unresolved {
            out.push_str(&format!(
                "{} {:<24} {}\n",
                self.paint("[!]", |s| s.red()),
                name,
                self.paint("unresolved", |s| s.red())
            ));
        }

        out
    }

    /// Styles `text` only when color is enabled; the global `colored`
    /// override belongs to the caller.
    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.use_color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn print(&self, report: &ResolutionReport) {
        print!("{}", self.render(report));
    }
}

impl Default for SummaryPrinter {
    fn default() -> Self {
        Self::new()
    }
}
