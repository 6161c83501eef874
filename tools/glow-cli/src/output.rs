//! Terminal rendering for storefront pages.
//!
//! In `--json` mode every human-readable helper is a no-op and commands emit
//! one JSON document through [`Output::json`] instead.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn say(&self, text: impl std::fmt::Display) {
        if !self.json {
            println!("{}", text);
        }
    }

    pub fn info(&self, msg: &str) {
        self.say(format_args!("{} {}", style("ℹ").blue(), msg));
    }

    pub fn success(&self, msg: &str) {
        self.say(format_args!("{} {}", style("✓").green(), msg));
    }

    /// Warnings go to stderr so piped page output stays clean.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors are reported in both modes; JSON mode wraps them in an object.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    /// Section title.
    pub fn header(&self, title: &str) {
        self.say(format_args!("\n{}", style(title).bold().underlined()));
    }

    /// Checkout progress marker, e.g. "[2/3] Payment".
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        self.say(format_args!("{} {}", style(format!("[{}/{}]", num, total)).dim(), msg));
    }

    pub fn kv(&self, key: &str, value: &str) {
        self.say(format_args!("  {}: {}", style(key).dim(), value));
    }

    pub fn list_item(&self, item: &str) {
        self.say(format_args!("  {} {}", style("•").dim(), item));
    }

    /// Left-aligned columns padded to `widths`.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        let row: Vec<String> = cols
            .iter()
            .zip(widths)
            .map(|(col, width)| format!("{:width$}", col, width = *width))
            .collect();
        self.say(format_args!("  {}", row.join("  ").trim_end()));
    }

    /// Pretty-printed JSON on stdout, regardless of mode.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!(error = %e, "Failed to encode JSON output"),
        }
    }

    /// Spinner for the simulated payment wait; hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner) = ProgressStyle::default_spinner().template("{spinner:.magenta} {msg}") {
            pb.set_style(spinner);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

/// Order status colored by how far along it is.
pub fn status_badge(status: &str) -> String {
    let styled = style(status);
    match status.trim().to_lowercase().as_str() {
        "delivered" => styled.green(),
        "shipped" | "processing" | "confirmed" => styled.yellow(),
        "pending" => styled.dim(),
        "cancelled" => styled.red(),
        _ => styled,
    }
    .to_string()
}

/// Rounded star rating plus the exact average, e.g. "★★★★☆ 4.2".
pub fn stars(rating: f32) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!(
        "{}{} {:.1}",
        style("★".repeat(filled)).yellow(),
        style("☆".repeat(5 - filled)).dim(),
        rating
    )
}
