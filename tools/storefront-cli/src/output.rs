//! Output formatting for the CLI.

use console::style;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Human-mode line to stdout; JSON mode keeps stdout for the document.
    fn out(&self, line: String) {
        if !self.json {
            println!("{}", line);
        }
    }

    /// Human-mode line to stderr.
    fn err(&self, line: String) {
        if !self.json {
            eprintln!("{}", line);
        }
    }

    pub fn info(&self, msg: &str) {
        self.out(format!("{} {}", style("ℹ").blue(), msg));
    }

    pub fn success(&self, msg: &str) {
        self.out(format!("{} {}", style("✓").green(), msg));
    }

    pub fn warn(&self, msg: &str) {
        self.err(format!("{} {}", style("⚠").yellow(), msg));
    }

    /// Errors are reported in JSON mode too, as `{"error": ...}` on stderr.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.err(format!("{} {}", style("→").dim(), style(msg).dim()));
        }
    }

    pub fn header(&self, msg: &str) {
        self.out(format!("\n{}", style(msg).bold().underlined()));
    }

    /// Print a value as pretty JSON regardless of mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        self.out(format!("  {}: {}", style(key).dim(), value));
    }

    pub fn list_item(&self, item: &str) {
        self.out(format!("  {} {}", style("•").dim(), item));
    }

    /// Left-aligned columns padded to `widths`.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        self.out(format!("  {}", formatted.join("  ")).trim_end().to_string());
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Colored stock badge.
pub fn stock_badge(in_stock: bool, low: bool) -> String {
    match (in_stock, low) {
        (false, _) => style("out of stock").red().to_string(),
        (true, true) => style("low stock").yellow().to_string(),
        (true, false) => style("in stock").green().to_string(),
    }
}

/// Format bytes as human-readable size.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_stock_badge_text() {
        console::set_colors_enabled(false);
        assert_eq!(stock_badge(false, true), "out of stock");
        assert_eq!(stock_badge(true, true), "low stock");
        assert_eq!(stock_badge(true, false), "in stock");
    }
}
