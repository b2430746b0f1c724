use std::time::Duration;

use cardwright::Divergence;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Totals over one comparison run.
pub struct RunSummary {
    pub items: usize,
    pub matched: usize,
    pub diverged: usize,
    pub missing_reference: usize,
    pub compile_failures: usize,
    pub skipped_lines: usize,
    pub elapsed: Duration,
}

pub fn print_header(items_path: &str, strategy: &str, color: bool) {
    let palette = ansi::Palette::new(color);
    println!(
        "\n{}",
        palette.bold(palette.paint(
            format!("⚙  Comparing: {items_path} ({strategy} strategy)"),
            ansi::CYAN
        ))
    );
    println!("\n{}", palette.paint("━━━ Items ━━━", ansi::GRAY));
}

pub fn print_match(id: &str, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("  {} {}", palette.paint("✓", ansi::GREEN), palette.dim(id));
}

pub fn print_divergences(id: &str, name: &str, divergences: &[Divergence], color: bool) {
    let palette = ansi::Palette::new(color);
    println!(
        "  {} {} {}",
        palette.paint("✗", ansi::YELLOW),
        palette.bold(id),
        palette.dim(format!("({name})")),
    );
    for d in divergences.iter().take(8) {
        println!(
            "      {}  {} {} {}",
            palette.paint(&d.path, ansi::CYAN),
            palette.paint(compact(&d.produced), ansi::GREEN),
            palette.dim("│ expected"),
            palette.paint(compact(&d.expected), ansi::BLUE),
        );
    }
    if divergences.len() > 8 {
        println!("      {}", palette.dim(format!("... +{} more", divergences.len() - 8)));
    }
}

pub fn print_failure(id: &str, reason: &str, color: bool) {
    let palette = ansi::Palette::new(color);
    println!(
        "  {} {} {}",
        palette.paint("✗", ansi::YELLOW),
        palette.bold(id),
        palette.paint(reason, ansi::YELLOW),
    );
}

pub fn print_summary(summary: &RunSummary, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.paint("━━━ Summary ━━━", ansi::GRAY));
    println!(
        "  Items: {}  │  Matched: {}  │  Diverged: {}  │  Failed: {}",
        palette.bold(summary.items.to_string()),
        palette.paint(summary.matched.to_string(), ansi::GREEN),
        palette.paint(summary.diverged.to_string(), ansi::YELLOW),
        palette.paint(summary.compile_failures.to_string(), ansi::YELLOW),
    );
    if summary.missing_reference > 0 {
        println!(
            "  {}",
            palette.dim(format!("{} item(s) had no reference card", summary.missing_reference))
        );
    }
    if summary.skipped_lines > 0 {
        println!(
            "  {}",
            palette.dim(format!("{} tooltip line(s) skipped by the strategy", summary.skipped_lines))
        );
    }
    println!("  Elapsed: {}", palette.paint(format!("{:?}", summary.elapsed), ansi::GREEN));
    println!();
}

fn compact(value: &serde_json::Value) -> String {
    let s = value.to_string();
    if s.chars().count() > 48 {
        let head: String = s.chars().take(47).collect();
        format!("{head}…")
    } else {
        s
    }
}
