//! Display utilities for file information and analysis reports.

use anyhow::Result;
use console::{Term, style};

use crate::analysis::Report;
use crate::config::APP_NAME;
use crate::types::{FileInfo, ProcessorMode};

/// Formats bytes into a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB"];
    const UNIT: u64 = 1024;

    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= UNIT as f64 && unit_idx < UNITS.len() - 1 {
        size /= UNIT as f64;
        unit_idx += 1;
    }

    format!("{:.1} {}", size, UNITS[unit_idx])
}

/// Displays discovered files in a table.
pub fn show_file_info(files: &[FileInfo]) {
    if files.is_empty() {
        println!("{}", style("No files found").yellow());
        return;
    }

    println!();
    println!("{} {}", style("✓").green(), style(format!("Found {} file(s):", files.len())).bold());
    println!();

    println!(
        "  {:>4}  {:28}  {:>10}  {:12}",
        style("No").bold(),
        style("Name").bold(),
        style("Size").bold(),
        style("Status").bold()
    );
    println!("  {}", "-".repeat(60));

    for (i, file) in files.iter().enumerate() {
        let filename = file.path.file_name().and_then(|n| n.to_str()).unwrap_or("unknown");

        let display_name = if filename.len() > 25 { format!("{}...", &filename[..22]) } else { filename.to_string() };

        let status = if file.is_encrypted { style("encrypted").cyan() } else { style("unencrypted").green() };

        println!("  {:>4}  {:28}  {:>10}  {}", style(i + 1).bold(), style(&display_name).green(), format_bytes(file.size), status);
    }

    println!();
}

/// Renders an analysis report as a metric table with the verdict below it.
pub fn show_report(report: &Report) {
    use comfy_table::presets::UTF8_FULL;
    use comfy_table::{ContentArrangement, Table};

    let nan_aware = |value: f64| if value.is_nan() { "n/a".to_string() } else { format!("{value:.4}") };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value", "Ideal"]);

    table.add_row(vec!["Entropy (bits/byte)".to_string(), format!("{:.4}", report.entropy), "8.0".to_string()]);
    table.add_row(vec!["Correlation (horizontal)".to_string(), nan_aware(report.correlations.horizontal), "0.0".to_string()]);
    table.add_row(vec!["Correlation (vertical)".to_string(), nan_aware(report.correlations.vertical), "0.0".to_string()]);
    table.add_row(vec!["Correlation (diagonal)".to_string(), nan_aware(report.correlations.diagonal), "0.0".to_string()]);
    table.add_row(vec!["NPCR (%)".to_string(), format!("{:.2}", report.npcr), "> 99".to_string()]);
    table.add_row(vec!["UACI (%)".to_string(), format!("{:.2}", report.uaci), "~ 33".to_string()]);

    println!("{table}");

    let verdict = match report.verdict {
        crate::analysis::Verdict::Strong => style(report.verdict.label()).green().bold(),
        crate::analysis::Verdict::Moderate => style(report.verdict.label()).yellow().bold(),
        crate::analysis::Verdict::Weak => style(report.verdict.label()).red().bold(),
    };
    println!();
    println!("  Verdict: {verdict}");
    println!();
}

/// Displays a success message for a completed operation.
pub fn show_success(mode: ProcessorMode, path: &std::path::Path) {
    let action = match mode {
        ProcessorMode::Encrypt => "encrypted",
        ProcessorMode::Decrypt => "decrypted",
    };

    println!();
    println!("{} {}", style("✓").green(), style(format!("File {} successfully: {}", action, path.display())).bold());
}

/// Displays a source-deleted message.
pub fn show_source_deleted(path: &std::path::Path) {
    println!("{} {}", style("✓").green(), style(format!("Source file deleted: {}", path.display())).bold());
}

/// Clears the terminal screen.
pub fn clear_screen() -> Result<()> {
    let term = Term::stdout();
    term.clear_screen().map_err(|e| anyhow::anyhow!("failed to clear screen: {}", e))
}

/// Prints the application banner.
pub fn print_banner() {
    let banner = r#"
   ______ _         __              _____
  / ____/(_)____   / /_   ___  ____/ ___/ _____ ____   ____   ___
 / /    / // __ \ / __ \ / _ \/ __/\__ \ / ___// __ \ / __ \ / _ \
/ /___ / // /_/ // / / //  __/ /  ___/ // /__ / /_/ // /_/ //  __/
\____//_// .___//_/ /_/ \___/_/  /____/ \___/ \____// .___/ \___/
        /_/                                        /_/
"#;

    println!("{}", style(banner).green().bold());
    println!("  {}", style(format!("{APP_NAME}: encrypt, then see how random it really is")).dim());
    println!();
}
