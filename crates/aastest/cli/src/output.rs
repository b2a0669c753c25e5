//! Output formatting utilities

use crate::error::CliResult;
use aastest_engine::RunReport;
use aastest_types::{ConfusionMatrix, Level, ResultNode};
use colored::*;
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Indented result tree
    #[default]
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print reports in the specified format
///
/// A single report is printed as an object, several as a list.
pub fn print_reports(reports: &[RunReport], format: OutputFormat) -> CliResult<()> {
    match (format, reports) {
        (OutputFormat::Text, _) => {
            for report in reports {
                print_report_text(report);
            }
            if reports.len() > 1 {
                print_overall(reports);
            }
        }
        (_, [single]) => print_single(single, format)?,
        _ => print_single(reports, format)?,
    }
    Ok(())
}

/// Print a single item in the specified format
pub fn print_single<T: Serialize + ?Sized>(data: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Text | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(data)?);
        }
    }
    Ok(())
}

fn print_report_text(report: &RunReport) {
    let mut lines = Vec::new();
    render(&report.result, 0, &mut lines);
    for line in lines {
        println!("{line}");
    }
    if report.ok() {
        print_success(&format!("{} conforms to {}", report.server, report.profile));
    } else {
        print_error(&format!("{} does not conform to {}", report.server, report.profile));
    }
    println!();
}

fn print_overall(reports: &[RunReport]) {
    let conforming = reports.iter().filter(|r| r.ok()).count();
    println!("{}", format!("{conforming} / {} profiles conform", reports.len()).bold());
    println!("{}", overall(reports));
}

/// Counters of all reports added up.
fn overall(reports: &[RunReport]) -> ConfusionMatrix {
    let mut total = ConfusionMatrix::new();
    for report in reports {
        total.merge(&report.matrix);
    }
    total
}

fn render(node: &ResultNode, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let line = match node.level() {
        Level::Info => node.message().normal(),
        Level::Warning => format!("[WARNING] {}", node.message()).yellow(),
        Level::Error => format!("[ERROR] {}", node.message()).red(),
        Level::Critical => format!("[CRITICAL] {}", node.message()).red().bold(),
    };
    lines.push(format!("{indent}{line}"));
    for child in node.children() {
        render(child, depth + 1, lines);
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_overall_adds_up_reports() {
        let mut first = ConfusionMatrix::new();
        first.add(true, true);
        first.add(false, false);
        let mut second = ConfusionMatrix::new();
        second.add(true, false);
        let reports = vec![
            RunReport::new("A", "http://localhost", ResultNode::new("A"), first),
            RunReport::new("B", "http://localhost", ResultNode::new("B"), second),
        ];

        let total = overall(&reports);
        assert_eq!(total.valid_accepted, 1);
        assert_eq!(total.valid_rejected, 1);
        assert_eq!(total.invalid_rejected, 1);
        assert_eq!(total.semantic_pass_rate(), Some(0.5));
    }

    #[test]
    fn test_render_indents_and_tags() {
        colored::control::set_override(false);
        let mut root = ResultNode::new("Checking compliance to Description API");
        let mut op = ResultNode::new("Checking /description (GetSelfDescription)");
        op.append(ResultNode::error("Suite Description API not part of profiles"));
        root.append(op);

        let mut lines = Vec::new();
        render(&root, 0, &mut lines);
        assert_eq!(
            lines,
            vec![
                "Checking compliance to Description API",
                "  Checking /description (GetSelfDescription)",
                "    [ERROR] Suite Description API not part of profiles",
            ]
        );
    }
}
