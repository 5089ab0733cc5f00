//! Run-summary rendering.

use anyhow::Result;
use console::{style, Term};
use serde::Serialize;

use crate::error::Outcome;

/// The recorded result of one processed page.
#[derive(Serialize)]
pub struct PageReport {
    pub command: String,
    pub outcome: Outcome,
    pub page: String,
}

fn count(reports: &[PageReport], outcome: Outcome) -> usize {
    reports.iter().filter(|r| r.outcome == outcome).count()
}

/// Print the per-page outcomes and a final counts line in the requested
/// format.
pub fn print_summary(reports: &[PageReport], format: &crate::OutputFormat) -> Result<()> {
    let term = Term::stdout();
    let (updated, created, skipped) = (
        count(reports, Outcome::Updated),
        count(reports, Outcome::Created),
        count(reports, Outcome::Skipped),
    );

    match format {
        crate::OutputFormat::Json => {
            let summary = serde_json::json!({
                "pages": reports,
                "updated": updated,
                "created": created,
                "skipped": skipped,
            });
            term.write_line(&serde_json::to_string_pretty(&summary)?)?;
        }
        crate::OutputFormat::Table => {
            let max_command = reports.iter().map(|r| r.command.len()).max().unwrap_or(0);
            for report in reports {
                let outcome = match report.outcome {
                    Outcome::Updated => style(report.outcome.as_str()),
                    Outcome::Created => style(report.outcome.as_str()).green(),
                    Outcome::Skipped => style(report.outcome.as_str()).yellow(),
                };
                term.write_line(&format!(
                    "{:<width$}  {:<8}  {}",
                    style(&report.command).bold(),
                    outcome,
                    report.page,
                    width = max_command
                ))?;
            }
            term.write_line(&format!(
                "\n{updated} updated, {created} created, {skipped} skipped"
            ))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(command: &str, outcome: Outcome) -> PageReport {
        PageReport {
            command: command.to_string(),
            outcome,
            page: format!("docs/{command}.md"),
        }
    }

    #[test]
    fn counts_each_outcome_kind() {
        let reports = vec![
            report("add", Outcome::Updated),
            report("exec", Outcome::Created),
            report("notes", Outcome::Skipped),
            report("version", Outcome::Updated),
        ];
        assert_eq!(count(&reports, Outcome::Updated), 2);
        assert_eq!(count(&reports, Outcome::Created), 1);
        assert_eq!(count(&reports, Outcome::Skipped), 1);
    }

    #[test]
    fn counts_are_zero_for_empty_run() {
        assert_eq!(count(&[], Outcome::Updated), 0);
    }

    #[test]
    fn page_report_serializes_for_json_summary() {
        let json = serde_json::to_value(report("exec", Outcome::Created)).unwrap();
        assert_eq!(json["command"], "exec");
        assert_eq!(json["outcome"], "created");
        assert_eq!(json["page"], "docs/exec.md");
    }
}
