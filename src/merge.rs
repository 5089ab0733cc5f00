//! The marker-scoped region merge engine.
//!
//! Everything outside a resolved region is preserved byte-for-byte; the
//! region itself (markers included) is replaced wholesale with a freshly
//! rendered block. Merging identical content twice is a textual no-op, so
//! the engine is idempotent by construction.

use crate::error::SyncError;
use crate::markers::{resolve, MarkerPair, RegionSpan};

/// Skeleton for a command page that does not exist yet. `{command}` and
/// `{description}` are substituted at creation time; the automated region
/// starts empty and is filled in the same pass.
pub const PAGE_TEMPLATE: &str = "\
(reference_{command}_command)=
# {command} command

The `{command}` command is used to {description}.

## Usage

<!-- START AUTOMATED OUTPUT FOR {command} -->
<!-- END AUTOMATED OUTPUT FOR {command} -->
";

/// Skeleton for the index page when it does not exist yet. No placeholders;
/// the listing region is rebuilt every run.
pub const INDEX_TEMPLATE: &str = "\
# CLI commands

Reference documentation for each command, generated from the tool's own
help output.

<!-- START AUTOMATED COMMAND LIST -->
<!-- END AUTOMATED COMMAND LIST -->
";

/// Outcome of one merge: the new document text, or a deliberate no-op for
/// documents that opted out of automation by carrying no markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeResult {
    Updated(String),
    Created(String),
    Skipped,
}

/// Render the replacement block for a command's automated region: markers
/// bracketing a `{terminal}` fence with the invocation and captured help.
pub fn render_help_region(markers: &MarkerPair, invocation: &str, help_text: &str) -> String {
    format!(
        "{start}\n```{{terminal}}\n:input: {invocation}\n{help_text}\n```\n{end}",
        start = markers.start,
        end = markers.end,
    )
}

/// Render the replacement block for the index page's listing region: a
/// `{toctree}` fence with one `<name> <<name>>` entry per command.
pub fn render_listing_region(markers: &MarkerPair, commands: &[String]) -> String {
    let entries = commands
        .iter()
        .map(|name| format!("{name} <{name}>"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{start}\n```{{toctree}}\n:titlesonly:\n:maxdepth: 1\n\n{entries}\n```\n{end}",
        start = markers.start,
        end = markers.end,
    )
}

/// Splice `block` over `span`, leaving everything outside the span intact.
fn splice(text: &str, span: RegionSpan, block: &str) -> String {
    let mut out = String::with_capacity(text.len() - (span.end - span.start) + block.len());
    out.push_str(&text[..span.start]);
    out.push_str(block);
    out.push_str(&text[span.end..]);
    out
}

/// Instantiate `template`, substituting each `(name, value)` pair for every
/// occurrence of `{name}`. A placeholder that never appears in the template
/// is a defect, as is any placeholder token surviving substitution.
pub fn render_template(
    template: &str,
    substitutions: &[(&str, &str)],
) -> Result<String, SyncError> {
    let mut text = template.to_string();
    for (name, value) in substitutions {
        let token = format!("{{{name}}}");
        if !text.contains(&token) {
            return Err(SyncError::Template {
                placeholder: (*name).to_string(),
            });
        }
        text = text.replace(&token, value);
    }
    for (name, _) in substitutions {
        let token = format!("{{{name}}}");
        if text.contains(&token) {
            return Err(SyncError::Template {
                placeholder: (*name).to_string(),
            });
        }
    }
    Ok(text)
}

/// Merge `block` into a document.
///
/// With an existing document the resolved region is replaced; a document
/// without markers is left untouched (`Skipped`). With no document at all,
/// the template is instantiated and its empty region filled in the same
/// pass (`Created`).
pub fn merge_document(
    existing: Option<&str>,
    template: &str,
    substitutions: &[(&str, &str)],
    markers: &MarkerPair,
    block: &str,
) -> Result<MergeResult, SyncError> {
    if let Some(text) = existing {
        return match resolve(text, markers)? {
            Some(span) => Ok(MergeResult::Updated(splice(text, span, block))),
            None => Ok(MergeResult::Skipped),
        };
    }

    let synthesized = render_template(template, substitutions)?;
    let span = resolve(&synthesized, markers)?.ok_or(SyncError::TemplateMissingRegion)?;
    Ok(MergeResult::Created(splice(&synthesized, span, block)))
}
