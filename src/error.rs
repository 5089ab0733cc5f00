use serde::Serialize;

/// Fatal failures that abort a sync run.
///
/// Unmanaged documents (no marker pair) are deliberately not represented
/// here: skipping them is a recognized outcome, not an error.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("failed to enumerate commands: {0}")]
    Discovery(String),

    #[error("help capture for `{command}` failed: {reason}")]
    Capture { command: String, reason: String },

    #[error("template placeholder `{{{placeholder}}}` was not substituted")]
    Template { placeholder: String },

    #[error("template does not contain the expected marker pair")]
    TemplateMissingRegion,

    #[error("marker `{marker}` occurs {count} times; expected exactly one")]
    DuplicateMarker { marker: String, count: usize },

    #[error("end marker appears before start marker")]
    MarkerOrder,
}

/// Result of processing one command's documentation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Existing page, automated region replaced.
    Updated,
    /// No page existed; one was synthesized from the template and filled.
    Created,
    /// Page exists but carries no marker pair; left untouched.
    Skipped,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Updated => "updated",
            Outcome::Created => "created",
            Outcome::Skipped => "skipped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_error_names_the_command() {
        let err = SyncError::Capture {
            command: "exec".into(),
            reason: "exit status 1".into(),
        };
        assert!(err.to_string().contains("`exec`"));
    }

    #[test]
    fn template_error_shows_braced_placeholder() {
        let err = SyncError::Template {
            placeholder: "description".into(),
        };
        assert!(err.to_string().contains("{description}"));
    }

    #[test]
    fn outcome_serializes_kebab_case() {
        let json = serde_json::to_string(&Outcome::Skipped).unwrap();
        assert_eq!(json, "\"skipped\"");
    }
}
