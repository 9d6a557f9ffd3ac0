//! Canonical task fields and the label aliases that map onto them.

use std::fmt;

/// One of the nine canonical attributes of a task record.
///
/// Variants are declared in matching priority order: when a label could
/// belong to several fields, the first one listed here wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    TaskId,
    Label,
    Result,
    Severity,
    CreatedAt,
    UpdatedAt,
    StartedAt,
    CompletedAt,
    Timestamp,
}

impl Field {
    /// Every canonical field, in priority order.
    pub const ALL: [Field; 9] = [
        Field::TaskId,
        Field::Label,
        Field::Result,
        Field::Severity,
        Field::CreatedAt,
        Field::UpdatedAt,
        Field::StartedAt,
        Field::CompletedAt,
        Field::Timestamp,
    ];

    /// Output key used in JSON and CSV.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Field::TaskId => "task_id",
            Field::Label => "label",
            Field::Result => "result",
            Field::Severity => "severity",
            Field::CreatedAt => "created_at",
            Field::UpdatedAt => "updated_at",
            Field::StartedAt => "started_at",
            Field::CompletedAt => "completed_at",
            Field::Timestamp => "timestamp",
        }
    }

    /// Accepted label spellings, as they appear in exports.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::TaskId => &["Task ID", "TaskID", "ID"],
            Field::Label => &["Label"],
            Field::Result => &["Result", "Status"],
            Field::Severity => &["Severity", "Level"],
            Field::CreatedAt => &["Created At", "Created", "Creation Time"],
            Field::UpdatedAt => &["Updated At", "Updated", "Last Updated"],
            Field::StartedAt => &["Started At", "Started", "Start Time"],
            Field::CompletedAt => &["Completed At", "Completed", "Finish Time"],
            Field::Timestamp => &["Timestamp", "Time", "Date"],
        }
    }

    /// Canonical field for a raw label, if any alias matches.
    ///
    /// ```
    /// use task_index::Field;
    ///
    /// assert_eq!(Field::for_label("STATUS:"), Some(Field::Result));
    /// assert_eq!(Field::for_label("status :"), Some(Field::Result));
    /// assert_eq!(Field::for_label("Owner"), None);
    /// ```
    #[must_use]
    pub fn for_label(label: &str) -> Option<Field> {
        let wanted = normalize_label(label);
        Field::ALL.into_iter().find(|field| {
            field
                .aliases()
                .iter()
                .any(|alias| normalize_label(alias) == wanted)
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Normalize a label for alias comparison.
///
/// Trims whitespace, drops trailing colons (and whitespace in front of
/// them), then lowercases.
#[must_use]
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .trim_end_matches(':')
        .trim_end()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_colon_case_and_whitespace() {
        assert_eq!(normalize_label("  Task ID:  "), "task id");
        assert_eq!(normalize_label("STATUS:"), "status");
        assert_eq!(normalize_label("status :"), "status");
        assert_eq!(normalize_label("Notes::"), "notes");
    }

    #[test]
    fn alias_spellings_resolve_to_same_field() {
        for label in ["STATUS:", "Status", "status :", "Result"] {
            assert_eq!(Field::for_label(label), Some(Field::Result), "label {label:?}");
        }
    }

    #[test]
    fn every_field_has_aliases_and_unique_key() {
        let mut keys: Vec<&str> = Field::ALL.iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Field::ALL.len());
        assert!(Field::ALL.iter().all(|f| !f.aliases().is_empty()));
    }

    #[test]
    fn multi_word_aliases_match() {
        assert_eq!(Field::for_label("Creation Time"), Some(Field::CreatedAt));
        assert_eq!(Field::for_label("last updated"), Some(Field::UpdatedAt));
        assert_eq!(Field::for_label("Finish Time:"), Some(Field::CompletedAt));
        assert_eq!(Field::for_label("taskid"), Some(Field::TaskId));
    }

    #[test]
    fn unknown_labels_do_not_match() {
        assert_eq!(Field::for_label("Owner"), None);
        assert_eq!(Field::for_label("Task"), None);
        assert_eq!(Field::for_label(""), None);
    }

    #[test]
    fn display_uses_output_key() {
        assert_eq!(Field::CompletedAt.to_string(), "completed_at");
    }
}
