//! The per-file task record and its first-match-wins update rule.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::fields::Field;

/// Output key holding the file path relative to the export root.
pub const SOURCE_PATH_KEY: &str = "source_path";

/// Metadata extracted from one exported task file.
///
/// Canonical fields are set at most once: the first non-empty value matched
/// for a field sticks. Labels that match no alias are kept in [`extra`]
/// under their original spelling.
///
/// [`extra`]: TaskRecord::extra
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRecord {
    /// Path of the source file, relative to the export root.
    pub source_path: String,

    pub task_id: Option<String>,
    pub label: Option<String>,
    pub result: Option<String>,
    pub severity: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub timestamp: Option<String>,

    /// Unrecognised labels in first-seen order, first value wins per label.
    pub extra: Vec<(String, String)>,
}

impl TaskRecord {
    /// Empty record for a source path.
    #[must_use]
    pub fn new(source_path: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            ..Self::default()
        }
    }

    /// Current value of a canonical field.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::TaskId => self.task_id.as_deref(),
            Field::Label => self.label.as_deref(),
            Field::Result => self.result.as_deref(),
            Field::Severity => self.severity.as_deref(),
            Field::CreatedAt => self.created_at.as_deref(),
            Field::UpdatedAt => self.updated_at.as_deref(),
            Field::StartedAt => self.started_at.as_deref(),
            Field::CompletedAt => self.completed_at.as_deref(),
            Field::Timestamp => self.timestamp.as_deref(),
        }
    }

    /// Whether a canonical field already holds a value.
    #[must_use]
    pub fn is_set(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Canonical fields that are still unset, in priority order.
    #[must_use]
    pub fn unset_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.is_set(*field))
            .collect()
    }

    /// Set `field` unless it already holds a value.
    ///
    /// Returns `true` if the value was stored. Values are trimmed and empty
    /// values are never stored.
    pub fn set_if_unset(&mut self, field: Field, value: &str) -> bool {
        let value = value.trim();
        let slot = self.slot_mut(field);
        if value.is_empty() || slot.is_some() {
            return false;
        }
        *slot = Some(value.to_string());
        true
    }

    /// Value stored for an unrecognised label.
    #[must_use]
    pub fn extra_value(&self, label: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value.as_str())
    }

    /// Apply one matched `(label, value)` pair.
    ///
    /// A label matching a canonical alias fills that field if it is unset and
    /// is otherwise dropped. Any other label lands in `extra` under its
    /// original spelling, unless that exact label is already stored.
    pub fn apply_pair(&mut self, label: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }

        if let Some(field) = Field::for_label(label) {
            self.set_if_unset(field, value);
            return;
        }

        if self.extra_value(label).is_none() {
            self.extra.push((label.to_string(), value.to_string()));
        }
    }

    /// Ordered key list of the flattened record.
    ///
    /// `source_path`, the nine canonical keys, then extra labels in first-seen
    /// order. This is the CSV header when the record comes first.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::with_capacity(1 + Field::ALL.len() + self.extra.len());
        keys.push(SOURCE_PATH_KEY);
        keys.extend(Field::ALL.iter().map(|field| field.key()));
        for (label, _) in &self.extra {
            if !keys.contains(&label.as_str()) {
                keys.push(label.as_str());
            }
        }
        keys
    }

    /// Flatten into a key-sorted map of output columns.
    ///
    /// Unset canonical fields are present as `None`. Extra labels that
    /// collide with a canonical key never replace the canonical value.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, Option<String>> {
        let mut map = BTreeMap::new();
        map.insert(SOURCE_PATH_KEY.to_string(), Some(self.source_path.clone()));
        for field in Field::ALL {
            map.insert(field.key().to_string(), self.get(field).map(str::to_string));
        }
        for (label, value) in &self.extra {
            map.entry(label.clone()).or_insert_with(|| Some(value.clone()));
        }
        map
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::TaskId => &mut self.task_id,
            Field::Label => &mut self.label,
            Field::Result => &mut self.result,
            Field::Severity => &mut self.severity,
            Field::CreatedAt => &mut self.created_at,
            Field::UpdatedAt => &mut self.updated_at,
            Field::StartedAt => &mut self.started_at,
            Field::CompletedAt => &mut self.completed_at,
            Field::Timestamp => &mut self.timestamp,
        }
    }
}

/// Serializes as the flattened, key-sorted map from [`TaskRecord::to_map`].
impl Serialize for TaskRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}
