use serde::Serialize;
use std::fmt;

/// Categorical form fields backed by an encoding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Education,
    Location,
    JobTitle,
    Gender,
}

impl FormField {
    /// Order in which missing selections are reported back to the caller.
    pub const fn presence_checked() -> [Self; 3] {
        [Self::Education, Self::Location, Self::JobTitle]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Location => "Work Location",
            Self::JobTitle => "Job Title",
            Self::Gender => "Gender",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a label is not part of a field's closed option set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{label}' is not a known {field} option")]
pub struct UnknownLabelError {
    pub field: FormField,
    pub label: String,
}

/// Code reserved for the "nothing selected yet" placeholder.
pub const SENTINEL_CODE: u32 = 0;

/// Immutable label → code mapping for one categorical field.
///
/// Codes are unique within a table. When the field has a placeholder option,
/// that placeholder owns [`SENTINEL_CODE`] and no real category may reuse it.
#[derive(Debug, Clone)]
pub struct EncodingTable {
    field: FormField,
    sentinel: Option<&'static str>,
    entries: &'static [(&'static str, u32)],
}

impl EncodingTable {
    pub(crate) const fn from_static(
        field: FormField,
        sentinel: Option<&'static str>,
        entries: &'static [(&'static str, u32)],
    ) -> Self {
        Self {
            field,
            sentinel,
            entries,
        }
    }

    pub fn field(&self) -> FormField {
        self.field
    }

    pub fn sentinel(&self) -> Option<&'static str> {
        self.sentinel
    }

    pub fn encode(&self, label: &str) -> Result<u32, UnknownLabelError> {
        self.resolve(label).map(|(_, code)| code)
    }

    /// Looks up a label, returning the table's own `'static` spelling and its code.
    pub fn resolve(&self, label: &str) -> Result<(&'static str, u32), UnknownLabelError> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == label)
            .copied()
            .ok_or_else(|| UnknownLabelError {
                field: self.field,
                label: label.to_string(),
            })
    }

    pub fn is_sentinel(&self, label: &str) -> bool {
        self.sentinel == Some(label)
    }

    /// All labels in display order, placeholder first when present.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }

    /// Labels a user can actually pick, excluding the placeholder.
    pub fn choices(&self) -> Vec<&'static str> {
        self.labels()
            .filter(|label| !self.is_sentinel(label))
            .collect()
    }

    pub fn max_code(&self) -> u32 {
        self.entries
            .iter()
            .map(|(_, code)| *code)
            .max()
            .unwrap_or(SENTINEL_CODE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub(crate) const EDUCATION: &[(&str, u32)] = &[
    ("Enter Education", 0),
    ("High School", 1),
    ("Bachelor's", 2),
    ("Master's", 3),
    ("PhD", 4),
];

pub(crate) const LOCATION: &[(&str, u32)] = &[
    ("Enter Location", 0),
    ("Rural", 1),
    ("Suburban", 2),
    ("Urban", 3),
];

pub(crate) const JOB_TITLE: &[(&str, u32)] = &[
    ("Enter Job Title", 0),
    ("Clerk", 1),
    ("Customer Support", 2),
    ("Data Analyst", 3),
    ("Data Scientist", 4),
    ("Director", 5),
    ("HR Manager", 6),
    ("Product Manager", 7),
    ("Software Engineer", 8),
    ("Technician", 9),
];

pub(crate) const GENDER: &[(&str, u32)] = &[("Male", 0), ("Female", 1)];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn tables() -> [EncodingTable; 4] {
        [
            EncodingTable::from_static(FormField::Education, Some("Enter Education"), EDUCATION),
            EncodingTable::from_static(FormField::Location, Some("Enter Location"), LOCATION),
            EncodingTable::from_static(FormField::JobTitle, Some("Enter Job Title"), JOB_TITLE),
            EncodingTable::from_static(FormField::Gender, None, GENDER),
        ]
    }

    #[test]
    fn codes_and_labels_are_unique_per_table() {
        for table in tables() {
            let codes: HashSet<u32> = table.entries.iter().map(|(_, code)| *code).collect();
            let labels: HashSet<&str> = table.labels().collect();
            assert_eq!(codes.len(), table.len(), "{:?} has duplicate codes", table.field());
            assert_eq!(labels.len(), table.len(), "{:?} has duplicate labels", table.field());
        }
    }

    #[test]
    fn sentinel_owns_reserved_code() {
        for table in tables() {
            if let Some(sentinel) = table.sentinel() {
                assert_eq!(table.encode(sentinel).expect("sentinel encodes"), SENTINEL_CODE);
                assert!(table
                    .choices()
                    .iter()
                    .all(|label| table.encode(label).expect("choice encodes") != SENTINEL_CODE));
            }
        }
    }

    #[test]
    fn unknown_label_is_reported_with_field() {
        let [education, ..] = tables();
        let err = education.encode("Bootcamp").expect_err("label unknown");
        assert_eq!(err.field, FormField::Education);
        assert_eq!(err.label, "Bootcamp");
        assert_eq!(err.to_string(), "'Bootcamp' is not a known Education option");
    }

    #[test]
    fn max_code_tracks_highest_entry() {
        let [education, location, job_title, gender] = tables();
        assert_eq!(education.max_code(), 4);
        assert_eq!(location.max_code(), 3);
        assert_eq!(job_title.max_code(), 9);
        assert_eq!(gender.max_code(), 1);
    }

    #[test]
    fn choices_skip_placeholder() {
        let [_, location, _, gender] = tables();
        assert_eq!(location.choices(), vec!["Rural", "Suburban", "Urban"]);
        assert_eq!(gender.choices(), vec!["Male", "Female"]);
        assert!(!gender.is_sentinel("Male"));
    }
}
