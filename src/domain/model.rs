use serde::{Deserialize, Serialize};

/// One student record as stored in the data file.
///
/// `grades` is `None` only when a loaded record has no `grades` key at all;
/// records created by the CLI always carry a list, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub group_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grades: Option<Vec<f64>>,
}

impl Student {
    pub fn new(
        full_name: impl Into<String>,
        group_number: impl Into<String>,
        grades: Vec<f64>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            group_number: group_number.into(),
            grades: Some(grades),
        }
    }

    pub fn grades(&self) -> &[f64] {
        self.grades.as_deref().unwrap_or(&[])
    }
}

/// The full ordered collection of students for one command run.
pub type Roster = Vec<Student>;
