use crate::fallback::synthesize_missing_senior_grades;
use crate::grade::{GradeLevelGroup, GradeRecord, ResolvedGroup};
use indexmap::{indexmap, IndexMap};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tenant configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One school's grade setup, keyed by group id in display order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TenantConfig {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub grade_levels: IndexMap<String, GradeLevelGroup>,
}

impl TenantConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Groups with any missing senior secondary grades filled in.
    pub fn resolved_levels(&self) -> Vec<ResolvedGroup> {
        synthesize_missing_senior_grades(self.grade_levels.values())
    }

    /// A CBC school that has only opened Grade 10 of senior secondary so far.
    pub fn defaults() -> TenantConfig {
        let grade_levels: IndexMap<String, GradeLevelGroup> = indexmap! {
            "pre-primary".into() => level("pre-primary", "Pre-Primary", &[("pp1", "PP1", 4), ("pp2", "PP2", 5)]),
            "lower-primary".into() => level("lower-primary", "Lower Primary", &[("g1", "Grade 1", 6), ("g2", "Grade 2", 7), ("g3", "Grade 3", 8)]),
            "upper-primary".into() => level("upper-primary", "Upper Primary", &[("g4", "Grade 4", 9), ("g5", "Grade 5", 10), ("g6", "Grade 6", 11)]),
            "junior-secondary".into() => level("junior-secondary", "Junior Secondary", &[("g7", "Grade 7", 12), ("g8", "Grade 8", 13), ("g9", "Grade 9", 14)]),
            "senior-secondary".into() => level("senior-secondary", "Senior Secondary", &[("g10", "Grade 10", 15)]),
        };
        TenantConfig {
            school: "Default School".into(),
            grade_levels,
        }
    }
}

impl Default for TenantConfig {
    fn default() -> Self {
        TenantConfig::defaults()
    }
}

fn level(id: &str, name: &str, grades: &[(&str, &str, u8)]) -> GradeLevelGroup {
    GradeLevelGroup {
        id: id.into(),
        name: name.into(),
        grades: grades
            .iter()
            .map(|&(id, name, age)| GradeRecord::new(id, name, age))
            .collect(),
    }
}
