use crate::pattern::{Matcher, PatternTable, Rule};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Schooling stage of a short name, used to split pickers into sections.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeCategory {
    Preschool,
    Primary,
    Secondary,
    Other,
}

impl GradeCategory {
    pub fn of_short_name(short_name: &str) -> Self {
        if short_name.starts_with("PP") {
            GradeCategory::Preschool
        } else if short_name.starts_with('G') {
            GradeCategory::Primary
        } else if short_name.starts_with('F') {
            GradeCategory::Secondary
        } else {
            GradeCategory::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GradeCategory::Preschool => "Pre-school",
            GradeCategory::Primary => "Primary",
            GradeCategory::Secondary => "Secondary",
            GradeCategory::Other => "Other",
        }
    }
}

// Order matters: "grade 12" has to be tried before "grade 1".
static SHORT_NAME_TABLE: Lazy<PatternTable<&'static str>> = Lazy::new(|| {
    let keywords: [(&'static [&'static str], &'static str); 15] = [
        (&["pp1", "baby"], "PP1"),
        (&["pp2", "nursery"], "PP2"),
        (&["pp3", "reception"], "PP3"),
        (&["grade 12", "form 6", "f6"], "F6"),
        (&["grade 11", "form 5", "f5"], "F5"),
        (&["grade 10", "form 4", "f4"], "F4"),
        (&["grade 9", "form 3", "f3"], "F3"),
        (&["grade 8", "form 2", "f2"], "F2"),
        (&["grade 7", "form 1", "f1"], "F1"),
        (&["grade 6", "g6"], "G6"),
        (&["grade 5", "g5"], "G5"),
        (&["grade 4", "g4"], "G4"),
        (&["grade 3", "g3"], "G3"),
        (&["grade 2", "g2"], "G2"),
        (&["grade 1", "g1"], "G1"),
    ];
    PatternTable::new(
        keywords
            .iter()
            .map(|&(words, short_name)| Rule {
                matcher: Matcher::Keywords(words),
                outcome: short_name,
            })
            .collect(),
    )
});

/// Compact badge text for a grade label: "PP1", "G3", "F2", ...
///
/// Labels matching no keyword are shortened to their first three
/// characters, upper-cased.
pub fn short_name_for(label: &str) -> String {
    match SHORT_NAME_TABLE.classify(label) {
        Some((short_name, _)) => (*short_name).to_string(),
        None => label.chars().take(3).collect::<String>().to_uppercase(),
    }
}
