use crate::grade::{GradeEntry, GradeLevelGroup, GradeRecord, ResolvedGroup};

pub const SENIOR_SECONDARY_ID: &str = "fallback-senior-secondary";
const SENIOR_SECONDARY_NAME: &str = "Senior Secondary";

struct ExpectedGrade {
    aliases: &'static [&'static str],
    id: &'static str,
    name: &'static str,
    age: u8,
}

const SENIOR_GRADES: [ExpectedGrade; 3] = [
    ExpectedGrade {
        aliases: &["grade 10", "form 4"],
        id: "fallback-f4",
        name: "Grade 10",
        age: 15,
    },
    ExpectedGrade {
        aliases: &["grade 11", "form 5"],
        id: "fallback-f5",
        name: "Grade 11",
        age: 16,
    },
    ExpectedGrade {
        aliases: &["grade 12", "form 6"],
        id: "fallback-f6",
        name: "Grade 12",
        age: 17,
    },
];

fn is_senior_secondary(name: &str) -> bool {
    name.to_lowercase().contains("senior secondary")
}

fn has_grade(group: &ResolvedGroup, expected: &ExpectedGrade) -> bool {
    group.grades.iter().any(|entry| {
        let name = entry.record().name.to_lowercase();
        expected.aliases.iter().any(|alias| name.contains(alias))
    })
}

/// Carries the configured groups over and makes sure a senior secondary group
/// offers grades 10 to 12.
///
/// Missing grades are appended as [`GradeEntry::Synthesized`]; if the tenant
/// has no senior secondary group at all, one is appended to the end. The
/// input is left untouched.
pub fn synthesize_missing_senior_grades<'a, I>(levels: I) -> Vec<ResolvedGroup>
where
    I: IntoIterator<Item = &'a GradeLevelGroup>,
{
    let mut resolved: Vec<ResolvedGroup> =
        levels.into_iter().map(ResolvedGroup::configured).collect();

    let position = match resolved.iter().position(|g| is_senior_secondary(&g.name)) {
        Some(position) => position,
        None => {
            resolved.push(ResolvedGroup {
                id: SENIOR_SECONDARY_ID.to_string(),
                name: SENIOR_SECONDARY_NAME.to_string(),
                synthesized: true,
                grades: Vec::new(),
            });
            resolved.len() - 1
        }
    };

    let target = &mut resolved[position];
    for expected in &SENIOR_GRADES {
        if !has_grade(target, expected) {
            target.grades.push(GradeEntry::Synthesized(GradeRecord::new(
                expected.id,
                expected.name,
                expected.age,
            )));
        }
    }

    resolved
}
