use crate::grade::Named;
use crate::pattern::{numbered, Matcher, PatternTable, Rule};
use once_cell::sync::Lazy;

/// Rank given to labels no rule recognises. Sorts after every real grade.
pub const UNRANKED: i64 = 999;

#[derive(Debug, Clone, Copy)]
enum RankRule {
    /// Captured number plus an offset.
    Offset(i64),
    Fixed(i64),
}

static RANK_TABLE: Lazy<PatternTable<RankRule>> = Lazy::new(|| {
    PatternTable::new(vec![
        Rule {
            matcher: numbered(r"(?i)grade\s+([0-9]+)"),
            outcome: RankRule::Offset(0),
        },
        Rule {
            matcher: numbered(r"(?i)form\s+([0-9]+)"),
            outcome: RankRule::Offset(6),
        },
        Rule {
            matcher: numbered(r"(?i)pp([0-9]+)"),
            outcome: RankRule::Offset(-3),
        },
        Rule {
            matcher: Matcher::Exact("Baby Class"),
            outcome: RankRule::Fixed(-4),
        },
        Rule {
            matcher: Matcher::Exact("Nursery"),
            outcome: RankRule::Fixed(-3),
        },
        // Same rank as PP1. Known collision, kept as is.
        Rule {
            matcher: Matcher::Exact("Reception"),
            outcome: RankRule::Fixed(-2),
        },
    ])
});

/// Maps a grade label onto its position in the schooling sequence.
///
/// "Form 1" and "Grade 7" are the same year, as are "PP3" and rank 0.
/// Unrecognised labels get [`UNRANKED`].
pub fn extract_grade_rank(label: &str) -> i64 {
    match RANK_TABLE.classify(label) {
        Some((RankRule::Offset(offset), Some(n))) => n.saturating_add(*offset),
        Some((RankRule::Fixed(rank), _)) => *rank,
        _ => UNRANKED,
    }
}

/// Orders grades from earliest to latest schooling. Equal ranks keep their
/// input order.
pub fn sort_grades_by_rank<T, I>(grades: I) -> Vec<T>
where
    T: Named,
    I: IntoIterator<Item = T>,
{
    let mut grades: Vec<T> = grades.into_iter().collect();
    grades.sort_by_cached_key(|grade| extract_grade_rank(grade.name()));
    grades
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::GradeRecord;

    fn names<T: Named>(grades: &[T]) -> Vec<&str> {
        grades.iter().map(|g| g.name()).collect()
    }

    fn record(name: &str) -> GradeRecord {
        GradeRecord {
            id: name.to_lowercase(),
            name: name.into(),
            age: None,
            streams: Vec::new(),
        }
    }

    #[test]
    fn form_and_grade_line_up() {
        assert_eq!(extract_grade_rank("Grade 7"), 7);
        assert_eq!(extract_grade_rank("Form 1"), 7);
        assert_eq!(extract_grade_rank("Form 6"), 12);
        assert_eq!(extract_grade_rank("Grade 12"), 12);
    }

    #[test]
    fn pre_primary_ranks_below_zero() {
        assert_eq!(extract_grade_rank("PP1"), -2);
        assert_eq!(extract_grade_rank("PP2"), -1);
        assert_eq!(extract_grade_rank("PP3"), 0);
        assert_eq!(extract_grade_rank("Baby Class"), -4);
        assert_eq!(extract_grade_rank("Nursery"), -3);
        assert_eq!(extract_grade_rank("Reception"), -2);
    }

    #[test]
    fn patterns_are_case_insensitive_and_unanchored() {
        assert_eq!(extract_grade_rank("grade  4"), 4);
        assert_eq!(extract_grade_rank("Junior FORM 2"), 8);
        assert_eq!(extract_grade_rank("pp2 east"), -1);
    }

    #[test]
    fn named_levels_match_exactly() {
        assert_eq!(extract_grade_rank("baby class"), UNRANKED);
        assert_eq!(extract_grade_rank("Nursery A"), UNRANKED);
    }

    #[test]
    fn unknown_labels_sort_last() {
        assert_eq!(extract_grade_rank("Unknown Level XYZ"), 999);
        assert_eq!(extract_grade_rank(""), 999);
        assert_eq!(extract_grade_rank("Grade"), 999);
        assert_eq!(extract_grade_rank("Grade 99999999999999999999"), 999);
        assert_eq!(extract_grade_rank("Kidato cha ٣"), 999);
    }

    #[test]
    fn huge_form_numbers_saturate() {
        assert_eq!(extract_grade_rank("Form 9223372036854775807"), i64::MAX);
    }

    #[test]
    fn sorts_across_conventions() {
        let sorted = sort_grades_by_rank(vec![
            record("Form 2"),
            record("Grade 1"),
            record("PP2"),
        ]);
        assert_eq!(names(&sorted), vec!["PP2", "Grade 1", "Form 2"]);
    }

    #[test]
    fn sort_is_stable_for_equal_ranks() {
        let input = vec![
            record("Mystery"),
            record("Grade 7"),
            record("Reception"),
            record("Form 1"),
            record("PP1"),
            record("Other"),
        ];
        let sorted = sort_grades_by_rank(&input);
        assert_eq!(
            names(&sorted),
            vec!["Reception", "PP1", "Grade 7", "Form 1", "Mystery", "Other"]
        );
    }
}
