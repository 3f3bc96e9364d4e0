use schoolgrades::{
    dedupe_by_short_name, extract_grade_rank, short_name_for, sort_grades_by_rank,
    synthesize_missing_senior_grades, GradeEntry, GradeLevelGroup, GradeRecord, Named,
};

fn record(name: &str) -> GradeRecord {
    GradeRecord {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        age: None,
        streams: Vec::new(),
    }
}

fn senior(grades: &[&str]) -> GradeLevelGroup {
    GradeLevelGroup {
        id: "senior".into(),
        name: "Senior Secondary".into(),
        grades: grades.iter().map(|name| record(name)).collect(),
    }
}

#[test]
fn mixed_conventions_sort_together() {
    let sorted = sort_grades_by_rank(vec![
        record("Form 2"),
        record("Baby Class"),
        record("Grade 1"),
        record("Unknown Level XYZ"),
        record("PP2"),
    ]);
    let names: Vec<&str> = sorted.iter().map(|g| g.name()).collect();

    assert_eq!(
        names,
        vec!["Baby Class", "PP2", "Grade 1", "Form 2", "Unknown Level XYZ"]
    );
}

#[test]
fn never_panics_on_odd_labels() {
    for label in &["", " ", "Grade -1", "PP", "Form\t3", "🎓", "grade 00012", "F"] {
        let _ = extract_grade_rank(label);
        let _ = short_name_for(label);
    }
    assert_eq!(extract_grade_rank("Form\t3"), 9);
    assert_eq!(extract_grade_rank("grade 00012"), 12);
    assert_eq!(short_name_for("🎓"), "🎓");
}

#[test]
fn grade_eight_is_kept_over_form_two() {
    let grades = dedupe_by_short_name(vec![
        GradeEntry::Configured(record("Grade 8")),
        GradeEntry::Configured(record("Form 2")),
    ]);

    let f2: Vec<&str> = grades
        .iter()
        .filter(|g| g.short_name == "F2")
        .map(|g| g.name())
        .collect();
    assert_eq!(f2, vec!["Grade 8"]);
}

#[test]
fn synthesized_grades_cannot_be_submitted() {
    let levels = vec![senior(&["Form 4"])];
    let resolved = synthesize_missing_senior_grades(&levels);

    let submittable: Vec<&str> = resolved[0]
        .grades
        .iter()
        .filter_map(GradeEntry::persistable_id)
        .collect();
    assert_eq!(submittable, vec!["form-4"]);
}
