use crate::grade::{GradeEntry, Named, ResolvedGroup};
use crate::rank::sort_grades_by_rank;
use crate::short_name::{short_name_for, GradeCategory};
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerGrade {
    pub short_name: String,
    pub category: GradeCategory,
    pub entry: GradeEntry,
}

impl PickerGrade {
    pub fn new(entry: GradeEntry) -> Self {
        let short_name = short_name_for(entry.name());
        PickerGrade {
            category: GradeCategory::of_short_name(&short_name),
            short_name,
            entry,
        }
    }
}

impl Named for PickerGrade {
    fn name(&self) -> &str {
        self.entry.name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerItem {
    Grade(PickerGrade),
    Separator,
}

/// Filter bar state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeFilter {
    pub category: Option<GradeCategory>,
    pub search: String,
}

impl GradeFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.trim().is_empty()
    }

    pub fn matches(&self, grade: &PickerGrade) -> bool {
        if let Some(category) = self.category {
            if grade.category != category {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || grade.name().to_lowercase().contains(&needle)
            || grade.short_name.to_lowercase().contains(&needle)
    }
}

/// Sorts by rank and keeps only the first grade of every short name, so
/// "Grade 8" and "Form 2" show up once.
pub fn dedupe_by_short_name<I>(entries: I) -> Vec<PickerGrade>
where
    I: IntoIterator<Item = GradeEntry>,
{
    sort_grades_by_rank(entries)
        .into_iter()
        .map(PickerGrade::new)
        .unique_by(|grade| grade.short_name.clone())
        .collect()
}

/// Puts a separator between neighbours of different categories.
pub fn with_separators(grades: Vec<PickerGrade>) -> Vec<PickerItem> {
    let mut items = Vec::with_capacity(grades.len() * 2);
    let mut previous: Option<GradeCategory> = None;
    for grade in grades {
        if previous.map_or(false, |category| category != grade.category) {
            items.push(PickerItem::Separator);
        }
        previous = Some(grade.category);
        items.push(PickerItem::Grade(grade));
    }
    items
}

/// Flat picker list for every grade of every group.
pub fn build_picker(groups: &[ResolvedGroup], filter: &GradeFilter) -> Vec<PickerItem> {
    let grades = dedupe_by_short_name(all_entries(groups))
        .into_iter()
        .filter(|grade| filter.matches(grade))
        .collect();
    with_separators(grades)
}

/// Categories present in the configuration, earliest first. These are the
/// filter bar buttons.
pub fn grade_groups(groups: &[ResolvedGroup]) -> Vec<GradeCategory> {
    dedupe_by_short_name(all_entries(groups))
        .into_iter()
        .map(|grade| grade.category)
        .unique()
        .collect()
}

/// Looks a grade up by id across all groups, placeholders included.
pub fn find_entry<'a>(groups: &'a [ResolvedGroup], id: &str) -> Option<&'a GradeEntry> {
    groups
        .iter()
        .flat_map(|group| group.grades.iter())
        .find(|entry| entry.id() == id)
}

fn all_entries(groups: &[ResolvedGroup]) -> impl Iterator<Item = GradeEntry> + '_ {
    groups
        .iter()
        .flat_map(|group| group.grades.iter().cloned())
}
