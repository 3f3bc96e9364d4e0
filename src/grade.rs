use serde::{Deserialize, Serialize};

/// Anything that carries a free-text grade label.
pub trait Named {
    fn name(&self) -> &str;
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A grade as configured by a tenant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GradeRecord {
    pub id: String,
    pub name: String,
    /// Nominal age of pupils entering the grade.
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub streams: Vec<String>,
}

impl GradeRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u8) -> Self {
        GradeRecord {
            id: id.into(),
            name: name.into(),
            age: Some(age),
            streams: Vec::new(),
        }
    }
}

impl Named for GradeRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A schooling stage ("Lower Primary", "Senior Secondary", ...) and its grades.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GradeLevelGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub grades: Vec<GradeRecord>,
}

/// A grade offered to a picker.
///
/// `Synthesized` entries only exist for the lifetime of the page. They are
/// placeholders for grades the tenant never configured and must not be sent
/// back as grade references.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum GradeEntry {
    Configured(GradeRecord),
    Synthesized(GradeRecord),
}

impl GradeEntry {
    pub fn record(&self) -> &GradeRecord {
        match self {
            GradeEntry::Configured(record) | GradeEntry::Synthesized(record) => record,
        }
    }

    pub fn id(&self) -> &str {
        &self.record().id
    }

    pub fn is_synthesized(&self) -> bool {
        matches!(self, GradeEntry::Synthesized(_))
    }

    /// Id that may be stored or submitted. `None` for placeholders.
    pub fn persistable_id(&self) -> Option<&str> {
        match self {
            GradeEntry::Configured(record) => Some(&record.id),
            GradeEntry::Synthesized(_) => None,
        }
    }
}

impl Named for GradeEntry {
    fn name(&self) -> &str {
        &self.record().name
    }
}

/// A group after placeholder synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGroup {
    pub id: String,
    pub name: String,
    /// The whole group was created because the tenant has none.
    pub synthesized: bool,
    pub grades: Vec<GradeEntry>,
}

impl ResolvedGroup {
    pub fn configured(group: &GradeLevelGroup) -> Self {
        ResolvedGroup {
            id: group.id.clone(),
            name: group.name.clone(),
            synthesized: false,
            grades: group
                .grades
                .iter()
                .cloned()
                .map(GradeEntry::Configured)
                .collect(),
        }
    }

    pub fn synthesized_count(&self) -> usize {
        self.grades.iter().filter(|g| g.is_synthesized()).count()
    }
}
