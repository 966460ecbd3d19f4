//! Records of the normalized schedule database.
//!
//! The tree is fixed: a [`Schedule`] holds departments, a department holds
//! courses, a course holds sections followed by notes, and a section holds
//! periods. Every value is already in its display form.

/// Length of one scheduling block, in minutes.
pub const MINUTES_PER_BLOCK: u32 = 30;

/// Root of a schedule database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// Human-readable generation time.
    pub generated: String,
    pub minutes_per_block: u32,
    /// Departments in the order their first course was encountered.
    pub departments: Vec<Department>,
}

impl Schedule {
    pub fn new(generated: impl Into<String>) -> Self {
        Self {
            generated: generated.into(),
            minutes_per_block: MINUTES_PER_BLOCK,
            departments: Vec::new(),
        }
    }

    /// Find a department by its abbreviation.
    pub fn department(&self, abbrev: &str) -> Option<&Department> {
        self.departments.iter().find(|dept| dept.abbrev == abbrev)
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.departments.iter().flat_map(|dept| dept.courses.iter())
    }

    pub fn course_count(&self) -> usize {
        self.departments.iter().map(|dept| dept.courses.len()).sum()
    }

    pub fn section_count(&self) -> usize {
        self.departments.iter().map(Department::section_count).sum()
    }

    pub fn period_count(&self) -> usize {
        self.departments.iter().map(Department::period_count).sum()
    }

    pub fn note_count(&self) -> usize {
        self.departments.iter().map(Department::note_count).sum()
    }
}

/// A department bucket grouping every course that shares a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub abbrev: String,
    pub name: String,
    pub courses: Vec<Course>,
}

impl Department {
    pub fn new(abbrev: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            abbrev: abbrev.into(),
            name: name.into(),
            courses: Vec::new(),
        }
    }

    pub fn section_count(&self) -> usize {
        self.courses.iter().map(|course| course.sections.len()).sum()
    }

    pub fn period_count(&self) -> usize {
        self.courses.iter().map(Course::period_count).sum()
    }

    pub fn note_count(&self) -> usize {
        self.courses.iter().map(|course| course.notes.len()).sum()
    }
}

/// A course with its sections and the notes collected from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub number: String,
    pub name: String,
    pub min_credits: String,
    pub max_credits: String,
    /// `normal`, `pass-fail`, or empty when the source grading is unknown.
    pub grade_type: String,
    pub sections: Vec<Section>,
    /// Notes from all sections, serialized after the sections.
    pub notes: Vec<Note>,
}

impl Course {
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        min_credits: impl Into<String>,
        max_credits: impl Into<String>,
        grade_type: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            min_credits: min_credits.into(),
            max_credits: max_credits.into(),
            grade_type: grade_type.into(),
            sections: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn period_count(&self) -> usize {
        self.sections.iter().map(|section| section.periods.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub crn: String,
    pub number: String,
    pub seats: String,
    pub periods: Vec<Period>,
}

impl Section {
    pub fn new(
        crn: impl Into<String>,
        number: impl Into<String>,
        seats: impl Into<String>,
    ) -> Self {
        Self {
            crn: crn.into(),
            number: number.into(),
            seats: seats.into(),
            periods: Vec::new(),
        }
    }
}

/// One scheduled meeting block of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    /// Expanded meeting type, serialized as `type`.
    pub kind: String,
    pub professor: String,
    /// Comma-joined weekday abbreviations, Monday first.
    pub days: String,
    pub starts: String,
    pub ends: String,
}

/// Free-text course note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub text: String,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
