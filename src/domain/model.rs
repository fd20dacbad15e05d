use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    course_number: String,
    course_name: String,
    prerequisites: Vec<String>,
}

impl Course {
    pub fn new(course_number: impl Into<String>, course_name: impl Into<String>) -> Self {
        Self {
            course_number: course_number.into(),
            course_name: course_name.into(),
            prerequisites: Vec::new(),
        }
    }

    /// Appends a prerequisite identifier, keeping source order.
    pub fn with_prerequisite(mut self, prerequisite: impl Into<String>) -> Self {
        self.prerequisites.push(prerequisite.into());
        self
    }

    pub fn course_number(&self) -> &str {
        &self.course_number
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// `"<id> - <name>"`, the form used by both listing and lookup.
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.course_number, self.course_name)
    }

    pub fn prerequisite_line(&self) -> Option<String> {
        if self.prerequisites.is_empty() {
            return None;
        }
        Some(format!("Prerequisites: {}", self.prerequisites.join(", ")))
    }
}

/// A prerequisite identifier that matched no loaded course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingPrerequisite {
    pub course_number: String,
    pub prerequisite: String,
}

impl fmt::Display for DanglingPrerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Not a prerequisite for {}: {} does not match any loaded course",
            self.course_number, self.prerequisite
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub courses: Vec<Course>,
    pub skipped_lines: usize,
    pub dangling: Vec<DanglingPrerequisite>,
}
