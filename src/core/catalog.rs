use crate::domain::model::Course;
use crate::utils::error::{AdvisorError, Result};

/// In-memory record store. Courses stay in load order; listing sorts a
/// borrowed view and never reorders storage.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a freshly loaded set. Nothing from the previous load survives.
    pub fn replace(&mut self, courses: Vec<Course>) {
        self.courses = courses;
    }

    /// First course whose number equals `course_number` exactly. Callers
    /// normalize case before asking.
    pub fn find(&self, course_number: &str) -> Result<&Course> {
        self.courses
            .iter()
            .find(|c| c.course_number() == course_number)
            .ok_or_else(|| AdvisorError::CourseNotFound {
                course_number: course_number.to_string(),
            })
    }

    /// Ascending by course number, byte-wise. Stable, so duplicate numbers
    /// keep their load order.
    pub fn sorted(&self) -> Vec<&Course> {
        let mut view: Vec<&Course> = self.courses.iter().collect();
        view.sort_by(|a, b| a.course_number().cmp(b.course_number()));
        view
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl From<Vec<Course>> for Catalog {
    fn from(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}
