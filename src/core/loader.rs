use crate::domain::model::{Course, DanglingPrerequisite, LoadReport};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use csv::{ReaderBuilder, StringRecord, Terminator};
use std::collections::HashSet;

/// Parses `number,name[,prereq...]` lines into courses.
///
/// Splitting is naive: no header row, no quoting, no trimming, and records
/// may have any number of fields. Only `\n` ends a line; a `\r` right
/// before it is dropped, any other `\r` stays in its field.
#[derive(Debug, Clone)]
pub struct CourseLoader {
    delimiter: u8,
}

impl Default for CourseLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CourseLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reads the whole source, then runs the prerequisite check over the
    /// result. Only a source that cannot be opened is an error; bad lines
    /// are skipped and dangling prerequisites are reported, never removed.
    pub fn load<S: CatalogSource + ?Sized>(&self, source: &S) -> Result<LoadReport> {
        tracing::debug!("Loading courses from {}", source.describe());
        let input = source.open()?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .delimiter(self.delimiter)
            .terminator(Terminator::Any(b'\n'))
            .from_reader(input);

        let mut courses = Vec::new();
        let mut skipped_lines = 0;
        let mut record = StringRecord::new();

        loop {
            match reader.read_record(&mut record) {
                Ok(true) => match parse_record(&record) {
                    Some(course) => courses.push(course),
                    None => {
                        skipped_lines += 1;
                        tracing::debug!(
                            "Skipping line {}: fewer than 2 fields",
                            line_of(&record)
                        );
                    }
                },
                Ok(false) => break,
                Err(e) if e.is_io_error() => {
                    tracing::warn!("Read from {} stopped early: {}", source.describe(), e);
                    break;
                }
                Err(e) => {
                    skipped_lines += 1;
                    tracing::warn!("Skipping unreadable line: {}", e);
                }
            }
        }

        let dangling = validate_prerequisites(&courses);
        for item in &dangling {
            tracing::warn!("{}", item);
        }

        tracing::info!(
            "✅ Loaded {} courses ({} lines skipped, {} dangling prerequisites)",
            courses.len(),
            skipped_lines,
            dangling.len()
        );

        Ok(LoadReport {
            courses,
            skipped_lines,
            dangling,
        })
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Field 0 is the number, field 1 the name, the rest are prerequisites.
/// A single trailing empty field left by a trailing delimiter does not count.
fn parse_record(record: &StringRecord) -> Option<Course> {
    let mut fields: Vec<&str> = record.iter().collect();
    if let Some(last) = fields.last_mut() {
        if let Some(stripped) = last.strip_suffix('\r') {
            *last = stripped;
        }
    }
    if fields.last() == Some(&"") {
        fields.pop();
    }

    if fields.len() < 2 {
        return None;
    }

    let course = fields[2..]
        .iter()
        .filter(|p| !p.is_empty())
        .fold(Course::new(fields[0], fields[1]), |course, p| {
            course.with_prerequisite(*p)
        });
    Some(course)
}

/// One entry per prerequisite occurrence with no matching course number.
/// The courses themselves are left untouched.
pub fn validate_prerequisites(courses: &[Course]) -> Vec<DanglingPrerequisite> {
    let known: HashSet<&str> = courses.iter().map(|c| c.course_number()).collect();

    let mut dangling = Vec::new();
    for course in courses {
        for prerequisite in course.prerequisites() {
            if !known.contains(prerequisite.as_str()) {
                dangling.push(DanglingPrerequisite {
                    course_number: course.course_number().to_string(),
                    prerequisite: prerequisite.clone(),
                });
            }
        }
    }
    dangling
}
