use crate::core::catalog::Catalog;
use crate::core::loader::CourseLoader;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use std::io::{BufRead, Write};
use thiserror::Error;

const MENU: &str = "\nMenu:\n  1. Load Courses\n  2. Display All Courses\n  3. Search for a course\n  4. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    AwaitingChoice,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    List,
    Search,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMenuInput {
    #[error("Invalid input. Please enter a number 1-4.")]
    NotANumber(String),

    #[error("Please enter a valid option")]
    OutOfRange(i64),
}

impl MenuChoice {
    /// Reads the first whitespace-separated token of `input` as the choice.
    pub fn parse(input: &str) -> std::result::Result<Self, InvalidMenuInput> {
        let token = input.split_whitespace().next().unwrap_or("");
        let number: i64 = token
            .parse()
            .map_err(|_| InvalidMenuInput::NotANumber(token.to_string()))?;

        match number {
            1 => Ok(MenuChoice::Load),
            2 => Ok(MenuChoice::List),
            3 => Ok(MenuChoice::Search),
            4 => Ok(MenuChoice::Exit),
            other => Err(InvalidMenuInput::OutOfRange(other)),
        }
    }
}

/// Menu loop over any line-oriented input and writable output.
///
/// Every failure a user can cause (missing file, bad menu input, unknown
/// course) is reported on `output` and the loop goes on. Only I/O errors on
/// the console itself end `run` with an error.
pub struct Shell<R: BufRead, W: Write, S: CatalogSource> {
    input: R,
    output: W,
    source: S,
    loader: CourseLoader,
    catalog: Catalog,
    state: ShellState,
}

impl<R: BufRead, W: Write, S: CatalogSource> Shell<R, W, S> {
    pub fn new(input: R, output: W, source: S) -> Self {
        Self {
            input,
            output,
            source,
            loader: CourseLoader::new(),
            catalog: Catalog::new(),
            state: ShellState::AwaitingChoice,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn run(&mut self) -> Result<()> {
        while self.state == ShellState::AwaitingChoice {
            self.state = self.step()?;
        }
        Ok(())
    }

    /// Shows the menu, reads one choice and carries it out.
    pub fn step(&mut self) -> Result<ShellState> {
        write!(self.output, "{}Enter choice: ", MENU)?;
        self.output.flush()?;

        let Some(line) = self.next_token()? else {
            tracing::debug!("Input closed, leaving menu");
            return self.dispatch(MenuChoice::Exit);
        };

        match MenuChoice::parse(&line) {
            Ok(choice) => self.dispatch(choice),
            Err(e) => {
                tracing::debug!("Rejected menu input: {:?}", e);
                writeln!(self.output, "{}", e)?;
                Ok(ShellState::AwaitingChoice)
            }
        }
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<ShellState> {
        tracing::debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::Load => self.load_courses()?,
            MenuChoice::List => self.list_courses()?,
            MenuChoice::Search => {
                write!(self.output, "Enter course number: ")?;
                self.output.flush()?;
                match self.next_token()? {
                    Some(raw) => self.search_course(&raw)?,
                    None => return self.dispatch(MenuChoice::Exit),
                }
            }
            MenuChoice::Exit => {
                writeln!(self.output, "So long.")?;
                return Ok(ShellState::Terminated);
            }
        }

        Ok(ShellState::AwaitingChoice)
    }

    fn load_courses(&mut self) -> Result<()> {
        match self.loader.load(&self.source) {
            Ok(report) => {
                for dangling in &report.dangling {
                    writeln!(self.output, "{}", dangling)?;
                }
                writeln!(self.output, "Loaded {} courses", report.courses.len())?;
                self.catalog.replace(report.courses);
            }
            Err(e) => {
                tracing::error!("❌ {}", e);
                writeln!(self.output, "Could not open {}", self.source.describe())?;
                self.catalog.replace(Vec::new());
            }
        }
        Ok(())
    }

    fn list_courses(&mut self) -> Result<()> {
        writeln!(self.output)?;
        if self.catalog.is_empty() {
            writeln!(self.output, "No courses loaded")?;
            return Ok(());
        }

        for course in self.catalog.sorted() {
            writeln!(self.output, "{}", course.display_line())?;
        }
        Ok(())
    }

    fn search_course(&mut self, raw: &str) -> Result<()> {
        let course_number = raw.to_ascii_uppercase();

        match self.catalog.find(&course_number) {
            Ok(course) => {
                writeln!(self.output)?;
                writeln!(self.output, "{}", course.display_line())?;
                if let Some(line) = course.prerequisite_line() {
                    writeln!(self.output, "{}", line)?;
                }
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    /// Next non-blank line's first token, `None` once input is exhausted.
    fn next_token(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::InMemorySource;

    const CATALOG: &str = "CS201,Data Structures,CS101\nCS101,Intro to CS\n";

    fn run_session(source: &str, input: &str) -> (String, ShellState, usize) {
        let mut output = Vec::new();
        let mut shell = Shell::new(input.as_bytes(), &mut output, InMemorySource::new(source));
        shell.run().unwrap();
        let state = shell.state();
        let loaded = shell.catalog().len();
        drop(shell);
        (String::from_utf8(output).unwrap(), state, loaded)
    }

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(MenuChoice::parse("1"), Ok(MenuChoice::Load));
        assert_eq!(MenuChoice::parse(" 2 \n"), Ok(MenuChoice::List));
        assert_eq!(MenuChoice::parse("3"), Ok(MenuChoice::Search));
        assert_eq!(MenuChoice::parse("4"), Ok(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), Err(InvalidMenuInput::OutOfRange(0)));
        assert_eq!(MenuChoice::parse("5"), Err(InvalidMenuInput::OutOfRange(5)));
        assert_eq!(
            MenuChoice::parse("load"),
            Err(InvalidMenuInput::NotANumber("load".to_string()))
        );
    }

    #[test]
    fn test_exit_prints_farewell() {
        let (output, state, _) = run_session(CATALOG, "4\n");

        assert!(output.contains("Menu:"));
        assert!(output.ends_with("So long.\n"));
        assert_eq!(state, ShellState::Terminated);
    }

    #[test]
    fn test_end_of_input_terminates() {
        let (output, state, _) = run_session(CATALOG, "");

        assert!(output.ends_with("So long.\n"));
        assert_eq!(state, ShellState::Terminated);
    }

    #[test]
    fn test_invalid_inputs_keep_looping() {
        let (output, _, loaded) = run_session(CATALOG, "abc\n7\n4\n");

        assert!(output.contains("Invalid input. Please enter a number 1-4."));
        assert!(output.contains("Please enter a valid option"));
        assert_eq!(output.matches("Enter choice: ").count(), 3);
        assert_eq!(loaded, 0);
    }

    #[test]
    fn test_load_list_and_search() {
        let (output, _, loaded) = run_session(CATALOG, "1\n2\n3\ncs201\n4\n");

        assert_eq!(loaded, 2);
        assert!(output.contains("Loaded 2 courses"));

        let intro = output.find("CS101 - Intro to CS").unwrap();
        let data = output.find("CS201 - Data Structures").unwrap();
        assert!(intro < data);

        assert!(output.contains("Prerequisites: CS101"));
    }

    #[test]
    fn test_search_without_prerequisites_prints_no_prerequisite_line() {
        let (output, _, _) = run_session(CATALOG, "1\n3\ncs101\n4\n");

        assert!(output.contains("\nCS101 - Intro to CS\n"));
        assert!(!output.contains("Prerequisites:"));
    }

    #[test]
    fn test_search_before_load_reports_not_found() {
        let (output, _, _) = run_session(CATALOG, "3\ncs101\n4\n");
        assert!(output.contains("Course CS101 not found"));
    }

    #[test]
    fn test_list_before_load() {
        let (output, _, _) = run_session(CATALOG, "2\n4\n");
        assert!(output.contains("No courses loaded"));
    }

    #[test]
    fn test_dangling_prerequisite_is_printed_on_load() {
        let (output, _, loaded) = run_session("CS999,Ghost Course,CS000\n", "1\n3\nCS999\n4\n");

        assert!(output.contains("Not a prerequisite for CS999"));
        assert!(output.contains("Prerequisites: CS000"));
        assert_eq!(loaded, 1);
    }

    #[test]
    fn test_blank_lines_are_skipped_at_prompts() {
        let (output, _, _) = run_session(CATALOG, "\n1\n3\n\n  cs201  \n4\n");
        assert!(output.contains("CS201 - Data Structures"));
    }

    #[test]
    fn test_one_token_per_line() {
        let (output, _, _) = run_session(CATALOG, "1\n3 cs101\n1abc\n4\n");

        assert!(output.contains("Course 1ABC not found"));
        assert!(!output.contains("CS101 - Intro to CS"));
        assert!(output.ends_with("So long.\n"));
    }

    #[test]
    fn test_load_failure_empties_store() {
        struct Unreadable;

        impl CatalogSource for Unreadable {
            fn open(&self) -> Result<Box<dyn BufRead + '_>> {
                Err(crate::utils::error::AdvisorError::SourceUnavailable {
                    path: self.describe(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
                })
            }

            fn describe(&self) -> String {
                "missing.csv".to_string()
            }
        }

        let mut output = Vec::new();
        let mut shell = Shell::new("1\n2\n4\n".as_bytes(), &mut output, Unreadable);
        shell.run().unwrap();
        assert!(shell.catalog().is_empty());
        drop(shell);

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Could not open missing.csv"));
        assert!(output.contains("No courses loaded"));
    }

    #[test]
    fn test_end_of_input_at_course_prompt() {
        let (output, state, _) = run_session(CATALOG, "1\n3\n");

        assert!(output.ends_with("Enter course number: So long.\n"));
        assert_eq!(state, ShellState::Terminated);
    }
}
