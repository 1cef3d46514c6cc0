//! Interactive menu loop.
//!
//! # Responsibility
//! - Print the menu, read a selector and dispatch to one student operation.
//! - Turn `NotFound` into a user-visible message and keep running.
//!
//! # Invariants
//! - The loop has two states: running and exited.
//! - Exit happens on selector 5 or when input is exhausted.
//! - Any store error other than `NotFound` is returned to the caller as fatal.

use crate::console::{parse_number, Console};
use crate::error::CliError;
use log::info;
use std::io::{BufRead, Write};
use student_core::{NewStudent, StudentId, StudentRepository, StudentService};

const MENU_LINES: &[&str] = &[
    "",
    "--- Student Management System ---",
    "1. Add Student",
    "2. Update Student",
    "3. Delete Student",
    "4. View All Students",
    "5. Exit",
];
const CHOICE_PROMPT: &str = "Enter choice: ";
const NOT_FOUND_MESSAGE: &str = "Student not found.";

/// One menu selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Delete,
    List,
    Exit,
}

impl MenuChoice {
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(Self::Add),
            2 => Some(Self::Update),
            3 => Some(Self::Delete),
            4 => Some(Self::List),
            5 => Some(Self::Exit),
            _ => None,
        }
    }

    /// Parses a raw input line; non-numeric text is no choice at all.
    pub fn parse(raw: &str) -> Option<Self> {
        parse_number::<i64>(raw).ok().and_then(Self::from_selector)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    Running,
    Exited,
}

/// Runs the menu until the user exits or input ends.
pub fn run_menu<R, I, O>(
    service: &StudentService<R>,
    console: &mut Console<I, O>,
) -> Result<(), CliError>
where
    R: StudentRepository,
    I: BufRead,
    O: Write,
{
    info!("event=menu_start module=cli status=ok");
    let mut state = MenuState::Running;
    while state == MenuState::Running {
        state = step(service, console)?;
    }
    info!("event=menu_exit module=cli status=ok");
    Ok(())
}

fn step<R, I, O>(
    service: &StudentService<R>,
    console: &mut Console<I, O>,
) -> Result<MenuState, CliError>
where
    R: StudentRepository,
    I: BufRead,
    O: Write,
{
    for line in MENU_LINES {
        console.say(line)?;
    }
    let Some(raw) = console.prompt_text(CHOICE_PROMPT)? else {
        info!("event=menu_input module=cli status=eof");
        return Ok(MenuState::Exited);
    };

    match MenuChoice::parse(&raw) {
        Some(MenuChoice::Add) => add_student(service, console),
        Some(MenuChoice::Update) => update_student(service, console),
        Some(MenuChoice::Delete) => delete_student(service, console),
        Some(MenuChoice::List) => list_students(service, console),
        Some(MenuChoice::Exit) => {
            console.say("Exiting...")?;
            Ok(MenuState::Exited)
        }
        None => {
            console.say("Invalid choice!")?;
            Ok(MenuState::Running)
        }
    }
}

fn add_student<R, I, O>(
    service: &StudentService<R>,
    console: &mut Console<I, O>,
) -> Result<MenuState, CliError>
where
    R: StudentRepository,
    I: BufRead,
    O: Write,
{
    let Some(student) = read_student_fields(console, "Enter name: ", "Enter age: ", "Enter email: ")?
    else {
        return Ok(MenuState::Exited);
    };

    service.add_student(&student)?;
    console.say("Student added successfully!")?;
    Ok(MenuState::Running)
}

fn update_student<R, I, O>(
    service: &StudentService<R>,
    console: &mut Console<I, O>,
) -> Result<MenuState, CliError>
where
    R: StudentRepository,
    I: BufRead,
    O: Write,
{
    let Some(id) = console.prompt_number::<StudentId>("Enter student ID to update: ")? else {
        return Ok(MenuState::Exited);
    };
    let Some(student) = read_student_fields(
        console,
        "Enter new name: ",
        "Enter new age: ",
        "Enter new email: ",
    )?
    else {
        return Ok(MenuState::Exited);
    };

    match service.update_student(id, &student) {
        Ok(()) => console.say("Student updated successfully!")?,
        Err(err) if err.is_not_found() => console.say(NOT_FOUND_MESSAGE)?,
        Err(err) => return Err(err.into()),
    }
    Ok(MenuState::Running)
}

fn delete_student<R, I, O>(
    service: &StudentService<R>,
    console: &mut Console<I, O>,
) -> Result<MenuState, CliError>
where
    R: StudentRepository,
    I: BufRead,
    O: Write,
{
    let Some(id) = console.prompt_number::<StudentId>("Enter student ID to delete: ")? else {
        return Ok(MenuState::Exited);
    };

    match service.delete_student(id) {
        Ok(()) => console.say("Student deleted successfully!")?,
        Err(err) if err.is_not_found() => console.say(NOT_FOUND_MESSAGE)?,
        Err(err) => return Err(err.into()),
    }
    Ok(MenuState::Running)
}

fn list_students<R, I, O>(
    service: &StudentService<R>,
    console: &mut Console<I, O>,
) -> Result<MenuState, CliError>
where
    R: StudentRepository,
    I: BufRead,
    O: Write,
{
    let students = service.list_students()?;
    console.say("")?;
    console.say("--- Student List ---")?;
    for student in &students {
        console.say(&student.to_string())?;
    }
    Ok(MenuState::Running)
}

fn read_student_fields<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    name_label: &str,
    age_label: &str,
    email_label: &str,
) -> Result<Option<NewStudent>, CliError> {
    let Some(name) = console.prompt_text(name_label)? else {
        return Ok(None);
    };
    let Some(age) = console.prompt_number::<i32>(age_label)? else {
        return Ok(None);
    };
    let Some(email) = console.prompt_text(email_label)? else {
        return Ok(None);
    };
    Ok(Some(NewStudent::new(name, age, email)))
}

#[cfg(test)]
mod tests {
    use super::{run_menu, MenuChoice};
    use crate::console::Console;
    use crate::error::CliError;
    use rusqlite::Connection;
    use std::io::Cursor;
    use student_core::db::open_db_in_memory;
    use student_core::{SqliteStudentRepository, StudentRepository, StudentService};

    fn run_script(conn: &Connection, script: &str) -> String {
        let service = StudentService::new(SqliteStudentRepository::new(conn));
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        run_menu(&service, &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn choice_parsing_maps_selectors() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::List));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("list"), None);
    }

    #[test]
    fn trailing_text_after_selector_is_invalid_choice() {
        assert_eq!(MenuChoice::parse("1 abc"), None);
        assert_eq!(MenuChoice::parse("4x"), None);
    }

    #[test]
    fn exit_selector_stops_loop() {
        let conn = open_db_in_memory().unwrap();
        let output = run_script(&conn, "5\n1\nnever\n");

        assert!(output.contains("--- Student Management System ---"));
        assert!(output.ends_with("Exiting...\n"));
        assert!(!output.contains("Enter name: "));
    }

    #[test]
    fn end_of_input_exits_without_error() {
        let conn = open_db_in_memory().unwrap();
        let output = run_script(&conn, "");

        assert!(output.ends_with("Enter choice: "));
        assert!(!output.contains("Exiting..."));
    }

    #[test]
    fn end_of_input_inside_add_prompts_exits_without_insert() {
        let conn = open_db_in_memory().unwrap();
        run_script(&conn, "1\nAlice\n20\n");

        let repo = SqliteStudentRepository::new(&conn);
        assert!(repo.list_students().unwrap().is_empty());
    }

    #[test]
    fn invalid_choices_are_reported_and_loop_continues() {
        let conn = open_db_in_memory().unwrap();
        let output = run_script(&conn, "9\nabc\n5\n");

        assert_eq!(output.matches("Invalid choice!").count(), 2);
        assert_eq!(output.matches("Enter choice: ").count(), 3);
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn malformed_age_reprompts_instead_of_faulting() {
        let conn = open_db_in_memory().unwrap();
        let output = run_script(&conn, "1\nAlice\ntwenty\n20\na@x.com\n5\n");

        assert!(output.contains("Please enter a valid number."));
        assert!(output.contains("Student added successfully!"));
        let listed = SqliteStudentRepository::new(&conn).list_students().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].age, 20);
    }

    #[test]
    fn update_and_delete_of_missing_id_report_not_found() {
        let conn = open_db_in_memory().unwrap();
        let output = run_script(
            &conn,
            "2\n99999\nBob\n21\nb@x.com\n3\n99999\n5\n",
        );

        assert_eq!(output.matches("Student not found.").count(), 2);
        assert!(!output.contains("successfully"));
        let repo = SqliteStudentRepository::new(&conn);
        assert!(repo.list_students().unwrap().is_empty());
    }

    #[test]
    fn scripted_session_adds_updates_lists_and_deletes() {
        let conn = open_db_in_memory().unwrap();

        let output = run_script(&conn, "1\nAlice\n20\na@x.com\n4\n5\n");
        assert!(output.contains("Student added successfully!"));
        let listed = SqliteStudentRepository::new(&conn).list_students().unwrap();
        assert_eq!(listed.len(), 1);
        let id = listed[0].id;
        assert!(output.contains(&format!(
            "--- Student List ---\nID: {id}, Name: Alice, Age: 20, Email: a@x.com\n"
        )));

        let output = run_script(&conn, &format!("2\n{id}\nBob\n21\nb@x.com\n4\n5\n"));
        assert!(output.contains("Student updated successfully!"));
        assert!(output.contains(&format!("ID: {id}, Name: Bob, Age: 21, Email: b@x.com")));

        let output = run_script(&conn, &format!("3\n{id}\n4\n5\n"));
        assert!(output.contains("Student deleted successfully!"));
        assert!(output.contains("--- Student List ---\n\n--- Student Management System ---"));
        assert!(SqliteStudentRepository::new(&conn)
            .list_students()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn store_failure_is_returned_as_fatal() {
        let conn = open_db_in_memory().unwrap();
        conn.execute_batch("DROP TABLE students;").unwrap();

        let service = StudentService::new(SqliteStudentRepository::new(&conn));
        let mut console = Console::new(Cursor::new(b"4\n5\n".to_vec()), Vec::new());
        let err = run_menu(&service, &mut console).unwrap_err();
        assert!(matches!(err, CliError::Store(_)));
    }
}
