use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

use assess_core::{Catalog, Clock};
use services::{AssessmentLoopService, PracticeService};
use ui::{App, Student, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownStudent { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownStudent { raw } => write!(f, "unknown --student value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    roster: Vec<Student>,
    assessment_loop: Arc<AssessmentLoopService>,
    practice: Arc<PracticeService>,
}

impl UiApp for DesktopApp {
    fn roster(&self) -> Vec<Student> {
        self.roster.clone()
    }

    fn assessment_loop(&self) -> Arc<AssessmentLoopService> {
        Arc::clone(&self.assessment_loop)
    }

    fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }
}

struct Args {
    student_id: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--student <id>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --student <id>   put the given student first in the roster");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TUTOR_STUDENT");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut student_id = std::env::var("TUTOR_STUDENT").ok();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--student" => {
                    let value = require_value(args, "--student")?;
                    student_id = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { student_id })
    }
}

fn default_roster() -> Vec<Student> {
    vec![
        Student::new("ram", "Ram"),
        Student::new("shyam", "Shyam"),
        Student::new("sanga", "Sanga"),
    ]
}

/// Reorder the roster so a preselected student leads the login list.
fn prioritize_student(mut roster: Vec<Student>, student_id: &str) -> Result<Vec<Student>, ArgsError> {
    let index = roster
        .iter()
        .position(|student| student.id == student_id)
        .ok_or_else(|| ArgsError::UnknownStudent {
            raw: student_id.to_string(),
        })?;
    let preferred = roster.remove(index);
    roster.insert(0, preferred);
    Ok(roster)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let mut roster = default_roster();
    if let Some(student_id) = parsed.student_id.as_deref() {
        roster = prioritize_student(roster, student_id)?;
    }

    // The catalog is the only persisted input: loaded once, immutable for
    // the process lifetime, shared by reference with every service.
    let catalog = Arc::new(Catalog::builtin());
    let clock = Clock::default_clock();
    let assessment_loop = Arc::new(AssessmentLoopService::new(clock, Arc::clone(&catalog)));
    let practice = Arc::new(PracticeService::new(catalog));

    let app = DesktopApp {
        roster,
        assessment_loop,
        practice,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Tutor")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_student_flag() {
        let mut args = ["--student".to_string(), "shyam".to_string()].into_iter();
        let parsed = Args::parse(&mut args).unwrap();
        assert_eq!(parsed.student_id.as_deref(), Some("shyam"));
    }

    #[test]
    fn parse_rejects_unknown_flag() {
        let mut args = ["--frobnicate".to_string()].into_iter();
        let err = Args::parse(&mut args).unwrap_err();
        assert!(matches!(err, ArgsError::UnknownArg(_)));
    }

    #[test]
    fn preselected_student_leads_the_roster() {
        let roster = prioritize_student(default_roster(), "sanga").unwrap();
        assert_eq!(roster[0].id, "sanga");
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn unknown_student_is_rejected() {
        let err = prioritize_student(default_roster(), "nobody").unwrap_err();
        assert!(matches!(err, ArgsError::UnknownStudent { .. }));
    }
}
