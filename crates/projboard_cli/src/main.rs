//! Terminal adapter for the projboard core.
//!
//! # Responsibility
//! - Gather raw project fields from stdin and push them through intake.
//! - Host the board-section renderers subscribed to the store.
//!
//! # Invariants
//! - Rejected input surfaces a message and mutates nothing.
//! - Section renderers fully redraw from each received snapshot; no
//!   incremental diffing.

use log::warn;
use projboard_core::{
    core_version, default_log_level, init_logging, Project, ProjectDraft, ProjectIntake,
    ProjectStore,
};
use std::io::{self, BufRead};

/// Board sections rendered by the list adapters.
#[derive(Debug, Clone, Copy)]
enum SectionKind {
    Active,
    Finished,
}

impl SectionKind {
    fn heading(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE PROJECTS",
            Self::Finished => "FINISHED PROJECTS",
        }
    }
}

/// Fully redraws one board section from a snapshot.
fn render_section(kind: SectionKind, snapshot: &[Project]) {
    println!("== {} ==", kind.heading());
    for project in snapshot {
        println!("- {} ({} people)", project.title, project.people);
    }
}

/// Splits one `title | description | people` line into a raw draft.
fn parse_draft(line: &str) -> Option<ProjectDraft> {
    let mut fields = line.splitn(3, '|').map(str::trim);
    let title = fields.next()?;
    let description = fields.next()?;
    let people = fields.next()?;
    Some(ProjectDraft {
        title: title.to_string(),
        description: description.to_string(),
        people: people.to_string(),
    })
}

fn main() {
    let log_dir = std::env::temp_dir().join("projboard-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }

    println!("projboard {}", core_version());
    println!("enter projects as: title | description | people");

    let store = ProjectStore::shared();
    {
        let mut store = store.borrow_mut();
        for kind in [SectionKind::Active, SectionKind::Finished] {
            store.add_listener(move |snapshot| render_section(kind, snapshot));
        }
    }
    let intake = ProjectIntake::new(store.clone());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("event=stdin_read_failed module=cli status=error kind={}", err.kind());
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let accepted = parse_draft(&line)
            .map(|draft| intake.submit(&draft).is_ok())
            .unwrap_or(false);
        if !accepted {
            println!("Invalid input! Try again!");
        }
    }
}
