//! Sample board used when the store holds no projects.

use crate::model::project::Project;
use crate::model::task::{Status, Task};

pub const SAMPLE_PROJECT_NAME: &str = "Platform Launch";

const SAMPLE_DESCRIPTION: &str = "a description will go here, of some length...";

const SAMPLE_TASKS: &[(&str, &[&str], Status)] = &[
    (
        "Build UI for onboarding flow",
        &["subtask 1", "do stuff"],
        Status::ToDo,
    ),
    ("Build UI for search", &["subtask 1"], Status::Doing),
    (
        "Design settings and search pages",
        &["subtask 1"],
        Status::Doing,
    ),
    ("UI for menu", &["subtask 1", "do stuff"], Status::ToDo),
    ("UI for settings", &["subtask 1"], Status::Doing),
    (
        "Design settings and search pages",
        &["subtask 1"],
        Status::Doing,
    ),
    (
        "Build UI for onboarding flow",
        &["subtask 1", "do stuff"],
        Status::ToDo,
    ),
    ("Build UI for search", &["subtask 1"], Status::Doing),
    (
        "Design settings and search pages",
        &["subtask 1"],
        Status::Done,
    ),
];

/// Builds the default "Platform Launch" board.
pub fn sample_board() -> Vec<Project> {
    let mut project = Project::new(SAMPLE_PROJECT_NAME);
    for (title, subtasks, status) in SAMPLE_TASKS {
        project.add_task(Task::new(
            *title,
            SAMPLE_DESCRIPTION,
            subtasks.iter().copied(),
            *status,
        ));
    }
    vec![project]
}

#[cfg(test)]
mod tests {
    use super::sample_board;

    #[test]
    fn sample_subtasks_start_incomplete() {
        let board = sample_board();
        assert!(board[0]
            .tasks
            .iter()
            .all(|task| task.completed_subtask_count() == 0));
    }
}
