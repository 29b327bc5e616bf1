//! `taskboard` binary: a text view over the board controller.
//!
//! # Responsibility
//! - Map command-line intents onto `BoardController` calls.
//! - Render read-only projections; never touch entities directly.

mod cli;
mod render;

use clap::Parser;
use cli::{Cli, Command};
use log::info;
use std::error::Error;
use std::path::{Path, PathBuf};
use taskboard_core::db::open_db;
use taskboard_core::{
    default_log_level, init_logging, BoardConfig, BoardController, CorruptStatePolicy, LogLevel,
    LoggingConfig, NewTask, SqliteKeyValueStore, Status,
};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = &cli.log_dir {
        let level = match &cli.log_level {
            Some(level) => level.parse::<LogLevel>()?,
            None => default_log_level(),
        };
        init_logging(&LoggingConfig::new(level, absolute(log_dir)?))?;
    }

    let conn = open_db(&cli.db)?;
    let config = BoardConfig {
        corrupt_state_policy: if cli.reseed_corrupt {
            CorruptStatePolicy::Reseed
        } else {
            CorruptStatePolicy::Surface
        },
        ..BoardConfig::default()
    };
    let mut board = BoardController::open(SqliteKeyValueStore::new(&conn), &config);
    let source = board.load()?;
    info!("event=cli_start module=cli status=ok source={}", source.as_str());

    if let Some(index) = cli.project {
        board.set_current_project_index(index)?;
    }

    match cli.command {
        Command::Projects => print!("{}", render::project_list(&board.project_list())),
        Command::Show => {
            let title = board.current_project_title()?;
            print!("{}", render::task_board(&title, &board.current_task_cards()?));
        }
        Command::Task { index } => {
            print!("{}", render::task_detail(&board.current_task_detail(index)?));
        }
        Command::AddProject { name } => {
            let index = board.add_project(name)?;
            println!("added project {index}");
        }
        Command::RemoveProject { index } => {
            let removed = board.remove_project(index)?;
            println!("removed project {index} ({})", removed.name);
        }
        Command::AddTask {
            title,
            description,
            subtasks,
            status,
        } => {
            let status: Status = status.parse()?;
            let task = NewTask {
                title,
                description,
                subtask_titles: subtasks,
                status,
            };
            let index = board.add_current_project_task(task)?;
            println!("added task {index}");
        }
        Command::RemoveTask { index } => {
            let removed = board.remove_current_project_task(index)?;
            println!("removed task {index} ({})", removed.title);
        }
        Command::SetStatus { index, status } => {
            board.set_current_project_task_status(&status, index)?;
            println!("task {index} is now {}", board.get_current_project_task_status(index)?);
        }
        Command::ToggleSubtask { task, subtask } => {
            let complete = board.toggle_current_project_subtask_status(task, subtask)?;
            let state = if complete { "complete" } else { "incomplete" };
            println!("subtask {subtask} of task {task} is now {state}");
        }
    }

    Ok(())
}

fn absolute(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
