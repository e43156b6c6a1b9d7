use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::storage::{Storage, json::JsonFileStorage};

mod models;
mod storage;
mod ui;

const DEFAULT_TODO_FILE: &str = ".todo.json";

#[derive(Parser)]
#[command(name = "tdl", about = "A simple todo list for your terminal")]
struct Cli {
    /// Path of the todo file
    #[arg(long, global = true, default_value = DEFAULT_TODO_FILE)]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all tasks
    List {
        /// Show only completed tasks
        #[arg(long, conflicts_with = "pending")]
        completed: bool,

        /// Show only pending tasks
        #[arg(long)]
        pending: bool,
    },

    /// Add a new task
    Add {
        /// Task text; prompts on stdin when omitted
        text: Vec<String>,
    },

    /// Replace the text of a task
    Edit {
        /// 1-based task index
        index: usize,

        /// New task text
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Mark a task as completed
    Done {
        /// 1-based task index
        index: usize,
    },

    /// Delete a task
    Delete {
        /// 1-based task index
        index: usize,
    },

    /// Delete all tasks
    Clear,
}

#[derive(Debug, Error)]
enum InputError {
    #[error("Empty todo is not allowed")]
    EmptyInput,

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Join trailing arguments into the task text, falling back to one
/// interactively-read line. Blank input is rejected before it can
/// reach the list.
fn get_input(mut reader: impl BufRead, args: &[String]) -> Result<String, InputError> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut line = String::new();
    reader.read_line(&mut line)?;

    let text = line.trim();
    if text.is_empty() {
        return Err(InputError::EmptyInput);
    }

    Ok(text.to_string())
}

fn main() {
    let cli = Cli::parse();

    let storage = JsonFileStorage::new(cli.file);

    let mut list = match storage.load() {
        Ok(list) => list,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let today = jiff::Zoned::now().date();

    match cli.command {
        Some(Commands::List { completed, pending }) => {
            if completed {
                ui::render_view_header("COMPLETED", list.count_completed());
                ui::render_filtered(&list.completed(), today);
            } else if pending {
                ui::render_view_header("PENDING", list.count_pending());
                ui::render_filtered(&list.pending(), today);
            } else {
                ui::render_view_header("TASKS", list.len());
                ui::render_all(&list, today);
            }
        }
        Some(Commands::Add { text }) => {
            let task = match get_input(io::stdin().lock(), &text) {
                Ok(task) => task,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            };

            println!("✓ Task added: {task}");
            list.add(task);
        }
        Some(Commands::Edit { index, text }) => {
            let new_text = text.join(" ");
            match list.edit(index, new_text.clone()) {
                Ok(()) => println!("✓ Task {index} updated: {new_text}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Done { index }) => match list.complete(index) {
            Ok(()) => {
                if let Some(task) = list.iter().nth(index - 1) {
                    println!("✓ Task completed: {}", task.task);
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Some(Commands::Delete { index }) => {
            let removed = list.iter().nth(index.wrapping_sub(1)).map(|t| t.task.clone());
            match list.delete(index) {
                Ok(()) => println!("✓ Task deleted: {}", removed.unwrap_or_default()),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Clear) => match list.delete_all() {
            Ok(()) => println!("✓ All tasks deleted"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => {
            // Deliberate no-op path: nothing is mutated, nothing stored.
            println!("Invalid command");
            return;
        }
    }

    if let Err(e) = storage.save(&list) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
