use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Subcommand;
use todos::{emphasize, load, save, Task};
use tracing::debug;
use weather::LocalStamp;

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add a task, optionally with a deadline (YYYY-MM-DDTHH:MM)
    Add {
        text: String,

        #[arg(long)]
        deadline: Option<String>,
    },
    /// List all tasks
    List,
    /// List tasks matching a query, with the matches marked
    Search { query: String },
    /// Change a task's text and/or deadline
    Edit {
        index: usize,

        #[arg(long)]
        text: Option<String>,

        #[arg(long, conflicts_with = "clear_deadline")]
        deadline: Option<String>,

        /// Drop the task's deadline
        #[arg(long)]
        clear_deadline: bool,
    },
    /// Remove a task
    Remove { index: usize },
}

pub fn run(file: &Path, action: TodoAction) -> anyhow::Result<()> {
    let mut store = load(file)?;
    debug!(tasks = store.len(), file = %file.display(), "Loaded task list");
    let now = now_stamp();

    match action {
        TodoAction::Add { text, deadline } => {
            store.add(&text, deadline, &now)?;
            save(&store, file)?;
            println!("Added task {}.", store.len() - 1);
        }
        TodoAction::List => {
            print_tasks(store.tasks().iter().enumerate(), "");
        }
        TodoAction::Search { query } => {
            print_tasks(store.matching(&query), &query);
        }
        TodoAction::Edit {
            index,
            text,
            deadline,
            clear_deadline,
        } => {
            store.begin_edit(index, &now)?;
            if let Some((draft_text, draft_deadline)) = store.edit_drafts_mut() {
                if let Some(text) = text {
                    *draft_text = text;
                }
                if clear_deadline {
                    *draft_deadline = None;
                } else if deadline.is_some() {
                    *draft_deadline = deadline;
                }
            }
            store.commit_edit(&now)?;
            save(&store, file)?;
            println!("Updated task {}.", index);
        }
        TodoAction::Remove { index } => {
            let removed = store.remove(index)?;
            save(&store, file)?;
            println!("Removed '{}'.", removed.text);
        }
    }
    Ok(())
}

fn print_tasks<'a>(tasks: impl Iterator<Item = (usize, &'a Task)>, query: &str) {
    let mut any = false;
    for (index, task) in tasks {
        any = true;
        let text = emphasize(&task.text, query, "[", "]");
        match &task.deadline {
            Some(deadline) => println!("{:>3}. {} (due {})", index, text, deadline),
            None => println!("{:>3}. {}", index, text),
        }
    }
    if !any {
        println!("No tasks.");
    }
}

// The current UTC time in the deadline's own format.
fn now_stamp() -> String {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    let stamp = LocalStamp::of(seconds, 0);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}",
        stamp.year, stamp.month, stamp.day, stamp.hour, stamp.minute
    )
}
