use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;

use crate::{Task, TaskStore};

/// Loads a task list from a JSON file.
///
/// The file holds a plain array of tasks. A missing file is an empty list,
/// so a fresh store starts without any setup step.
pub fn load(path: &Path) -> anyhow::Result<TaskStore> {
    if !path.exists() {
        return Ok(TaskStore::default());
    }
    let file = File::open(path)
        .with_context(|| format!("Failed to open task file '{}'", path.display()))?;
    let tasks: Vec<Task> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Task file '{}' is not valid JSON", path.display()))?;
    Ok(TaskStore::from_tasks(tasks))
}

/// Saves the task list as pretty-printed JSON.
pub fn save(store: &TaskStore, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to write task file '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, store.tasks())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_empty_list() {
        let store = load(Path::new("definitely/not/here.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn tasks_serialize_as_a_plain_array() {
        let mut store = TaskStore::default();
        store
            .add("buy milk", Some(String::from("2024-06-01T09:00")), "2024-05-10T12:00")
            .unwrap();
        store.add("walk the dog", None, "2024-05-10T12:00").unwrap();

        let json = serde_json::to_string(store.tasks()).unwrap();
        let parsed: Vec<Task> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, store.tasks());

        // Tasks without a deadline serialize without the field, like the
        // original records.
        assert!(!json.contains("deadline\":null"));
    }

    #[test]
    fn reads_records_without_a_deadline_field() {
        let parsed: Vec<Task> =
            serde_json::from_str(r#"[{"text": "buy milk"}]"#).unwrap();
        assert_eq!(parsed[0].deadline, None);
    }
}
