use serde::{Deserialize, Serialize};

use crate::{matches, InvalidTask, StoreError};

pub const TEXT_MIN_CHARS: usize = 3;
pub const TEXT_MAX_CHARS: usize = 255;

/// One to-do entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    /// Local timestamp in `YYYY-MM-DDTHH:MM` form, if the task has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub deadline: Option<String>,
}

/// An in-progress edit of one task.
///
/// At most one session is active at a time; the drafts replace the task's
/// fields only on a successful commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    pub index: usize,
    pub draft_text: String,
    pub draft_deadline: Option<String>,
}

/// The task list with its optional active edit session.
#[derive(Clone, Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    edit: Option<EditSession>,
}

impl TaskStore {
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks, edit: None }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Validates and appends a task. The text is trimmed first.
    pub fn add(
        &mut self,
        text: &str,
        deadline: Option<String>,
        now: &str,
    ) -> Result<(), InvalidTask> {
        let text = text.trim();
        validate(text, deadline.as_deref(), now)?;
        self.tasks.push(Task {
            text: String::from(text),
            deadline,
        });
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Task, StoreError> {
        if index >= self.tasks.len() {
            return Err(StoreError::NoSuchTask {
                index,
                task_count: self.tasks.len(),
            });
        }
        // Keep the edit session pointing at the same task after the removal.
        self.edit = match self.edit.take() {
            Some(edit) if edit.index == index => None,
            Some(mut edit) => {
                if edit.index > index {
                    edit.index -= 1;
                }
                Some(edit)
            }
            None => None,
        };
        Ok(self.tasks.remove(index))
    }

    /// The tasks matching a search query, with their indices.
    ///
    /// Queries shorter than two characters match everything.
    pub fn matching<'a>(
        &'a self,
        query: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Task)> + 'a {
        self.tasks
            .iter()
            .enumerate()
            .filter(move |(_, task)| matches(&task.text, query))
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Opens an edit session for a task, seeding the drafts from its current
    /// fields. Any previously active session is committed first; if that
    /// commit fails validation, the old session stays active.
    pub fn begin_edit(&mut self, index: usize, now: &str) -> Result<(), StoreError> {
        if let Some(edit) = &self.edit {
            if edit.index == index {
                return Ok(());
            }
        }
        self.commit_edit(now)?;
        let task = self
            .tasks
            .get(index)
            .ok_or(StoreError::NoSuchTask {
                index,
                task_count: self.tasks.len(),
            })?;
        self.edit = Some(EditSession {
            index,
            draft_text: task.text.clone(),
            draft_deadline: task.deadline.clone(),
        });
        Ok(())
    }

    /// The drafts of the active session, for the caller to overwrite.
    pub fn edit_drafts_mut(&mut self) -> Option<(&mut String, &mut Option<String>)> {
        self.edit
            .as_mut()
            .map(|edit| (&mut edit.draft_text, &mut edit.draft_deadline))
    }

    /// Validates the drafts and overwrites the task. No-op without an
    /// active session; on a validation error the session stays active.
    pub fn commit_edit(&mut self, now: &str) -> Result<(), StoreError> {
        let Some(edit) = &self.edit else {
            return Ok(());
        };
        let text = edit.draft_text.trim();
        validate(text, edit.draft_deadline.as_deref(), now).map_err(StoreError::Invalid)?;
        let task = Task {
            text: String::from(text),
            deadline: edit.draft_deadline.clone(),
        };
        let index = edit.index;
        self.tasks[index] = task;
        self.edit = None;
        Ok(())
    }

    /// Discards the active session, if any.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }
}

fn validate(text: &str, deadline: Option<&str>, now: &str) -> Result<(), InvalidTask> {
    let chars = text.chars().count();
    if !(TEXT_MIN_CHARS..=TEXT_MAX_CHARS).contains(&chars) {
        return Err(InvalidTask::TextLength { chars });
    }
    if let Some(deadline) = deadline {
        if !is_local_timestamp(deadline) {
            return Err(InvalidTask::DeadlineFormat {
                value: String::from(deadline),
            });
        }
        // The fixed form makes lexicographic order chronological.
        if deadline <= now {
            return Err(InvalidTask::DeadlineInPast {
                value: String::from(deadline),
            });
        }
    }
    Ok(())
}

// Checks the `YYYY-MM-DDTHH:MM` shape, digits and separators only.
fn is_local_timestamp(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 16 {
        return false;
    }
    bytes.iter().enumerate().all(|(position, &byte)| match position {
        4 | 7 => byte == b'-',
        10 => byte == b'T',
        13 => byte == b':',
        _ => byte.is_ascii_digit(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: &str = "2024-05-10T12:00";

    fn store_with(texts: &[&str]) -> TaskStore {
        let mut store = TaskStore::default();
        for text in texts {
            store.add(text, None, NOW).unwrap();
        }
        store
    }

    #[test]
    fn add_trims_and_validates_text_length() {
        let mut store = TaskStore::default();
        store.add("  buy milk  ", None, NOW).unwrap();
        assert_eq!(store.tasks()[0].text, "buy milk");

        assert_eq!(
            store.add("ab", None, NOW),
            Err(InvalidTask::TextLength { chars: 2 })
        );
        assert_eq!(
            store.add(&"x".repeat(256), None, NOW),
            Err(InvalidTask::TextLength { chars: 256 })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_rejects_past_and_malformed_deadlines() {
        let mut store = TaskStore::default();
        assert!(matches!(
            store.add("call home", Some(String::from("2024-05-09T08:00")), NOW),
            Err(InvalidTask::DeadlineInPast { .. })
        ));
        assert!(matches!(
            store.add("call home", Some(String::from("tomorrow")), NOW),
            Err(InvalidTask::DeadlineFormat { .. })
        ));
        store
            .add("call home", Some(String::from("2024-05-11T08:00")), NOW)
            .unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_returns_the_task_and_reports_bad_indices() {
        let mut store = store_with(&["first", "second"]);
        let removed = store.remove(0).unwrap();
        assert_eq!(removed.text, "first");
        assert!(matches!(
            store.remove(5),
            Err(StoreError::NoSuchTask { index: 5, task_count: 1 })
        ));
    }

    #[test]
    fn matching_filters_only_with_two_or_more_chars() {
        let store = store_with(&["buy milk", "walk the dog", "buy bread"]);
        assert_eq!(store.matching("").count(), 3);
        assert_eq!(store.matching("b").count(), 3);
        assert_eq!(store.matching("buy").count(), 2);
        assert_eq!(store.matching("BUY").count(), 2);
        assert_eq!(store.matching("cat").count(), 0);
    }

    #[test]
    fn edit_session_commits_drafts() {
        let mut store = store_with(&["old text"]);
        store.begin_edit(0, NOW).unwrap();
        {
            let (text, deadline) = store.edit_drafts_mut().unwrap();
            *text = String::from("new text");
            *deadline = Some(String::from("2024-06-01T09:00"));
        }
        store.commit_edit(NOW).unwrap();
        assert_eq!(store.edit_session(), None);
        assert_eq!(store.tasks()[0].text, "new text");
        assert_eq!(
            store.tasks()[0].deadline.as_deref(),
            Some("2024-06-01T09:00")
        );
    }

    #[test]
    fn failed_commit_keeps_the_session_active() {
        let mut store = store_with(&["old text"]);
        store.begin_edit(0, NOW).unwrap();
        if let Some((text, _)) = store.edit_drafts_mut() {
            *text = String::from("x");
        }
        assert!(store.commit_edit(NOW).is_err());
        assert!(store.edit_session().is_some());
        assert_eq!(store.tasks()[0].text, "old text");

        store.cancel_edit();
        assert_eq!(store.edit_session(), None);
        assert_eq!(store.tasks()[0].text, "old text");
    }

    #[test]
    fn beginning_another_edit_commits_the_first() {
        let mut store = store_with(&["first", "second"]);
        store.begin_edit(0, NOW).unwrap();
        if let Some((text, _)) = store.edit_drafts_mut() {
            *text = String::from("first, edited");
        }
        store.begin_edit(1, NOW).unwrap();
        assert_eq!(store.tasks()[0].text, "first, edited");
        assert_eq!(store.edit_session().map(|edit| edit.index), Some(1));
    }

    #[test]
    fn removing_a_task_keeps_the_session_on_the_same_task() {
        let mut store = store_with(&["first", "second", "third"]);
        store.begin_edit(2, NOW).unwrap();
        store.remove(0).unwrap();
        assert_eq!(store.edit_session().map(|edit| edit.index), Some(1));

        store.remove(1).unwrap();
        assert_eq!(store.edit_session(), None);
    }
}
