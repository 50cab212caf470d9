// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use satchel_api::{NewTask, TaskChanges, TaskRecord};

/// A homework task belonging to a subject.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Backend-assigned identifier.
    pub id: String,

    /// Free-text description of the task.
    pub description: String,

    /// Whether the task is already done.
    pub done: bool,

    /// Due date, if the task is dated.
    pub due: Option<NaiveDate>,

    /// Score awarded by the teacher, if any.
    pub score: Option<String>,

    /// Identifier of the subject this task belongs to.
    pub subject_id: String,
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            description: record.description,
            // absent on the wire means not done
            done: record.is_done.unwrap_or(false),
            due: record.date,
            score: record.score,
            subject_id: record.subject_id,
        }
    }
}

/// Draft for a new task.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    /// Free-text description of the task.
    pub description: String,

    /// Due date, if any.
    pub due: Option<NaiveDate>,

    /// Score, if already known.
    pub score: Option<String>,

    /// Identifier of the subject this task belongs to.
    pub subject_id: String,
}

impl From<TaskDraft> for NewTask {
    fn from(draft: TaskDraft) -> Self {
        Self {
            description: draft.description,
            is_done: false,
            date: draft.due,
            score: draft.score,
            subject_id: draft.subject_id,
        }
    }
}

/// Patch for a task, allowing partial updates.
#[derive(Debug, Default, Clone)]
pub struct TaskPatch {
    /// New description, if changed.
    pub description: Option<String>,

    /// New completion flag, if changed.
    pub done: Option<bool>,

    /// New due date, if changed; `Some(None)` clears it.
    pub due: Option<Option<NaiveDate>>,

    /// New score, if changed; `Some(None)` clears it.
    pub score: Option<Option<String>>,

    /// New subject assignment, if changed.
    pub subject_id: Option<String>,
}

impl TaskPatch {
    /// Is this patch empty, meaning no fields are set.
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.done.is_none()
            && self.due.is_none()
            && self.score.is_none()
            && self.subject_id.is_none()
    }
}

impl From<TaskPatch> for TaskChanges {
    fn from(patch: TaskPatch) -> Self {
        Self {
            description: patch.description,
            is_done: patch.done,
            date: patch.due,
            score: patch.score,
            subject_id: patch.subject_id,
        }
    }
}

/// Client-side filter for task listings.
#[derive(Debug, Default, Clone)]
pub struct TaskConditions {
    /// Keep only tasks of this subject.
    pub subject: Option<String>,

    /// Also keep tasks already marked done.
    pub include_done: bool,
}

impl TaskConditions {
    /// Whether the given task satisfies the conditions.
    pub fn matches(&self, task: &Task) -> bool {
        if !self.include_done && task.done {
            return false;
        }
        match &self.subject {
            Some(subject) => task.subject_id == *subject,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, subject_id: &str, done: bool) -> Task {
        Task {
            id: id.to_string(),
            description: "Essay".to_string(),
            done,
            due: None,
            score: None,
            subject_id: subject_id.to_string(),
        }
    }

    #[test]
    fn test_absent_done_flag_means_not_done() {
        let record: TaskRecord = serde_json::from_str(
            r#"{"id": "1", "description": "Essay", "subjectId": "s1"}"#,
        )
        .unwrap();
        let task = Task::from(record);
        assert!(!task.done);
    }

    #[test]
    fn test_conditions_default_hides_done() {
        let conds = TaskConditions::default();
        assert!(conds.matches(&task("1", "s1", false)));
        assert!(!conds.matches(&task("2", "s1", true)));
    }

    #[test]
    fn test_conditions_include_done() {
        let conds = TaskConditions {
            include_done: true,
            ..Default::default()
        };
        assert!(conds.matches(&task("2", "s1", true)));
    }

    #[test]
    fn test_conditions_subject_filter() {
        let conds = TaskConditions {
            subject: Some("s1".to_string()),
            ..Default::default()
        };
        assert!(conds.matches(&task("1", "s1", false)));
        assert!(!conds.matches(&task("2", "s2", false)));
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(TaskPatch::default().is_empty());
        assert!(
            !TaskPatch {
                done: Some(true),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
