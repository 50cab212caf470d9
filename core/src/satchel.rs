// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use satchel_api::ApiClient;

use crate::agenda::{self, CalendarEvent};
use crate::config::Config;
use crate::exam::{Exam, ExamConditions, ExamDraft, ExamPatch};
use crate::subject::{Subject, SubjectDraft, SubjectPatch};
use crate::task::{Task, TaskConditions, TaskDraft, TaskPatch};

/// Satchel student agenda core.
///
/// Owns the backend API client; everything is fetched on demand and nothing
/// is cached between calls.
#[derive(Debug, Clone)]
pub struct Satchel {
    config: Config,
    client: ApiClient,
}

impl Satchel {
    /// Creates a new satchel instance with the given configuration.
    pub fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;

        let client = ApiClient::new(config.to_api_config())
            .map_err(|e| format!("Failed to initialize API client: {e}"))?;

        Ok(Self { config, client })
    }

    /// The normalized configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lists tasks matching the given conditions.
    pub async fn list_tasks(&self, conds: &TaskConditions) -> Result<Vec<Task>, Box<dyn Error>> {
        let tasks = self.client.list_tasks().await?;
        Ok(tasks
            .into_iter()
            .map(Task::from)
            .filter(|task| conds.matches(task))
            .collect())
    }

    /// Adds a new task from the given draft.
    pub async fn new_task(&self, draft: TaskDraft) -> Result<Task, Box<dyn Error>> {
        let record = self.client.create_task(&draft.into()).await?;
        Ok(record.into())
    }

    /// Applies a partial update to a task.
    pub async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task, Box<dyn Error>> {
        if patch.is_empty() {
            return Err("Nothing to update".into());
        }
        let record = self.client.update_task(id, &patch.into()).await?;
        Ok(record.into())
    }

    /// Marks a task as done or not done.
    pub async fn set_task_done(&self, id: &str, done: bool) -> Result<Task, Box<dyn Error>> {
        let patch = TaskPatch {
            done: Some(done),
            ..Default::default()
        };
        self.update_task(id, patch).await
    }

    /// Deletes a task.
    pub async fn delete_task(&self, id: &str) -> Result<(), Box<dyn Error>> {
        self.client.delete_task(id).await?;
        Ok(())
    }

    /// Lists exams matching the given conditions.
    pub async fn list_exams(&self, conds: &ExamConditions) -> Result<Vec<Exam>, Box<dyn Error>> {
        let exams = self.client.list_exams().await?;
        Ok(exams
            .into_iter()
            .map(Exam::from)
            .filter(|exam| conds.matches(exam))
            .collect())
    }

    /// Adds a new exam from the given draft.
    pub async fn new_exam(&self, draft: ExamDraft) -> Result<Exam, Box<dyn Error>> {
        let record = self.client.create_exam(&draft.into()).await?;
        Ok(record.into())
    }

    /// Applies a partial update to an exam.
    pub async fn update_exam(&self, id: &str, patch: ExamPatch) -> Result<Exam, Box<dyn Error>> {
        if patch.is_empty() {
            return Err("Nothing to update".into());
        }
        let record = self.client.update_exam(id, &patch.into()).await?;
        Ok(record.into())
    }

    /// Deletes an exam.
    pub async fn delete_exam(&self, id: &str) -> Result<(), Box<dyn Error>> {
        self.client.delete_exam(id).await?;
        Ok(())
    }

    /// Lists all subjects.
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, Box<dyn Error>> {
        let subjects = self.client.list_subjects().await?;
        Ok(subjects.into_iter().map(Subject::from).collect())
    }

    /// Adds a new subject from the given draft.
    pub async fn new_subject(&self, draft: SubjectDraft) -> Result<Subject, Box<dyn Error>> {
        let record = self.client.create_subject(&draft.into()).await?;
        Ok(record.into())
    }

    /// Applies a partial update to a subject.
    pub async fn update_subject(
        &self,
        id: &str,
        patch: SubjectPatch,
    ) -> Result<Subject, Box<dyn Error>> {
        if patch.is_empty() {
            return Err("Nothing to update".into());
        }
        let record = self.client.update_subject(id, &patch.into()).await?;
        Ok(record.into())
    }

    /// Deletes a subject.
    pub async fn delete_subject(&self, id: &str) -> Result<(), Box<dyn Error>> {
        self.client.delete_subject(id).await?;
        Ok(())
    }

    /// Fetches tasks and exams and aggregates them into calendar events.
    ///
    /// Events are recomputed on every call; see [`agenda::aggregate`] for the
    /// filtering and ordering rules.
    pub async fn calendar_events(&self) -> Result<Vec<CalendarEvent>, Box<dyn Error>> {
        tracing::debug!("aggregating calendar events");
        let tasks: Vec<Task> = self
            .client
            .list_tasks()
            .await?
            .into_iter()
            .map(Task::from)
            .collect();
        let exams: Vec<Exam> = self
            .client
            .list_exams()
            .await?
            .into_iter()
            .map(Exam::from)
            .collect();

        Ok(agenda::aggregate(&tasks, &exams))
    }
}
