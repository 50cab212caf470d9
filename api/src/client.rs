// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the student self-service backend API.

use std::sync::Arc;

use reqwest::Method;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{
    Envelope, ExamChanges, ExamPayload, ExamRecord, ExamsPayload, NewExam, NewSubject, NewTask,
    SubjectChanges, SubjectPayload, SubjectRecord, SubjectsPayload, TaskChanges, TaskPayload,
    TaskRecord, TasksPayload,
};

/// Client for the student self-service backend.
///
/// # Example
///
/// ```ignore
/// use satchel_api::{ApiClient, ApiConfig, AuthMethod};
///
/// # async fn example() -> Result<(), satchel_api::ApiError> {
/// let config = ApiConfig {
///     base_url: "https://backend.example.com".to_string(),
///     auth: AuthMethod::Bearer {
///         token: "access-token".to_string(),
///     },
///     ..Default::default()
/// };
///
/// let client = ApiClient::new(config)?;
/// let tasks = client.list_tasks().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Arc<HttpClient>,
    base_url: String,
}

impl ApiClient {
    /// Creates a new backend API client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        if config.base_url.is_empty() {
            return Err(ApiError::Config("base_url must not be empty".to_string()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
            base_url,
        })
    }

    /// Fetches all tasks of the authenticated student.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports one.
    pub async fn list_tasks(&self) -> Result<Vec<TaskRecord>, ApiError> {
        tracing::debug!("fetching tasks");
        let payload: TasksPayload = self.get("/tasks").await?;
        Ok(payload.tasks)
    }

    /// Creates a new task.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports one.
    pub async fn create_task(&self, task: &NewTask) -> Result<TaskRecord, ApiError> {
        tracing::debug!(subject_id = %task.subject_id, "creating task");
        let payload: TaskPayload = self.send_json(Method::POST, "/tasks", task).await?;
        Ok(payload.task)
    }

    /// Updates an existing task.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports one.
    pub async fn update_task(
        &self,
        id: &str,
        changes: &TaskChanges,
    ) -> Result<TaskRecord, ApiError> {
        tracing::debug!(%id, "updating task");
        let path = format!("/tasks/{id}");
        let payload: TaskPayload = self.send_json(Method::PUT, &path, changes).await?;
        Ok(payload.task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports one.
    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        tracing::debug!(%id, "deleting task");
        self.delete(&format!("/tasks/{id}")).await
    }

    /// Fetches all exams of the authenticated student.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports one.
    pub async fn list_exams(&self) -> Result<Vec<ExamRecord>, ApiError> {
        tracing::debug!("fetching exams");
        let payload: ExamsPayload = self.get("/exams").await?;
        Ok(payload.exams)
    }

    /// Creates a new exam.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports one.
    pub async fn create_exam(&self, exam: &NewExam) -> Result<ExamRecord, ApiError> {
        tracing::debug!(subject_id = %exam.subject_id, "creating exam");
        let payload: ExamPayload = self.send_json(Method::POST, "/exams", exam).await?;
        Ok(payload.exam)
    }

    /// Updates an existing exam.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports one.
    pub async fn update_exam(
        &self,
        id: &str,
        changes: &ExamChanges,
    ) -> Result<ExamRecord, ApiError> {
        tracing::debug!(%id, "updating exam");
        let path = format!("/exams/{id}");
        let payload: ExamPayload = self.send_json(Method::PUT, &path, changes).await?;
        Ok(payload.exam)
    }

    /// Deletes an exam.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports one.
    pub async fn delete_exam(&self, id: &str) -> Result<(), ApiError> {
        tracing::debug!(%id, "deleting exam");
        self.delete(&format!("/exams/{id}")).await
    }

    /// Fetches all subjects of the authenticated student.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports one.
    pub async fn list_subjects(&self) -> Result<Vec<SubjectRecord>, ApiError> {
        tracing::debug!("fetching subjects");
        let payload: SubjectsPayload = self.get("/subjects").await?;
        Ok(payload.subjects)
    }

    /// Creates a new subject.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports one.
    pub async fn create_subject(&self, subject: &NewSubject) -> Result<SubjectRecord, ApiError> {
        tracing::debug!(name = %subject.name, "creating subject");
        let payload: SubjectPayload = self.send_json(Method::POST, "/subjects", subject).await?;
        Ok(payload.subject)
    }

    /// Updates an existing subject.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports one.
    pub async fn update_subject(
        &self,
        id: &str,
        changes: &SubjectChanges,
    ) -> Result<SubjectRecord, ApiError> {
        tracing::debug!(%id, "updating subject");
        let path = format!("/subjects/{id}");
        let payload: SubjectPayload = self.send_json(Method::PUT, &path, changes).await?;
        Ok(payload.subject)
    }

    /// Deletes a subject.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports one.
    pub async fn delete_subject(&self, id: &str) -> Result<(), ApiError> {
        tracing::debug!(%id, "deleting subject");
        self.delete(&format!("/subjects/{id}")).await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.full_url(path);
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;
        let envelope: Envelope = resp.json().await?;
        envelope.into_payload()
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let url = self.full_url(path);
        let resp = self
            .http
            .execute(self.http.build_request(method, &url).json(body))
            .await?;
        let envelope: Envelope = resp.json().await?;
        envelope.into_payload()
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.full_url(path);
        let resp = self
            .http
            .execute(self.http.build_request(Method::DELETE, &url))
            .await?;

        // DELETE may answer 204 with no body; only decode an envelope if
        // there is one.
        let text = resp.text().await?;
        if text.is_empty() {
            return Ok(());
        }
        let envelope: Envelope = serde_json::from_str(&text)?;
        envelope.into_payload::<serde_json::Value>().map(|_| ())
    }

    fn full_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
