// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Wire types for the backend API.
//!
//! Every response arrives wrapped in the same envelope:
//! `{ "status": "ok" | "error", "msg": ..., "data": ... }`. On success the
//! payload is read from `msg`, falling back to `data`; on failure `msg`
//! carries an error string.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

/// A homework task as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Backend-assigned identifier.
    pub id: String,
    /// Free-text description of the task.
    pub description: String,
    /// Completion flag. Absent on the wire means not done.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_done: Option<bool>,
    /// Due date. Absent or unparseable dates decode as `None`.
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    /// Score awarded by the teacher, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    /// Identifier of the subject this task belongs to.
    pub subject_id: String,
}

/// A scheduled exam as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRecord {
    /// Backend-assigned identifier.
    pub id: String,
    /// Free-text description of the exam.
    pub description: String,
    /// Identifier of the subject this exam belongs to.
    pub subject_id: String,
    /// Exam date. Absent or unparseable dates decode as `None`.
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    /// Score awarded by the teacher, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
}

/// A subject (course) as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRecord {
    /// Backend-assigned identifier.
    pub id: String,
    /// Display name of the subject.
    pub name: String,
}

/// Body for `POST /tasks`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Free-text description of the task.
    pub description: String,
    /// Completion flag.
    pub is_done: bool,
    /// Due date, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Score, if already known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    /// Identifier of the subject this task belongs to.
    pub subject_id: String,
}

/// Body for `PUT /tasks/{id}`. Fields left `None` are not sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskChanges {
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New completion flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_done: Option<bool>,
    /// New due date, where `Some(None)` clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Option<NaiveDate>>,
    /// New score, where `Some(None)` clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Option<String>>,
    /// New subject assignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
}

/// Body for `POST /exams`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExam {
    /// Free-text description of the exam.
    pub description: String,
    /// Identifier of the subject this exam belongs to.
    pub subject_id: String,
    /// Exam date, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Score, if already known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
}

/// Body for `PUT /exams/{id}`. Fields left `None` are not sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamChanges {
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New exam date, where `Some(None)` clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Option<NaiveDate>>,
    /// New score, where `Some(None)` clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Option<String>>,
    /// New subject assignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
}

/// Body for `POST /subjects`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubject {
    /// Display name of the subject.
    pub name: String,
}

/// Body for `PUT /subjects/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectChanges {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The common response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    status: String,
    #[serde(default)]
    msg: serde_json::Value,
    #[serde(default)]
    data: serde_json::Value,
}

impl Envelope {
    /// Unwraps the payload, mapping an `error` status to [`ApiError::Backend`].
    pub(crate) fn into_payload<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if self.status != "ok" {
            let msg = match self.msg.as_str() {
                Some(s) if !s.is_empty() => s.to_string(),
                _ => "unknown backend error".to_string(),
            };
            return Err(ApiError::Backend(msg));
        }

        let payload = if self.msg.is_null() { self.data } else { self.msg };
        Ok(serde_json::from_value(payload)?)
    }
}

/// List payload under `{"tasks": [...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct TasksPayload {
    pub(crate) tasks: Vec<TaskRecord>,
}

/// List payload under `{"exams": [...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ExamsPayload {
    pub(crate) exams: Vec<ExamRecord>,
}

/// List payload under `{"subjects": [...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct SubjectsPayload {
    pub(crate) subjects: Vec<SubjectRecord>,
}

/// Single-record payload under `{"task": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct TaskPayload {
    pub(crate) task: TaskRecord,
}

/// Single-record payload under `{"exam": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ExamPayload {
    pub(crate) exam: ExamRecord,
}

/// Single-record payload under `{"subject": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct SubjectPayload {
    pub(crate) subject: SubjectRecord,
}

/// Decodes a date that may be absent, null, a plain `YYYY-MM-DD` date, or a
/// full RFC 3339 timestamp. Anything unparseable decodes as `None`: one bad
/// record must not fail a whole list fetch, and downstream consumers treat
/// undated and invalid-dated items the same way.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    tracing::warn!(date = %s, "unparseable date on the wire, treating as undated");
    None
}
