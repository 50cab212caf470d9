// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use satchel_api::{ExamChanges, ExamRecord, NewExam};

/// A scheduled exam belonging to a subject.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    /// Backend-assigned identifier.
    pub id: String,

    /// Free-text description of the exam.
    pub description: String,

    /// Identifier of the subject this exam belongs to.
    pub subject_id: String,

    /// Exam date, if scheduled.
    pub due: Option<NaiveDate>,

    /// Score awarded by the teacher, if any.
    pub score: Option<String>,
}

impl From<ExamRecord> for Exam {
    fn from(record: ExamRecord) -> Self {
        Self {
            id: record.id,
            description: record.description,
            subject_id: record.subject_id,
            due: record.date,
            score: record.score,
        }
    }
}

/// Draft for a new exam.
#[derive(Debug, Clone)]
pub struct ExamDraft {
    /// Free-text description of the exam.
    pub description: String,

    /// Identifier of the subject this exam belongs to.
    pub subject_id: String,

    /// Exam date, if any.
    pub due: Option<NaiveDate>,

    /// Score, if already known.
    pub score: Option<String>,
}

impl From<ExamDraft> for NewExam {
    fn from(draft: ExamDraft) -> Self {
        Self {
            description: draft.description,
            subject_id: draft.subject_id,
            date: draft.due,
            score: draft.score,
        }
    }
}

/// Patch for an exam, allowing partial updates.
#[derive(Debug, Default, Clone)]
pub struct ExamPatch {
    /// New description, if changed.
    pub description: Option<String>,

    /// New exam date, if changed; `Some(None)` clears it.
    pub due: Option<Option<NaiveDate>>,

    /// New score, if changed; `Some(None)` clears it.
    pub score: Option<Option<String>>,

    /// New subject assignment, if changed.
    pub subject_id: Option<String>,
}

impl ExamPatch {
    /// Is this patch empty, meaning no fields are set.
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.due.is_none()
            && self.score.is_none()
            && self.subject_id.is_none()
    }
}

impl From<ExamPatch> for ExamChanges {
    fn from(patch: ExamPatch) -> Self {
        Self {
            description: patch.description,
            date: patch.due,
            score: patch.score,
            subject_id: patch.subject_id,
        }
    }
}

/// Client-side filter for exam listings.
#[derive(Debug, Default, Clone)]
pub struct ExamConditions {
    /// Keep only exams of this subject.
    pub subject: Option<String>,
}

impl ExamConditions {
    /// Whether the given exam satisfies the conditions.
    pub fn matches(&self, exam: &Exam) -> bool {
        match &self.subject {
            Some(subject) => exam.subject_id == *subject,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditions_subject_filter() {
        let exam = Exam {
            id: "t1".to_string(),
            description: "Midterm".to_string(),
            subject_id: "s1".to_string(),
            due: None,
            score: None,
        };

        assert!(ExamConditions::default().matches(&exam));
        assert!(
            ExamConditions {
                subject: Some("s1".to_string()),
            }
            .matches(&exam)
        );
        assert!(
            !ExamConditions {
                subject: Some("s2".to_string()),
            }
            .matches(&exam)
        );
    }
}
