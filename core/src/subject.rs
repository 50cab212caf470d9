// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use satchel_api::{NewSubject, SubjectChanges, SubjectRecord};

/// A subject (course) that tasks and exams reference by identifier.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Subject {
    /// Backend-assigned identifier.
    pub id: String,

    /// Display name of the subject.
    pub name: String,
}

impl From<SubjectRecord> for Subject {
    fn from(record: SubjectRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

/// Draft for a new subject.
#[derive(Debug, Clone)]
pub struct SubjectDraft {
    /// Display name of the subject.
    pub name: String,
}

impl From<SubjectDraft> for NewSubject {
    fn from(draft: SubjectDraft) -> Self {
        Self { name: draft.name }
    }
}

/// Patch for a subject.
#[derive(Debug, Default, Clone)]
pub struct SubjectPatch {
    /// New display name, if changed.
    pub name: Option<String>,
}

impl SubjectPatch {
    /// Is this patch empty, meaning no fields are set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

impl From<SubjectPatch> for SubjectChanges {
    fn from(patch: SubjectPatch) -> Self {
        Self { name: patch.name }
    }
}
