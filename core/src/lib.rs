// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the satchel student agenda: domain types for subjects, tasks, and
//! exams, the calendar event aggregation, and the [`Satchel`] facade over the
//! backend API.

mod agenda;
mod config;
mod exam;
mod satchel;
mod subject;
mod task;

pub use crate::agenda::{CalendarEvent, EventSource, aggregate};
pub use crate::config::{APP_NAME, Config, TOKEN_ENV};
pub use crate::exam::{Exam, ExamConditions, ExamDraft, ExamPatch};
pub use crate::satchel::Satchel;
pub use crate::subject::{Subject, SubjectDraft, SubjectPatch};
pub use crate::task::{Task, TaskConditions, TaskDraft, TaskPatch};
