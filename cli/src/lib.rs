// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for the satchel student agenda.

mod cli;
mod cmd_calendar;
mod cmd_exam;
mod cmd_subject;
mod cmd_task;
mod config;
mod event_formatter;
mod exam_formatter;
mod table;
mod task_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
