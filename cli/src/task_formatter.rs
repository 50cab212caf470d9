// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use colored::Color;
use satchel_core::Task;

use crate::table::{Column, PaddingDirection, Table};
use crate::util::{ArgOutputFormat, format_date};

/// Renders tasks as a table or as JSON.
#[derive(Debug)]
pub struct TaskFormatter {
    columns: Vec<TaskColumn>,
    format: ArgOutputFormat,
}

impl TaskFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                TaskColumn::Status,
                TaskColumn::Id,
                TaskColumn::Due,
                TaskColumn::Subject,
                TaskColumn::Description,
                TaskColumn::Score,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self, tasks: &[Task]) -> Result<String, Box<dyn Error>> {
        match self.format {
            ArgOutputFormat::Json => Ok(serde_json::to_string_pretty(tasks)?),
            ArgOutputFormat::Table => {
                let mut out = Vec::new();
                Table::new(&self.columns, tasks).write_to(&mut out)?;
                Ok(String::from_utf8(out)?)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum TaskColumn {
    Status,
    Id,
    Due,
    Subject,
    Description,
    Score,
}

impl Column<Task> for TaskColumn {
    fn format(&self, task: &Task) -> String {
        match self {
            TaskColumn::Status => if task.done { "[x]" } else { "[ ]" }.to_string(),
            TaskColumn::Id => task.id.clone(),
            TaskColumn::Due => format_date(task.due),
            TaskColumn::Subject => task.subject_id.clone(),
            TaskColumn::Description => task.description.clone(),
            TaskColumn::Score => task.score.clone().unwrap_or_default(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TaskColumn::Id | TaskColumn::Score => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, task: &Task) -> Option<Color> {
        match self {
            TaskColumn::Status if task.done => Some(Color::Green),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_table_shows_status_and_due() {
        colored::control::set_override(false);
        let tasks = vec![
            Task {
                id: "1".to_string(),
                description: "Essay".to_string(),
                done: false,
                due: NaiveDate::from_ymd_opt(2024, 3, 1),
                score: None,
                subject_id: "s1".to_string(),
            },
            Task {
                id: "2".to_string(),
                description: "Quiz".to_string(),
                done: true,
                due: None,
                score: Some("7".to_string()),
                subject_id: "s1".to_string(),
            },
        ];

        let text = TaskFormatter::new().format(&tasks).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("[ ]"));
        assert!(lines[0].contains("2024-03-01"));
        assert!(lines[1].starts_with("[x]"));
        assert!(lines[1].contains("7"));
    }
}
