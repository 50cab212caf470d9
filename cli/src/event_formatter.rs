// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use colored::Color;
use satchel_core::{CalendarEvent, EventSource};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::{ArgOutputFormat, format_date};

/// Renders aggregated calendar events as a table or as JSON.
#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: ArgOutputFormat,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                EventColumn::Kind,
                EventColumn::Date,
                EventColumn::Title,
                EventColumn::Score,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self, events: &[CalendarEvent]) -> Result<String, Box<dyn Error>> {
        match self.format {
            ArgOutputFormat::Json => Ok(serde_json::to_string_pretty(events)?),
            ArgOutputFormat::Table => {
                let mut out = Vec::new();
                Table::new(&self.columns, events).write_to(&mut out)?;
                Ok(String::from_utf8(out)?)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum EventColumn {
    Kind,
    Date,
    Title,
    Score,
}

impl Column<CalendarEvent> for EventColumn {
    fn format(&self, event: &CalendarEvent) -> String {
        match self {
            EventColumn::Kind => match event.source {
                EventSource::Task(_) => "task".to_string(),
                EventSource::Exam(_) => "exam".to_string(),
            },
            EventColumn::Date => format_date(Some(event.start)),
            EventColumn::Title => event.title.clone(),
            EventColumn::Score => event.source.score().unwrap_or_default().to_string(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Score => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, event: &CalendarEvent) -> Option<Color> {
        match self {
            EventColumn::Kind => match event.source {
                EventSource::Task(_) => Some(Color::Blue),
                EventSource::Exam(_) => Some(Color::Magenta),
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use satchel_core::{Exam, Task, aggregate};

    use super::*;

    fn events() -> Vec<CalendarEvent> {
        let tasks = vec![Task {
            id: "1".to_string(),
            description: "Essay".to_string(),
            done: false,
            due: NaiveDate::from_ymd_opt(2024, 3, 1),
            score: None,
            subject_id: "s1".to_string(),
        }];
        let exams = vec![Exam {
            id: "t1".to_string(),
            description: "Midterm".to_string(),
            subject_id: "s1".to_string(),
            due: NaiveDate::from_ymd_opt(2024, 4, 1),
            score: Some("9".to_string()),
        }];
        aggregate(&tasks, &exams)
    }

    #[test]
    fn test_table_lists_exams_then_tasks() {
        colored::control::set_override(false);
        let text = EventFormatter::new().format(&events()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("exam"));
        assert!(lines[0].contains("Midterm"));
        assert!(lines[1].contains("task"));
        assert!(lines[1].contains("Essay"));
    }

    #[test]
    fn test_json_output_is_parseable() {
        let text = EventFormatter::new()
            .with_output_format(ArgOutputFormat::Json)
            .format(&events())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["source"]["kind"], "exam");
    }
}
