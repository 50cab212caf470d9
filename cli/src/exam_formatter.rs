// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use colored::Color;
use satchel_core::Exam;

use crate::table::{Column, PaddingDirection, Table};
use crate::util::{ArgOutputFormat, format_date};

/// Renders exams as a table or as JSON.
#[derive(Debug)]
pub struct ExamFormatter {
    columns: Vec<ExamColumn>,
    format: ArgOutputFormat,
}

impl ExamFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                ExamColumn::Id,
                ExamColumn::Date,
                ExamColumn::Subject,
                ExamColumn::Description,
                ExamColumn::Score,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self, exams: &[Exam]) -> Result<String, Box<dyn Error>> {
        match self.format {
            ArgOutputFormat::Json => Ok(serde_json::to_string_pretty(exams)?),
            ArgOutputFormat::Table => {
                let mut out = Vec::new();
                Table::new(&self.columns, exams).write_to(&mut out)?;
                Ok(String::from_utf8(out)?)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ExamColumn {
    Id,
    Date,
    Subject,
    Description,
    Score,
}

impl Column<Exam> for ExamColumn {
    fn format(&self, exam: &Exam) -> String {
        match self {
            ExamColumn::Id => exam.id.clone(),
            ExamColumn::Date => format_date(exam.due),
            ExamColumn::Subject => exam.subject_id.clone(),
            ExamColumn::Description => exam.description.clone(),
            ExamColumn::Score => exam.score.clone().unwrap_or_default(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ExamColumn::Id | ExamColumn::Score => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, exam: &Exam) -> Option<Color> {
        match self {
            ExamColumn::Score if exam.score.is_some() => Some(Color::Green),
            _ => None,
        }
    }
}
