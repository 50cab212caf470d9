// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A single column of a [`Table`].
pub trait Column<T> {
    fn format(&self, data: &T) -> String;
    fn padding_direction(&self) -> PaddingDirection;
    fn get_color(&self, data: &T) -> Option<Color>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Plain-text table with unicode-aware column padding.
pub struct Table<'a, T, C: Column<T>> {
    pub columns: &'a [C],
    pub separator: String,
    pub data: &'a [T],
}

impl<'a, T, C: Column<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            separator: "  ".to_string(),
            data,
        }
    }

    pub fn write_to(&self, w: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        let rows: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|item| self.columns.iter().map(|col| col.format(item)).collect())
            .collect();

        let widths = column_max_widths(&rows, self.columns.len());

        for (cells, item) in rows.into_iter().zip(self.data) {
            for (j, (col, cell)) in self.columns.iter().zip(cells.into_iter()).enumerate() {
                let last = j == self.columns.len() - 1;
                let cell = if last && col.padding_direction() == PaddingDirection::Left {
                    // last left-aligned column needs no padding
                    cell
                } else {
                    pad(cell, widths[j], col.padding_direction())
                };

                let cell = match col.get_color(item) {
                    Some(color) => cell.color(color).to_string(),
                    None => cell,
                };
                write!(w, "{cell}")?;

                if last {
                    writeln!(w)?;
                } else {
                    write!(w, "{}", self.separator)?;
                }
            }
        }

        Ok(())
    }
}

fn pad(cell: String, width: usize, direction: PaddingDirection) -> String {
    let fill = width.saturating_sub(cell.width());
    match direction {
        PaddingDirection::Left => format!("{}{}", cell, " ".repeat(fill)),
        PaddingDirection::Right => format!("{}{}", " ".repeat(fill), cell),
    }
}

fn column_max_widths(rows: &[Vec<String>], columns: usize) -> Vec<usize> {
    let mut max_widths = vec![0; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let width = cell.width();
            if width > max_widths[i] {
                max_widths[i] = width;
            }
        }
    }
    max_widths
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain(PaddingDirection);

    impl Column<(&'static str, &'static str)> for Plain {
        fn format(&self, data: &(&'static str, &'static str)) -> String {
            match self.0 {
                PaddingDirection::Left => data.0.to_string(),
                PaddingDirection::Right => data.1.to_string(),
            }
        }

        fn padding_direction(&self) -> PaddingDirection {
            self.0
        }

        fn get_color(&self, _data: &(&'static str, &'static str)) -> Option<Color> {
            None
        }
    }

    #[test]
    fn test_columns_align() {
        let columns = [Plain(PaddingDirection::Right), Plain(PaddingDirection::Left)];
        let data = [("a", "1"), ("bb", "22")];
        let table = Table::new(&columns, &data);

        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, " 1  a\n22  bb\n");
    }

    #[test]
    fn test_empty_data_writes_nothing() {
        let columns = [Plain(PaddingDirection::Left)];
        let data: [(&str, &str); 0] = [];
        let table = Table::new(&columns, &data);

        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        assert!(out.is_empty());
    }
}
