// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use clap::{Arg, ArgMatches, arg, value_parser};

/// The output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// Parses a date argument. An empty string means "no date" so that edit
/// commands can clear a due date with `--due ""`.
pub fn parse_date(s: &str) -> Result<Option<NaiveDate>, &'static str> {
    if s.is_empty() {
        Ok(None)
    } else {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| "Invalid date format. Expected format: YYYY-MM-DD")
    }
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_empty() {
        assert_eq!(parse_date("").unwrap(), None);
    }

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(
            parse_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("03/01/2024").is_err());
        assert!(parse_date("tomorrow").is_err());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 3, 1)), "2024-03-01");
        assert_eq!(format_date(None), "");
    }
}
