// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use satchel_core::Satchel;

use crate::event_formatter::EventFormatter;
use crate::util::ArgOutputFormat;

/// Show the calendar: upcoming exams and pending tasks merged into one list.
#[derive(Debug, Clone, Copy)]
pub struct CmdCalendar {
    pub output_format: ArgOutputFormat,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the calendar, which merges scheduled exams and pending tasks")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating calendar...");
        let events = satchel.calendar_events().await?;

        if self.output_format == ArgOutputFormat::Table {
            if events.is_empty() {
                println!("No upcoming events");
                return Ok(());
            }
            println!("🗓️ {}", "Calendar".bold());
        }

        let formatter = EventFormatter::new().with_output_format(self.output_format);
        let text = formatter.format(&events)?;
        match self.output_format {
            ArgOutputFormat::Json => println!("{text}"),
            ArgOutputFormat::Table => print!("{text}"),
        }
        Ok(())
    }
}
