// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg};
use colored::{Color, Colorize};
use satchel_core::{Satchel, Subject, SubjectDraft, SubjectPatch};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::ArgOutputFormat;

/// List subjects.
#[derive(Debug, Clone, Copy)]
pub struct CmdSubjectList {
    pub output_format: ArgOutputFormat,
}

impl CmdSubjectList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List your subjects")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing subjects...");
        let subjects = satchel.list_subjects().await?;

        if subjects.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("No subjects");
            return Ok(());
        }

        print_subjects(&subjects, self.output_format)
    }
}

/// Add a new subject.
#[derive(Debug, Clone)]
pub struct CmdSubjectNew {
    pub name: String,
    pub output_format: ArgOutputFormat,
}

impl CmdSubjectNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new subject")
            .arg(arg!(<NAME> "Name of the subject"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let name = matches
            .get_one::<String>("NAME")
            .ok_or("Name is required for new subject")?
            .clone();
        Ok(Self {
            name,
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new subject...");
        let subject = satchel.new_subject(SubjectDraft { name: self.name }).await?;
        print_subjects(std::slice::from_ref(&subject), self.output_format)
    }
}

/// Rename a subject.
#[derive(Debug, Clone)]
pub struct CmdSubjectRename {
    pub id: String,
    pub name: String,
    pub output_format: ArgOutputFormat,
}

impl CmdSubjectRename {
    pub const NAME: &str = "rename";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Rename a subject")
            .arg(arg_id())
            .arg(arg!(<NAME> "New name of the subject"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let name = matches
            .get_one::<String>("NAME")
            .ok_or("Name is required to rename a subject")?
            .clone();
        Ok(Self {
            id: get_id(matches)?,
            name,
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "renaming subject...");
        let patch = SubjectPatch {
            name: Some(self.name),
        };
        let subject = satchel.update_subject(&self.id, patch).await?;
        print_subjects(std::slice::from_ref(&subject), self.output_format)
    }
}

/// Delete a subject.
#[derive(Debug, Clone)]
pub struct CmdSubjectDelete {
    pub id: String,
}

impl CmdSubjectDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete a subject")
            .arg(arg_id())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_id(matches)?,
        })
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting subject...");
        satchel.delete_subject(&self.id).await?;
        println!("{} subject {}", "Deleted".green(), self.id);
        Ok(())
    }
}

fn print_subjects(subjects: &[Subject], format: ArgOutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        ArgOutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(subjects)?);
        }
        ArgOutputFormat::Table => {
            let columns = [SubjectColumn::Id, SubjectColumn::Name];
            let mut out = Vec::new();
            Table::new(&columns, subjects).write_to(&mut out)?;
            print!("{}", String::from_utf8(out)?);
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum SubjectColumn {
    Id,
    Name,
}

impl Column<Subject> for SubjectColumn {
    fn format(&self, subject: &Subject) -> String {
        match self {
            SubjectColumn::Id => subject.id.clone(),
            SubjectColumn::Name => subject.name.clone(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            SubjectColumn::Id => PaddingDirection::Right,
            SubjectColumn::Name => PaddingDirection::Left,
        }
    }

    fn get_color(&self, _subject: &Subject) -> Option<Color> {
        None
    }
}

fn arg_id() -> Arg {
    arg!(<ID> "Identifier of the subject")
}

fn get_id(matches: &ArgMatches) -> Result<String, Box<dyn Error>> {
    matches
        .get_one::<String>("ID")
        .cloned()
        .ok_or_else(|| "Identifier is required".into())
}
