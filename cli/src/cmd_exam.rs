// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg};
use colored::Colorize;
use satchel_core::{Exam, ExamConditions, ExamDraft, ExamPatch, Satchel};

use crate::exam_formatter::ExamFormatter;
use crate::util::{ArgOutputFormat, parse_date};

/// List exams, optionally narrowed to one subject.
#[derive(Debug, Clone)]
pub struct CmdExamList {
    pub subject: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdExamList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List your exams")
            .arg(arg_subject())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            subject: get_subject(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing exams...");
        let conds = ExamConditions {
            subject: self.subject,
        };
        let exams = satchel.list_exams(&conds).await?;

        if exams.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("No exams");
            return Ok(());
        }

        let formatter = ExamFormatter::new().with_output_format(self.output_format);
        print!("{}", formatter.format(&exams)?);
        Ok(())
    }
}

/// Add a new exam.
#[derive(Debug, Clone)]
pub struct CmdExamNew {
    pub description: String,
    pub subject: String,
    pub date: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdExamNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new exam")
            .arg(arg!(<DESCRIPTION> "Description of the exam"))
            .arg(arg_subject().required(true))
            .arg(arg_date())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let description = matches
            .get_one::<String>("DESCRIPTION")
            .ok_or("Description is required for new exam")?
            .clone();
        let subject = get_subject(matches).ok_or("Subject is required for new exam")?;
        Ok(Self {
            description,
            subject,
            date: get_date(matches),
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new exam...");
        let draft = ExamDraft {
            description: self.description,
            subject_id: self.subject,
            due: match &self.date {
                Some(date) => parse_date(date)?,
                None => None,
            },
            score: None,
        };

        let exam = satchel.new_exam(draft).await?;
        print_exam(&exam, self.output_format)
    }
}

/// Edit an existing exam.
#[derive(Debug, Clone)]
pub struct CmdExamEdit {
    pub id: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub date: Option<String>,
    pub score: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdExamEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an existing exam")
            .arg(arg_id())
            .arg(arg!(-d --description <TEXT> "New description"))
            .arg(arg_subject())
            .arg(arg_date())
            .arg(arg!(--score <SCORE> "Score (empty to clear)"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_id(matches)?,
            description: matches.get_one::<String>("description").cloned(),
            subject: get_subject(matches),
            date: get_date(matches),
            score: matches.get_one::<String>("score").cloned(),
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing exam...");
        let patch = ExamPatch {
            description: self.description,
            // an empty --date clears the schedule
            due: match &self.date {
                Some(date) => Some(parse_date(date)?),
                None => None,
            },
            score: self
                .score
                .map(|score| if score.is_empty() { None } else { Some(score) }),
            subject_id: self.subject,
        };

        let exam = satchel.update_exam(&self.id, patch).await?;
        print_exam(&exam, self.output_format)
    }
}

/// Delete an exam.
#[derive(Debug, Clone)]
pub struct CmdExamDelete {
    pub id: String,
}

impl CmdExamDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an exam")
            .arg(arg_id())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_id(matches)?,
        })
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting exam...");
        satchel.delete_exam(&self.id).await?;
        println!("{} exam {}", "Deleted".green(), self.id);
        Ok(())
    }
}

fn print_exam(exam: &Exam, format: ArgOutputFormat) -> Result<(), Box<dyn Error>> {
    let formatter = ExamFormatter::new().with_output_format(format);
    let text = formatter.format(std::slice::from_ref(exam))?;
    match format {
        ArgOutputFormat::Json => println!("{text}"),
        ArgOutputFormat::Table => print!("{text}"),
    }
    Ok(())
}

fn arg_id() -> Arg {
    arg!(<ID> "Identifier of the exam")
}

fn get_id(matches: &ArgMatches) -> Result<String, Box<dyn Error>> {
    matches
        .get_one::<String>("ID")
        .cloned()
        .ok_or_else(|| "Identifier is required".into())
}

fn arg_subject() -> Arg {
    arg!(-s --subject <SUBJECT> "Subject identifier")
}

fn get_subject(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("subject").cloned()
}

fn arg_date() -> Arg {
    arg!(--date <DATE> "Exam date (YYYY-MM-DD, empty to clear)")
}

fn get_date(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("date").cloned()
}
