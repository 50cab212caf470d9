// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg};
use colored::Colorize;
use satchel_core::{Satchel, Task, TaskConditions, TaskDraft, TaskPatch};

use crate::task_formatter::TaskFormatter;
use crate::util::{ArgOutputFormat, parse_date};

/// List tasks, optionally narrowed to one subject.
#[derive(Debug, Clone)]
pub struct CmdTaskList {
    pub subject: Option<String>,
    pub all: bool,
    pub output_format: ArgOutputFormat,
}

impl CmdTaskList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List your tasks")
            .arg(arg_subject())
            .arg(arg!(-a --all "Also show tasks already done"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            subject: get_subject(matches),
            all: matches.get_flag("all"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing tasks...");
        let conds = TaskConditions {
            subject: self.subject,
            include_done: self.all,
        };
        let tasks = satchel.list_tasks(&conds).await?;

        if tasks.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("No tasks");
            return Ok(());
        }

        let formatter = TaskFormatter::new().with_output_format(self.output_format);
        print!("{}", formatter.format(&tasks)?);
        Ok(())
    }
}

/// Add a new task.
#[derive(Debug, Clone)]
pub struct CmdTaskNew {
    pub description: String,
    pub subject: String,
    pub due: Option<String>,
    pub score: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdTaskNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new task")
            .arg(arg!(<DESCRIPTION> "Description of the task"))
            .arg(arg_subject().required(true))
            .arg(arg_due())
            .arg(arg_score())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let description = matches
            .get_one::<String>("DESCRIPTION")
            .ok_or("Description is required for new task")?
            .clone();
        let subject = get_subject(matches).ok_or("Subject is required for new task")?;
        Ok(Self {
            description,
            subject,
            due: get_due(matches),
            score: get_score(matches),
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new task...");
        let draft = TaskDraft {
            description: self.description,
            due: match &self.due {
                Some(due) => parse_date(due)?,
                None => None,
            },
            score: self.score,
            subject_id: self.subject,
        };

        let task = satchel.new_task(draft).await?;
        print_task(&task, self.output_format)
    }
}

/// Edit an existing task.
#[derive(Debug, Clone)]
pub struct CmdTaskEdit {
    pub id: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub due: Option<String>,
    pub score: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdTaskEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an existing task")
            .arg(arg_id("task"))
            .arg(arg!(-d --description <TEXT> "New description"))
            .arg(arg_subject())
            .arg(arg_due())
            .arg(arg_score())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_id(matches)?,
            description: matches.get_one::<String>("description").cloned(),
            subject: get_subject(matches),
            due: get_due(matches),
            score: get_score(matches),
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing task...");
        let patch = TaskPatch {
            description: self.description,
            done: None,
            // an empty --due clears the date
            due: match &self.due {
                Some(due) => Some(parse_date(due)?),
                None => None,
            },
            score: self
                .score
                .map(|score| if score.is_empty() { None } else { Some(score) }),
            subject_id: self.subject,
        };

        let task = satchel.update_task(&self.id, patch).await?;
        print_task(&task, self.output_format)
    }
}

/// Mark a task as done.
#[derive(Debug, Clone)]
pub struct CmdTaskDone {
    pub id: String,
    pub output_format: ArgOutputFormat,
}

impl CmdTaskDone {
    pub const NAME: &str = "done";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Mark a task as done")
            .arg(arg_id("task"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_id(matches)?,
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "marking task as done...");
        let task = satchel.set_task_done(&self.id, true).await?;
        print_task(&task, self.output_format)
    }
}

/// Mark a task as not done.
#[derive(Debug, Clone)]
pub struct CmdTaskUndo {
    pub id: String,
    pub output_format: ArgOutputFormat,
}

impl CmdTaskUndo {
    pub const NAME: &str = "undo";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Mark a task as not done")
            .arg(arg_id("task"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_id(matches)?,
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "marking task as not done...");
        let task = satchel.set_task_done(&self.id, false).await?;
        print_task(&task, self.output_format)
    }
}

/// Delete a task.
#[derive(Debug, Clone)]
pub struct CmdTaskDelete {
    pub id: String,
}

impl CmdTaskDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete a task")
            .arg(arg_id("task"))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_id(matches)?,
        })
    }

    pub async fn run(self, satchel: &Satchel) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting task...");
        satchel.delete_task(&self.id).await?;
        println!("{} task {}", "Deleted".green(), self.id);
        Ok(())
    }
}

fn print_task(task: &Task, format: ArgOutputFormat) -> Result<(), Box<dyn Error>> {
    let formatter = TaskFormatter::new().with_output_format(format);
    let text = formatter.format(std::slice::from_ref(task))?;
    match format {
        ArgOutputFormat::Json => println!("{text}"),
        ArgOutputFormat::Table => print!("{text}"),
    }
    Ok(())
}

fn arg_id(kind: &str) -> Arg {
    arg!(<ID> "Identifier").help(format!("Identifier of the {kind}"))
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

fn arg_due() -> Arg {
    arg!(--due <DATE> "Due date (YYYY-MM-DD, empty to clear)")
}

fn get_due(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("due").cloned()
}

fn arg_score() -> Arg {
    arg!(--score <SCORE> "Score (empty to clear)")
}

fn get_score(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("score").cloned()
}
