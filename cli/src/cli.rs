// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use satchel_core::{APP_NAME, Satchel};
use tracing_subscriber::EnvFilter;

use crate::cmd_calendar::CmdCalendar;
use crate::cmd_exam::{CmdExamDelete, CmdExamEdit, CmdExamList, CmdExamNew};
use crate::cmd_subject::{CmdSubjectDelete, CmdSubjectList, CmdSubjectNew, CmdSubjectRename};
use crate::cmd_task::{
    CmdTaskDelete, CmdTaskDone, CmdTaskEdit, CmdTaskList, CmdTaskNew, CmdTaskUndo,
};
use crate::config::parse_config;
use crate::util::ArgOutputFormat;

/// Run the satchel command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Student self-service agenda for subjects, homework, and exams.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to calendar
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/satchel/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/satchel/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdCalendar::command())
            .subcommand(
                Command::new("task")
                    .alias("t")
                    .about("Manage your tasks")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdTaskList::command())
                    .subcommand(CmdTaskNew::command())
                    .subcommand(CmdTaskEdit::command())
                    .subcommand(CmdTaskDone::command())
                    .subcommand(CmdTaskUndo::command())
                    .subcommand(CmdTaskDelete::command()),
            )
            .subcommand(
                Command::new("exam")
                    .alias("e")
                    .about("Manage your exams")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdExamList::command())
                    .subcommand(CmdExamNew::command())
                    .subcommand(CmdExamEdit::command())
                    .subcommand(CmdExamDelete::command()),
            )
            .subcommand(
                Command::new("subject")
                    .alias("s")
                    .about("Manage your subjects")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdSubjectList::command())
                    .subcommand(CmdSubjectNew::command())
                    .subcommand(CmdSubjectRename::command())
                    .subcommand(CmdSubjectDelete::command()),
            )
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdCalendar::NAME, matches)) => Calendar(CmdCalendar::from(matches)),
            Some(("task", matches)) => match matches.subcommand() {
                Some((CmdTaskList::NAME, matches)) => TaskList(CmdTaskList::from(matches)),
                Some((CmdTaskNew::NAME, matches)) => TaskNew(CmdTaskNew::from(matches)?),
                Some((CmdTaskEdit::NAME, matches)) => TaskEdit(CmdTaskEdit::from(matches)?),
                Some((CmdTaskDone::NAME, matches)) => TaskDone(CmdTaskDone::from(matches)?),
                Some((CmdTaskUndo::NAME, matches)) => TaskUndo(CmdTaskUndo::from(matches)?),
                Some((CmdTaskDelete::NAME, matches)) => TaskDelete(CmdTaskDelete::from(matches)?),
                _ => return Err("Unknown task subcommand".into()),
            },
            Some(("exam", matches)) => match matches.subcommand() {
                Some((CmdExamList::NAME, matches)) => ExamList(CmdExamList::from(matches)),
                Some((CmdExamNew::NAME, matches)) => ExamNew(CmdExamNew::from(matches)?),
                Some((CmdExamEdit::NAME, matches)) => ExamEdit(CmdExamEdit::from(matches)?),
                Some((CmdExamDelete::NAME, matches)) => ExamDelete(CmdExamDelete::from(matches)?),
                _ => return Err("Unknown exam subcommand".into()),
            },
            Some(("subject", matches)) => match matches.subcommand() {
                Some((CmdSubjectList::NAME, matches)) => {
                    SubjectList(CmdSubjectList::from(matches))
                }
                Some((CmdSubjectNew::NAME, matches)) => SubjectNew(CmdSubjectNew::from(matches)?),
                Some((CmdSubjectRename::NAME, matches)) => {
                    SubjectRename(CmdSubjectRename::from(matches)?)
                }
                Some((CmdSubjectDelete::NAME, matches)) => {
                    SubjectDelete(CmdSubjectDelete::from(matches)?)
                }
                _ => return Err("Unknown subject subcommand".into()),
            },
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => Calendar(CmdCalendar {
                output_format: ArgOutputFormat::Table,
            }),
        };

        Ok(Self {
            config: matches.get_one::<PathBuf>("config").cloned(),
            command,
        })
    }

    /// Run the parsed command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(self.config).await?;
        let satchel = Satchel::new(config)?;

        use Commands::*;
        match self.command {
            Calendar(cmd) => cmd.run(&satchel).await,
            TaskList(cmd) => cmd.run(&satchel).await,
            TaskNew(cmd) => cmd.run(&satchel).await,
            TaskEdit(cmd) => cmd.run(&satchel).await,
            TaskDone(cmd) => cmd.run(&satchel).await,
            TaskUndo(cmd) => cmd.run(&satchel).await,
            TaskDelete(cmd) => cmd.run(&satchel).await,
            ExamList(cmd) => cmd.run(&satchel).await,
            ExamNew(cmd) => cmd.run(&satchel).await,
            ExamEdit(cmd) => cmd.run(&satchel).await,
            ExamDelete(cmd) => cmd.run(&satchel).await,
            SubjectList(cmd) => cmd.run(&satchel).await,
            SubjectNew(cmd) => cmd.run(&satchel).await,
            SubjectRename(cmd) => cmd.run(&satchel).await,
            SubjectDelete(cmd) => cmd.run(&satchel).await,
        }
    }
}

/// The command to execute
#[derive(Debug)]
pub enum Commands {
    Calendar(CmdCalendar),
    TaskList(CmdTaskList),
    TaskNew(CmdTaskNew),
    TaskEdit(CmdTaskEdit),
    TaskDone(CmdTaskDone),
    TaskUndo(CmdTaskUndo),
    TaskDelete(CmdTaskDelete),
    ExamList(CmdExamList),
    ExamNew(CmdExamNew),
    ExamEdit(CmdExamEdit),
    ExamDelete(CmdExamDelete),
    SubjectList(CmdSubjectList),
    SubjectNew(CmdSubjectNew),
    SubjectRename(CmdSubjectRename),
    SubjectDelete(CmdSubjectDelete),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_calendar() {
        let cli = Cli::try_parse_from(["satchel"]).unwrap();
        assert!(matches!(cli.command, Commands::Calendar(_)));
    }

    #[test]
    fn test_parse_task_list_with_subject() {
        let cli = Cli::try_parse_from(["satchel", "task", "list", "--subject", "s1", "--all"])
            .unwrap();
        match cli.command {
            Commands::TaskList(cmd) => {
                assert_eq!(cmd.subject.as_deref(), Some("s1"));
                assert!(cmd.all);
            }
            other => panic!("expected task list, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_task_new() {
        let cli = Cli::try_parse_from([
            "satchel", "task", "new", "Essay", "--subject", "s1", "--due", "2024-03-01",
        ])
        .unwrap();
        match cli.command {
            Commands::TaskNew(cmd) => {
                assert_eq!(cmd.description, "Essay");
                assert_eq!(cmd.subject, "s1");
                assert_eq!(cmd.due.as_deref(), Some("2024-03-01"));
            }
            other => panic!("expected task new, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_task_new_requires_subject() {
        assert!(Cli::try_parse_from(["satchel", "task", "new", "Essay"]).is_err());
    }

    #[test]
    fn test_parse_exam_delete_by_alias() {
        let cli = Cli::try_parse_from(["satchel", "e", "rm", "t1"]).unwrap();
        match cli.command {
            Commands::ExamDelete(cmd) => assert_eq!(cmd.id, "t1"),
            other => panic!("expected exam delete, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_subject_rename() {
        let cli = Cli::try_parse_from(["satchel", "subject", "rename", "s1", "Maths"]).unwrap();
        match cli.command {
            Commands::SubjectRename(cmd) => {
                assert_eq!(cmd.id, "s1");
                assert_eq!(cmd.name, "Maths");
            }
            other => panic!("expected subject rename, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_path() {
        let cli = Cli::try_parse_from(["satchel", "-c", "/tmp/config.toml", "calendar"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
    }

    #[test]
    fn test_parse_output_format() {
        let cli = Cli::try_parse_from(["satchel", "calendar", "--output-format", "json"]).unwrap();
        match cli.command {
            Commands::Calendar(cmd) => {
                assert_eq!(cmd.output_format, ArgOutputFormat::Json);
            }
            other => panic!("expected calendar, got {other:?}"),
        }
    }
}
