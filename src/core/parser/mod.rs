pub mod commands;
pub mod tokenizer;
pub mod util;

use crate::core::commands::{
    AddAppointmentCommand, AddCommand, Command, DeleteAppointmentCommand, DeleteCommand,
    EditAppointmentCommand, EditCommand, FindCommand, HelpCommand, ViewCommand,
};
use crate::core::commands::{ClearCommand, ExitCommand, ListCommand};
use crate::core::messages;
use crate::core::{DoctorBaseError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const PREFIX_NAME: &str = "n/";
pub const PREFIX_PHONE: &str = "p/";
pub const PREFIX_EMAIL: &str = "e/";
pub const PREFIX_ADDRESS: &str = "a/";
pub const PREFIX_TAG: &str = "t/";
pub const PREFIX_DESCRIPTION: &str = "d/";
pub const PREFIX_DATE_TIME: &str = "dt/";

static BASIC_COMMAND_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<command_word>\S+)(?P<arguments>.*)$").expect("command format pattern")
});

/// Returns the first whitespace-delimited word of `user_input`, if any.
pub fn command_word(user_input: &str) -> Option<&str> {
    user_input.split_whitespace().next()
}

/// Turns raw command text into a [`Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DoctorBaseParser;

impl DoctorBaseParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_command(&self, user_input: &str) -> Result<Command> {
        let trimmed = user_input.trim();
        let Some(caps) = BASIC_COMMAND_FORMAT.captures(trimmed) else {
            return Err(DoctorBaseError::parse(messages::invalid_command_format(
                HelpCommand::MESSAGE_USAGE,
            )));
        };

        let word = &caps["command_word"];
        let arguments = &caps["arguments"];

        let result = match word {
            AddCommand::COMMAND_WORD => commands::parse_add(arguments),
            EditCommand::COMMAND_WORD => commands::parse_edit(arguments),
            DeleteCommand::COMMAND_WORD => commands::parse_delete(arguments),
            ClearCommand::COMMAND_WORD => Ok(Command::Clear(ClearCommand)),
            FindCommand::COMMAND_WORD => commands::parse_find(arguments),
            ListCommand::COMMAND_WORD => Ok(Command::List(ListCommand)),
            ViewCommand::COMMAND_WORD => commands::parse_view(arguments),
            AddAppointmentCommand::COMMAND_WORD => commands::parse_add_appointment(arguments),
            EditAppointmentCommand::COMMAND_WORD => commands::parse_edit_appointment(arguments),
            DeleteAppointmentCommand::COMMAND_WORD => {
                commands::parse_delete_appointment(arguments)
            }
            HelpCommand::COMMAND_WORD => Ok(Command::Help(HelpCommand)),
            ExitCommand::COMMAND_WORD => Ok(Command::Exit(ExitCommand)),
            _ => {
                tracing::debug!("Unknown command word: {}", word);
                Err(DoctorBaseError::parse(messages::MESSAGE_UNKNOWN_COMMAND))
            }
        };

        if let Err(e) = &result {
            tracing::debug!("Input '{}' failed to parse: {}", trimmed, e);
        }
        result
    }
}
