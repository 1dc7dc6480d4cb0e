//! Argument parsers, one per command that takes arguments.

use super::tokenizer::{tokenize, ArgumentMultimap};
use super::util;
use super::{
    PREFIX_ADDRESS, PREFIX_DATE_TIME, PREFIX_DESCRIPTION, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_TAG,
};
use crate::core::commands::{
    AddAppointmentCommand, AddCommand, Command, DeleteAppointmentCommand, DeleteCommand,
    EditAppointmentCommand, EditAppointmentDescriptor, EditCommand, EditPatientDescriptor,
    FindCommand, ViewCommand,
};
use crate::core::messages;
use crate::core::{Appointment, DoctorBaseError, Patient, Result, Tag};
use std::collections::BTreeSet;

pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

fn invalid_format(usage: &str) -> DoctorBaseError {
    DoctorBaseError::parse(messages::invalid_command_format(usage))
}

fn index_from_preamble(map: &ArgumentMultimap, usage: &str) -> Result<util::Index> {
    util::parse_index(map.preamble()).map_err(|_| invalid_format(usage))
}

fn index_only(arguments: &str, usage: &str) -> Result<util::Index> {
    util::parse_index(arguments).map_err(|_| invalid_format(usage))
}

pub fn parse_add(arguments: &str) -> Result<Command> {
    let map = tokenize(
        arguments,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG],
    )?;

    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    if !map.contains_all(&required) || !map.preamble().is_empty() {
        return Err(invalid_format(AddCommand::MESSAGE_USAGE));
    }
    map.verify_no_duplicate_prefixes_for(&required)?;

    let field = |prefix: &str| map.value(prefix).unwrap_or_default();
    let patient = Patient::new(
        util::parse_name(field(PREFIX_NAME))?,
        util::parse_phone(field(PREFIX_PHONE))?,
        util::parse_email(field(PREFIX_EMAIL))?,
        util::parse_address(field(PREFIX_ADDRESS))?,
        util::parse_tags(map.all_values(PREFIX_TAG))?,
    );

    Ok(Command::Add(AddCommand { patient }))
}

/// `t/` on its own clears every tag.
fn parse_tags_for_edit(values: &[String]) -> Result<Option<BTreeSet<Tag>>> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => util::parse_tags(values).map(Some),
    }
}

pub fn parse_edit(arguments: &str) -> Result<Command> {
    let map = tokenize(
        arguments,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG],
    )?;
    let index = index_from_preamble(&map, EditCommand::MESSAGE_USAGE)?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])?;

    let descriptor = EditPatientDescriptor {
        name: map.value(PREFIX_NAME).map(util::parse_name).transpose()?,
        phone: map.value(PREFIX_PHONE).map(util::parse_phone).transpose()?,
        email: map.value(PREFIX_EMAIL).map(util::parse_email).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(util::parse_address).transpose()?,
        tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(DoctorBaseError::parse(MESSAGE_NOT_EDITED));
    }

    Ok(Command::Edit(EditCommand { index, descriptor }))
}

pub fn parse_delete(arguments: &str) -> Result<Command> {
    let index = index_only(arguments, DeleteCommand::MESSAGE_USAGE)?;
    Ok(Command::Delete(DeleteCommand { index }))
}

pub fn parse_find(arguments: &str) -> Result<Command> {
    let keywords: Vec<String> = arguments.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(invalid_format(FindCommand::MESSAGE_USAGE));
    }
    Ok(Command::Find(FindCommand { keywords }))
}

pub fn parse_view(arguments: &str) -> Result<Command> {
    let index = index_only(arguments, ViewCommand::MESSAGE_USAGE)?;
    Ok(Command::View(ViewCommand { index }))
}

pub fn parse_add_appointment(arguments: &str) -> Result<Command> {
    let map = tokenize(arguments, &[PREFIX_DESCRIPTION, PREFIX_DATE_TIME])?;
    let index = index_from_preamble(&map, AddAppointmentCommand::MESSAGE_USAGE)?;
    if !map.contains_all(&[PREFIX_DESCRIPTION, PREFIX_DATE_TIME]) {
        return Err(invalid_format(AddAppointmentCommand::MESSAGE_USAGE));
    }
    map.verify_no_duplicate_prefixes_for(&[PREFIX_DESCRIPTION, PREFIX_DATE_TIME])?;

    let appointment = Appointment::new(
        util::parse_description(map.value(PREFIX_DESCRIPTION).unwrap_or_default())?,
        util::parse_date_time(map.value(PREFIX_DATE_TIME).unwrap_or_default())?,
    );

    Ok(Command::AddAppointment(AddAppointmentCommand { index, appointment }))
}

pub fn parse_edit_appointment(arguments: &str) -> Result<Command> {
    let map = tokenize(arguments, &[PREFIX_DESCRIPTION, PREFIX_DATE_TIME])?;
    let index = index_from_preamble(&map, EditAppointmentCommand::MESSAGE_USAGE)?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_DESCRIPTION, PREFIX_DATE_TIME])?;

    let descriptor = EditAppointmentDescriptor {
        description: map
            .value(PREFIX_DESCRIPTION)
            .map(util::parse_description)
            .transpose()?,
        date_time: map
            .value(PREFIX_DATE_TIME)
            .map(util::parse_date_time)
            .transpose()?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(DoctorBaseError::parse(MESSAGE_NOT_EDITED));
    }

    Ok(Command::EditAppointment(EditAppointmentCommand { index, descriptor }))
}

pub fn parse_delete_appointment(arguments: &str) -> Result<Command> {
    let index = index_only(arguments, DeleteAppointmentCommand::MESSAGE_USAGE)?;
    Ok(Command::DeleteAppointment(DeleteAppointmentCommand { index }))
}
