//! Executable commands. Each command struct carries its already-parsed
//! arguments and runs against a [`Model`].

pub mod appointment;
pub mod general;
pub mod patient;

pub use appointment::{
    AddAppointmentCommand, DeleteAppointmentCommand, EditAppointmentCommand,
    EditAppointmentDescriptor, ViewCommand,
};
pub use general::{ClearCommand, ExitCommand, HelpCommand, ListCommand};
pub use patient::{AddCommand, DeleteCommand, EditCommand, EditPatientDescriptor, FindCommand};

use crate::core::messages;
use crate::core::parser::util::Index;
use crate::core::{CommandResult, DoctorBaseError, Model, Patient, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    List(ListCommand),
    Find(FindCommand),
    Clear(ClearCommand),
    View(ViewCommand),
    AddAppointment(AddAppointmentCommand),
    EditAppointment(EditAppointmentCommand),
    DeleteAppointment(DeleteAppointmentCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        match self {
            Command::Add(c) => c.execute(model),
            Command::Edit(c) => c.execute(model),
            Command::Delete(c) => c.execute(model),
            Command::List(c) => c.execute(model),
            Command::Find(c) => c.execute(model),
            Command::Clear(c) => c.execute(model),
            Command::View(c) => c.execute(model),
            Command::AddAppointment(c) => c.execute(model),
            Command::EditAppointment(c) => c.execute(model),
            Command::DeleteAppointment(c) => c.execute(model),
            Command::Help(c) => c.execute(model),
            Command::Exit(c) => c.execute(model),
        }
    }
}

/// Usage text of every command, in the order `help` lists them.
pub fn usage_summary() -> [&'static str; 12] {
    [
        AddCommand::MESSAGE_USAGE,
        EditCommand::MESSAGE_USAGE,
        DeleteCommand::MESSAGE_USAGE,
        ListCommand::MESSAGE_USAGE,
        FindCommand::MESSAGE_USAGE,
        ClearCommand::MESSAGE_USAGE,
        ViewCommand::MESSAGE_USAGE,
        AddAppointmentCommand::MESSAGE_USAGE,
        EditAppointmentCommand::MESSAGE_USAGE,
        DeleteAppointmentCommand::MESSAGE_USAGE,
        HelpCommand::MESSAGE_USAGE,
        ExitCommand::MESSAGE_USAGE,
    ]
}

/// Clone of the patient at `index` in the list currently shown.
pub(crate) fn patient_at(model: &dyn Model, index: Index) -> Result<Patient> {
    model
        .filtered_patient_list()
        .get(index.zero_based())
        .map(|p| (*p).clone())
        .ok_or_else(|| DoctorBaseError::command(messages::MESSAGE_INVALID_PATIENT_DISPLAYED_INDEX))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::model_manager::ModelManager;
    use crate::core::{
        Address, Appointment, Description, DoctorBase, Email, Model, Name, Patient, Phone,
        UserPrefs,
    };
    use chrono::{NaiveDate, NaiveDateTime};
    use std::collections::BTreeSet;

    pub fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    pub fn appointment(description: &str, day: u32, hour: u32) -> Appointment {
        Appointment::new(Description::new(description).unwrap(), at(day, hour))
    }

    pub fn patient(name: &str) -> Patient {
        Patient::new(
            Name::new(name).unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new("patient@example.com").unwrap(),
            Address::new("123 Jurong West Ave 6").unwrap(),
            BTreeSet::new(),
        )
    }

    /// Alice (two appointments), Benson (none), Carl Kurz (one).
    pub fn typical_model() -> ModelManager {
        let patients = vec![
            patient("Alice Pauline").with_appointments(vec![
                appointment("Checkup", 10, 9),
                appointment("Blood test", 12, 14),
            ]),
            patient("Benson Meier"),
            patient("Carl Kurz").with_appointments(vec![appointment("X-ray", 11, 10)]),
        ];
        ModelManager::new(
            DoctorBase::from_patients(patients).unwrap(),
            UserPrefs::default(),
        )
    }

    pub fn names(model: &dyn Model) -> Vec<String> {
        model
            .filtered_patient_list()
            .iter()
            .map(|p| p.name.to_string())
            .collect()
    }
}
