use crate::core::{CommandResult, DoctorBase, Model, PatientFilter, Result, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const MESSAGE_USAGE: &'static str = "list: Lists all patients.";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all patients";

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        model.update_filtered_patient_list(PatientFilter::All);
        model.set_selected_patient(None);
        model.set_view_mode(ViewMode::PatientList);
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const MESSAGE_USAGE: &'static str = "clear: Removes every patient and appointment.";
    pub const MESSAGE_SUCCESS: &'static str = "Doctor base has been cleared!";

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        model.set_doctor_base(DoctorBase::new());
        model.update_filtered_patient_list(PatientFilter::All);
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str = "help: Shows program usage instructions.\n\
        Example: help";
    pub const SHOWING_HELP_MESSAGE: &'static str = "Opened help.";

    pub fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult> {
        Ok(CommandResult::help(Self::SHOWING_HELP_MESSAGE))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_USAGE: &'static str = "exit: Saves and quits.";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str = "Exiting DoctorBase as requested ...";

    pub fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult> {
        Ok(CommandResult::exit(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT))
    }
}
