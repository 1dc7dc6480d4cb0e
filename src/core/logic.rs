use crate::core::commands::{DeleteAppointmentCommand, EditAppointmentCommand};
use crate::core::messages;
use crate::core::parser::{self, DoctorBaseParser};
use crate::core::{
    CommandResult, DoctorBase, DoctorBaseError, GuiSettings, Logic, Model, Patient, Result,
    Storage, UpcomingAppointment, ViewMode,
};
use std::io::ErrorKind;
use std::path::Path;

/// Runs user commands against the model and persists the result.
pub struct LogicManager<M: Model, S: Storage> {
    model: M,
    storage: S,
    parser: DoctorBaseParser,
}

impl<M: Model, S: Storage> LogicManager<M, S> {
    pub fn new(model: M, storage: S) -> Self {
        Self {
            model,
            storage,
            parser: DoctorBaseParser::new(),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn save_user_prefs(&self) -> Result<()> {
        self.storage.save_user_prefs(self.model.user_prefs())
    }

    /// `edit-appt` and `delete-appt` address the appointment list, so they are
    /// refused before parsing unless that list is on screen.
    fn check_view_mode(&self, command_text: &str) -> Result<()> {
        let needs_appointment_view = matches!(
            parser::command_word(command_text),
            Some(EditAppointmentCommand::COMMAND_WORD | DeleteAppointmentCommand::COMMAND_WORD)
        );

        if needs_appointment_view && self.model.view_mode() != ViewMode::PatientAppointmentList {
            return Err(DoctorBaseError::command(
                messages::MESSAGE_NOT_VIEWING_APPOINTMENT,
            ));
        }
        Ok(())
    }

    fn save_doctor_base(&self) -> Result<()> {
        self.storage
            .save_doctor_base(self.model.doctor_base())
            .map_err(to_save_error)
    }
}

/// Maps a failed write to the message shown to the user.
fn to_save_error(error: DoctorBaseError) -> DoctorBaseError {
    match error {
        DoctorBaseError::StorageError { path, source } => {
            if source.kind() == ErrorKind::PermissionDenied {
                DoctorBaseError::SavePermissionError {
                    path: path.display().to_string(),
                    source,
                }
            } else {
                DoctorBaseError::SaveError {
                    reason: source.to_string(),
                    source: Some(source),
                }
            }
        }
        DoctorBaseError::IoError(source) => DoctorBaseError::SaveError {
            reason: source.to_string(),
            source: Some(source),
        },
        other => DoctorBaseError::SaveError {
            reason: other.to_string(),
            source: None,
        },
    }
}

impl<M: Model, S: Storage> Logic for LogicManager<M, S> {
    fn execute(&mut self, command_text: &str) -> Result<CommandResult> {
        tracing::info!("----------------[USER COMMAND][{}]", command_text);

        self.check_view_mode(command_text)?;

        let command = self.parser.parse_command(command_text)?;
        let command_result = command.execute(&mut self.model)?;

        if let Err(e) = self.save_doctor_base() {
            tracing::warn!("Failed to save doctor base: {}", e);
            return Err(e);
        }

        tracing::debug!("Result: {}", command_result.feedback_to_user);
        Ok(command_result)
    }

    fn doctor_base(&self) -> &DoctorBase {
        self.model.doctor_base()
    }

    fn filtered_patient_list(&self) -> Vec<&Patient> {
        self.model.filtered_patient_list()
    }

    fn selected_patient(&self) -> Option<&Patient> {
        self.model.selected_patient()
    }

    fn view_mode(&self) -> ViewMode {
        self.model.view_mode()
    }

    fn upcoming_appointments(&self) -> Vec<UpcomingAppointment> {
        self.model.upcoming_appointments()
    }

    fn doctor_base_file_path(&self) -> &Path {
        self.model.doctor_base_file_path()
    }

    fn gui_settings(&self) -> &GuiSettings {
        self.model.gui_settings()
    }

    fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.model.set_gui_settings(gui_settings);
    }
}
