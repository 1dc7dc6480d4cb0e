use crate::domain::doctor_base::DoctorBase;
use crate::domain::model::{CommandResult, Patient, PatientFilter, UpcomingAppointment, ViewMode};
use crate::domain::prefs::{GuiSettings, UserPrefs};
use crate::utils::error::Result;
use std::path::Path;

/// In-memory state the commands operate on.
pub trait Model {
    fn user_prefs(&self) -> &UserPrefs;
    fn gui_settings(&self) -> &GuiSettings;
    fn set_gui_settings(&mut self, gui_settings: GuiSettings);
    fn doctor_base_file_path(&self) -> &Path;

    fn doctor_base(&self) -> &DoctorBase;
    fn set_doctor_base(&mut self, doctor_base: DoctorBase);
    fn has_patient(&self, patient: &Patient) -> bool;
    fn add_patient(&mut self, patient: Patient) -> Result<()>;
    fn set_patient(&mut self, target: &Patient, edited: Patient) -> Result<()>;
    fn delete_patient(&mut self, target: &Patient) -> Result<()>;

    /// Patients passing the current filter, in doctor-base order.
    fn filtered_patient_list(&self) -> Vec<&Patient>;
    fn update_filtered_patient_list(&mut self, filter: PatientFilter);

    fn view_mode(&self) -> ViewMode;
    fn set_view_mode(&mut self, view_mode: ViewMode);
    fn selected_patient(&self) -> Option<&Patient>;
    fn set_selected_patient(&mut self, patient: Option<&Patient>);

    fn upcoming_appointments(&self) -> Vec<UpcomingAppointment>;
}

/// File-backed persistence for the doctor base and user preferences.
///
/// `read_*` yields `Ok(None)` when there is nothing on disk yet. Failed
/// writes are reported as `StorageError` so callers can inspect the
/// underlying `io::ErrorKind`.
pub trait Storage {
    fn user_prefs_file_path(&self) -> &Path;
    fn read_user_prefs(&self) -> Result<Option<UserPrefs>>;
    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> Result<()>;

    fn doctor_base_file_path(&self) -> &Path;
    fn read_doctor_base(&self) -> Result<Option<DoctorBase>>;
    fn save_doctor_base(&self, doctor_base: &DoctorBase) -> Result<()>;
}

/// What a user interface needs: run a command, then read back the state to show.
pub trait Logic {
    fn execute(&mut self, command_text: &str) -> Result<CommandResult>;
    fn doctor_base(&self) -> &DoctorBase;
    fn filtered_patient_list(&self) -> Vec<&Patient>;
    fn selected_patient(&self) -> Option<&Patient>;
    fn view_mode(&self) -> ViewMode;
    fn upcoming_appointments(&self) -> Vec<UpcomingAppointment>;
    fn doctor_base_file_path(&self) -> &Path;
    fn gui_settings(&self) -> &GuiSettings;
    fn set_gui_settings(&mut self, gui_settings: GuiSettings);
}

pub trait ConfigProvider {
    fn user_prefs_file_path(&self) -> &str;
    /// Overrides the doctor base location stored in the user prefs.
    fn doctor_base_file_path(&self) -> Option<&str>;
    fn log_level(&self) -> &str;
}
