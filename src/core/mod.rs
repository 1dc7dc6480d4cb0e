pub mod commands;
pub mod logic;
pub mod messages;
pub mod model_manager;
pub mod parser;

pub use crate::domain::doctor_base::DoctorBase;
pub use crate::domain::model::{
    Address, Appointment, CommandResult, Description, Email, Name, Patient, PatientFilter, Phone,
    Tag, UpcomingAppointment, ViewMode, DATE_TIME_FORMAT,
};
pub use crate::domain::ports::{ConfigProvider, Logic, Model, Storage};
pub use crate::domain::prefs::{GuiSettings, UserPrefs};
pub use crate::utils::error::{DoctorBaseError, Result};
