//! Session bootstrap: wires config, storage, model and logic together and
//! drives them from a line-oriented terminal.

use crate::adapters::JsonStorage;
use crate::core::commands::usage_summary;
use crate::core::logic::LogicManager;
use crate::core::model_manager::ModelManager;
use crate::core::{
    ConfigProvider, DoctorBase, Logic, Result, Storage, UserPrefs, ViewMode,
    DATE_TIME_FORMAT,
};
use crate::domain::prefs::{GuiSettings, DEFAULT_DOCTOR_BASE_FILE};
use crate::domain::sample::sample_doctor_base_now;
use crate::utils::validation::validate_range;
use std::io::{BufRead, Write};

const MIN_WINDOW_SIZE: f64 = 100.0;
const MAX_WINDOW_SIZE: f64 = 10_000.0;

pub struct App {
    logic: LogicManager<ModelManager, JsonStorage>,
}

impl App {
    pub fn init<C: ConfigProvider>(config: &C) -> Result<Self> {
        tracing::info!("=============================[ Initializing DoctorBase ]===========================");

        let prefs_storage = JsonStorage::new(DEFAULT_DOCTOR_BASE_FILE, config.user_prefs_file_path());
        let mut user_prefs = init_prefs(&prefs_storage);
        if let Some(path) = config.doctor_base_file_path() {
            user_prefs.doctor_base_file_path = path.into();
        }

        let storage = prefs_storage.with_doctor_base_file_path(user_prefs.doctor_base_file_path.clone());
        let doctor_base = init_doctor_base(&storage)?;
        let model = ModelManager::new(doctor_base, user_prefs);

        Ok(Self {
            logic: LogicManager::new(model, storage),
        })
    }

    pub fn logic(&self) -> &LogicManager<ModelManager, JsonStorage> {
        &self.logic
    }

    /// Reads commands from `input` until `exit` or end of input, then saves prefs.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<()> {
        tracing::info!("Starting DoctorBase session");
        writeln!(
            output,
            "DoctorBase: {} patient(s) loaded from {}",
            self.logic.doctor_base().patients().len(),
            self.logic.doctor_base_file_path().display()
        )?;
        self.render_upcoming(output)?;

        loop {
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match self.logic.execute(line.trim_end_matches(['\r', '\n'])) {
                Ok(result) => {
                    writeln!(output, "{}", result.feedback_to_user)?;
                    if result.show_help {
                        for usage in usage_summary() {
                            writeln!(output, "\n{}", usage)?;
                        }
                    }
                    if result.exit {
                        break;
                    }
                    self.render_panel(output)?;
                }
                Err(e) => {
                    tracing::debug!("Command failed ({:?}): {}", e.category(), e);
                    writeln!(output, "{}", e.user_friendly_message())?;
                }
            }
        }

        self.stop()
    }

    pub fn stop(&self) -> Result<()> {
        tracing::info!("============================ [ Stopping DoctorBase ] =============================");
        self.logic.save_user_prefs().inspect_err(|e| {
            tracing::error!("Failed to save preferences: {}", e);
        })
    }

    fn render_panel<W: Write>(&self, output: &mut W) -> Result<()> {
        match self.logic.view_mode() {
            ViewMode::PatientList => {
                let patients = self.logic.filtered_patient_list();
                if patients.is_empty() {
                    writeln!(output, "  (no patients)")?;
                }
                for (i, patient) in patients.iter().enumerate() {
                    writeln!(output, "  {}. {}", i + 1, patient)?;
                }
            }
            ViewMode::PatientAppointmentList => {
                if let Some(patient) = self.logic.selected_patient() {
                    writeln!(output, "  Appointments of {}:", patient.name)?;
                    if patient.appointments().is_empty() {
                        writeln!(output, "  (no appointments)")?;
                    }
                    for (i, appointment) in patient.appointments().iter().enumerate() {
                        writeln!(output, "  {}. {}", i + 1, appointment)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn render_upcoming<W: Write>(&self, output: &mut W) -> Result<()> {
        let upcoming = self.logic.upcoming_appointments();
        if upcoming.is_empty() {
            return Ok(());
        }
        writeln!(output, "Upcoming appointments:")?;
        for entry in upcoming {
            writeln!(
                output,
                "  {}  {}: {}",
                entry.appointment.date_time.format(DATE_TIME_FORMAT),
                entry.patient,
                entry.appointment.description
            )?;
        }
        Ok(())
    }
}

fn init_prefs(storage: &JsonStorage) -> UserPrefs {
    let path = storage.user_prefs_file_path().display().to_string();
    let mut prefs = match storage.read_user_prefs() {
        Ok(Some(prefs)) => prefs,
        Ok(None) => {
            tracing::info!("Creating new preference file {}", path);
            UserPrefs::default()
        }
        Err(e) => {
            tracing::warn!("Preference file at {} could not be loaded, using defaults: {}", path, e);
            UserPrefs::default()
        }
    };

    let gui = &prefs.gui_settings;
    let size_check = validate_range("guiSettings.windowWidth", gui.window_width, MIN_WINDOW_SIZE, MAX_WINDOW_SIZE)
        .and_then(|_| {
            validate_range("guiSettings.windowHeight", gui.window_height, MIN_WINDOW_SIZE, MAX_WINDOW_SIZE)
        });
    if let Err(e) = size_check {
        tracing::warn!("Resetting window settings: {}", e);
        prefs.gui_settings = GuiSettings::default();
    }

    if let Err(e) = storage.save_user_prefs(&prefs) {
        tracing::warn!("Failed to save preference file {}: {}", path, e);
    }
    prefs
}

fn init_doctor_base(storage: &JsonStorage) -> Result<DoctorBase> {
    match storage.read_doctor_base() {
        Ok(Some(doctor_base)) => Ok(doctor_base),
        Ok(None) => {
            tracing::info!(
                "Data file {} not found, starting with sample data",
                storage.doctor_base_file_path().display()
            );
            sample_doctor_base_now()
        }
        Err(e) => {
            tracing::warn!(
                "Data file {} could not be loaded, starting with an empty doctor base: {}",
                storage.doctor_base_file_path().display(),
                e
            );
            Ok(DoctorBase::new())
        }
    }
}
