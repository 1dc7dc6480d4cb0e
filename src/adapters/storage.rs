use crate::core::{DoctorBase, DoctorBaseError, Patient, Result, Storage, UserPrefs};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const DOCTOR_BASE_FILE_VERSION: u32 = 1;

/// On-disk shape of the doctor base.
#[derive(Debug, Serialize, Deserialize)]
struct DoctorBaseFile {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    patients: Vec<Patient>,
}

fn default_version() -> u32 {
    DOCTOR_BASE_FILE_VERSION
}

/// Keeps the doctor base and the user prefs as pretty-printed JSON files.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    doctor_base_file_path: PathBuf,
    user_prefs_file_path: PathBuf,
}

impl JsonStorage {
    pub fn new(doctor_base_file_path: impl Into<PathBuf>, user_prefs_file_path: impl Into<PathBuf>) -> Self {
        Self {
            doctor_base_file_path: doctor_base_file_path.into(),
            user_prefs_file_path: user_prefs_file_path.into(),
        }
    }

    /// Same storage, pointed at another doctor base file.
    pub fn with_doctor_base_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.doctor_base_file_path = path.into();
        self
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        tracing::info!("{} does not exist yet", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| {
        DoctorBaseError::data_loading(format!("Failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content).map(Some).map_err(|e| {
        DoctorBaseError::data_loading(format!("Failed to parse {}: {}", path.display(), e))
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let storage_error = |source: io::Error| DoctorBaseError::StorageError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(storage_error)?;
    }

    let content = serde_json::to_string_pretty(value)
        .map_err(|e| storage_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    fs::write(path, content).map_err(storage_error)?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

impl Storage for JsonStorage {
    fn user_prefs_file_path(&self) -> &Path {
        &self.user_prefs_file_path
    }

    fn read_user_prefs(&self) -> Result<Option<UserPrefs>> {
        read_json(&self.user_prefs_file_path)
    }

    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> Result<()> {
        write_json(&self.user_prefs_file_path, user_prefs)
    }

    fn doctor_base_file_path(&self) -> &Path {
        &self.doctor_base_file_path
    }

    fn read_doctor_base(&self) -> Result<Option<DoctorBase>> {
        let Some(file) = read_json::<DoctorBaseFile>(&self.doctor_base_file_path)? else {
            return Ok(None);
        };

        if file.version > DOCTOR_BASE_FILE_VERSION {
            return Err(DoctorBaseError::data_loading(format!(
                "Unsupported data file version {} (expected at most {})",
                file.version, DOCTOR_BASE_FILE_VERSION
            )));
        }

        let patients: Vec<Patient> = file
            .patients
            .into_iter()
            .map(|p| {
                let appointments = p.appointments().to_vec();
                p.with_appointments(appointments)
            })
            .collect();

        if let Some(patient) = patients.iter().find(|p| p.has_internal_clash()) {
            return Err(DoctorBaseError::data_loading(format!(
                "Illegal values in data file: {} has two appointments at the same date and time",
                patient.name
            )));
        }

        DoctorBase::from_patients(patients)
            .map(Some)
            .map_err(|e| DoctorBaseError::data_loading(format!("Illegal values in data file: {}", e)))
    }

    fn save_doctor_base(&self, doctor_base: &DoctorBase) -> Result<()> {
        let file = DoctorBaseFile {
            version: DOCTOR_BASE_FILE_VERSION,
            patients: doctor_base.patients().to_vec(),
        };
        write_json(&self.doctor_base_file_path, &file)
    }
}
