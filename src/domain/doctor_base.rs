use crate::domain::model::{Appointment, Patient};
use crate::utils::error::{DoctorBaseError, Result};

/// All patient records; no two patients share a name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorBase {
    patients: Vec<Patient>,
}

impl DoctorBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a doctor base from records that may contain duplicates.
    pub fn from_patients(patients: Vec<Patient>) -> Result<Self> {
        let mut doctor_base = Self::new();
        doctor_base.set_patients(patients)?;
        Ok(doctor_base)
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn has_patient(&self, patient: &Patient) -> bool {
        self.patients.iter().any(|p| p.is_same_patient(patient))
    }

    pub fn add_patient(&mut self, patient: Patient) -> Result<()> {
        if self.has_patient(&patient) {
            return Err(DoctorBaseError::DuplicatePatient {
                name: patient.name.to_string(),
            });
        }
        self.patients.push(patient);
        Ok(())
    }

    /// Replaces `target` with `edited`; `edited` may rename the patient as long
    /// as the new name is not taken by someone else.
    pub fn set_patient(&mut self, target: &Patient, edited: Patient) -> Result<()> {
        let index = self.position_of(target)?;

        if !target.is_same_patient(&edited) && self.has_patient(&edited) {
            return Err(DoctorBaseError::DuplicatePatient {
                name: edited.name.to_string(),
            });
        }

        self.patients[index] = edited;
        Ok(())
    }

    pub fn remove_patient(&mut self, target: &Patient) -> Result<Patient> {
        let index = self.position_of(target)?;
        Ok(self.patients.remove(index))
    }

    pub fn set_patients(&mut self, patients: Vec<Patient>) -> Result<()> {
        for (i, patient) in patients.iter().enumerate() {
            if patients[..i].iter().any(|p| p.is_same_patient(patient)) {
                return Err(DoctorBaseError::DuplicatePatient {
                    name: patient.name.to_string(),
                });
            }
        }
        self.patients = patients;
        Ok(())
    }

    pub fn appointments(&self) -> impl Iterator<Item = (&Patient, &Appointment)> {
        self.patients
            .iter()
            .flat_map(|p| p.appointments().iter().map(move |a| (p, a)))
    }

    fn position_of(&self, target: &Patient) -> Result<usize> {
        self.patients
            .iter()
            .position(|p| p.is_same_patient(target))
            .ok_or_else(|| DoctorBaseError::PatientNotFound {
                name: target.name.to_string(),
            })
    }
}
