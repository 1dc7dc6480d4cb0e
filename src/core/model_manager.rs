use crate::core::{
    DoctorBase, GuiSettings, Model, Name, Patient, PatientFilter, Result, UpcomingAppointment,
    UserPrefs, ViewMode,
};
use chrono::{Local, NaiveDateTime};
use std::path::Path;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub struct ModelManager {
    doctor_base: DoctorBase,
    user_prefs: UserPrefs,
    patient_filter: PatientFilter,
    view_mode: ViewMode,
    selected_patient: Option<Name>,
    clock: fn() -> NaiveDateTime,
}

impl ModelManager {
    pub fn new(doctor_base: DoctorBase, user_prefs: UserPrefs) -> Self {
        tracing::debug!(
            "Initializing with {} patients and prefs {:?}",
            doctor_base.patients().len(),
            user_prefs
        );

        Self {
            doctor_base,
            user_prefs,
            patient_filter: PatientFilter::All,
            view_mode: ViewMode::PatientList,
            selected_patient: None,
            clock: local_now,
        }
    }

    /// Replaces the wall clock used to decide which appointments are upcoming.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    fn is_selected(&self, patient: &Patient) -> bool {
        self.selected_patient.as_ref() == Some(&patient.name)
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(DoctorBase::new(), UserPrefs::default())
    }
}

impl Model for ModelManager {
    fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    fn gui_settings(&self) -> &GuiSettings {
        &self.user_prefs.gui_settings
    }

    fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.user_prefs.gui_settings = gui_settings;
    }

    fn doctor_base_file_path(&self) -> &Path {
        self.user_prefs.doctor_base_file_path()
    }

    fn doctor_base(&self) -> &DoctorBase {
        &self.doctor_base
    }

    fn set_doctor_base(&mut self, doctor_base: DoctorBase) {
        self.doctor_base = doctor_base;
        self.selected_patient = None;
        self.view_mode = ViewMode::PatientList;
    }

    fn has_patient(&self, patient: &Patient) -> bool {
        self.doctor_base.has_patient(patient)
    }

    fn add_patient(&mut self, patient: Patient) -> Result<()> {
        self.doctor_base.add_patient(patient)?;
        self.update_filtered_patient_list(PatientFilter::All);
        Ok(())
    }

    fn set_patient(&mut self, target: &Patient, edited: Patient) -> Result<()> {
        let follow_selection = self.is_selected(target);
        let new_name = edited.name.clone();
        self.doctor_base.set_patient(target, edited)?;
        if follow_selection {
            self.selected_patient = Some(new_name);
        }
        Ok(())
    }

    fn delete_patient(&mut self, target: &Patient) -> Result<()> {
        if self.is_selected(target) {
            self.selected_patient = None;
            self.view_mode = ViewMode::PatientList;
        }
        self.doctor_base.remove_patient(target)?;
        Ok(())
    }

    fn filtered_patient_list(&self) -> Vec<&Patient> {
        self.doctor_base
            .patients()
            .iter()
            .filter(|p| self.patient_filter.matches(p))
            .collect()
    }

    fn update_filtered_patient_list(&mut self, filter: PatientFilter) {
        self.patient_filter = filter;
    }

    fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    fn selected_patient(&self) -> Option<&Patient> {
        let name = self.selected_patient.as_ref()?;
        self.doctor_base.patients().iter().find(|p| &p.name == name)
    }

    fn set_selected_patient(&mut self, patient: Option<&Patient>) {
        self.selected_patient = patient.map(|p| p.name.clone());
    }

    fn upcoming_appointments(&self) -> Vec<UpcomingAppointment> {
        let now = (self.clock)();
        let mut upcoming: Vec<UpcomingAppointment> = self
            .doctor_base
            .appointments()
            .filter(|(_, a)| a.date_time >= now)
            .map(|(p, a)| UpcomingAppointment {
                patient: p.name.clone(),
                appointment: a.clone(),
            })
            .collect();
        upcoming.sort_by(|a, b| {
            a.appointment
                .date_time
                .cmp(&b.appointment.date_time)
                .then_with(|| a.patient.cmp(&b.patient))
        });
        upcoming
    }
}
