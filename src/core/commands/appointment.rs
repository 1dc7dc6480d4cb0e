use super::patient_at;
use crate::core::messages;
use crate::core::parser::util::Index;
use crate::core::{
    Appointment, CommandResult, Description, DoctorBaseError, Model, Patient, Result, ViewMode,
};
use chrono::NaiveDateTime;

pub const MESSAGE_CLASHING_APPOINTMENT: &str =
    "This patient already has an appointment at that date and time";

/// Selected patient and the appointment at `index` of their list.
fn selected_appointment(model: &dyn Model, index: Index) -> Result<(Patient, Appointment)> {
    if model.view_mode() != ViewMode::PatientAppointmentList {
        return Err(DoctorBaseError::command(messages::MESSAGE_NOT_VIEWING_APPOINTMENT));
    }
    let patient = model
        .selected_patient()
        .cloned()
        .ok_or_else(|| DoctorBaseError::command(messages::MESSAGE_NO_PATIENT_SELECTED))?;
    let appointment = patient
        .appointments()
        .get(index.zero_based())
        .cloned()
        .ok_or_else(|| {
            DoctorBaseError::command(messages::MESSAGE_INVALID_APPOINTMENT_DISPLAYED_INDEX)
        })?;
    Ok((patient, appointment))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewCommand {
    pub index: Index,
}

impl ViewCommand {
    pub const COMMAND_WORD: &'static str = "view";
    pub const MESSAGE_USAGE: &'static str = "view: Shows the appointments of the patient \
        identified by the index number used in the displayed patient list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: view 1";

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        let patient = patient_at(model, self.index)?;
        model.set_selected_patient(Some(&patient));
        model.set_view_mode(ViewMode::PatientAppointmentList);
        Ok(CommandResult::new(format!(
            "Viewing appointments of {}: {} appointment(s)",
            patient.name,
            patient.appointments().len()
        )))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddAppointmentCommand {
    pub index: Index,
    pub appointment: Appointment,
}

impl AddAppointmentCommand {
    pub const COMMAND_WORD: &'static str = "add-appt";
    pub const MESSAGE_USAGE: &'static str = "add-appt: Adds an appointment to the patient \
        identified by the index number used in the displayed patient list.\n\
        Parameters: INDEX (must be a positive integer) d/DESCRIPTION dt/YYYY-MM-DD HH:MM\n\
        Example: add-appt 1 d/Annual checkup dt/2030-01-31 14:30";

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        let patient = patient_at(model, self.index)?;
        if patient.has_clashing_appointment(&self.appointment) {
            return Err(DoctorBaseError::command(MESSAGE_CLASHING_APPOINTMENT));
        }

        let mut edited = patient.clone();
        edited.add_appointment(self.appointment.clone());
        model.set_patient(&patient, edited)?;

        Ok(CommandResult::new(format!(
            "New appointment added for {}: {}",
            patient.name, self.appointment
        )))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditAppointmentDescriptor {
    pub description: Option<Description>,
    pub date_time: Option<NaiveDateTime>,
}

impl EditAppointmentDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.description.is_some() || self.date_time.is_some()
    }

    pub fn apply(&self, appointment: &Appointment) -> Appointment {
        Appointment::new(
            self.description
                .clone()
                .unwrap_or_else(|| appointment.description.clone()),
            self.date_time.unwrap_or(appointment.date_time),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditAppointmentCommand {
    pub index: Index,
    pub descriptor: EditAppointmentDescriptor,
}

impl EditAppointmentCommand {
    pub const COMMAND_WORD: &'static str = "edit-appt";
    pub const MESSAGE_USAGE: &'static str = "edit-appt: Edits the appointment identified by the \
        index number used in the displayed appointment list of the viewed patient.\n\
        Parameters: INDEX (must be a positive integer) [d/DESCRIPTION] [dt/YYYY-MM-DD HH:MM]\n\
        Example: edit-appt 2 dt/2030-02-01 09:00";

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        let (patient, target) = selected_appointment(model, self.index)?;
        let edited_appointment = self.descriptor.apply(&target);

        let clashes = patient
            .appointments()
            .iter()
            .enumerate()
            .any(|(i, a)| i != self.index.zero_based() && a.is_same_slot(&edited_appointment));
        if clashes {
            return Err(DoctorBaseError::command(MESSAGE_CLASHING_APPOINTMENT));
        }

        let mut edited = patient.clone();
        edited.set_appointment(self.index.zero_based(), edited_appointment.clone());
        model.set_patient(&patient, edited)?;

        Ok(CommandResult::new(format!(
            "Edited Appointment: {}",
            edited_appointment
        )))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteAppointmentCommand {
    pub index: Index,
}

impl DeleteAppointmentCommand {
    pub const COMMAND_WORD: &'static str = "delete-appt";
    pub const MESSAGE_USAGE: &'static str = "delete-appt: Deletes the appointment identified by \
        the index number used in the displayed appointment list of the viewed patient.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete-appt 1";

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        let (patient, _) = selected_appointment(model, self.index)?;

        let mut edited = patient.clone();
        let removed = edited.remove_appointment(self.index.zero_based());
        model.set_patient(&patient, edited)?;

        Ok(CommandResult::new(format!("Deleted Appointment: {}", removed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::{appointment, at, typical_model};
    use crate::core::model_manager::ModelManager;

    fn viewing(index: usize) -> ModelManager {
        let mut model = typical_model();
        ViewCommand {
            index: Index::from_zero_based(index),
        }
        .execute(&mut model)
        .unwrap();
        model
    }

    #[test]
    fn test_view_selects_patient() {
        let model = viewing(0);
        assert_eq!(model.view_mode(), ViewMode::PatientAppointmentList);
        assert_eq!(
            model.selected_patient().unwrap().name.as_str(),
            "Alice Pauline"
        );
    }

    #[test]
    fn test_view_invalid_index() {
        let mut model = typical_model();
        let err = ViewCommand {
            index: Index::from_zero_based(7),
        }
        .execute(&mut model)
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            messages::MESSAGE_INVALID_PATIENT_DISPLAYED_INDEX
        );
    }

    #[test]
    fn test_add_appointment_and_clash() {
        let mut model = typical_model();
        let command = AddAppointmentCommand {
            index: Index::from_zero_based(1),
            appointment: appointment("Consult", 15, 11),
        };
        let result = command.execute(&mut model).unwrap();
        assert_eq!(
            result.feedback_to_user,
            "New appointment added for Benson Meier: Consult at 2030-01-15 11:00"
        );

        let err = command.execute(&mut model).unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_CLASHING_APPOINTMENT);
    }

    #[test]
    fn test_edit_appointment_reorders() {
        let mut model = viewing(0);
        let command = EditAppointmentCommand {
            index: Index::from_zero_based(0),
            descriptor: EditAppointmentDescriptor {
                description: None,
                date_time: Some(at(20, 9)),
            },
        };
        command.execute(&mut model).unwrap();

        let alice = model.selected_patient().unwrap();
        let descriptions: Vec<&str> = alice
            .appointments()
            .iter()
            .map(|a| a.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Blood test", "Checkup"]);
    }

    #[test]
    fn test_edit_appointment_onto_other_slot_clashes() {
        let mut model = viewing(0);
        let command = EditAppointmentCommand {
            index: Index::from_zero_based(0),
            descriptor: EditAppointmentDescriptor {
                description: None,
                date_time: Some(at(12, 14)),
            },
        };
        let err = command.execute(&mut model).unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_CLASHING_APPOINTMENT);
    }

    #[test]
    fn test_edit_appointment_same_slot_new_description() {
        let mut model = viewing(0);
        let command = EditAppointmentCommand {
            index: Index::from_zero_based(0),
            descriptor: EditAppointmentDescriptor {
                description: Some(Description::new("Annual checkup").unwrap()),
                date_time: None,
            },
        };
        let result = command.execute(&mut model).unwrap();
        assert_eq!(
            result.feedback_to_user,
            "Edited Appointment: Annual checkup at 2030-01-10 09:00"
        );
    }

    #[test]
    fn test_delete_appointment() {
        let mut model = viewing(2);
        let result = DeleteAppointmentCommand {
            index: Index::from_zero_based(0),
        }
        .execute(&mut model)
        .unwrap();
        assert_eq!(result.feedback_to_user, "Deleted Appointment: X-ray at 2030-01-11 10:00");
        assert!(model.selected_patient().unwrap().appointments().is_empty());
    }

    #[test]
    fn test_delete_appointment_invalid_index() {
        let mut model = viewing(1);
        let err = DeleteAppointmentCommand {
            index: Index::from_zero_based(0),
        }
        .execute(&mut model)
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            messages::MESSAGE_INVALID_APPOINTMENT_DISPLAYED_INDEX
        );
    }

    #[test]
    fn test_appointment_commands_need_appointment_view() {
        let mut model = typical_model();
        let err = DeleteAppointmentCommand {
            index: Index::from_zero_based(0),
        }
        .execute(&mut model)
        .unwrap_err();
        assert_eq!(err.to_string(), messages::MESSAGE_NOT_VIEWING_APPOINTMENT);
    }
}
