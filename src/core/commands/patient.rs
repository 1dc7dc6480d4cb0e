use super::patient_at;
use crate::core::messages;
use crate::core::parser::util::Index;
use crate::core::{
    Address, CommandResult, DoctorBaseError, Email, Model, Name, Patient, PatientFilter, Phone,
    Result, Tag, ViewMode,
};
use std::collections::BTreeSet;

pub const MESSAGE_DUPLICATE_PATIENT: &str = "This patient already exists in the doctor base";

#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    pub patient: Patient,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds a patient to the doctor base. \
        Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
        Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 t/diabetic";

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        if model.has_patient(&self.patient) {
            return Err(DoctorBaseError::command(MESSAGE_DUPLICATE_PATIENT));
        }

        model.add_patient(self.patient.clone())?;
        Ok(CommandResult::new(format!(
            "New patient added: {}",
            self.patient
        )))
    }
}

/// Fields to overwrite on an existing patient; `None` keeps the old value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditPatientDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPatientDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Applies the edits; appointments are carried over unchanged.
    pub fn apply(&self, patient: &Patient) -> Patient {
        let mut edited = patient.clone();
        if let Some(name) = &self.name {
            edited.name = name.clone();
        }
        if let Some(phone) = &self.phone {
            edited.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            edited.email = email.clone();
        }
        if let Some(address) = &self.address {
            edited.address = address.clone();
        }
        if let Some(tags) = &self.tags {
            edited.tags = tags.clone();
        }
        edited
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    pub index: Index,
    pub descriptor: EditPatientDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the patient identified \
        by the index number used in the displayed patient list. \
        Existing values will be overwritten by the input values.\n\
        Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
        Example: edit 1 p/91234567 e/johndoe@example.com";

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        let to_edit = patient_at(model, self.index)?;
        let edited = self.descriptor.apply(&to_edit);

        if !to_edit.is_same_patient(&edited) && model.has_patient(&edited) {
            return Err(DoctorBaseError::command(MESSAGE_DUPLICATE_PATIENT));
        }

        let feedback = format!("Edited Patient: {}", edited);
        model.set_patient(&to_edit, edited)?;
        model.update_filtered_patient_list(PatientFilter::All);
        Ok(CommandResult::new(feedback))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCommand {
    pub index: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the patient identified by the index \
        number used in the displayed patient list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        let to_delete = patient_at(model, self.index)?;
        model.delete_patient(&to_delete)?;
        model.set_selected_patient(None);
        model.set_view_mode(ViewMode::PatientList);
        Ok(CommandResult::new(format!("Deleted Patient: {}", to_delete)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FindCommand {
    pub keywords: Vec<String>,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const MESSAGE_USAGE: &'static str = "find: Finds all patients whose names contain any of \
        the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice bob charlie";

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        model.update_filtered_patient_list(PatientFilter::NameContainsKeywords(
            self.keywords.clone(),
        ));
        model.set_selected_patient(None);
        model.set_view_mode(ViewMode::PatientList);
        Ok(CommandResult::new(messages::patients_listed_overview(
            model.filtered_patient_list().len(),
        )))
    }
}
