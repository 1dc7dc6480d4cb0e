//! User-facing message text shared by the parser, the commands and the logic layer.

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_PATIENT_DISPLAYED_INDEX: &str = "The patient index provided is invalid";
pub const MESSAGE_INVALID_APPOINTMENT_DISPLAYED_INDEX: &str =
    "The appointment index provided is invalid";
pub const MESSAGE_NOT_VIEWING_APPOINTMENT: &str =
    "This command can only be used while viewing a patient's appointments. Use `view INDEX` first.";
pub const MESSAGE_NO_PATIENT_SELECTED: &str = "No patient is selected";

pub fn invalid_command_format(usage: &str) -> String {
    format!("Invalid command format! \n{}", usage)
}

pub fn patients_listed_overview(count: usize) -> String {
    format!("{} patients listed!", count)
}

pub fn duplicate_fields(prefixes: &[&str]) -> String {
    format!(
        "Multiple values specified for the following single-valued field(s): {}",
        prefixes.join(" ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_fields_lists_prefixes() {
        assert_eq!(
            duplicate_fields(&["n/", "p/"]),
            "Multiple values specified for the following single-valued field(s): n/ p/"
        );
    }

    #[test]
    fn test_invalid_command_format() {
        assert!(invalid_command_format("list: lists").starts_with("Invalid command format!"));
    }
}
