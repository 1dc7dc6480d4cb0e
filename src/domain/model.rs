use crate::utils::error::{DoctorBaseError, Result};
use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

/// Date-time format accepted on the command line and shown to the user.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Alphabetic}\p{N}][\p{Alphabetic}\p{N} ]*$").expect("name pattern"));
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3,}$").expect("phone pattern"));
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*@[A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z0-9]{2,}$")
        .expect("email pattern")
});
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Alphabetic}\p{N}]+$").expect("tag pattern"));

macro_rules! validated_string {
    ($(#[$meta:meta])* $name:ident, $constraints:expr, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const MESSAGE_CONSTRAINTS: &'static str = $constraints;

            pub fn is_valid(value: &str) -> bool {
                let check: fn(&str) -> bool = $check;
                check(value)
            }

            pub fn new(value: impl Into<String>) -> Result<Self> {
                let value = value.into();
                if Self::is_valid(&value) {
                    Ok(Self(value))
                } else {
                    Err(DoctorBaseError::validation(Self::MESSAGE_CONSTRAINTS))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = DoctorBaseError;

            fn try_from(value: String) -> Result<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

validated_string!(
    /// A patient's full name; two patients with equal names are the same patient.
    Name,
    "Names should only contain alphanumeric characters and spaces, and it should not be blank",
    |v| NAME_PATTERN.is_match(v)
);

validated_string!(
    Phone,
    "Phone numbers should only contain numbers, and it should be at least 3 digits long",
    |v| PHONE_PATTERN.is_match(v)
);

validated_string!(
    Email,
    "Emails should be of the format local-part@domain, where the local-part contains alphanumerics and + _ . - separators, and the domain ends with a label of at least 2 characters",
    |v| EMAIL_PATTERN.is_match(v)
);

validated_string!(
    Address,
    "Addresses can take any values, and it should not be blank",
    |v| !v.trim().is_empty() && !v.starts_with(char::is_whitespace)
);

validated_string!(
    Tag,
    "Tag names should be alphanumeric",
    |v| TAG_PATTERN.is_match(v)
);

validated_string!(
    Description,
    "Appointment descriptions can take any values, and it should not be blank",
    |v| !v.trim().is_empty() && !v.starts_with(char::is_whitespace)
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub description: Description,
    pub date_time: NaiveDateTime,
}

impl Appointment {
    pub fn new(description: Description, date_time: NaiveDateTime) -> Self {
        Self {
            description,
            date_time,
        }
    }

    /// Two appointments of one patient clash when they start at the same time.
    pub fn is_same_slot(&self, other: &Appointment) -> bool {
        self.date_time == other.date_time
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}",
            self.description,
            self.date_time.format(DATE_TIME_FORMAT)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    appointments: Vec<Appointment>,
}

impl Patient {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: BTreeSet<Tag>) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
            appointments: Vec::new(),
        }
    }

    pub fn with_appointments(mut self, appointments: Vec<Appointment>) -> Self {
        self.appointments = appointments;
        self.appointments.sort_by_key(|a| a.date_time);
        self
    }

    pub fn is_same_patient(&self, other: &Patient) -> bool {
        self.name == other.name
    }

    /// Appointments ordered by start time.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn has_clashing_appointment(&self, appointment: &Appointment) -> bool {
        self.appointments.iter().any(|a| a.is_same_slot(appointment))
    }

    /// True when two of this patient's own appointments share a slot.
    pub fn has_internal_clash(&self) -> bool {
        self.appointments
            .windows(2)
            .any(|pair| pair[0].is_same_slot(&pair[1]))
    }

    pub fn add_appointment(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
        self.appointments.sort_by_key(|a| a.date_time);
    }

    pub fn set_appointment(&mut self, index: usize, appointment: Appointment) {
        self.appointments[index] = appointment;
        self.appointments.sort_by_key(|a| a.date_time);
    }

    pub fn remove_appointment(&mut self, index: usize) -> Appointment {
        self.appointments.remove(index)
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}

/// Which list the user is currently looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    PatientList,
    PatientAppointmentList,
}

/// Predicate applied to the patient list shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PatientFilter {
    #[default]
    All,
    NameContainsKeywords(Vec<String>),
}

impl PatientFilter {
    pub fn matches(&self, patient: &Patient) -> bool {
        match self {
            PatientFilter::All => true,
            PatientFilter::NameContainsKeywords(keywords) => keywords.iter().any(|keyword| {
                patient
                    .name
                    .as_str()
                    .split_whitespace()
                    .any(|word| word.eq_ignore_ascii_case(keyword))
            }),
        }
    }
}

/// An appointment still to come, with the patient it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingAppointment {
    pub patient: Name,
    pub appointment: Appointment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback_to_user: String,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            show_help: false,
            exit: false,
        }
    }

    pub fn help(feedback_to_user: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback_to_user)
        }
    }

    pub fn exit(feedback_to_user: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback_to_user)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn patient(name: &str) -> Patient {
        Patient::new(
            Name::new(name).unwrap(),
            Phone::new("98765432").unwrap(),
            Email::new("someone@example.com").unwrap(),
            Address::new("1 Clinic Road").unwrap(),
            BTreeSet::new(),
        )
    }

    #[test]
    fn test_name_validation() {
        assert!(Name::is_valid("Alice Pauline"));
        assert!(Name::is_valid("Capital Tan 2"));
        assert!(!Name::is_valid(""));
        assert!(!Name::is_valid(" "));
        assert!(!Name::is_valid("peter*"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(Phone::is_valid("911"));
        assert!(Phone::is_valid("93121534"));
        assert!(!Phone::is_valid("91"));
        assert!(!Phone::is_valid("9312 1534"));
        assert!(!Phone::is_valid("phone"));
    }

    #[test]
    fn test_email_validation() {
        assert!(Email::is_valid("alice@example.com"));
        assert!(Email::is_valid("a.b-c_d+e@sub.example-domain.org"));
        assert!(!Email::is_valid("alice"));
        assert!(!Email::is_valid("alice@example"));
        assert!(!Email::is_valid("@example.com"));
        assert!(!Email::is_valid("alice@-example.com"));
    }

    #[test]
    fn test_address_and_tag_validation() {
        assert!(Address::is_valid("Blk 456, Den Road, #01-355"));
        assert!(!Address::is_valid(" "));
        assert!(Tag::is_valid("diabetic"));
        assert!(!Tag::is_valid("high risk"));
    }

    #[test]
    fn test_invalid_value_reports_constraints() {
        let err = Phone::new("12").unwrap_err();
        assert_eq!(err.to_string(), Phone::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_appointments_are_kept_in_time_order() {
        let mut p = patient("Alice");
        p.add_appointment(Appointment::new(Description::new("Follow-up").unwrap(), at(3, 9)));
        p.add_appointment(Appointment::new(Description::new("Checkup").unwrap(), at(1, 9)));

        let descriptions: Vec<&str> = p.appointments().iter().map(|a| a.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Checkup", "Follow-up"]);
        assert!(p.has_clashing_appointment(&Appointment::new(
            Description::new("Other").unwrap(),
            at(3, 9)
        )));
    }

    #[test]
    fn test_internal_clash_detection() {
        let mut p = patient("Alice");
        p.add_appointment(Appointment::new(Description::new("Checkup").unwrap(), at(1, 9)));
        p.add_appointment(Appointment::new(Description::new("Scan").unwrap(), at(2, 9)));
        assert!(!p.has_internal_clash());

        let p = p.with_appointments(vec![
            Appointment::new(Description::new("Checkup").unwrap(), at(1, 9)),
            Appointment::new(Description::new("Scan").unwrap(), at(1, 9)),
        ]);
        assert!(p.has_internal_clash());
    }

    #[test]
    fn test_same_patient_is_by_name() {
        let mut other = patient("Alice");
        other.phone = Phone::new("11111111").unwrap();
        assert!(patient("Alice").is_same_patient(&other));
        assert!(!patient("Alice").is_same_patient(&patient("Bob")));
    }

    #[test]
    fn test_keyword_filter() {
        let filter = PatientFilter::NameContainsKeywords(vec!["ali".to_string(), "bob".to_string()]);
        assert!(filter.matches(&patient("Bob Tan")));
        assert!(!filter.matches(&patient("Alice Tan")));
        assert!(PatientFilter::All.matches(&patient("Alice Tan")));
    }

    #[test]
    fn test_patient_serde_rejects_invalid_fields() {
        let json = r#"{"name":"Alice","phone":"12","email":"a@example.com","address":"x"}"#;
        assert!(serde_json::from_str::<Patient>(json).is_err());
    }
}
