use crate::core::{
    Address, Description, DoctorBaseError, Email, Name, Phone, Result, Tag, DATE_TIME_FORMAT,
};
use chrono::NaiveDateTime;
use std::collections::BTreeSet;

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_INVALID_DATE_TIME: &str =
    "Date-times should be in the format yyyy-MM-dd HH:mm, e.g. 2030-01-31 14:30";

/// A position in a displayed list. Users count from one, the code from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    pub fn from_zero_based(index: usize) -> Self {
        Self(index)
    }

    /// `None` for zero, which is not a valid one-based position.
    pub fn from_one_based(index: usize) -> Option<Self> {
        index.checked_sub(1).map(Self)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

pub fn parse_index(one_based_index: &str) -> Result<Index> {
    let trimmed = one_based_index.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DoctorBaseError::parse(MESSAGE_INVALID_INDEX));
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| DoctorBaseError::parse(MESSAGE_INVALID_INDEX))
}

/// Field constructors report constraint violations as validation errors;
/// on the command line they are parse errors with the same text.
fn field<T>(value: Result<T>) -> Result<T> {
    value.map_err(|e| DoctorBaseError::parse(e.to_string()))
}

pub fn parse_name(name: &str) -> Result<Name> {
    field(Name::new(name.trim()))
}

pub fn parse_phone(phone: &str) -> Result<Phone> {
    field(Phone::new(phone.trim()))
}

pub fn parse_email(email: &str) -> Result<Email> {
    field(Email::new(email.trim()))
}

pub fn parse_address(address: &str) -> Result<Address> {
    field(Address::new(address.trim()))
}

pub fn parse_tag(tag: &str) -> Result<Tag> {
    field(Tag::new(tag.trim()))
}

pub fn parse_tags<S: AsRef<str>>(tags: &[S]) -> Result<BTreeSet<Tag>> {
    tags.iter().map(|t| parse_tag(t.as_ref())).collect()
}

pub fn parse_description(description: &str) -> Result<Description> {
    field(Description::new(description.trim()))
}

pub fn parse_date_time(date_time: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(date_time.trim(), DATE_TIME_FORMAT)
        .map_err(|_| DoctorBaseError::parse(MESSAGE_INVALID_DATE_TIME))
}
