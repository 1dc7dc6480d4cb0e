use crate::domain::doctor_base::DoctorBase;
use crate::domain::model::{Address, Appointment, Description, Email, Name, Patient, Phone, Tag};
use crate::utils::error::Result;
use chrono::{Duration, Local, NaiveDateTime, Timelike};
use std::collections::BTreeSet;

/// Records used on first launch, when no data file exists yet.
/// Appointment times are relative to `now` so they show up as upcoming.
pub fn sample_doctor_base(now: NaiveDateTime) -> Result<DoctorBase> {
    let base = now
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);

    let patients = vec![
        patient(
            "Alex Yeoh",
            "87438807",
            "alexyeoh@example.com",
            "Blk 30 Geylang Street 29, #06-40",
            &["diabetic"],
        )?
        .with_appointments(vec![
            appointment("Blood sugar review", base + Duration::days(1))?,
            appointment("Eye screening", base + Duration::days(14))?,
        ]),
        patient(
            "Bernice Yu",
            "99272758",
            "berniceyu@example.com",
            "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
            &["asthma", "smoker"],
        )?
        .with_appointments(vec![appointment("Spirometry", base + Duration::days(3))?]),
        patient(
            "Charlotte Oliveiro",
            "93210283",
            "charlotte@example.com",
            "Blk 11 Ang Mo Kio Street 74, #11-04",
            &[],
        )?,
        patient(
            "David Li",
            "91031282",
            "lidavid@example.com",
            "Blk 436 Serangoon Gardens Street 26, #16-43",
            &["hypertension"],
        )?
        .with_appointments(vec![appointment("Blood pressure check", base + Duration::days(7))?]),
    ];

    DoctorBase::from_patients(patients)
}

pub fn sample_doctor_base_now() -> Result<DoctorBase> {
    sample_doctor_base(Local::now().naive_local())
}

fn patient(name: &str, phone: &str, email: &str, address: &str, tags: &[&str]) -> Result<Patient> {
    let tags = tags
        .iter()
        .map(|t| Tag::new(*t))
        .collect::<Result<BTreeSet<_>>>()?;
    Ok(Patient::new(
        Name::new(name)?,
        Phone::new(phone)?,
        Email::new(email)?,
        Address::new(address)?,
        tags,
    ))
}

fn appointment(description: &str, date_time: NaiveDateTime) -> Result<Appointment> {
    Ok(Appointment::new(Description::new(description)?, date_time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_sample_data_is_valid_and_upcoming() {
        let now = NaiveDate::from_ymd_opt(2030, 3, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let db = sample_doctor_base(now).unwrap();

        assert_eq!(db.patients().len(), 4);
        assert!(db.appointments().all(|(_, a)| a.date_time > now));
    }
}
