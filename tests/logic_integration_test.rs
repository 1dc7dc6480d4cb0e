use doctorbase::core::{Logic, Model, Storage, UserPrefs, ViewMode};
use doctorbase::{DoctorBaseError, JsonStorage, LogicManager, ModelManager};
use tempfile::TempDir;

fn logic_in(temp_dir: &TempDir) -> LogicManager<ModelManager, JsonStorage> {
    let storage = JsonStorage::new(
        temp_dir.path().join("data").join("doctorbase.json"),
        temp_dir.path().join("preferences.json"),
    );
    let mut prefs = UserPrefs::default();
    prefs.doctor_base_file_path = storage.doctor_base_file_path().to_path_buf();
    LogicManager::new(ModelManager::new(Default::default(), prefs), storage)
}

#[test]
fn test_add_patient_is_written_to_data_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let mut logic = logic_in(&temp_dir);

    let result = logic.execute(
        "add n/Amy Bee p/11111111 e/amy@example.com a/123, Jurong West Ave 6 t/diabetic",
    )?;
    assert!(result.feedback_to_user.starts_with("New patient added: Amy Bee"));

    let reloaded = logic.storage().read_doctor_base()?.expect("data file written");
    assert_eq!(reloaded, *logic.doctor_base());
    assert_eq!(reloaded.patients().len(), 1);
    Ok(())
}

#[test]
fn test_appointment_flow_round_trips_through_storage() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let mut logic = logic_in(&temp_dir);

    logic.execute("add n/Amy Bee p/11111111 e/amy@example.com a/Jurong West")?;
    logic.execute("add-appt 1 d/Checkup dt/2030-01-10 09:00")?;
    logic.execute("add-appt 1 d/Blood test dt/2030-01-05 14:00")?;
    logic.execute("view 1")?;
    assert_eq!(logic.view_mode(), ViewMode::PatientAppointmentList);

    logic.execute("edit-appt 2 d/Annual checkup")?;
    logic.execute("delete-appt 1")?;

    let reloaded = logic.storage().read_doctor_base()?.expect("data file written");
    let appointments = reloaded.patients()[0].appointments();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].description.as_str(), "Annual checkup");
    Ok(())
}

#[test]
fn test_appointment_commands_need_appointment_view() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let mut logic = logic_in(&temp_dir);
    logic.execute("add n/Amy Bee p/11111111 e/amy@example.com a/Jurong West")?;
    logic.execute("add-appt 1 d/Checkup dt/2030-01-10 09:00")?;

    let err = logic.execute("delete-appt 1").unwrap_err();
    assert!(matches!(err, DoctorBaseError::CommandError { .. }));
    assert_eq!(logic.doctor_base().patients()[0].appointments().len(), 1);
    Ok(())
}

#[test]
fn test_invalid_input_does_not_touch_storage() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let mut logic = logic_in(&temp_dir);

    let err = logic.execute("uicfhmowqewca").unwrap_err();
    assert_eq!(err.to_string(), "Unknown command");

    let err = logic.execute("delete 9").unwrap_err();
    assert!(matches!(err, DoctorBaseError::CommandError { .. }));

    assert!(!logic.storage().doctor_base_file_path().exists());
    Ok(())
}

#[test]
fn test_unwritable_data_path_reports_save_error() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("data");
    std::fs::write(&blocker, "not a directory")?;
    let mut logic = logic_in(&temp_dir);

    let err = logic
        .execute("add n/Amy Bee p/11111111 e/amy@example.com a/Jurong West")
        .unwrap_err();

    assert!(matches!(err, DoctorBaseError::SaveError { .. }));
    assert!(err
        .to_string()
        .starts_with("Could not save data due to the following error: "));
    // The model keeps the change even though the write failed.
    assert_eq!(logic.model().filtered_patient_list().len(), 1);
    Ok(())
}
