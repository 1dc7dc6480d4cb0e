pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::JsonStorage;
pub use app::App;
pub use config::AppConfig;
pub use crate::core::{logic::LogicManager, model_manager::ModelManager, parser::DoctorBaseParser};
pub use utils::error::{DoctorBaseError, Result};
