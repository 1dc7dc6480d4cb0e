// Domain layer: records, preferences and the ports (traits) the core is written against.

pub mod doctor_base;
pub mod model;
pub mod ports;
pub mod prefs;
pub mod sample;
