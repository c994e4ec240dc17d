mod classification;

pub use classification::{Classification, IncidentDetails, Service, Severity};
