mod triage_dto;

pub use triage_dto::{TriagePreviewDto, TriagePreviewRequestDto};
