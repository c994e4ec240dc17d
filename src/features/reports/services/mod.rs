mod report_service;
mod seed;

pub use report_service::ReportService;
