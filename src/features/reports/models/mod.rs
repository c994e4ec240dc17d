mod report;
mod report_status;

pub use report::{CreateReport, Report};
pub use report_status::{status_timeline, ReportStatus, StatusStep};
