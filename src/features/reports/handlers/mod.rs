pub mod report_handler;

pub use report_handler::{
    __path_get_report, __path_list_my_reports, __path_list_reports, __path_submit_report,
    __path_update_report_status, get_report, list_my_reports, list_reports, submit_report,
    update_report_status,
};
