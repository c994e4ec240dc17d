mod report_dto;

pub use report_dto::{
    CreateReportDto, ReportDetailResponseDto, ReportFilterQuery, ReportResponseDto,
    UpdateReportStatusDto,
};
