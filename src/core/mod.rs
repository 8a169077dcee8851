pub mod grammar;
pub mod report;
pub mod validator;

pub use crate::domain::model::{ReportLine, ReportSummary, Verdict};
pub use crate::domain::ports::{ConfigProvider, LineValidator};
pub use crate::utils::error::Result;
