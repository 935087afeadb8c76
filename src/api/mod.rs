mod client;

pub use client::{ReportApi, ReportFilter};
