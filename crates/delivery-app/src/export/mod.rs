//! Export functionality

pub mod excel;
pub mod pdf;

pub use excel::export_to_excel;
pub use pdf::export_to_pdf;
