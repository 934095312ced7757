//! listhealth-export: effective status, inactive reasons, export category
//! selection, and the CSV artifact

pub mod category;
pub mod resolver;
pub mod row;

pub use category::{
    category_counts, select_for_export, CategoryKind, ExportCategory, ExportOption, EXPORT_OPTIONS,
};
pub use resolver::{effective_status, inactive_reason, SUNSET_STATUS};
pub use row::{build_export_row, build_export_rows, to_csv_string, ExportRow, CSV_HEADERS};
