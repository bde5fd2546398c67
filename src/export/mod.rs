pub mod csv_export;

pub use csv_export::{dataset_to_csv, suggested_filename, CSV_HEADER};
