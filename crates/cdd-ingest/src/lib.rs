//! CDD ingestion from a folder of CSV files.
//!
//! Each sheet is exchanged as one file named after the sheet:
//!
//! ```text
//! site-001/
//!   IP.csv
//!   Radio 4G.csv
//!   Radio 5G.csv
//!   Mapping.csv
//! ```
//!
//! ```ignore
//! use cdd_ingest::load_table_set;
//!
//! let tables = load_table_set(Path::new("input/site-001"))?;
//! ```

mod discovery;
mod error;
mod loader;
mod reader;

pub use discovery::{list_csv_files, sheet_for_file};
pub use error::{IngestError, Result};
pub use loader::load_table_set;
pub use reader::read_sheet_csv;
