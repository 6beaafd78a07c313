pub mod csv_tasks;
pub mod error;
pub mod yaml_tasks;

pub use csv_tasks::{
    CSV_DELIMITER, CsvIngest, REQUIRED_FIELDS, SkippedRow, read_task_csv,
    read_task_csv_from_reader,
};
pub use error::{IngestError, Result};
pub use yaml_tasks::{parse_task_yaml, read_task_yaml};
