pub mod csv;

pub use self::csv::{output_filename, CsvWriter};
