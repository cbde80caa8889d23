pub mod categories;
pub mod clients;
pub mod config;
pub mod error;
pub mod extractors;
pub mod models;
pub mod services;
pub mod storage;

pub use categories::{Category, CATEGORIES};
pub use config::Settings;
pub use error::{Error, Result};
pub use extractors::{BrandExtractor, Extractor};
pub use models::FlatBrandRecord;
pub use services::{flatten, run_pipeline};
pub use storage::{output_filename, CsvWriter};
