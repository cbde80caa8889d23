mod brand_extractor;

pub use brand_extractor::{BrandExtractor, Extractor};
