mod brand;
mod response;

pub use brand::FlatBrandRecord;
pub use response::{BrandData, BrandEntry, BrandGroup, BrandListResponse};
