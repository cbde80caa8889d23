use serde::Deserialize;

/// Top-level body of the get_shops_by_category endpoint. The `data.brands`
/// path is optional end to end; the API controls field presence and the
/// flattener checks for the list before walking it.
#[derive(Debug, Deserialize)]
pub struct BrandListResponse {
    pub data: Option<BrandData>,
}

#[derive(Debug, Deserialize)]
pub struct BrandData {
    pub brands: Option<Vec<BrandGroup>>,
}

/// One batch of brand entries, with the pagination-like marker the API
/// attaches to each batch.
#[derive(Debug, Deserialize)]
pub struct BrandGroup {
    pub index: i64,
    pub total: i64,
    pub brand_ids: Vec<BrandEntry>,
}

#[derive(Debug, Deserialize)]
pub struct BrandEntry {
    pub username: String,
    pub brand_name: String,
    pub shopid: u64,
    pub logo: String,
    pub logo_pc: Option<String>,
    pub shop_collection_id: Option<i64>,
    pub ctime: i64,
    pub brand_label: Option<i64>,
    pub shop_type: Option<i32>,
    pub redirect_url: Option<String>,
    pub entity_id: Option<i64>,
}
