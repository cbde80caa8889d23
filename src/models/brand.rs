use serde::{Deserialize, Serialize};

/// Denormalized per-brand row as it lands in the output file. Field order
/// here is the CSV column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatBrandRecord {
    pub index: i64,
    pub total: i64,
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
    pub category_id: String,
    pub category_name: String,
    pub url_to: String,
    pub data_requisicao: String,
}
