use chrono::Local;
use tracing::warn;

use crate::categories::Category;
use crate::models::{BrandListResponse, FlatBrandRecord};

const STORE_BASE_URL: &str = "https://shopee.com.br";

/// Flatten one category's response into per-brand rows. Each row copies the
/// entry fields verbatim and adds the group markers, the category context,
/// the derived storefront URL and the collection timestamp.
///
/// A response without the `data.brands` path yields no rows; that is a
/// structural mismatch worth a warning, not an error.
pub fn flatten(response: &BrandListResponse, category: &Category) -> Vec<FlatBrandRecord> {
    let Some(brands) = response.data.as_ref().and_then(|data| data.brands.as_ref()) else {
        warn!(
            category_id = category.id,
            category_name = category.name,
            "Expected brands list missing from response"
        );
        return Vec::new();
    };

    let requested_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let mut records = Vec::new();
    for group in brands {
        for entry in &group.brand_ids {
            records.push(FlatBrandRecord {
                index: group.index,
                total: group.total,
                username: entry.username.clone(),
                brand_name: entry.brand_name.clone(),
                shopid: entry.shopid,
                logo: entry.logo.clone(),
                logo_pc: entry.logo_pc.clone(),
                shop_collection_id: entry.shop_collection_id,
                ctime: entry.ctime,
                brand_label: entry.brand_label,
                shop_type: entry.shop_type,
                redirect_url: entry.redirect_url.clone(),
                entity_id: entry.entity_id,
                category_id: category.id.to_string(),
                category_name: category.name.to_string(),
                url_to: format!("{}/{}", STORE_BASE_URL, entry.shopid),
                data_requisicao: requested_at.clone(),
            });
        }
    }

    records
}
