use tracing::{error, info};

use crate::categories::Category;
use crate::extractors::Extractor;
use crate::models::FlatBrandRecord;
use crate::services::flatten;

/// Walk the categories in order, one fetch at a time, and accumulate the
/// flattened rows. A failed category contributes zero rows and the loop
/// moves on; completeness is best-effort.
pub async fn run_pipeline<E>(extractor: &E, categories: &[Category]) -> Vec<FlatBrandRecord>
where
    E: Extractor + Sync,
{
    let mut records = Vec::new();

    for category in categories {
        match extractor.extract(category).await {
            Ok(body) => {
                info!(
                    category_id = category.id,
                    category_name = category.name,
                    "Category fetched"
                );
                records.extend(flatten(&body, category));
            }
            Err(err) => match err.status() {
                Some(status) => error!(
                    category_id = category.id,
                    category_name = category.name,
                    status = status.as_u16(),
                    "Category request failed"
                ),
                None => error!(
                    category_id = category.id,
                    category_name = category.name,
                    error = %err,
                    "Category request failed"
                ),
            },
        }
    }

    records
}
