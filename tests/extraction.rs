//! Integration tests driving the extractor and the full pipeline against a
//! local mock of the brands endpoint.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopee_brands_etl::categories::Category;
use shopee_brands_etl::config::Settings;
use shopee_brands_etl::extractors::{BrandExtractor, Extractor};
use shopee_brands_etl::services::run_pipeline;
use shopee_brands_etl::storage::CsvWriter;

const ENDPOINT_PATH: &str = "/api/v4/official_shop/get_shops_by_category";

fn extractor_for(server: &MockServer) -> BrandExtractor {
    let settings = Settings::default();
    BrandExtractor::with_endpoint(&settings, format!("{}{}", server.uri(), ENDPOINT_PATH))
        .unwrap()
}

fn brands_body() -> serde_json::Value {
    json!({
        "data": {
            "brands": [
                {
                    "index": 0,
                    "total": 2,
                    "brand_ids": [
                        {
                            "username": "acme",
                            "brand_name": "Acme Official Store",
                            "shopid": 12345,
                            "logo": "br-logo",
                            "logo_pc": "br-logo-pc",
                            "shop_collection_id": 189,
                            "ctime": 1609459200,
                            "brand_label": 2,
                            "shop_type": 4,
                            "redirect_url": "universal-link/shop/12345",
                            "entity_id": 9001
                        },
                        {
                            "username": "globex",
                            "brand_name": "Globex",
                            "shopid": 67890,
                            "logo": "br-logo-2",
                            "ctime": 1609459300
                        }
                    ]
                }
            ]
        }
    })
}

#[tokio::test]
async fn extract_parses_nested_brand_groups() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .and(query_param("need_zhuyin", "0"))
        .and(query_param("category_id", "-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(brands_body()))
        .mount(&server)
        .await;

    let extractor = extractor_for(&server);
    let category = Category { id: "-1", name: "Página Principal" };
    let response = extractor.extract(&category).await.unwrap();

    let brands = response.data.unwrap().brands.unwrap();
    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0].brand_ids.len(), 2);
    assert_eq!(brands[0].brand_ids[0].username, "acme");
    assert_eq!(brands[0].brand_ids[1].shopid, 67890);
}

#[tokio::test]
async fn extract_sends_browser_markers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .and(header("x-api-source", "pc"))
        .and(header("x-requested-with", "XMLHttpRequest"))
        .and(header("referer", "https://shopee.com.br/oficial/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(brands_body()))
        .mount(&server)
        .await;

    let extractor = extractor_for(&server);
    let category = Category { id: "11059974", name: "Beleza" };

    // Without the markers the mock doesn't match and the request fails.
    extractor.extract(&category).await.unwrap();
}

#[tokio::test]
async fn error_status_surfaces_to_caller() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let extractor = extractor_for(&server);
    let category = Category { id: "11059974", name: "Beleza" };
    let err = extractor.extract(&category).await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(403));
}

#[tokio::test]
async fn malformed_body_surfaces_as_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "brands": [{ "index": "not-a-number", "total": 1, "brand_ids": [] }] }
        })))
        .mount(&server)
        .await;

    let extractor = extractor_for(&server);
    let category = Category { id: "-1", name: "Página Principal" };

    assert!(extractor.extract(&category).await.is_err());
}

#[tokio::test]
async fn pipeline_writes_rows_for_reachable_categories_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .and(query_param("category_id", "-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(brands_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .and(query_param("category_id", "100"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let extractor = extractor_for(&server);
    let categories = [
        Category { id: "-1", name: "Main" },
        Category { id: "100", name: "Shoes" },
    ];

    let records = run_pipeline(&extractor, &categories).await;
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.category_name == "Main"));

    let dir = tempfile::tempdir().unwrap();
    let writer = CsvWriter::new(dir.path()).unwrap();
    let path = writer.write("brands_shopee_20260806.csv", &records).unwrap();

    let content = std::fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("https://shopee.com.br/12345"));
    assert!(lines[2].contains("globex"));
}
