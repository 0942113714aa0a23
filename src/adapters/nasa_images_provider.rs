use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::core::interfaces::adapters::ImageLibraryProvider;
use crate::core::models::{AssetListing, SearchItem, SearchResult};
use crate::global_constants;

#[derive(Debug, Deserialize)]
struct CollectionEnvelope {
    collection: Option<Collection>,
}

#[derive(Debug, Deserialize)]
struct Collection {
    items: Option<Vec<Value>>,
}

impl CollectionEnvelope {
    fn into_items(self) -> Vec<Value> {
        self.collection
            .and_then(|collection| collection.items)
            .unwrap_or_default()
    }
}

/// Item fields are read loosely: a missing or wrongly typed value counts as absent and only
/// affects the record it belongs to.
fn string_at(record: &Value, pointer: &str) -> Option<String> {
    record
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn search_item_from_record(record: &Value) -> SearchItem {
    SearchItem::build(
        string_at(record, "/data/0/nasa_id"),
        string_at(record, "/data/0/title"),
        string_at(record, "/links/0/href"),
    )
}

fn parse_search_response(body: &str) -> Result<SearchResult> {
    let envelope: CollectionEnvelope = serde_json::from_str(body)?;
    let items = envelope
        .into_items()
        .iter()
        .map(search_item_from_record)
        .collect();

    Ok(SearchResult::from_items(items))
}

fn parse_asset_listing(body: &str) -> Result<AssetListing> {
    let envelope: CollectionEnvelope = serde_json::from_str(body)?;
    let hrefs = envelope
        .into_items()
        .iter()
        .filter_map(|record| string_at(record, "/href"))
        .collect();

    Ok(AssetListing::from_hrefs(hrefs))
}

pub struct NasaImagesProvider {
    client: reqwest::Client,
    api_base_url: String,
}

impl NasaImagesProvider {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn construct_search_url(&self, query: &str) -> String {
        format!(
            "{}/search?q={}&media_type={}",
            self.api_base_url,
            urlencoding::encode(query),
            global_constants::NASA_IMAGE_MEDIA_TYPE
        )
    }

    fn construct_asset_url(&self, item_id: &str) -> String {
        format!("{}/asset/{}", self.api_base_url, urlencoding::encode(item_id))
    }

    async fn fetch_body(&self, url: &str) -> Result<String> {
        log::debug!("[NASA_API] GET {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;

        log::debug!("[NASA_API] Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[async_trait]
impl ImageLibraryProvider for NasaImagesProvider {
    async fn search_images(&self, query: &str) -> Result<SearchResult> {
        let body = self.fetch_body(&self.construct_search_url(query)).await?;
        let result = parse_search_response(&body)?;

        log::info!(
            "[NASA_API] Search for {:?} returned {} items",
            query,
            result.items.len()
        );
        Ok(result)
    }

    async fn fetch_asset_listing(&self, item_id: &str) -> Result<AssetListing> {
        let body = self.fetch_body(&self.construct_asset_url(item_id)).await?;
        parse_asset_listing(&body)
    }
}
