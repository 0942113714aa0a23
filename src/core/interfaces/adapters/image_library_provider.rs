use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{AssetListing, SearchResult};

#[async_trait]
pub trait ImageLibraryProvider: Send + Sync {
    async fn search_images(&self, query: &str) -> Result<SearchResult>;

    async fn fetch_asset_listing(&self, item_id: &str) -> Result<AssetListing>;
}
