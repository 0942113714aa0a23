use crate::core::models::{AssetListing, SearchItem};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCard {
    pub title: String,
    pub thumbnail_url: String,
    pub download_url: String,
    pub library_search_url: String,
}

impl ResolvedCard {
    /// Applies the fallback policy for one item. Only the resolved href distinguishes a listing
    /// that failed to load from one that loaded empty, so both degrade the same way.
    pub fn resolve(
        item: &SearchItem,
        query: &str,
        assets: &AssetListing,
        library_search_url: &str,
    ) -> Self {
        let preferred_href = assets.resolve_preferred_href();
        let thumbnail_url = item
            .thumbnail_href
            .clone()
            .unwrap_or_else(|| preferred_href.clone());
        let download_url = if preferred_href.is_empty() {
            thumbnail_url.clone()
        } else {
            preferred_href
        };

        Self {
            title: item.display_title(query).to_string(),
            thumbnail_url,
            download_url,
            library_search_url: library_search_url.to_string(),
        }
    }
}

pub fn build_library_search_url(base_url: &str, query: &str) -> String {
    format!("{}?q={}", base_url, urlencoding::encode(query))
}
