use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::core::interfaces::adapters::ImageLibraryProvider;
use crate::core::interfaces::ports::PageDocument;
use crate::core::models::{build_library_search_url, AssetListing, ResolvedCard, SearchItem};
use crate::presentation::{GalleryView, NoticeView};

pub struct GalleryRenderer {
    image_library_provider: Arc<dyn ImageLibraryProvider>,
    document: Arc<dyn PageDocument>,
    library_search_url: String,
    asset_fetch_concurrency: usize,
}

impl GalleryRenderer {
    pub fn build(
        image_library_provider: Arc<dyn ImageLibraryProvider>,
        document: Arc<dyn PageDocument>,
        library_search_url: &str,
        asset_fetch_concurrency: usize,
    ) -> Self {
        Self {
            image_library_provider,
            document,
            library_search_url: library_search_url.to_string(),
            asset_fetch_concurrency: asset_fetch_concurrency.max(1),
        }
    }

    /// Fills the mount with cards for `query`. Nothing is returned and no error escapes: a
    /// failed search leaves a notice in the mount instead.
    pub async fn render(&self, query: &str, mount_id: &str, limit: usize) {
        if !self.document.contains(mount_id) {
            log::debug!("[GALLERY] Mount #{} not found, skipping {:?}", mount_id, query);
            return;
        }

        self.document
            .set_inner_html(mount_id, NoticeView::loading(query).render_markup());

        let markup = match self.build_gallery_markup(query, limit).await {
            Ok(markup) => markup,
            Err(error) => {
                log::warn!("[GALLERY] Search for {:?} failed: {}", query, error);
                NoticeView::api_unreachable().render_markup()
            }
        };

        if !self.document.set_inner_html(mount_id, markup) {
            log::debug!("[GALLERY] Mount #{} was detached before rendering finished", mount_id);
        }
    }

    /// Renders the gallery fragment for `query` without touching the document.
    pub async fn build_gallery_markup(&self, query: &str, limit: usize) -> anyhow::Result<String> {
        let items = self
            .image_library_provider
            .search_images(query)
            .await?
            .first_items(limit);

        if items.is_empty() {
            log::info!("[GALLERY] No results for {:?}", query);
            return Ok(NoticeView::no_results(query).render_markup());
        }

        let library_search_url = build_library_search_url(&self.library_search_url, query);
        let cards = stream::iter(items.iter())
            .map(|item| self.resolve_card(item, query, &library_search_url))
            .buffered(self.asset_fetch_concurrency)
            .collect::<Vec<_>>()
            .await;

        log::info!("[GALLERY] Rendered {} cards for {:?}", cards.len(), query);
        GalleryView::build_from_cards(&cards).render_markup()
    }

    async fn resolve_card(
        &self,
        item: &SearchItem,
        query: &str,
        library_search_url: &str,
    ) -> ResolvedCard {
        let assets = self.fetch_assets_or_empty(item).await;
        ResolvedCard::resolve(item, query, &assets, library_search_url)
    }

    async fn fetch_assets_or_empty(&self, item: &SearchItem) -> AssetListing {
        let Some(item_id) = item.id.as_deref() else {
            log::debug!("[GALLERY] Item without id, skipping asset lookup");
            return AssetListing::default();
        };

        match self.image_library_provider.fetch_asset_listing(item_id).await {
            Ok(assets) => assets,
            Err(error) => {
                log::debug!("[GALLERY] Asset listing for {} unavailable: {}", item_id, error);
                AssetListing::default()
            }
        }
    }
}
