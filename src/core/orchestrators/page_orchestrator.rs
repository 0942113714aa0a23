use std::sync::Arc;

use futures::future::join_all;

use crate::core::interfaces::adapters::ImageLibraryProvider;
use crate::core::interfaces::ports::PageDocument;
use crate::core::models::{PageSettings, TiltMapping, ViewportRect};
use crate::core::orchestrators::{GalleryRenderer, GlobeViewer, TiltController, WidgetUrlSynchronizer};
use crate::global_constants;
use crate::presentation::PageView;

pub struct PageOrchestrator {
    document: Arc<dyn PageDocument>,
    settings: PageSettings,
    gallery_renderer: GalleryRenderer,
    globe_viewer: GlobeViewer,
    widget_synchronizer: Option<WidgetUrlSynchronizer>,
}

impl PageOrchestrator {
    pub fn build(
        image_library_provider: Arc<dyn ImageLibraryProvider>,
        document: Arc<dyn PageDocument>,
        settings: PageSettings,
    ) -> Self {
        let gallery_renderer = GalleryRenderer::build(
            image_library_provider,
            Arc::clone(&document),
            &settings.library_search_url,
            settings.asset_fetch_concurrency,
        );
        let globe_viewer = GlobeViewer::new(settings.globe.clone());

        Self {
            document,
            settings,
            gallery_renderer,
            globe_viewer,
            widget_synchronizer: None,
        }
    }

    /// Content-loaded step: galleries whose mounts exist render side by side, then the widget
    /// form is wired and the globe created.
    pub async fn load(&mut self) {
        log::info!("[PAGE] Loading {} galleries", self.settings.galleries.len());

        let renders = self
            .settings
            .galleries
            .iter()
            .filter(|gallery| self.document.contains(&gallery.mount_id))
            .map(|gallery| {
                self.gallery_renderer
                    .render(&gallery.query, &gallery.mount_id, gallery.limit)
            });
        join_all(renders).await;

        if self.document.contains(global_constants::WIDGET_FRAME_ID) {
            self.widget_synchronizer = WidgetUrlSynchronizer::init(
                Arc::clone(&self.document),
                &self.settings.widget_base_url,
            );
        }

        if let Err(error) = self.globe_viewer.initialize(self.document.as_ref()) {
            log::error!("[PAGE] Failed to initialize globe viewer: {}", error);
        }
    }

    pub fn widget_synchronizer(&self) -> Option<&WidgetUrlSynchronizer> {
        self.widget_synchronizer.as_ref()
    }

    pub fn globe_viewer_mut(&mut self) -> &mut GlobeViewer {
        &mut self.globe_viewer
    }

    pub fn create_tilt_controller(&self, viewport: ViewportRect) -> TiltController {
        TiltController::build(
            Arc::clone(&self.document),
            global_constants::TILT_VIEWPORT_ID,
            viewport,
            TiltMapping::with_max_tilt(self.settings.max_tilt_degrees),
        )
    }

    pub fn render_page(&self) -> anyhow::Result<String> {
        PageView::build_from_document(self.document.as_ref(), &self.settings).render_page()
    }
}
