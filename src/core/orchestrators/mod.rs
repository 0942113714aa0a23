mod gallery_renderer;
mod globe_viewer;
mod page_orchestrator;
mod tilt_controller;
mod widget_url_synchronizer;

pub use gallery_renderer::GalleryRenderer;
pub use globe_viewer::{CameraFlight, GlobeViewer};
pub use page_orchestrator::PageOrchestrator;
pub use tilt_controller::TiltController;
pub use widget_url_synchronizer::WidgetUrlSynchronizer;
