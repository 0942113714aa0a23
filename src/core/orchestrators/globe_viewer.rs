use crate::core::interfaces::ports::PageDocument;
use crate::core::models::{CameraState, GlobeViewConfig};
use crate::global_constants;
use crate::presentation::GlobeMarkupView;

#[derive(Debug, Clone, PartialEq)]
pub struct GlobeSession {
    pub mount_id: String,
    pub camera: CameraState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GlobeLifecycle {
    Uninitialized,
    Ready(GlobeSession),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFlight {
    pub from: CameraState,
    pub to: CameraState,
    pub duration_seconds: f64,
}

/// Owns the globe widget's lifecycle so a second initialization is a no-op rather than a
/// duplicate viewer.
pub struct GlobeViewer {
    config: GlobeViewConfig,
    lifecycle: GlobeLifecycle,
}

impl GlobeViewer {
    pub fn new(config: GlobeViewConfig) -> Self {
        Self {
            config,
            lifecycle: GlobeLifecycle::Uninitialized,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.lifecycle, GlobeLifecycle::Ready(_))
    }

    /// Writes the viewer markup into the globe mount. Returns whether this call performed the
    /// setup; an absent mount or an already running viewer leaves everything untouched.
    pub fn initialize(&mut self, document: &dyn PageDocument) -> anyhow::Result<bool> {
        if self.is_ready() {
            log::debug!("[GLOBE] Viewer already initialized");
            return Ok(false);
        }

        let mount_id = global_constants::GLOBE_MOUNT_ID;
        if !document.contains(mount_id) {
            log::debug!("[GLOBE] Mount #{} not found, viewer not created", mount_id);
            return Ok(false);
        }

        self.config.validate()?;
        let markup = GlobeMarkupView::build_from_config(&self.config)?.render_markup()?;
        document.set_inner_html(mount_id, markup);

        self.lifecycle = GlobeLifecycle::Ready(GlobeSession {
            mount_id: mount_id.to_string(),
            camera: self.config.initial_camera,
        });

        log::info!(
            "[GLOBE] Viewer initialized at ({}, {}) with marker {:?}",
            self.config.initial_camera.destination.longitude,
            self.config.initial_camera.destination.latitude,
            self.config.marker.name
        );
        Ok(true)
    }

    pub fn current_camera(&self) -> Option<CameraState> {
        match &self.lifecycle {
            GlobeLifecycle::Ready(session) => Some(session.camera),
            GlobeLifecycle::Uninitialized => None,
        }
    }

    /// Records camera motion performed by the user inside the viewer.
    pub fn move_camera(&mut self, camera: CameraState) -> bool {
        match &mut self.lifecycle {
            GlobeLifecycle::Ready(session) => {
                session.camera = camera;
                true
            }
            GlobeLifecycle::Uninitialized => false,
        }
    }

    /// Reset button: fly back to the initial view.
    pub fn reset_view(&mut self) -> Option<CameraFlight> {
        let initial_camera = self.config.initial_camera;
        let duration_seconds = self.config.reset_flight_seconds;

        match &mut self.lifecycle {
            GlobeLifecycle::Ready(session) => {
                let flight = CameraFlight {
                    from: session.camera,
                    to: initial_camera,
                    duration_seconds,
                };
                session.camera = initial_camera;
                log::debug!(
                    "[GLOBE] Resetting camera in #{} over {}s",
                    session.mount_id,
                    duration_seconds
                );
                Some(flight)
            }
            GlobeLifecycle::Uninitialized => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryPageDocument;
    use crate::core::models::CameraDestination;

    fn create_globe_document() -> InMemoryPageDocument {
        let document = InMemoryPageDocument::new();
        document.register_element("globe-viewer");
        document
    }

    fn moved_camera() -> CameraState {
        let mut camera = CameraState {
            destination: CameraDestination {
                longitude: 37.6,
                latitude: 55.7,
                height_meters: 500_000.0,
            },
            ..GlobeViewConfig::default().initial_camera
        };
        camera.orientation.heading = 45.0;
        camera.orientation.pitch = -30.0;
        camera
    }

    #[test]
    fn test_initialize_writes_markup_and_becomes_ready() {
        let document = create_globe_document();
        let mut viewer = GlobeViewer::new(GlobeViewConfig::default());

        let initialized = viewer.initialize(&document).unwrap();

        assert!(initialized);
        assert!(viewer.is_ready());
        assert!(document
            .inner_html("globe-viewer")
            .unwrap()
            .contains("data-globe-config"));
        assert_eq!(
            viewer.current_camera(),
            Some(GlobeViewConfig::default().initial_camera)
        );
    }

    #[test]
    fn test_initialize_twice_is_noop() {
        let document = create_globe_document();
        let mut viewer = GlobeViewer::new(GlobeViewConfig::default());
        viewer.initialize(&document).unwrap();
        document.set_inner_html("globe-viewer", "<canvas></canvas>".to_string());

        let initialized_again = viewer.initialize(&document).unwrap();

        assert!(!initialized_again);
        assert_eq!(
            document.inner_html("globe-viewer").as_deref(),
            Some("<canvas></canvas>")
        );
    }

    #[test]
    fn test_initialize_without_mount_stays_uninitialized() {
        let document = InMemoryPageDocument::new();
        let mut viewer = GlobeViewer::new(GlobeViewConfig::default());

        assert!(!viewer.initialize(&document).unwrap());
        assert_eq!(viewer.lifecycle, GlobeLifecycle::Uninitialized);
        assert_eq!(viewer.reset_view(), None);
    }

    #[test]
    fn test_initialize_with_invalid_config_fails() {
        let document = create_globe_document();
        let mut config = GlobeViewConfig::default();
        config.initial_camera.destination.height_meters = 0.0;
        let mut viewer = GlobeViewer::new(config);

        assert!(viewer.initialize(&document).is_err());
        assert!(!viewer.is_ready());
    }

    #[test]
    fn test_reset_view_flies_back_to_initial_camera() {
        let document = create_globe_document();
        let mut viewer = GlobeViewer::new(GlobeViewConfig::default());
        viewer.initialize(&document).unwrap();
        assert!(viewer.move_camera(moved_camera()));

        let flight = viewer.reset_view().unwrap();

        assert_eq!(flight.from, moved_camera());
        assert_eq!(flight.to, GlobeViewConfig::default().initial_camera);
        assert_eq!(flight.duration_seconds, 2.0);
        assert_eq!(
            viewer.current_camera(),
            Some(GlobeViewConfig::default().initial_camera)
        );
    }

    #[test]
    fn test_move_camera_before_initialize_is_rejected() {
        let mut viewer = GlobeViewer::new(GlobeViewConfig::default());

        assert!(!viewer.move_camera(moved_camera()));
        assert_eq!(viewer.current_camera(), None);
    }
}
