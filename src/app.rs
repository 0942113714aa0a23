use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::adapters::{InMemoryPageDocument, NasaImagesProvider};
use crate::cli::{Commands, LocationArgs};
use crate::core::interfaces::adapters::ImageLibraryProvider;
use crate::core::interfaces::ports::PageDocument;
use crate::core::models::{
    CameraDestination, CameraState, PageSettings, PointerPosition, TiltStyle, ViewportRect,
    WidgetLocation,
};
use crate::core::orchestrators::{CameraFlight, GalleryRenderer, PageOrchestrator};
use crate::global_constants;
use crate::infrastructure;

const STANDALONE_GALLERY_MOUNT_ID: &str = "gallery";

pub struct OutreachApp {
    settings: PageSettings,
    image_library_provider: Arc<dyn ImageLibraryProvider>,
}

impl OutreachApp {
    pub fn build(settings: PageSettings) -> Self {
        log::info!("[APP] Using images API at {}", settings.images_api_url);

        let image_library_provider = Arc::new(NasaImagesProvider::new(&settings.images_api_url));

        Self {
            settings,
            image_library_provider,
        }
    }

    pub async fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Render { output, location } => {
                let output_path = self.render_page(output, &location).await?;
                println!("Page written to {}", output_path.display());
            }
            Commands::Gallery { query, limit } => {
                println!("{}", self.render_gallery(&query, limit).await);
            }
            Commands::WidgetUrl { location } => {
                println!("{}", self.widget_url(&location));
            }
            Commands::Tilt {
                pointers,
                moves_per_frame,
                width,
                height,
                leave,
            } => {
                let viewport = ViewportRect::sized(width, height);
                for style in self.replay_tilt(&pointers, moves_per_frame, viewport, leave) {
                    println!("{}", style.css_declarations());
                }
            }
            Commands::Globe { fly_to, reset } => {
                for line in self.run_globe(fly_to, reset).await? {
                    println!("{}", line);
                }
            }
        }

        Ok(())
    }

    async fn render_page(&self, output: Option<PathBuf>, location: &LocationArgs) -> Result<PathBuf> {
        let document = Arc::new(InMemoryPageDocument::build_from_settings(&self.settings));
        let mut orchestrator = self.page_orchestrator(document);
        orchestrator.load().await;

        if let Some(synchronizer) = orchestrator.widget_synchronizer() {
            for (field_id, value) in location_fields(location) {
                synchronizer.update_field(field_id, value);
            }
        }

        let page = orchestrator.render_page()?;
        let output_path = output.unwrap_or_else(|| self.settings.output_path.clone());
        infrastructure::write_page(&output_path, &page).await?;

        Ok(output_path)
    }

    async fn render_gallery(&self, query: &str, limit: usize) -> String {
        let document = Arc::new(InMemoryPageDocument::new());
        document.register_element(STANDALONE_GALLERY_MOUNT_ID);

        let renderer = GalleryRenderer::build(
            Arc::clone(&self.image_library_provider),
            document.clone(),
            &self.settings.library_search_url,
            self.settings.asset_fetch_concurrency,
        );
        renderer.render(query, STANDALONE_GALLERY_MOUNT_ID, limit).await;

        document
            .inner_html(STANDALONE_GALLERY_MOUNT_ID)
            .unwrap_or_default()
    }

    fn page_orchestrator(&self, document: Arc<InMemoryPageDocument>) -> PageOrchestrator {
        PageOrchestrator::build(
            Arc::clone(&self.image_library_provider),
            document,
            self.settings.clone(),
        )
    }

    /// Feeds pointer moves to the tilt controller, `moves_per_frame` of them between animation
    /// frames, and returns the style applied on each frame.
    fn replay_tilt(
        &self,
        pointers: &[PointerPosition],
        moves_per_frame: usize,
        viewport: ViewportRect,
        leave: bool,
    ) -> Vec<TiltStyle> {
        let document = Arc::new(InMemoryPageDocument::build_from_settings(&self.settings));
        let mut controller = self.page_orchestrator(document).create_tilt_controller(viewport);

        let mut frames = Vec::new();
        for batch in pointers.chunks(moves_per_frame.max(1)) {
            for pointer in batch {
                controller.on_pointer_move(*pointer);
            }
            frames.extend(controller.on_animation_frame());
        }
        if leave {
            frames.push(controller.on_pointer_leave());
        }

        log::debug!("[APP] Replayed {} pointer moves into {} frames", pointers.len(), frames.len());
        frames
    }

    async fn run_globe(&self, fly_to: Option<CameraDestination>, reset: bool) -> Result<Vec<String>> {
        let document = Arc::new(InMemoryPageDocument::new());
        document.register_element(global_constants::GLOBE_MOUNT_ID);
        let mut orchestrator = self.page_orchestrator(document);
        orchestrator.load().await;

        let viewer = orchestrator.globe_viewer_mut();
        let Some(initial_camera) = viewer.current_camera() else {
            anyhow::bail!("Globe viewer could not be initialized");
        };

        let mut report = vec![format!("Camera at {}", describe_camera(&initial_camera))];

        if let Some(destination) = fly_to {
            let camera = CameraState {
                destination,
                ..initial_camera
            };
            viewer.move_camera(camera);
            report.push(format!("Camera moved to {}", describe_camera(&camera)));
        }

        if reset {
            if let Some(flight) = viewer.reset_view() {
                report.push(describe_flight(&flight));
            }
        }

        Ok(report)
    }

    fn widget_url(&self, location: &LocationArgs) -> String {
        WidgetLocation::from_fields(
            location.city.as_deref().unwrap_or_default(),
            location.region.as_deref().unwrap_or_default(),
            location.country.as_deref().unwrap_or_default(),
        )
        .frame_url(&self.settings.widget_base_url)
    }
}

fn describe_camera(camera: &CameraState) -> String {
    format!(
        "lon {:.4}, lat {:.4}, height {:.0} m",
        camera.destination.longitude, camera.destination.latitude, camera.destination.height_meters
    )
}

fn describe_flight(flight: &CameraFlight) -> String {
    format!(
        "Reset flight from {} to {} over {}s",
        describe_camera(&flight.from),
        describe_camera(&flight.to),
        flight.duration_seconds
    )
}

fn location_fields(location: &LocationArgs) -> Vec<(&'static str, &str)> {
    [
        (global_constants::WIDGET_CITY_FIELD_ID, &location.city),
        (global_constants::WIDGET_REGION_FIELD_ID, &location.region),
        (global_constants::WIDGET_COUNTRY_FIELD_ID, &location.country),
    ]
    .into_iter()
    .filter_map(|(field_id, value)| value.as_deref().map(|value| (field_id, value)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    #[test]
    fn test_widget_url_without_location_uses_defaults() {
        let app = OutreachApp::build(PageSettings::default());

        let url = app.widget_url(&LocationArgs::default());

        assert_eq!(
            url,
            "https://spotthestation.nasa.gov/widget/index.cfm?city=New%20York&country=United_States&region=New_York"
        );
    }

    #[test]
    fn test_location_fields_only_includes_supplied_values() {
        let location = LocationArgs {
            city: Some("Houston".to_string()),
            region: None,
            country: Some("United_States".to_string()),
        };

        let fields = location_fields(&location);

        assert_eq!(
            fields,
            vec![("city", "Houston"), ("country", "United_States")]
        );
    }

    fn serve_status_once(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0u8; 4096];
                let _ = stream.read(&mut request);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{{}}",
                    status_line
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{}", address)
    }

    fn pointer_sequence() -> Vec<PointerPosition> {
        vec![
            PointerPosition::at(0.0, 0.0),
            PointerPosition::at(100.0, 50.0),
            PointerPosition::at(200.0, 100.0),
            PointerPosition::at(400.0, 100.0),
        ]
    }

    #[test]
    fn test_replay_tilt_applies_latest_move_per_frame() {
        let app = OutreachApp::build(PageSettings::default());

        let frames = app.replay_tilt(&pointer_sequence(), 2, ViewportRect::sized(400.0, 200.0), false);

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].rotate_y_degrees, -4.0);
        assert_eq!(frames[1].rotate_y_degrees, 8.0);
        assert_eq!(frames[1].rotate_x_degrees, 0.0);
    }

    #[test]
    fn test_replay_tilt_with_leave_ends_neutral() {
        let app = OutreachApp::build(PageSettings::default());

        let frames = app.replay_tilt(&pointer_sequence(), 1, ViewportRect::sized(400.0, 200.0), true);

        assert_eq!(frames.len(), 5);
        assert_eq!(frames.last(), Some(&TiltStyle::neutral()));
    }

    #[tokio::test]
    async fn test_run_globe_reset_flies_back_from_moved_camera() {
        let app = OutreachApp::build(PageSettings::default());
        let destination = CameraDestination {
            longitude: -74.0,
            latitude: 40.7,
            height_meters: 800_000.0,
        };

        let report = app.run_globe(Some(destination), true).await.unwrap();

        assert_eq!(
            report,
            vec![
                "Camera at lon -95.0930, lat 29.5593, height 2000000 m".to_string(),
                "Camera moved to lon -74.0000, lat 40.7000, height 800000 m".to_string(),
                "Reset flight from lon -74.0000, lat 40.7000, height 800000 m to lon -95.0930, lat 29.5593, height 2000000 m over 2s".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_run_globe_with_invalid_camera_config_fails() {
        let mut settings = PageSettings::default();
        settings.globe.initial_camera.destination.latitude = 120.0;
        let app = OutreachApp::build(settings);

        assert!(app.run_globe(None, true).await.is_err());
    }

    #[tokio::test]
    async fn test_render_gallery_with_server_error_prints_notice() {
        let settings = PageSettings {
            images_api_url: serve_status_once("500 Internal Server Error"),
            ..PageSettings::default()
        };
        let app = OutreachApp::build(settings);

        let markup = app.render_gallery("cupola", 3).await;

        assert!(markup.contains("Could not contact the NASA Images API"));
        assert!(!markup.contains("No results found"));
    }

    #[tokio::test]
    async fn test_render_gallery_against_unreachable_api_prints_notice() {
        let settings = PageSettings {
            images_api_url: "http://127.0.0.1:9".to_string(),
            ..PageSettings::default()
        };
        let app = OutreachApp::build(settings);

        let markup = app.render_gallery("cupola", 3).await;

        assert!(markup.contains("Could not contact the NASA Images API"));
    }
}
