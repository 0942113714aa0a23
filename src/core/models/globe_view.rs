use serde::{Deserialize, Serialize};

use crate::global_constants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CameraDestination {
    pub longitude: f64,
    pub latitude: f64,
    pub height_meters: f64,
}

/// Angles in degrees, in the heading/pitch/roll convention of the globe library.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CameraOrientation {
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CameraState {
    pub destination: CameraDestination,
    pub orientation: CameraOrientation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageryProvider {
    pub url_template: String,
    pub credit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapMarker {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobeViewConfig {
    pub initial_camera: CameraState,
    pub imagery: ImageryProvider,
    pub marker: MapMarker,
    pub reset_flight_seconds: f64,
}

impl Default for GlobeViewConfig {
    fn default() -> Self {
        Self {
            initial_camera: CameraState {
                destination: CameraDestination {
                    longitude: global_constants::DEFAULT_GLOBE_LONGITUDE,
                    latitude: global_constants::DEFAULT_GLOBE_LATITUDE,
                    height_meters: global_constants::DEFAULT_GLOBE_CAMERA_HEIGHT_METERS,
                },
                orientation: CameraOrientation {
                    heading: 0.0,
                    pitch: -90.0,
                    roll: 0.0,
                },
            },
            imagery: ImageryProvider {
                url_template: global_constants::DEFAULT_GLOBE_IMAGERY_URL.to_string(),
                credit: global_constants::DEFAULT_GLOBE_IMAGERY_CREDIT.to_string(),
            },
            marker: MapMarker {
                name: global_constants::DEFAULT_GLOBE_MARKER_NAME.to_string(),
                longitude: global_constants::DEFAULT_GLOBE_LONGITUDE,
                latitude: global_constants::DEFAULT_GLOBE_LATITUDE,
            },
            reset_flight_seconds: global_constants::DEFAULT_GLOBE_RESET_FLIGHT_SECONDS,
        }
    }
}

impl GlobeViewConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        let destination = &self.initial_camera.destination;
        if !(-180.0..=180.0).contains(&destination.longitude) {
            anyhow::bail!("Camera longitude out of range: {}", destination.longitude);
        }
        if !(-90.0..=90.0).contains(&destination.latitude) {
            anyhow::bail!("Camera latitude out of range: {}", destination.latitude);
        }
        if destination.height_meters <= 0.0 {
            anyhow::bail!("Camera height must be greater than zero");
        }
        if !self.imagery.url_template.contains("{z}") {
            anyhow::bail!("Imagery URL template must contain a {{z}} placeholder");
        }
        if self.reset_flight_seconds < 0.0 {
            anyhow::bail!("Reset flight duration cannot be negative");
        }
        Ok(())
    }
}
