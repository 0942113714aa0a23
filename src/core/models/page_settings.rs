use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::models::GlobeViewConfig;
use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GallerySection {
    pub mount_id: String,
    pub heading: String,
    pub query: String,
    #[serde(default = "default_gallery_limit")]
    pub limit: usize,
}

impl GallerySection {
    pub fn new(mount_id: &str, heading: &str, query: &str, limit: usize) -> Self {
        Self {
            mount_id: mount_id.to_string(),
            heading: heading.to_string(),
            query: query.to_string(),
            limit,
        }
    }
}

fn default_gallery_limit() -> usize {
    global_constants::DEFAULT_GALLERY_LIMIT
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageSettings {
    pub page_title: String,
    pub images_api_url: String,
    pub library_search_url: String,
    pub widget_base_url: String,
    pub galleries: Vec<GallerySection>,
    pub asset_fetch_concurrency: usize,
    pub output_path: PathBuf,
    pub max_tilt_degrees: f64,
    pub globe: GlobeViewConfig,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            page_title: global_constants::DEFAULT_PAGE_TITLE.to_string(),
            images_api_url: global_constants::NASA_IMAGES_API_URL.to_string(),
            library_search_url: global_constants::NASA_LIBRARY_SEARCH_URL.to_string(),
            widget_base_url: global_constants::SPOT_THE_STATION_WIDGET_URL.to_string(),
            galleries: vec![
                GallerySection::new(
                    global_constants::CUPOLA_GALLERY_MOUNT_ID,
                    global_constants::CUPOLA_GALLERY_HEADING,
                    global_constants::CUPOLA_GALLERY_QUERY,
                    global_constants::PAGE_GALLERY_LIMIT,
                ),
                GallerySection::new(
                    global_constants::NBL_GALLERY_MOUNT_ID,
                    global_constants::NBL_GALLERY_HEADING,
                    global_constants::NBL_GALLERY_QUERY,
                    global_constants::PAGE_GALLERY_LIMIT,
                ),
            ],
            asset_fetch_concurrency: global_constants::DEFAULT_ASSET_FETCH_CONCURRENCY,
            output_path: PathBuf::from(global_constants::DEFAULT_OUTPUT_FILE_NAME),
            max_tilt_degrees: global_constants::DEFAULT_MAX_TILT_DEGREES,
            globe: GlobeViewConfig::default(),
        }
    }
}

impl PageSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(&settings_path)?;
            return Ok(default_settings);
        }

        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(settings_path).map_err(|error| {
            anyhow::anyhow!("Could not read settings file {:?}: {}", settings_path, error)
        })?;
        let settings: PageSettings = serde_json::from_str(&contents)?;
        settings.validate()?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Images API URL: {}", settings.images_api_url);
        log::debug!("[SETTINGS] Galleries configured: {}", settings.galleries.len());

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.asset_fetch_concurrency == 0 {
            anyhow::bail!("asset_fetch_concurrency must be at least 1");
        }

        for gallery in &self.galleries {
            if gallery.mount_id.trim().is_empty() {
                anyhow::bail!("Gallery for query {:?} has an empty mount id", gallery.query);
            }
        }

        self.globe.validate()
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
