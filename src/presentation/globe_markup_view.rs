use askama::Template;

use crate::core::models::GlobeViewConfig;
use crate::global_constants;

/// Container handed to the third-party globe library. The viewer reads its configuration from
/// the `data-globe-config` attribute.
#[derive(Template)]
#[template(path = "globe.html")]
pub struct GlobeMarkupView {
    config_json: String,
    reset_button_id: &'static str,
    imagery_credit: String,
}

impl GlobeMarkupView {
    pub fn build_from_config(config: &GlobeViewConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config_json: serde_json::to_string(config)?,
            reset_button_id: global_constants::GLOBE_RESET_BUTTON_ID,
            imagery_credit: config.imagery.credit.clone(),
        })
    }

    pub fn render_markup(&self) -> anyhow::Result<String> {
        Ok(self.render()?)
    }
}
