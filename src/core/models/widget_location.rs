use crate::global_constants;

/// City, region and country fed to the Spot the Station widget, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetLocation {
    pub city: String,
    pub region: String,
    pub country: String,
}

impl Default for WidgetLocation {
    fn default() -> Self {
        Self {
            city: global_constants::DEFAULT_WIDGET_CITY.to_string(),
            region: global_constants::DEFAULT_WIDGET_REGION.to_string(),
            country: global_constants::DEFAULT_WIDGET_COUNTRY.to_string(),
        }
    }
}

impl WidgetLocation {
    pub fn from_fields(city: &str, region: &str, country: &str) -> Self {
        Self {
            city: field_or_default(city, global_constants::DEFAULT_WIDGET_CITY),
            region: field_or_default(region, global_constants::DEFAULT_WIDGET_REGION),
            country: field_or_default(country, global_constants::DEFAULT_WIDGET_COUNTRY),
        }
    }

    pub fn frame_url(&self, widget_base_url: &str) -> String {
        format!(
            "{}?city={}&country={}&region={}",
            widget_base_url,
            urlencoding::encode(&self.city),
            urlencoding::encode(&self.country),
            urlencoding::encode(&self.region)
        )
    }
}

fn field_or_default(value: &str, default_value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default_value.to_string()
    } else {
        trimmed.to_string()
    }
}
