use std::sync::Arc;

use crate::core::interfaces::ports::PageDocument;
use crate::core::models::WidgetLocation;
use crate::global_constants;

/// Keeps the Spot the Station frame pointed at the location typed into the widget form.
pub struct WidgetUrlSynchronizer {
    document: Arc<dyn PageDocument>,
    widget_base_url: String,
}

impl WidgetUrlSynchronizer {
    /// Returns `None` unless both the form and the frame are present. On success the frame
    /// source is applied once before returning.
    pub fn init(document: Arc<dyn PageDocument>, widget_base_url: &str) -> Option<Self> {
        if !document.contains(global_constants::WIDGET_FORM_ID)
            || !document.contains(global_constants::WIDGET_FRAME_ID)
        {
            log::debug!("[WIDGET] Form or frame missing, synchronizer not wired");
            return None;
        }

        let synchronizer = Self {
            document,
            widget_base_url: widget_base_url.to_string(),
        };
        synchronizer.handle_input();

        log::info!("[WIDGET] Spot the Station synchronizer initialized");
        Some(synchronizer)
    }

    pub fn current_location(&self) -> WidgetLocation {
        WidgetLocation::from_fields(
            &self.read_field(global_constants::WIDGET_CITY_FIELD_ID),
            &self.read_field(global_constants::WIDGET_REGION_FIELD_ID),
            &self.read_field(global_constants::WIDGET_COUNTRY_FIELD_ID),
        )
    }

    /// Input event anywhere in the form: recompute the frame source from the current fields.
    pub fn handle_input(&self) -> String {
        let frame_url = self.current_location().frame_url(&self.widget_base_url);

        log::debug!("[WIDGET] Frame source set to {}", frame_url);
        self.document.set_attribute(
            global_constants::WIDGET_FRAME_ID,
            "src",
            frame_url.clone(),
        );

        frame_url
    }

    /// Types `value` into one of the form's fields and fires the input event.
    pub fn update_field(&self, field_id: &str, value: &str) -> String {
        if !self.document.set_input_value(field_id, value.to_string()) {
            log::warn!("[WIDGET] Field #{} not found in form", field_id);
        }

        self.handle_input()
    }

    fn read_field(&self, field_id: &str) -> String {
        self.document.input_value(field_id).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryPageDocument;

    const WIDGET_URL: &str = "https://spotthestation.nasa.gov/widget/index.cfm";

    fn create_widget_document() -> Arc<InMemoryPageDocument> {
        let document = Arc::new(InMemoryPageDocument::new());
        document.register_element("sts-form");
        document.register_element("sts-frame");
        for field_id in ["city", "region", "country"] {
            document.register_element(field_id);
        }
        document
    }

    fn frame_src(document: &InMemoryPageDocument) -> String {
        document.attribute("sts-frame", "src").unwrap_or_default()
    }

    #[test]
    fn test_init_without_frame_is_noop() {
        let document = Arc::new(InMemoryPageDocument::new());
        document.register_element("sts-form");

        let synchronizer = WidgetUrlSynchronizer::init(document.clone(), WIDGET_URL);

        assert!(synchronizer.is_none());
    }

    #[test]
    fn test_init_without_form_is_noop() {
        let document = Arc::new(InMemoryPageDocument::new());
        document.register_element("sts-frame");

        let synchronizer = WidgetUrlSynchronizer::init(document.clone(), WIDGET_URL);

        assert!(synchronizer.is_none());
        assert_eq!(document.attribute("sts-frame", "src"), None);
    }

    #[test]
    fn test_init_applies_defaults_immediately() {
        let document = create_widget_document();

        let synchronizer = WidgetUrlSynchronizer::init(document.clone(), WIDGET_URL);

        assert!(synchronizer.is_some());
        let src = frame_src(&document);
        assert!(src.contains("city=New%20York"));
        assert!(src.contains("region=New_York"));
        assert!(src.contains("country=United_States"));
    }

    #[test]
    fn test_update_field_percent_encodes_city_with_space() {
        let document = create_widget_document();
        let synchronizer = WidgetUrlSynchronizer::init(document.clone(), WIDGET_URL).unwrap();

        let url = synchronizer.update_field("city", "Los Angeles");

        assert_eq!(frame_src(&document), url);
        assert_eq!(
            url,
            "https://spotthestation.nasa.gov/widget/index.cfm?city=Los%20Angeles&country=United_States&region=New_York"
        );
    }

    #[test]
    fn test_handle_input_trims_and_restores_defaults_when_cleared() {
        let document = create_widget_document();
        let synchronizer = WidgetUrlSynchronizer::init(document.clone(), WIDGET_URL).unwrap();

        synchronizer.update_field("country", "  Canada  ");
        synchronizer.update_field("region", "Ontario");
        let url = synchronizer.update_field("region", "   ");

        assert!(url.contains("country=Canada&"));
        assert!(url.ends_with("region=New_York"));
    }

    #[test]
    fn test_handle_input_is_idempotent() {
        let document = create_widget_document();
        let synchronizer = WidgetUrlSynchronizer::init(document.clone(), WIDGET_URL).unwrap();
        synchronizer.update_field("city", "Houston");

        let first = synchronizer.handle_input();
        let second = synchronizer.handle_input();

        assert_eq!(first, second);
        assert_eq!(synchronizer.current_location().city, "Houston");
    }
}
