use askama::Template;

use crate::core::interfaces::ports::PageDocument;
use crate::core::models::{PageSettings, TiltStyle};
use crate::global_constants;

struct GallerySectionView {
    heading: String,
    mount_id: String,
    markup: String,
}

/// The finished page, read back out of the document once every component has written to it.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageView {
    title: String,
    tilt_viewport_id: &'static str,
    max_tilt_degrees: f64,
    tilt_style: String,
    galleries: Vec<GallerySectionView>,
    widget_enabled: bool,
    widget_form_id: &'static str,
    widget_frame_id: &'static str,
    city_field_id: &'static str,
    region_field_id: &'static str,
    country_field_id: &'static str,
    city: String,
    region: String,
    country: String,
    frame_src: String,
    globe_enabled: bool,
    globe_mount_id: &'static str,
    globe_markup: String,
}

impl PageView {
    pub fn build_from_document(document: &dyn PageDocument, settings: &PageSettings) -> Self {
        let galleries = settings
            .galleries
            .iter()
            .filter_map(|gallery| {
                document
                    .inner_html(&gallery.mount_id)
                    .map(|markup| GallerySectionView {
                        heading: gallery.heading.clone(),
                        mount_id: gallery.mount_id.clone(),
                        markup,
                    })
            })
            .collect::<Vec<_>>();

        let tilt_style = document
            .attribute(global_constants::TILT_VIEWPORT_ID, "style")
            .unwrap_or_else(|| TiltStyle::neutral().css_declarations());

        let widget_enabled = document.contains(global_constants::WIDGET_FORM_ID)
            && document.contains(global_constants::WIDGET_FRAME_ID);

        log::debug!(
            "[PAGE_VIEW] Building page with {} galleries, widget={}",
            galleries.len(),
            widget_enabled
        );

        Self {
            title: settings.page_title.clone(),
            tilt_viewport_id: global_constants::TILT_VIEWPORT_ID,
            max_tilt_degrees: settings.max_tilt_degrees,
            tilt_style,
            galleries,
            widget_enabled,
            widget_form_id: global_constants::WIDGET_FORM_ID,
            widget_frame_id: global_constants::WIDGET_FRAME_ID,
            city_field_id: global_constants::WIDGET_CITY_FIELD_ID,
            region_field_id: global_constants::WIDGET_REGION_FIELD_ID,
            country_field_id: global_constants::WIDGET_COUNTRY_FIELD_ID,
            city: document
                .input_value(global_constants::WIDGET_CITY_FIELD_ID)
                .unwrap_or_default(),
            region: document
                .input_value(global_constants::WIDGET_REGION_FIELD_ID)
                .unwrap_or_default(),
            country: document
                .input_value(global_constants::WIDGET_COUNTRY_FIELD_ID)
                .unwrap_or_default(),
            frame_src: document
                .attribute(global_constants::WIDGET_FRAME_ID, "src")
                .unwrap_or_default(),
            globe_enabled: document.contains(global_constants::GLOBE_MOUNT_ID),
            globe_mount_id: global_constants::GLOBE_MOUNT_ID,
            globe_markup: document
                .inner_html(global_constants::GLOBE_MOUNT_ID)
                .unwrap_or_default(),
        }
    }

    pub fn render_page(&self) -> anyhow::Result<String> {
        Ok(self.render()?)
    }
}
