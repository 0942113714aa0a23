use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use crate::core::interfaces::ports::PageDocument;
use crate::core::models::{PageSettings, TiltStyle};
use crate::global_constants;

#[derive(Debug, Clone, Default)]
struct PageElement {
    attributes: BTreeMap<String, String>,
    inner_html: String,
}

/// Element registry standing in for the browser DOM while the page is assembled.
#[derive(Default)]
pub struct InMemoryPageDocument {
    elements: Mutex<HashMap<String, PageElement>>,
}

impl InMemoryPageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every element the outreach page layout declares for these settings.
    pub fn build_from_settings(settings: &PageSettings) -> Self {
        let document = Self::new();

        document.register_element(global_constants::TILT_VIEWPORT_ID);
        document.set_attribute(
            global_constants::TILT_VIEWPORT_ID,
            "style",
            TiltStyle::neutral().css_declarations(),
        );

        for gallery in &settings.galleries {
            document.register_element(&gallery.mount_id);
        }

        document.register_element(global_constants::WIDGET_FORM_ID);
        for field_id in [
            global_constants::WIDGET_CITY_FIELD_ID,
            global_constants::WIDGET_REGION_FIELD_ID,
            global_constants::WIDGET_COUNTRY_FIELD_ID,
        ] {
            document.register_element(field_id);
            document.set_input_value(field_id, String::new());
        }
        document.register_element(global_constants::WIDGET_FRAME_ID);

        document.register_element(global_constants::GLOBE_MOUNT_ID);

        log::debug!(
            "[DOCUMENT] Registered {} elements",
            document.element_count()
        );
        document
    }

    pub fn register_element(&self, element_id: &str) {
        if let Ok(mut elements) = self.elements.lock() {
            elements.insert(element_id.to_string(), PageElement::default());
        }
    }

    #[cfg(test)]
    pub fn remove_element(&self, element_id: &str) -> bool {
        match self.elements.lock() {
            Ok(mut elements) => elements.remove(element_id).is_some(),
            Err(_) => false,
        }
    }

    pub fn element_count(&self) -> usize {
        self.elements
            .lock()
            .map(|elements| elements.len())
            .unwrap_or_default()
    }

    fn with_element<T>(&self, element_id: &str, read: impl FnOnce(&PageElement) -> T) -> Option<T> {
        let elements = self.elements.lock().ok()?;
        elements.get(element_id).map(read)
    }

    fn with_element_mut(&self, element_id: &str, write: impl FnOnce(&mut PageElement)) -> bool {
        let Ok(mut elements) = self.elements.lock() else {
            return false;
        };

        match elements.get_mut(element_id) {
            Some(element) => {
                write(element);
                true
            }
            None => {
                log::debug!("[DOCUMENT] Ignoring write to detached element #{}", element_id);
                false
            }
        }
    }
}

impl PageDocument for InMemoryPageDocument {
    fn contains(&self, element_id: &str) -> bool {
        self.with_element(element_id, |_| ()).is_some()
    }

    fn inner_html(&self, element_id: &str) -> Option<String> {
        self.with_element(element_id, |element| element.inner_html.clone())
    }

    fn set_inner_html(&self, element_id: &str, markup: String) -> bool {
        self.with_element_mut(element_id, |element| element.inner_html = markup)
    }

    fn attribute(&self, element_id: &str, name: &str) -> Option<String> {
        self.with_element(element_id, |element| element.attributes.get(name).cloned())
            .flatten()
    }

    fn set_attribute(&self, element_id: &str, name: &str, value: String) -> bool {
        self.with_element_mut(element_id, |element| {
            element.attributes.insert(name.to_string(), value);
        })
    }
}
