/// Element tree of the page being built, addressed by element id.
///
/// Writers report whether the element was attached; writing to a missing or detached element
/// is not an error.
pub trait PageDocument: Send + Sync {
    fn contains(&self, element_id: &str) -> bool;

    fn inner_html(&self, element_id: &str) -> Option<String>;

    fn set_inner_html(&self, element_id: &str, markup: String) -> bool;

    fn attribute(&self, element_id: &str, name: &str) -> Option<String>;

    fn set_attribute(&self, element_id: &str, name: &str, value: String) -> bool;

    fn input_value(&self, element_id: &str) -> Option<String> {
        self.attribute(element_id, "value")
    }

    fn set_input_value(&self, element_id: &str, value: String) -> bool {
        self.set_attribute(element_id, "value", value)
    }
}
