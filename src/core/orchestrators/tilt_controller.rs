use std::sync::Arc;

use crate::core::interfaces::ports::PageDocument;
use crate::core::models::{PointerPosition, TiltMapping, TiltStyle, ViewportRect};

/// Drives the hero tilt effect. Pointer moves between two animation frames collapse into the
/// latest one; only that position is mapped and written to the viewport's style.
pub struct TiltController {
    document: Arc<dyn PageDocument>,
    viewport_id: String,
    viewport: ViewportRect,
    mapping: TiltMapping,
    pending_pointer: Option<PointerPosition>,
}

impl TiltController {
    pub fn build(
        document: Arc<dyn PageDocument>,
        viewport_id: &str,
        viewport: ViewportRect,
        mapping: TiltMapping,
    ) -> Self {
        log::debug!(
            "[TILT] Controller for #{} with max tilt {}deg",
            viewport_id,
            mapping.max_tilt_degrees
        );

        Self {
            document,
            viewport_id: viewport_id.to_string(),
            viewport,
            mapping,
            pending_pointer: None,
        }
    }

    /// Records the pointer. Returns true when the caller must schedule an animation frame,
    /// which happens only when none is already pending.
    pub fn on_pointer_move(&mut self, pointer: PointerPosition) -> bool {
        let frame_needed = self.pending_pointer.is_none();
        self.pending_pointer = Some(pointer);
        frame_needed
    }

    pub fn on_animation_frame(&mut self) -> Option<TiltStyle> {
        let pointer = self.pending_pointer.take()?;
        let style = self.mapping.map(pointer, self.viewport);
        self.apply(style);
        Some(style)
    }

    pub fn on_pointer_leave(&mut self) -> TiltStyle {
        self.pending_pointer = None;
        let style = TiltStyle::neutral();
        self.apply(style);
        style
    }

    fn apply(&self, style: TiltStyle) {
        if !self
            .document
            .set_attribute(&self.viewport_id, "style", style.css_declarations())
        {
            log::debug!("[TILT] Viewport #{} not attached", self.viewport_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryPageDocument;

    fn create_controller() -> (TiltController, Arc<InMemoryPageDocument>) {
        let document = Arc::new(InMemoryPageDocument::new());
        document.register_element("tilt-viewport");
        let controller = TiltController::build(
            document.clone(),
            "tilt-viewport",
            ViewportRect::sized(400.0, 200.0),
            TiltMapping::with_max_tilt(10.0),
        );
        (controller, document)
    }

    #[test]
    fn test_only_first_move_requests_a_frame() {
        let (mut controller, _document) = create_controller();

        assert!(controller.on_pointer_move(PointerPosition::at(10.0, 10.0)));
        assert!(!controller.on_pointer_move(PointerPosition::at(20.0, 20.0)));
        assert!(!controller.on_pointer_move(PointerPosition::at(30.0, 30.0)));
    }

    #[test]
    fn test_animation_frame_applies_latest_position_only() {
        let (mut controller, document) = create_controller();
        controller.on_pointer_move(PointerPosition::at(0.0, 0.0));
        controller.on_pointer_move(PointerPosition::at(400.0, 100.0));

        let style = controller.on_animation_frame().unwrap();

        assert_eq!(style.rotate_y_degrees, 10.0);
        assert_eq!(style.rotate_x_degrees, 0.0);
        assert_eq!(
            document.attribute("tilt-viewport", "style"),
            Some(style.css_declarations())
        );
        assert_eq!(controller.on_animation_frame(), None);
    }

    #[test]
    fn test_animation_frame_without_pending_move_does_nothing() {
        let (mut controller, document) = create_controller();

        assert_eq!(controller.on_animation_frame(), None);
        assert_eq!(document.attribute("tilt-viewport", "style"), None);
    }

    #[test]
    fn test_next_move_after_frame_requests_new_frame() {
        let (mut controller, _document) = create_controller();
        controller.on_pointer_move(PointerPosition::at(10.0, 10.0));
        controller.on_animation_frame();

        assert!(controller.on_pointer_move(PointerPosition::at(50.0, 50.0)));
    }

    #[test]
    fn test_pointer_leave_resets_to_neutral_and_drops_pending_move() {
        let (mut controller, document) = create_controller();
        controller.on_pointer_move(PointerPosition::at(0.0, 0.0));
        controller.on_animation_frame();
        controller.on_pointer_move(PointerPosition::at(400.0, 200.0));

        let style = controller.on_pointer_leave();

        assert_eq!(style, TiltStyle::neutral());
        assert_eq!(controller.on_animation_frame(), None);
        assert_eq!(
            document.attribute("tilt-viewport", "style"),
            Some(TiltStyle::neutral().css_declarations())
        );
    }
}
