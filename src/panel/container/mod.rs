mod toggle_handle;

use image::DynamicImage;

use super::controls::ControlBar;

pub use toggle_handle::{ToggleHandle, ToggleIcon};

/// What the plain image path currently shows in the container body.
#[derive(Debug, Clone, Default)]
pub enum DisplaySlot {
    #[default]
    Empty,
    Image { url: String, image: DynamicImage },
    Error(String),
}

/// The placeholder a panel draws into: a control bar on top, a body below.
///
/// A container with a renderer slot hands its body to a
/// [`GraphRenderer`](crate::renderer::GraphRenderer); one without falls back
/// to fetching and showing a plain image.
#[derive(Debug, Clone)]
pub struct Container {
    id: String,
    title: String,
    attached: bool,
    visible: bool,
    renderer_slot: bool,
    controls: Option<ControlBar>,
    display: DisplaySlot,
}

impl Container {
    pub fn new(id: impl Into<String>, title: impl Into<String>, renderer_slot: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            attached: true,
            visible: true,
            renderer_slot,
            controls: None,
            display: DisplaySlot::Empty,
        }
    }

    /// A placeholder that never made it onto the page.
    pub fn detached(id: impl Into<String>) -> Self {
        Self {
            attached: false,
            ..Self::new(id, "", false)
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn has_renderer_slot(&self) -> bool {
        self.renderer_slot
    }

    pub fn controls(&self) -> Option<&ControlBar> {
        self.controls.as_ref()
    }

    pub fn controls_mut(&mut self) -> Option<&mut ControlBar> {
        self.controls.as_mut()
    }

    pub(in crate::panel) fn set_controls(&mut self, controls: ControlBar) {
        self.controls = Some(controls);
    }

    pub fn display(&self) -> &DisplaySlot {
        &self.display
    }

    /// Replaces whatever was shown before.
    pub(in crate::panel) fn set_display(&mut self, display: DisplaySlot) {
        self.display = display;
    }
}
