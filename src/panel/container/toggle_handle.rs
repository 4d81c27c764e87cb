/// Chevron shown on the toggle handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Collapsed,
    Expanded,
}

impl ToggleIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ToggleIcon::Collapsed => "▸",
            ToggleIcon::Expanded => "▾",
        }
    }
}

/// External element whose clicks open and close a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleHandle {
    id: String,
    icon: ToggleIcon,
}

impl ToggleHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icon: ToggleIcon::Collapsed,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn icon(&self) -> ToggleIcon {
        self.icon
    }

    pub(in crate::panel) fn set_icon(&mut self, icon: ToggleIcon) {
        self.icon = icon;
    }
}
