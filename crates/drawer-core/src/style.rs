//! CSS values written by the drawer.

use std::fmt;

/// Vertical translation of the sheet container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Translate {
    /// Pushed below the viewport by its own height.
    OffScreen,
    /// Offset from the resting position; `Px(0.0)` is fully open.
    Px(f32),
}

impl Translate {
    pub const REST: Translate = Translate::Px(0.0);

    pub fn css(&self) -> String {
        match self {
            Translate::OffScreen => "translateY(100%)".to_string(),
            Translate::Px(px) => format!("translateY({px}px)"),
        }
    }

    /// Pixel offset, or `None` when the offset depends on the element's own height.
    pub fn px(&self) -> Option<f32> {
        match self {
            Translate::OffScreen => None,
            Translate::Px(px) => Some(*px),
        }
    }
}

impl fmt::Display for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// CSS timing functions used by the open/close animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "linear" => Some(Easing::Linear),
            "ease-in" => Some(Easing::EaseIn),
            "ease-out" => Some(Easing::EaseOut),
            "ease-in-out" => Some(Easing::EaseInOut),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionProperty {
    Transform,
    Opacity,
}

impl TransitionProperty {
    pub fn css(&self) -> &'static str {
        match self {
            TransitionProperty::Transform => "transform",
            TransitionProperty::Opacity => "opacity",
        }
    }
}

/// A single-property CSS transition declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub property: TransitionProperty,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(property: TransitionProperty, duration_ms: u32, easing: Easing) -> Self {
        Self {
            property,
            duration_ms,
            easing,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "{}ms {} {}",
            self.duration_ms,
            self.property.css(),
            self.easing.css()
        )
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}
