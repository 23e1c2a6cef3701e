/// One pointer sample, mouse or touch.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerInput<N> {
    /// Vertical position in CSS pixels. `None` for touch events with no touch points.
    pub y: Option<f32>,
    pub time_ms: f64,
    /// Element the event was dispatched to.
    pub target: Option<N>,
}

impl<N> PointerInput<N> {
    pub fn at(y: f32, time_ms: f64) -> Self {
        Self {
            y: Some(y),
            time_ms,
            target: None,
        }
    }

    pub fn without_position(time_ms: f64) -> Self {
        Self {
            y: None,
            time_ms,
            target: None,
        }
    }

    pub fn with_target(mut self, target: N) -> Self {
        self.target = Some(target);
        self
    }
}

/// Input a drawer instance reacts to.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawerEvent<N> {
    /// Click on any trigger bound to this drawer.
    TriggerClick,
    /// Click on the backdrop.
    BackdropClick,
    /// Mouse-down or touch-start on the sheet container.
    PointerDown(PointerInput<N>),
    /// Mouse-move or touch-move anywhere in the document.
    PointerMove(PointerInput<N>),
    /// Mouse-up or touch-end anywhere in the document.
    PointerUp(PointerInput<N>),
}
