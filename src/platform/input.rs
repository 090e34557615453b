//! Per-frame input

/// Input for one simulation step.
///
/// `jump` and `cancel` are press edges: true only on the frame the button
/// went down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Jump / flip gravity
    pub jump: bool,
    /// Restart the session
    pub cancel: bool,
    /// Vertical stick/keys in [-1, 1]; drives the controls hint only
    pub vertical: f32,
}

/// Converts a held button level into press edges
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    held: bool,
}

impl ButtonState {
    /// Feed the current level; returns true on the down edge
    pub fn update(&mut self, held: bool) -> bool {
        let pressed = held && !self.held;
        self.held = held;
        pressed
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}
