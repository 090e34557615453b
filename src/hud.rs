//! HUD model
//!
//! Panel visibility and displayed values, held as plain fields so a
//! renderer can draw them without looking anything up.

/// Hint shown while gravity pulls down
pub const HINT_FLIP_UP: &str = "Jump to flip to the ceiling";
/// Hint shown while gravity pulls up
pub const HINT_FLIP_DOWN: &str = "Jump to flip to the floor";

#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    /// "Press jump to start"
    pub start_panel: bool,
    /// Score and high score readout
    pub score_panel: bool,
    /// Controls hint
    pub controls_panel: bool,
    /// Game over banner
    pub lost_panel: bool,

    pub score: f32,
    pub high_score: f32,
    /// Current run is above the stored record
    pub breaking_high_score: bool,
    /// Text for the controls panel
    pub controls_hint: &'static str,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            start_panel: true,
            score_panel: false,
            controls_panel: true,
            lost_panel: false,
            score: 0.0,
            high_score: 0.0,
            breaking_high_score: false,
            controls_hint: HINT_FLIP_UP,
        }
    }
}

impl Hud {
    /// Panels for the very first load, before any run has started
    pub fn show_title(&mut self) {
        self.start_panel = true;
        self.score_panel = false;
        self.controls_panel = true;
        self.lost_panel = false;
    }

    /// Panels for an active run
    pub fn show_playing(&mut self) {
        self.start_panel = false;
        self.score_panel = true;
        self.controls_panel = true;
        self.lost_panel = false;
    }

    pub fn show_lost(&mut self) {
        self.controls_panel = false;
        self.lost_panel = true;
    }

    /// Pick the hint for the current gravity direction. Any vertical input
    /// dismisses the panel for the rest of the run.
    pub fn update_controls(&mut self, gravity_flipped: bool, vertical: f32) {
        self.controls_hint = if gravity_flipped {
            HINT_FLIP_DOWN
        } else {
            HINT_FLIP_UP
        };
        if vertical.abs() > 0.5 {
            self.controls_panel = false;
        }
    }

    pub fn score_text(&self) -> String {
        format!("{:.0}", self.score.floor())
    }

    pub fn high_score_text(&self) -> String {
        format!("{:.0}", self.high_score.floor())
    }
}
