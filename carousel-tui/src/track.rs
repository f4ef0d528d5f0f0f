//! The terminal as a carousel track.

use carousel::TrackHost;
use log::trace;

/// Track spanning the full terminal width.
///
/// Terminal columns are converted to pixels with a fixed cell width so the
/// carousel's pixel thresholds keep their meaning.
#[derive(Debug)]
pub struct TerminalTrack {
    columns: u16,
    cell_width_px: f32,
    transition: bool,
    layouts: u64,
    captured: Option<u64>,
}

impl TerminalTrack {
    pub fn new(columns: u16, cell_width_px: f32) -> Self {
        Self {
            columns,
            cell_width_px,
            transition: true,
            layouts: 0,
            captured: None,
        }
    }

    pub fn resize(&mut self, columns: u16) {
        self.columns = columns;
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn column_to_x(&self, column: u16) -> f32 {
        column as f32 * self.cell_width_px
    }

    pub fn transition(&self) -> bool {
        self.transition
    }

    /// Number of forced layouts so far.
    pub fn layouts(&self) -> u64 {
        self.layouts
    }

    pub fn captured(&self) -> Option<u64> {
        self.captured
    }
}

impl TrackHost for TerminalTrack {
    fn width(&self) -> f32 {
        self.column_to_x(self.columns)
    }

    fn set_transition(&mut self, enabled: bool) {
        self.transition = enabled;
    }

    // Drawing happens once per loop turn, so there is nothing to flush here.
    fn force_layout(&mut self) {
        self.layouts += 1;
        trace!("Forced layout #{}", self.layouts);
    }

    fn capture_pointer(&mut self, pointer_id: u64) {
        self.captured = Some(pointer_id);
    }

    fn release_pointer(&mut self, pointer_id: u64) {
        if self.captured == Some(pointer_id) {
            self.captured = None;
        }
    }
}
