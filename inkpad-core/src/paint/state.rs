//! Paint-state flags and the erase snapshot.

use crate::color::Color;

/// The fill/stroke configuration of one drawing context.
///
/// `do_fill`/`do_stroke` control whether draw calls emit fill and stroke at
/// all; `fill_set`/`stroke_set` record whether the caller ever chose a color
/// explicitly, as opposed to relying on the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintState {
    pub do_fill: bool,
    pub do_stroke: bool,
    pub fill_set: bool,
    pub stroke_set: bool,
    pub fill_color: Color,
    pub stroke_color: Color,
}

impl Default for PaintState {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintState {
    /// White fill, black stroke, both enabled, neither explicitly set.
    pub fn new() -> Self {
        Self {
            do_fill: true,
            do_stroke: true,
            fill_set: false,
            stroke_set: false,
            fill_color: Color::white(),
            stroke_color: Color::black(),
        }
    }
}

/// The paint state captured when erase mode is entered, restored and
/// consumed when it exits. Owning the restore obligation as data keeps it
/// visible instead of burying it in backend state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EraseSnapshot {
    pub paint: PaintState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = PaintState::new();
        assert!(state.do_fill);
        assert!(state.do_stroke);
        assert!(!state.fill_set);
        assert!(!state.stroke_set);
        assert_eq!(state.fill_color.normalized(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(state.stroke_color.normalized(), [0.0, 0.0, 0.0, 1.0]);
    }
}
