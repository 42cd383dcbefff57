use crate::config::{MenuLocation, SidebarConfig};
use crate::geometry;
use tracing::trace;

/// Host-supplied predicate deciding whether a touch at the given x
/// coordinate may start a pan, on top of the edge-activation gate.
pub type TouchFilter = dyn Fn(f32) -> bool;

/// Phases of a pan gesture, mirroring the host's pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// A single pan update, in content-area coordinates.
#[derive(Debug, Clone, Copy)]
pub struct DragEvent {
    pub phase: DragPhase,
    /// X position where the gesture started.
    pub start_x: f32,
    /// Horizontal translation since `Began`.
    pub translation_x: f32,
    /// Horizontal velocity at release, points per second.
    pub velocity_x: f32,
}

/// Where a released drag settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// Run the full open transition.
    Open,
    /// Run the full close transition.
    Close,
    /// Return to fully open without leaving the open state.
    SnapOpen,
    /// Return to fully closed without having opened.
    SnapClosed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    Ignored,
    Dragging { offset: f32 },
    Released(Settle),
}

/// Interprets raw pan updates against the current panel state.
#[derive(Debug, Default)]
pub struct GestureInterpreter {
    pan_origin_x: f32,
    ignore_pan: bool,
}

impl GestureInterpreter {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn handle(
        &mut self,
        config: &SidebarConfig,
        is_open: bool,
        current_offset: f32,
        view_width: f32,
        touch_filter: Option<&TouchFilter>,
        event: &DragEvent,
    ) -> GestureOutcome {
        if config.disabled() {
            return GestureOutcome::Ignored;
        }
        match event.phase {
            DragPhase::Began => {
                self.pan_origin_x = current_offset;
                self.ignore_pan =
                    !self.accepts_touch(config, is_open, view_width, touch_filter, event.start_x);
                trace!(ignore = self.ignore_pan, origin = self.pan_origin_x, "pan began");
                GestureOutcome::Ignored
            }
            DragPhase::Changed => {
                if self.ignore_pan {
                    return GestureOutcome::Ignored;
                }
                match geometry::clamp_offset(
                    self.pan_origin_x,
                    event.translation_x,
                    config.menu_width(),
                    is_open,
                    config.menu_location(),
                ) {
                    Some(offset) => GestureOutcome::Dragging { offset },
                    None => GestureOutcome::Ignored,
                }
            }
            DragPhase::Ended | DragPhase::Cancelled => {
                if self.ignore_pan {
                    return GestureOutcome::Ignored;
                }
                let settle = self.settle(config, is_open, current_offset, event);
                trace!(?settle, "pan released");
                GestureOutcome::Released(settle)
            }
        }
    }

    /// Edge-activation gate: while closed the gesture must start within
    /// `gesture_active_area` of the menu edge; while open any position may
    /// drag-to-close. The host's touch filter can veto either way.
    pub fn accepts_touch(
        &self,
        config: &SidebarConfig,
        is_open: bool,
        view_width: f32,
        touch_filter: Option<&TouchFilter>,
        x: f32,
    ) -> bool {
        if let Some(filter) = touch_filter {
            if !filter(x) {
                return false;
            }
        }
        if is_open {
            return true;
        }
        match config.menu_location() {
            MenuLocation::Left => x <= config.gesture_active_area(),
            MenuLocation::Right => x >= view_width - config.gesture_active_area(),
        }
    }

    // Release decision, in priority order: explicit closing intent, then
    // fling velocity or distance threshold toward open, then snap back.
    fn settle(
        &self,
        config: &SidebarConfig,
        is_open: bool,
        offset: f32,
        event: &DragEvent,
    ) -> Settle {
        let width = config.menu_width();
        let closing_intent = is_open
            && match config.menu_location() {
                MenuLocation::Left => event.translation_x < 0.0,
                MenuLocation::Right => event.translation_x > 0.0,
            };
        if closing_intent {
            return if offset.abs() < width / 2.0 {
                Settle::Close
            } else {
                Settle::SnapOpen
            };
        }
        let toward_open = match config.menu_location() {
            MenuLocation::Left => {
                event.velocity_x > config.fling_velocity()
                    || offset > width * config.fling_fraction()
            }
            MenuLocation::Right => {
                event.velocity_x < -config.fling_velocity()
                    || offset < -width * config.fling_fraction()
            }
        };
        if toward_open {
            Settle::Open
        } else {
            Settle::SnapClosed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW_WIDTH: f32 = 400.0;

    fn began(start_x: f32) -> DragEvent {
        DragEvent {
            phase: DragPhase::Began,
            start_x,
            translation_x: 0.0,
            velocity_x: 0.0,
        }
    }

    fn changed(start_x: f32, translation_x: f32) -> DragEvent {
        DragEvent {
            phase: DragPhase::Changed,
            start_x,
            translation_x,
            velocity_x: 0.0,
        }
    }

    fn ended(start_x: f32, translation_x: f32, velocity_x: f32) -> DragEvent {
        DragEvent {
            phase: DragPhase::Ended,
            start_x,
            translation_x,
            velocity_x,
        }
    }

    fn right_config() -> SidebarConfig {
        SidebarConfig::default()
    }

    #[test]
    fn drag_outside_active_area_is_ignored_while_closed() {
        let config = right_config();
        let mut interp = GestureInterpreter::default();
        // 200 is well away from the right edge of a 400 wide view
        interp.handle(&config, false, 0.0, VIEW_WIDTH, None, &began(200.0));
        let outcome = interp.handle(&config, false, 0.0, VIEW_WIDTH, None, &changed(200.0, -140.0));
        assert_eq!(outcome, GestureOutcome::Ignored);
        let outcome = interp.handle(&config, false, 0.0, VIEW_WIDTH, None, &ended(200.0, -140.0, -900.0));
        assert_eq!(outcome, GestureOutcome::Ignored);
    }

    #[test]
    fn edge_drag_tracks_offset() {
        let config = right_config();
        let mut interp = GestureInterpreter::default();
        interp.handle(&config, false, 0.0, VIEW_WIDTH, None, &began(380.0));
        let outcome = interp.handle(&config, false, 0.0, VIEW_WIDTH, None, &changed(380.0, -140.0));
        assert_eq!(outcome, GestureOutcome::Dragging { offset: -140.0 });
    }

    #[test]
    fn release_past_distance_threshold_opens() {
        // menu_width 260, fraction 0.5: 140 > 130 even with a slow release
        let config = right_config();
        let mut interp = GestureInterpreter::default();
        interp.handle(&config, false, 0.0, VIEW_WIDTH, None, &began(380.0));
        let outcome = interp.handle(&config, false, -140.0, VIEW_WIDTH, None, &ended(380.0, -140.0, -200.0));
        assert_eq!(outcome, GestureOutcome::Released(Settle::Open));
    }

    #[test]
    fn fast_release_below_distance_threshold_still_opens() {
        let config = right_config();
        let mut interp = GestureInterpreter::default();
        interp.handle(&config, false, 0.0, VIEW_WIDTH, None, &began(380.0));
        let outcome = interp.handle(&config, false, -100.0, VIEW_WIDTH, None, &ended(380.0, -100.0, -900.0));
        assert_eq!(outcome, GestureOutcome::Released(Settle::Open));
    }

    #[test]
    fn slow_short_release_snaps_back_closed() {
        let config = right_config();
        let mut interp = GestureInterpreter::default();
        interp.handle(&config, false, 0.0, VIEW_WIDTH, None, &began(380.0));
        let outcome = interp.handle(&config, false, -50.0, VIEW_WIDTH, None, &ended(380.0, -50.0, -100.0));
        assert_eq!(outcome, GestureOutcome::Released(Settle::SnapClosed));
    }

    #[test]
    fn closing_intent_beats_fling_evaluation() {
        // Open, dragged most of the way closed, released with a fast
        // closing fling: must close, never bounce back open.
        let config = right_config();
        let mut interp = GestureInterpreter::default();
        interp.handle(&config, true, -260.0, VIEW_WIDTH, None, &began(100.0));
        let outcome = interp.handle(&config, true, -60.0, VIEW_WIDTH, None, &ended(100.0, 200.0, 900.0));
        assert_eq!(outcome, GestureOutcome::Released(Settle::Close));
    }

    #[test]
    fn short_closing_drag_snaps_back_open() {
        let config = right_config();
        let mut interp = GestureInterpreter::default();
        interp.handle(&config, true, -260.0, VIEW_WIDTH, None, &began(100.0));
        let outcome = interp.handle(&config, true, -210.0, VIEW_WIDTH, None, &ended(100.0, 50.0, 100.0));
        assert_eq!(outcome, GestureOutcome::Released(Settle::SnapOpen));
    }

    #[test]
    fn full_width_drag_to_close_accepted_while_open() {
        let config = right_config();
        let mut interp = GestureInterpreter::default();
        // Start position far from the active area; accepted because open.
        interp.handle(&config, true, -260.0, VIEW_WIDTH, None, &began(20.0));
        let outcome = interp.handle(&config, true, -260.0, VIEW_WIDTH, None, &changed(20.0, 200.0));
        assert_eq!(outcome, GestureOutcome::Dragging { offset: -60.0 });
    }

    #[test]
    fn left_menu_gate_and_settle() {
        let mut config = SidebarConfig::default();
        config.set_menu_location(MenuLocation::Left);
        let mut interp = GestureInterpreter::default();
        interp.handle(&config, false, 0.0, VIEW_WIDTH, None, &began(30.0));
        let outcome = interp.handle(&config, false, 0.0, VIEW_WIDTH, None, &changed(30.0, 150.0));
        assert_eq!(outcome, GestureOutcome::Dragging { offset: 150.0 });
        let outcome = interp.handle(&config, false, 150.0, VIEW_WIDTH, None, &ended(30.0, 150.0, 100.0));
        assert_eq!(outcome, GestureOutcome::Released(Settle::Open));
    }

    #[test]
    fn touch_filter_vetoes_edge_start() {
        let config = right_config();
        let mut interp = GestureInterpreter::default();
        let filter: Box<TouchFilter> = Box::new(|_| false);
        interp.handle(&config, false, 0.0, VIEW_WIDTH, Some(filter.as_ref()), &began(380.0));
        let outcome = interp.handle(&config, false, 0.0, VIEW_WIDTH, None, &changed(380.0, -140.0));
        assert_eq!(outcome, GestureOutcome::Ignored);
    }

    #[test]
    fn disabled_config_ignores_every_phase() {
        let mut config = right_config();
        config.set_disabled(true);
        let mut interp = GestureInterpreter::default();
        assert_eq!(
            interp.handle(&config, false, 0.0, VIEW_WIDTH, None, &began(380.0)),
            GestureOutcome::Ignored
        );
        assert_eq!(
            interp.handle(&config, false, 0.0, VIEW_WIDTH, None, &ended(380.0, -200.0, -900.0)),
            GestureOutcome::Ignored
        );
    }

    #[test]
    fn cancelled_behaves_like_ended() {
        let config = right_config();
        let mut interp = GestureInterpreter::default();
        interp.handle(&config, false, 0.0, VIEW_WIDTH, None, &began(380.0));
        let event = DragEvent {
            phase: DragPhase::Cancelled,
            start_x: 380.0,
            translation_x: -140.0,
            velocity_x: 0.0,
        };
        let outcome = interp.handle(&config, false, -140.0, VIEW_WIDTH, None, &event);
        assert_eq!(outcome, GestureOutcome::Released(Settle::Open));
    }
}
