use crate::config::MenuLocation;

/// Content offset at which the menu is fully revealed.
pub fn open_offset(location: MenuLocation, menu_width: f32) -> f32 {
    match location {
        MenuLocation::Left => menu_width,
        MenuLocation::Right => -menu_width,
    }
}

/// Applies a drag translation to the offset recorded at gesture start.
///
/// Movement is only permitted in the direction that opens the menu while
/// closed, or closes it while open; the result is clamped to the resting
/// range. `None` means the drag points the wrong way and the offset must
/// not change.
pub fn clamp_offset(
    pan_origin: f32,
    translation: f32,
    menu_width: f32,
    is_open: bool,
    location: MenuLocation,
) -> Option<f32> {
    let opening = match location {
        MenuLocation::Left => translation > 0.0,
        MenuLocation::Right => translation < 0.0,
    };
    let closing = match location {
        MenuLocation::Left => translation < 0.0,
        MenuLocation::Right => translation > 0.0,
    };
    if !((opening && !is_open) || (closing && is_open)) {
        return None;
    }
    let candidate = pan_origin + translation;
    let clamped = match location {
        MenuLocation::Left => candidate.clamp(0.0, menu_width),
        MenuLocation::Right => candidate.clamp(-menu_width, 0.0),
    };
    Some(clamped)
}

/// How far the menu is revealed, 0.0 (closed) to 1.0 (fully open).
pub fn reveal_progress(offset: f32, menu_width: f32) -> f32 {
    (offset.abs() / menu_width).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_offset_sign_follows_location() {
        assert_eq!(open_offset(MenuLocation::Left, 260.0), 260.0);
        assert_eq!(open_offset(MenuLocation::Right, 260.0), -260.0);
    }

    #[test]
    fn left_menu_opens_with_positive_translation() {
        let offset = clamp_offset(0.0, 120.0, 260.0, false, MenuLocation::Left);
        assert_eq!(offset, Some(120.0));
    }

    #[test]
    fn left_menu_ignores_drag_away_from_menu_while_closed() {
        assert_eq!(clamp_offset(0.0, -80.0, 260.0, false, MenuLocation::Left), None);
    }

    #[test]
    fn right_menu_opens_with_negative_translation() {
        let offset = clamp_offset(0.0, -140.0, 260.0, false, MenuLocation::Right);
        assert_eq!(offset, Some(-140.0));
    }

    #[test]
    fn right_menu_ignores_drag_away_from_menu_while_closed() {
        assert_eq!(clamp_offset(0.0, 80.0, 260.0, false, MenuLocation::Right), None);
    }

    #[test]
    fn offset_never_exceeds_menu_width() {
        let offset = clamp_offset(0.0, 900.0, 260.0, false, MenuLocation::Left).unwrap();
        assert_eq!(offset, 260.0);
        let offset = clamp_offset(0.0, -900.0, 260.0, false, MenuLocation::Right).unwrap();
        assert_eq!(offset, -260.0);
    }

    #[test]
    fn closing_drag_cannot_push_past_rest() {
        let offset = clamp_offset(260.0, -500.0, 260.0, true, MenuLocation::Left).unwrap();
        assert_eq!(offset, 0.0);
        let offset = clamp_offset(-260.0, 500.0, 260.0, true, MenuLocation::Right).unwrap();
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn open_menu_partial_close() {
        let offset = clamp_offset(-260.0, 200.0, 260.0, true, MenuLocation::Right).unwrap();
        assert_eq!(offset, -60.0);
    }

    #[test]
    fn zero_translation_changes_nothing() {
        assert_eq!(clamp_offset(0.0, 0.0, 260.0, false, MenuLocation::Left), None);
        assert_eq!(clamp_offset(-260.0, 0.0, 260.0, true, MenuLocation::Right), None);
    }

    #[test]
    fn reveal_progress_is_bounded() {
        assert_eq!(reveal_progress(0.0, 260.0), 0.0);
        assert_eq!(reveal_progress(-130.0, 260.0), 0.5);
        assert_eq!(reveal_progress(260.0, 260.0), 1.0);
        assert_eq!(reveal_progress(-900.0, 260.0), 1.0);
    }
}
