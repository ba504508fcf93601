use crate::constants::{CARD_DURATION_SECS, CARD_STAGGER_SECS, HERO_SCALE_MIN};

/// How far down the page the visitor has scrolled, 0.0 to 1.0. A page that
/// does not scroll reports 0.0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if !(range > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

/// Hero content shrinks from full size to `HERO_SCALE_MIN` over the page.
pub fn hero_scale(progress: f64) -> f64 {
    let p = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
    1.0 - (1.0 - HERO_SCALE_MIN) * p
}

/// Entry delay for the `index`-th achievement card, in seconds.
pub fn card_delay(index: usize) -> f64 {
    index as f64 * CARD_STAGGER_SECS
}

pub fn card_duration() -> f64 {
    CARD_DURATION_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-20.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn test_hero_scale_maps_full_range() {
        assert_eq!(hero_scale(0.0), 1.0);
        assert!((hero_scale(1.0) - 0.7).abs() < 1e-12);
        assert!((hero_scale(0.5) - 0.85).abs() < 1e-12);
        assert_eq!(hero_scale(f64::NAN), 1.0);
    }

    #[test]
    fn test_cards_are_staggered() {
        assert_eq!(card_delay(0), 0.0);
        assert!((card_delay(2) - 0.2).abs() < 1e-12);
        assert_eq!(card_duration(), 0.5);
    }
}
