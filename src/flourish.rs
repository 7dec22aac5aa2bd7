//! Decorative Effects
//!
//! Maths for the purely cosmetic mouse and scroll effects.

/// 3D tilt of the profile frame following the pointer
pub fn tilt_transform(
    rect_left: f64,
    rect_top: f64,
    width: f64,
    height: f64,
    mouse_x: f64,
    mouse_y: f64,
    max_degrees: f64,
) -> String {
    if width <= 0.0 || height <= 0.0 {
        return resting_transform();
    }
    let dx = mouse_x - (rect_left + width / 2.0);
    let dy = mouse_y - (rect_top + height / 2.0);
    let rotate_x = (dy / height) * max_degrees;
    // `+ 0.0` normalises -0 so a centred pointer renders "0deg"
    let rotate_y = (dx / width) * -max_degrees + 0.0;
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg)",
        rotate_x, rotate_y
    )
}

pub fn resting_transform() -> String {
    "perspective(1000px) rotateX(0deg) rotateY(0deg)".to_string()
}

/// Hover colour for a social link's `data-platform`
pub fn platform_color(platform: &str) -> &'static str {
    match platform {
        "github" => "#333",
        "linkedin" => "#0077b5",
        "twitter" => "#1da1f2",
        "dribbble" => "#ea4c89",
        _ => "var(--accent-primary)",
    }
}

pub const TWINKLE_ANIMATION: &str = "gentleTwinkle 0.6s ease-in-out 2";

/// Vertical parallax offset of the `index`-th floating shape
pub fn parallax_offset(scroll_y: f64, index: usize, base: f64, step: f64) -> f64 {
    scroll_y * (base + index as f64 * step)
}

pub fn is_mobile(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width <= breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_at_centre_is_flat() {
        let t = tilt_transform(0.0, 0.0, 200.0, 100.0, 100.0, 50.0, 5.0);
        assert_eq!(t, "perspective(1000px) rotateX(0deg) rotateY(0deg)");
    }

    #[test]
    fn test_tilt_at_corner() {
        // Bottom-right corner: half a frame away on both axes
        let t = tilt_transform(0.0, 0.0, 200.0, 100.0, 200.0, 100.0, 5.0);
        assert_eq!(t, "perspective(1000px) rotateX(2.5deg) rotateY(-2.5deg)");
    }

    #[test]
    fn test_tilt_degenerate_rect() {
        assert_eq!(tilt_transform(0.0, 0.0, 0.0, 0.0, 5.0, 5.0, 5.0), resting_transform());
    }

    #[test]
    fn test_platform_colors() {
        assert_eq!(platform_color("linkedin"), "#0077b5");
        assert_eq!(platform_color("mastodon"), "var(--accent-primary)");
    }

    #[test]
    fn test_parallax_speeds_up_per_shape() {
        assert!((parallax_offset(100.0, 0, 0.1, 0.05) - 10.0).abs() < 1e-9);
        assert!((parallax_offset(100.0, 2, 0.1, 0.05) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_mobile_breakpoint() {
        assert!(is_mobile(768.0, 768.0));
        assert!(!is_mobile(769.0, 768.0));
    }
}
