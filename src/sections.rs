//! Section Tracking
//!
//! Which page section sits under the scroll reference point, and the
//! navigation maths that goes with it.

/// A page section's vertical extent, taken from layout
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open `[top, top + height)`
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// First section (document order) containing `scroll_offset + bias`
pub fn active_section(sections: &[SectionBounds], scroll_offset: f64, bias: f64) -> Option<&str> {
    let reference = scroll_offset + bias;
    sections
        .iter()
        .find(|section| section.contains(reference))
        .map(|section| section.id.as_str())
}

/// Whether a nav link `href` points at the section `id`
pub fn link_targets(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// Scroll destination for an in-page anchor, clamped at the page top
pub fn anchor_scroll_top(target_top: f64, offset: f64) -> f64 {
    (target_top - offset).max(0.0)
}

pub fn navbar_scrolled(scroll_offset: f64, threshold: f64) -> bool {
    scroll_offset > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("a", 0.0, 300.0),
            SectionBounds::new("b", 300.0, 300.0),
        ]
    }

    #[test]
    fn test_bias_moves_reference_into_next_section() {
        assert_eq!(active_section(&sections(), 200.0, 150.0), Some("b"));
    }

    #[test]
    fn test_range_is_half_open() {
        assert_eq!(active_section(&sections(), 149.0, 150.0), Some("a"));
        assert_eq!(active_section(&sections(), 150.0, 150.0), Some("b"));
        assert_eq!(active_section(&sections(), 450.0, 150.0), None);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let overlapping = vec![
            SectionBounds::new("outer", 0.0, 1000.0),
            SectionBounds::new("inner", 100.0, 200.0),
        ];
        assert_eq!(active_section(&overlapping, 50.0, 150.0), Some("outer"));
    }

    #[test]
    fn test_no_sections() {
        assert_eq!(active_section(&[], 0.0, 150.0), None);
    }

    #[test]
    fn test_link_targets() {
        assert!(link_targets("#about", "about"));
        assert!(!link_targets("about", "about"));
        assert!(!link_targets("#about-me", "about"));
        assert!(!link_targets("#", "about"));
    }

    #[test]
    fn test_anchor_scroll_top() {
        assert_eq!(anchor_scroll_top(500.0, 80.0), 420.0);
        assert_eq!(anchor_scroll_top(40.0, 80.0), 0.0);
    }

    #[test]
    fn test_navbar_scrolled() {
        assert!(!navbar_scrolled(50.0, 50.0));
        assert!(navbar_scrolled(51.0, 50.0));
    }
}
