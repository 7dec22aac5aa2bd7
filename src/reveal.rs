//! Reveal State Machine
//!
//! Each observed element goes Pending -> Visible exactly once. The effects of
//! that transition depend on what kind of element it is.

/// What an observed element is, as far as reveal effects go
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealKind {
    Generic,
    /// Skill entry holding a progress bar
    SkillItem,
    /// Card at `index` within the card grid
    StoryCard { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealState {
    Pending,
    Visible,
}

/// Side effects to apply when an element is revealed
#[derive(Debug, Clone, PartialEq)]
pub enum RevealEffect {
    /// Add the `visible` class
    Show,
    /// Grow the progress bar to `width` after `delay_ms`
    AnimateBar { delay_ms: u32, width: String },
    /// Fade/translate the card into place after `delay_ms`
    Stagger { delay_ms: u32 },
}

#[derive(Debug, Clone, Copy)]
pub struct RevealTiming {
    pub progress_delay_ms: u32,
    pub stagger_step_ms: u32,
}

/// Reveal bookkeeping for one observed element
#[derive(Debug, Clone)]
pub struct RevealTarget {
    kind: RevealKind,
    state: RevealState,
    /// Target width of the nested progress bar, if any
    bar_width: Option<String>,
    bar_animated: bool,
}

impl RevealTarget {
    pub fn new(kind: RevealKind) -> Self {
        Self {
            kind,
            state: RevealState::Pending,
            bar_width: None,
            bar_animated: false,
        }
    }

    pub fn with_bar_width(mut self, width: impl Into<String>) -> Self {
        self.bar_width = Some(width.into());
        self
    }

    #[cfg(test)]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[cfg(test)]
    pub fn bar_animated(&self) -> bool {
        self.bar_animated
    }

    /// Handle an intersection report. Only the first one while intersecting
    /// yields effects; the state never goes back to Pending.
    pub fn on_intersection(&mut self, is_intersecting: bool, timing: RevealTiming) -> Vec<RevealEffect> {
        if !is_intersecting || self.state == RevealState::Visible {
            return Vec::new();
        }
        self.state = RevealState::Visible;

        let mut effects = vec![RevealEffect::Show];
        match self.kind {
            RevealKind::Generic => {}
            RevealKind::SkillItem => {
                if let Some(width) = self.claim_bar_animation() {
                    effects.push(RevealEffect::AnimateBar {
                        delay_ms: timing.progress_delay_ms,
                        width,
                    });
                }
            }
            RevealKind::StoryCard { index } => {
                let delay_ms = u32::try_from(index)
                    .unwrap_or(u32::MAX)
                    .saturating_mul(timing.stagger_step_ms);
                effects.push(RevealEffect::Stagger { delay_ms });
            }
        }
        effects
    }

    fn claim_bar_animation(&mut self) -> Option<String> {
        if self.bar_animated {
            return None;
        }
        let width = self.bar_width.clone()?;
        self.bar_animated = true;
        Some(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMING: RevealTiming = RevealTiming {
        progress_delay_ms: 200,
        stagger_step_ms: 150,
    };

    #[test]
    fn test_generic_reveal_is_one_way() {
        let mut target = RevealTarget::new(RevealKind::Generic);
        assert!(target.on_intersection(false, TIMING).is_empty());
        assert_eq!(target.state(), RevealState::Pending);

        assert_eq!(target.on_intersection(true, TIMING), vec![RevealEffect::Show]);
        assert_eq!(target.state(), RevealState::Visible);

        // Scrolling out does not hide it again
        assert!(target.on_intersection(false, TIMING).is_empty());
        assert_eq!(target.state(), RevealState::Visible);
    }

    #[test]
    fn test_progress_bar_animates_once() {
        let mut target = RevealTarget::new(RevealKind::SkillItem).with_bar_width("85%");
        let first = target.on_intersection(true, TIMING);
        assert_eq!(
            first,
            vec![
                RevealEffect::Show,
                RevealEffect::AnimateBar {
                    delay_ms: 200,
                    width: "85%".to_string()
                }
            ]
        );
        assert!(target.bar_animated());

        assert!(target.on_intersection(true, TIMING).is_empty());
        target.on_intersection(false, TIMING);
        assert!(target.on_intersection(true, TIMING).is_empty());
    }

    #[test]
    fn test_skill_item_without_bar_only_shows() {
        let mut target = RevealTarget::new(RevealKind::SkillItem);
        assert_eq!(target.on_intersection(true, TIMING), vec![RevealEffect::Show]);
        assert!(!target.bar_animated());
    }

    #[test]
    fn test_story_cards_stagger_by_index() {
        let delays: Vec<_> = (0..3)
            .map(|index| {
                RevealTarget::new(RevealKind::StoryCard { index }).on_intersection(true, TIMING)
            })
            .collect();
        assert_eq!(delays[0][1], RevealEffect::Stagger { delay_ms: 0 });
        assert_eq!(delays[1][1], RevealEffect::Stagger { delay_ms: 150 });
        assert_eq!(delays[2][1], RevealEffect::Stagger { delay_ms: 300 });
    }
}
