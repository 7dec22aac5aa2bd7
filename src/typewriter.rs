//! Typewriter Effect
//!
//! Types each role out one character at a time, holds it, deletes it, and
//! moves on to the next role.

use crate::config::TypewriterConfig;

#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<Vec<char>>,
    role: usize,
    /// Characters currently shown
    shown: usize,
    deleting: bool,
    type_ms: u32,
    delete_ms: u32,
    hold_ms: u32,
}

/// Text to display and how long to wait before the next step
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub text: String,
    pub next_delay_ms: u32,
}

impl Typewriter {
    /// None when there is nothing to type
    pub fn new(config: &TypewriterConfig) -> Option<Self> {
        let roles: Vec<Vec<char>> = config
            .roles
            .iter()
            .filter(|role| !role.is_empty())
            .map(|role| role.chars().collect())
            .collect();
        if roles.is_empty() {
            return None;
        }
        Some(Self {
            roles,
            role: 0,
            shown: 0,
            deleting: false,
            type_ms: config.type_ms,
            delete_ms: config.delete_ms,
            hold_ms: config.hold_ms,
        })
    }

    pub fn step(&mut self) -> Frame {
        let len = self.roles[self.role].len();
        let next_delay_ms = if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            if self.shown == 0 {
                self.deleting = false;
                self.role = (self.role + 1) % self.roles.len();
                self.type_ms
            } else {
                self.delete_ms
            }
        } else {
            self.shown = (self.shown + 1).min(len);
            if self.shown == len {
                self.deleting = true;
                self.hold_ms
            } else {
                self.type_ms
            }
        };
        Frame {
            text: self.visible_text(),
            next_delay_ms,
        }
    }

    fn visible_text(&self) -> String {
        // After the last delete `role` already points at the next one; shown is 0 then
        self.roles[self.role][..self.shown].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(roles: &[&str]) -> TypewriterConfig {
        TypewriterConfig {
            roles: roles.iter().map(|r| r.to_string()).collect(),
            ..TypewriterConfig::default()
        }
    }

    #[test]
    fn test_types_holds_deletes_and_advances() {
        let mut writer = Typewriter::new(&config(&["ab", "c"])).unwrap();
        let frames: Vec<Frame> = (0..6).map(|_| writer.step()).collect();
        let texts: Vec<&str> = frames.iter().map(|f| f.text.as_str()).collect();
        let delays: Vec<u32> = frames.iter().map(|f| f.next_delay_ms).collect();

        assert_eq!(texts, vec!["a", "ab", "a", "", "c", ""]);
        assert_eq!(delays, vec![100, 2000, 50, 100, 2000, 100]);
    }

    #[test]
    fn test_wraps_to_first_role() {
        let mut writer = Typewriter::new(&config(&["x"])).unwrap();
        assert_eq!(writer.step().text, "x");
        assert_eq!(writer.step().text, "");
        assert_eq!(writer.step().text, "x");
    }

    #[test]
    fn test_multibyte_roles() {
        let mut writer = Typewriter::new(&config(&["héllo"])).unwrap();
        writer.step();
        assert_eq!(writer.step().text, "hé");
    }

    #[test]
    fn test_no_roles() {
        assert!(Typewriter::new(&config(&[])).is_none());
        assert!(Typewriter::new(&config(&[""])).is_none());
    }
}
