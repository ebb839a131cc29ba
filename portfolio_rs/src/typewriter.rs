//! Hero typewriter: types a phrase, holds it, deletes it, moves on.
//!
//! The browser drives it with a timeout chain: call [`Typewriter::tick`],
//! render [`Typewriter::text`], wait for the returned delay, repeat.

use std::time::Duration;

use crate::config::TypewriterConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    phrases: Vec<String>,
    config: TypewriterConfig,
    index: usize,
    /// Visible length in chars, not bytes.
    visible: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, config: TypewriterConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
            config,
            index: 0,
            visible: 0,
            phase: Phase::Typing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the phrase currently being typed or deleted.
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Currently visible prefix of the active phrase.
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return "";
        };
        match phrase.char_indices().nth(self.visible) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    /// Wait before the first tick, so the first character lands one typing
    /// step after the hero mounts.
    pub fn first_delay(&self) -> Duration {
        Duration::from_millis(self.config.typing_ms)
    }

    /// Advance one step and return how long to wait before the next tick.
    pub fn tick(&mut self) -> Duration {
        let Some(phrase) = self.phrases.get(self.index) else {
            return Duration::from_millis(self.config.pause_ms);
        };
        let len = phrase.chars().count();

        let delay = match self.phase {
            Phase::Typing => {
                self.visible = (self.visible + 1).min(len);
                if self.visible == len {
                    self.phase = Phase::Holding;
                    self.config.pause_ms
                } else {
                    self.config.typing_ms
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.config.deleting_ms
            }
            Phase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    self.config.gap_ms + self.config.typing_ms
                } else {
                    self.config.deleting_ms
                }
            }
        };
        Duration::from_millis(delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().copied(), TypewriterConfig::default())
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        let mut tw = writer(&["ab", "xyz"]);
        assert_eq!(tw.text(), "");

        assert_eq!(tw.first_delay(), Duration::from_millis(200));

        assert_eq!(tw.tick(), Duration::from_millis(200));
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), Duration::from_millis(2000));
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.phase(), Phase::Holding);

        assert_eq!(tw.tick(), Duration::from_millis(100));
        assert_eq!(tw.phase(), Phase::Deleting);
        assert_eq!(tw.text(), "ab");

        assert_eq!(tw.tick(), Duration::from_millis(100));
        assert_eq!(tw.text(), "a");
        // No gap by default: the next phrase starts one typing step later.
        assert_eq!(tw.tick(), Duration::from_millis(200));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);

        tw.tick();
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn gap_is_added_before_the_next_phrase() {
        let config = TypewriterConfig {
            gap_ms: 500,
            ..TypewriterConfig::default()
        };
        let mut tw = Typewriter::new(["a", "b"], config);
        tw.tick();
        tw.tick();
        assert_eq!(tw.tick(), Duration::from_millis(700));
        assert_eq!(tw.phrase_index(), 1);
    }

    #[test]
    fn wraps_to_the_first_phrase() {
        let mut tw = writer(&["a", "b"]);
        // "a": type, hold, delete; "b": type, hold, delete
        for _ in 0..6 {
            tw.tick();
        }
        assert_eq!(tw.phrase_index(), 0);
        tw.tick();
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn slices_on_char_boundaries() {
        let mut tw = writer(&["héllo"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn empty_phrase_list_is_inert() {
        let mut tw = writer(&[]);
        assert_eq!(tw.tick(), Duration::from_millis(2000));
        assert_eq!(tw.text(), "");

        let mut blanks = writer(&["", ""]);
        blanks.tick();
        assert_eq!(blanks.text(), "");
    }
}
