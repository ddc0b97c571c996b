use crate::config::HeroConfig;

// typewriter effect for the hero
//
// cycles through a list of words: type each character, hold the full word,
// delete it one character at a time, then move on to the next word and loop.
// the component drives this with a timer, calling tick() and sleeping for
// however long it returns
#[derive(Clone, Debug)]
pub struct Typewriter {
    words: &'static [&'static str],
    timing: HeroConfig,
    index: usize,
    // characters (not bytes) of the current word that are visible
    visible: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(words: &'static [&'static str], timing: HeroConfig) -> Self {
        Typewriter {
            words,
            timing,
            index: 0,
            visible: 0,
            deleting: false,
        }
    }

    fn word(&self) -> &'static str {
        self.words.get(self.index).copied().unwrap_or("")
    }

    pub fn text(&self) -> String {
        self.word().chars().take(self.visible).collect()
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    // advance one step and return the delay (ms) before the next one
    pub fn tick(&mut self) -> u32 {
        if self.words.is_empty() {
            return self.timing.pause_ms;
        }

        let len = self.word().chars().count();

        if self.deleting {
            self.visible = self.visible.saturating_sub(1);
            if self.visible == 0 {
                self.deleting = false;
                self.index = (self.index + 1) % self.words.len();
                return self.timing.type_speed_ms;
            }
            return self.timing.delete_speed_ms;
        }

        if self.visible < len {
            self.visible += 1;
        }

        if self.visible >= len {
            self.deleting = true;
            self.timing.pause_ms
        } else {
            self.timing.type_speed_ms
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["ab", "xyz"];

    fn timing() -> HeroConfig {
        HeroConfig {
            type_speed_ms: 10,
            delete_speed_ms: 5,
            pause_ms: 100,
        }
    }

    #[test]
    fn test_types_then_pauses() {
        let mut tw = Typewriter::new(WORDS, timing());
        assert_eq!(tw.text(), "");

        assert_eq!(tw.tick(), 10);
        assert_eq!(tw.text(), "a");

        assert_eq!(tw.tick(), 100);
        assert_eq!(tw.text(), "ab");
        assert!(tw.is_deleting());
    }

    #[test]
    fn test_deletes_and_moves_to_next_word() {
        let mut tw = Typewriter::new(WORDS, timing());
        tw.tick();
        tw.tick();

        assert_eq!(tw.tick(), 5);
        assert_eq!(tw.text(), "a");

        assert_eq!(tw.tick(), 10);
        assert_eq!(tw.text(), "");
        assert!(!tw.is_deleting());

        tw.tick();
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_loops_back_to_first_word() {
        let mut tw = Typewriter::new(WORDS, timing());
        // "ab": 2 typed + 2 deleted, "xyz": 3 typed + 3 deleted
        for _ in 0..10 {
            tw.tick();
        }
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        const ACCENTED: &[&str] = &["né"];
        let mut tw = Typewriter::new(ACCENTED, timing());
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "né");
        assert!(tw.is_deleting());
    }

    #[test]
    fn test_empty_word_list_is_inert() {
        let mut tw = Typewriter::new(&[], timing());
        assert_eq!(tw.tick(), 100);
        assert_eq!(tw.text(), "");
    }
}
