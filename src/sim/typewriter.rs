pub const TYPE_DELAY_MS: u32 = 100;
pub const PAUSE_DELAY_MS: u32 = 2000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

/// Cyclic typewriter over a fixed text list. `advance` performs one
/// transition and returns the delay in milliseconds until the next one.
pub struct Typewriter {
    texts: Vec<String>,
    text_index: usize,
    shown_chars: usize,
    phase: Phase,
    type_delay: u32,
    pause_delay: u32,
}

impl Typewriter {
    pub fn new(texts: Vec<String>) -> Self {
        Self::with_delays(texts, TYPE_DELAY_MS, PAUSE_DELAY_MS)
    }

    pub fn with_delays(texts: Vec<String>, type_delay: u32, pause_delay: u32) -> Self {
        let texts = if texts.is_empty() {
            vec![String::new()]
        } else {
            texts
        };

        Self {
            texts,
            text_index: 0,
            shown_chars: 0,
            phase: Phase::Typing,
            type_delay,
            pause_delay,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn visible(&self) -> String {
        self.current_text().chars().take(self.shown_chars).collect()
    }

    fn current_text(&self) -> &str {
        &self.texts[self.text_index]
    }

    fn current_len(&self) -> usize {
        self.current_text().chars().count()
    }

    pub fn advance(&mut self) -> u32 {
        match self.phase {
            Phase::Typing => {
                if self.shown_chars < self.current_len() {
                    self.shown_chars += 1;
                }

                if self.shown_chars == self.current_len() {
                    self.phase = Phase::Pausing;
                    self.pause_delay
                } else {
                    self.type_delay
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                self.type_delay / 2
            }
            Phase::Deleting => {
                self.shown_chars = self.shown_chars.saturating_sub(1);

                if self.shown_chars == 0 {
                    self.text_index = (self.text_index + 1) % self.texts.len();
                    self.phase = Phase::Typing;
                    self.type_delay
                } else {
                    self.type_delay / 2
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(texts: &[&str]) -> Typewriter {
        Typewriter::with_delays(texts.iter().map(|t| t.to_string()).collect(), 100, 2000)
    }

    #[test]
    fn full_cycle_is_stable() {
        let mut tw = machine(&["A", "BB"]);

        // Type "A", pause, delete, advance to "BB".
        assert_eq!(tw.advance(), 2000);
        assert_eq!(tw.visible(), "A");
        assert_eq!(tw.phase(), Phase::Pausing);

        assert_eq!(tw.advance(), 50);
        assert_eq!(tw.phase(), Phase::Deleting);

        assert_eq!(tw.advance(), 100);
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.phase(), Phase::Typing);

        // Type "BB" one char per tick.
        assert_eq!(tw.advance(), 100);
        assert_eq!(tw.visible(), "B");
        assert_eq!(tw.advance(), 2000);
        assert_eq!(tw.visible(), "BB");

        // Delete back down and land on "A" again.
        assert_eq!(tw.advance(), 50);
        assert_eq!(tw.advance(), 50);
        assert_eq!(tw.visible(), "B");
        assert_eq!(tw.advance(), 100);
        assert_eq!(tw.visible(), "");

        assert_eq!(tw.advance(), 2000);
        assert_eq!(tw.visible(), "A");
    }

    #[test]
    fn loop_runs_indefinitely_without_sticking() {
        let mut tw = machine(&["ab", "cde"]);
        let mut typing_completions = 0;

        for _ in 0..500 {
            let was_typing = tw.phase() == Phase::Typing;
            tw.advance();
            if was_typing && tw.phase() == Phase::Pausing {
                typing_completions += 1;
            }
        }

        assert!(typing_completions > 10);
    }

    #[test]
    fn multibyte_text_is_sliced_on_char_boundaries() {
        let mut tw = machine(&["héllo"]);

        assert_eq!(tw.advance(), 100);
        assert_eq!(tw.visible(), "h");
        assert_eq!(tw.advance(), 100);
        assert_eq!(tw.visible(), "hé");
    }

    #[test]
    fn empty_text_list_degrades_to_blank() {
        let mut tw = Typewriter::new(Vec::new());
        assert_eq!(tw.visible(), "");
        // An empty string is instantly "fully typed".
        assert_eq!(tw.advance(), PAUSE_DELAY_MS);
    }
}
