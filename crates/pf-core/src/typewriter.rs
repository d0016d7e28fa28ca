//! Character-by-character reveal of the hero highlight.

use pf_types::{Patch, Target};

/// Yields one `SetText` patch per revealed character.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    /// Blank the element before the first character arrives.
    pub fn prepare(&self) -> Vec<Patch> {
        vec![
            Patch::text(Target::Current, ""),
            Patch::style(Target::Current, "width", "0"),
        ]
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Iterator for Typewriter {
    type Item = Patch;

    fn next(&mut self) -> Option<Patch> {
        if self.is_finished() {
            return None;
        }
        self.revealed += 1;
        let shown: String = self.chars[..self.revealed].iter().collect();
        Some(Patch::text(Target::Current, shown))
    }
}
