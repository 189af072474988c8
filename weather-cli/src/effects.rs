//! A few lines of scattered glyphs standing in for animated backgrounds.

use rand::Rng;
use std::fmt;
use weather_core::{Effect, EffectRenderer};

const ROWS: usize = 3;

pub struct TerminalEffects {
    width: usize,
    rows: Vec<Vec<char>>,
}

impl TerminalEffects {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    fn canvas(&mut self) -> &mut Vec<Vec<char>> {
        if self.rows.is_empty() {
            self.rows = vec![vec![' '; self.width]; ROWS];
        }
        &mut self.rows
    }

    /// Drops `count` copies of `glyph` at random cells.
    fn scatter(&mut self, glyph: char, count: usize) {
        let width = self.width;
        if width == 0 {
            return;
        }
        let mut rng = rand::rng();
        let rows = self.canvas();
        for _ in 0..count {
            let row = rng.random_range(0..ROWS);
            let col = rng.random_range(0..width);
            rows[row][col] = glyph;
        }
    }

    fn place(&mut self, row: usize, col: usize, text: &str) {
        let rows = self.canvas();
        for (offset, ch) in text.chars().enumerate() {
            if let Some(cell) = rows[row].get_mut(col + offset) {
                *cell = ch;
            }
        }
    }
}

impl EffectRenderer for TerminalEffects {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn render(&mut self, effect: Effect) {
        let density = self.width / 4;
        match effect {
            Effect::Rain => self.scatter('╎', density),
            Effect::Snow => self.scatter('*', density / 2),
            Effect::Stars => self.scatter('·', density / 2),
            Effect::Fog => {
                for row in 0..ROWS {
                    let fog = "≈".repeat(self.width);
                    self.place(row, 0, &fog);
                }
            }
            Effect::Lightning => {
                let col = rand::rng().random_range(0..self.width.max(1));
                for row in 0..ROWS {
                    self.place(row, col + row, "⟋");
                }
            }
            Effect::Sun { partial } => {
                let col = self.width.saturating_sub(8);
                let sun = if partial { "~(o)~" } else { "\\(O)/" };
                self.place(0, col, sun);
            }
        }
    }
}

impl fmt::Display for TerminalEffects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row.iter().collect::<String>().trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_drawn_without_effects() {
        let mut effects = TerminalEffects::new(40);
        effects.render_all(&[]);
        assert_eq!(effects.to_string(), "");
    }

    #[test]
    fn fog_fills_every_row() {
        let mut effects = TerminalEffects::new(10);
        effects.render_all(&[Effect::Fog]);

        let text = effects.to_string();
        assert_eq!(text.lines().count(), ROWS);
        assert!(text.lines().all(|line| line == "≈".repeat(10)));
    }

    #[test]
    fn rain_only_uses_drop_glyphs() {
        let mut effects = TerminalEffects::new(40);
        effects.render_all(&[Effect::Rain]);

        let text = effects.to_string();
        assert!(text.contains('╎'));
        assert!(text.chars().all(|c| c == '╎' || c == ' ' || c == '\n'));
    }

    #[test]
    fn new_search_replaces_old_effects() {
        let mut effects = TerminalEffects::new(20);
        effects.render_all(&[Effect::Fog]);
        effects.render_all(&[Effect::Sun { partial: false }]);

        let text = effects.to_string();
        assert!(!text.contains('≈'));
        assert!(text.contains("\\(O)/"));
    }
}
