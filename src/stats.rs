use raylib::prelude::*;

use crate::constants::*;
use crate::observer::OnceVisible;
use crate::page::Viewport;

/// Splits a stat's display text into its numeric target and the decoration
/// around it: "99.9%" -> (99.9, "%"), "500+" -> (500.0, "+"). Text with no
/// parseable number yields a NaN target; counters are expected to carry a
/// real number.
pub fn parse_stat(text: &str) -> (f32, String) {
    let number: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let suffix: String = text
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '.')
        .collect();
    (number.parse().unwrap_or(f32::NAN), suffix)
}

/// Whole-number targets render as truncated integers while counting;
/// fractional targets render with exactly one decimal place.
fn format_value(target: f32, value: f32) -> String {
    if target % 1.0 == 0.0 {
        format!("{}", value.floor() as i64)
    } else {
        format!("{:.1}", value)
    }
}

enum Phase {
    Waiting,
    Counting { elapsed: f32 },
    Done,
}

/// One statistic display: waits for its card to become half visible, then
/// counts up from zero over a fixed duration, once per page load.
pub struct StatCounter {
    pub card: Rectangle, // page space
    pub label: &'static str,
    target: f32,
    suffix: String,
    text: String,
    observer: OnceVisible,
    phase: Phase,
}

impl StatCounter {
    pub fn new(card: Rectangle, text: &str, label: &'static str) -> Self {
        let (target, suffix) = parse_stat(text);
        Self {
            card,
            label,
            target,
            suffix,
            text: text.to_string(),
            observer: OnceVisible::new(card, COUNTER_THRESHOLD),
            phase: Phase::Waiting,
        }
    }

    /// The text currently rendered on the card.
    pub fn rendered(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    pub fn update(&mut self, dt: f32, viewport: &Viewport) {
        if self.observer.check(viewport) {
            self.phase = Phase::Counting { elapsed: 0.0 };
        }
        if let Phase::Counting { elapsed } = &mut self.phase {
            *elapsed += dt;
            let progress = (*elapsed / COUNTER_DURATION).min(1.0);
            self.text = format!("{}{}", format_value(self.target, progress * self.target), self.suffix);
            if progress >= 1.0 {
                self.phase = Phase::Done;
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, viewport: &Viewport, alpha: f32, rise: f32) {
        let screen = viewport.to_screen(self.card);
        let x = screen.x as i32;
        let y = (screen.y - rise) as i32;
        d.draw_rectangle(x, y, screen.width as i32, screen.height as i32, Color::new(18, 18, 26, 255).fade(alpha));
        d.draw_text(&self.text, x + 24, y + 28, 44, Color::WHITE.fade(alpha));
        d.draw_text(self.label, x + 24, y + 88, 20, Color::new(160, 160, 180, 255).fade(alpha));
    }
}
