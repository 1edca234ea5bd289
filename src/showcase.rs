use raylib::prelude::*;
use std::collections::HashMap;

use crate::constants::*;
use crate::easing;
use crate::page::PageLayout;
use crate::page::Viewport;
use crate::timer::Interval;

/// One named content record the showcase can display. `art` is the asset key
/// of its illustration.
pub struct Variant {
    pub key: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub art: &'static str,
}

/// Static showcase content; the array order is the automatic cycle order.
pub const VARIANTS: [Variant; 3] = [
    Variant {
        key: "speed",
        title: "Lightning Speed",
        desc: "Your site loads instantly from the nearest global node, ensuring no customer leaves due to slow loading times.",
        art: "speed",
    },
    Variant {
        key: "security",
        title: "Bulletproof Security",
        desc: "By eliminating traditional databases, we remove the risk of SQL injections or server-side hacking. Your data remains untouchable.",
        art: "security",
    },
    Variant {
        key: "eco",
        title: "Eco-Friendly & Efficient",
        desc: "Resources are only used when a visitor clicks, making it the smartest, most cost-effective, and sustainable way to host.",
        art: "eco",
    },
];

fn position_of(key: &str) -> Option<usize> {
    VARIANTS.iter().position(|v| v.key == key)
}

enum Transition {
    Idle,
    /// Panel faded out, waiting to swap the content in.
    Hidden { remaining: f32, pending: usize },
    /// Content swapped, gliding back to rest.
    Gliding { elapsed: f32 },
}

/// Switches the displayed variant on a timer or on manual selection, with a
/// fade-and-glide transition. Hovering the showcase pauses the automatic
/// cycle; leaving restarts it from a fresh full period.
pub struct ShowcaseCycler {
    cursor: usize, // index into VARIANTS, the cycle position
    shown: usize,  // variant whose content is on the panel
    active_button: Option<usize>,
    interval: Interval,
    transition: Transition,
    opacity: f32,
    drop: f32, // vertical offset of the panel
}

impl ShowcaseCycler {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            shown: 0,
            active_button: Some(0),
            interval: Interval::new(SHOWCASE_INTERVAL),
            transition: Transition::Idle,
            opacity: 1.0,
            drop: 0.0,
        }
    }

    pub fn shown_variant(&self) -> &'static Variant {
        &VARIANTS[self.shown]
    }

    pub fn active_button(&self) -> Option<usize> {
        self.active_button
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn panel_style(&self) -> (f32, f32) {
        (self.opacity, self.drop)
    }

    /// The public selection operation. An unknown key is a silent no-op.
    /// A manual trigger re-anchors the automatic cycle at that key so the
    /// next tick continues from there.
    pub fn switch(&mut self, key: &str, trigger: Option<usize>) {
        let Some(target) = position_of(key) else {
            return;
        };
        match trigger {
            Some(button) => {
                self.cursor = target;
                self.active_button = Some(button);
            }
            // Automatic tick: the caller already advanced the cursor; find
            // the button bound to this key instead.
            None => self.active_button = position_of(key),
        }

        // Hide immediately; the content swap happens after the delay.
        self.opacity = 0.0;
        self.drop = SHOWCASE_DROP;
        self.transition = Transition::Hidden {
            remaining: SHOWCASE_SWAP_DELAY,
            pending: target,
        };
    }

    /// Pointer-enter cancels the pending automatic tick; pointer-leave
    /// schedules a fresh full interval. The single owned `Interval` is what
    /// keeps a stale cycle from ever running alongside the new one.
    pub fn set_hovered(&mut self, over: bool) {
        if over {
            self.interval.stop();
        } else if !self.interval.is_running() {
            self.interval.start();
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.interval.tick(dt) {
            self.cursor = (self.cursor + 1) % VARIANTS.len();
            self.switch(VARIANTS[self.cursor].key, None);
        }

        match &mut self.transition {
            Transition::Idle => {}
            Transition::Hidden { remaining, pending } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    self.shown = *pending;
                    self.transition = Transition::Gliding { elapsed: 0.0 };
                }
            }
            Transition::Gliding { elapsed } => {
                *elapsed += dt;
                let t = elapsed.min(SHOWCASE_GLIDE);
                self.opacity = easing::glide_out(t, 0.0, 1.0, SHOWCASE_GLIDE);
                self.drop = easing::glide_out(t, SHOWCASE_DROP, -SHOWCASE_DROP, SHOWCASE_GLIDE);
                if *elapsed >= SHOWCASE_GLIDE {
                    self.opacity = 1.0;
                    self.drop = 0.0;
                    self.transition = Transition::Idle;
                }
            }
        }
    }

    pub fn draw(
        &self,
        d: &mut RaylibDrawHandle,
        viewport: &Viewport,
        layout: &PageLayout,
        art: &HashMap<String, Texture2D>,
    ) {
        // Selector buttons, exactly one highlighted.
        for (i, rect) in layout.showcase_buttons.iter().enumerate() {
            let screen = viewport.to_screen(*rect);
            let active = self.active_button == Some(i);
            let fill = if active { Color::new(64, 110, 255, 255) } else { Color::new(30, 30, 42, 255) };
            d.draw_rectangle(screen.x as i32, screen.y as i32, screen.width as i32, screen.height as i32, fill);
            d.draw_text(VARIANTS[i].title, screen.x as i32 + 20, screen.y as i32 + 24, 20, Color::WHITE);
        }

        // Display panel with the fade-and-glide style applied.
        let variant = self.shown_variant();
        let screen = viewport.to_screen(layout.showcase_display);
        let x = screen.x as i32;
        let y = (screen.y + self.drop) as i32;
        d.draw_rectangle(x, y, screen.width as i32, screen.height as i32, Color::new(24, 24, 34, 255).fade(self.opacity));
        match art.get(variant.art) {
            Some(texture) => {
                let source = Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32);
                let dest = Rectangle::new(screen.x + 20.0, screen.y + self.drop + 20.0, screen.width - 40.0, 200.0);
                d.draw_texture_pro(texture, source, dest, Vector2::zero(), 0.0, Color::WHITE.fade(self.opacity));
            }
            None => d.draw_rectangle_gradient_v(
                x + 20,
                y + 20,
                screen.width as i32 - 40,
                200,
                Color::new(40, 60, 110, 255).fade(self.opacity),
                Color::new(16, 20, 36, 255).fade(self.opacity),
            ),
        }
        d.draw_text(variant.title, x + 24, y + 248, 32, Color::WHITE.fade(self.opacity));
        d.draw_text(variant.desc, x + 24, y + 300, 18, Color::new(190, 190, 205, 255).fade(self.opacity));
    }
}
