use raylib::prelude::*;

use crate::constants::*;
use crate::page::Viewport;
use crate::timer::Interval;

pub struct Slide {
    pub title: &'static str,
    pub caption: &'static str,
    pub tint: Color,
    pub texture: Option<Texture2D>,
}

impl Slide {
    pub fn new(title: &'static str, caption: &'static str, tint: Color) -> Self {
        Self {
            title,
            caption,
            tint,
            texture: None,
        }
    }
}

/// Cycles the hero slides on a fixed period and drives the pointer parallax
/// on the overlaid copy. An empty slide list yields an inert unit.
pub struct HeroSlider {
    region: Rectangle, // page space
    slides: Vec<Slide>,
    index: usize,
    interval: Interval,
    overlay_shift: Vector2,
}

impl HeroSlider {
    pub fn new(region: Rectangle, slides: Vec<Slide>) -> Self {
        Self {
            region,
            slides,
            index: 0,
            interval: Interval::new(SLIDE_INTERVAL),
            overlay_shift: Vector2::zero(),
        }
    }

    /// Index of the single active slide, or None when there are no slides.
    pub fn active_index(&self) -> Option<usize> {
        (!self.slides.is_empty()).then_some(self.index)
    }

    pub fn overlay_shift(&self) -> Vector2 {
        self.overlay_shift
    }

    pub fn advance(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.slides.len();
    }

    pub fn update(&mut self, dt: f32, pointer: Vector2, viewport: &Viewport) {
        if self.slides.is_empty() {
            return;
        }
        if self.interval.tick(dt) {
            self.advance();
        }

        // Subtle parallax, desktop widths only, and only while the pointer is
        // over the hero. The shift is only ever written on pointer movement,
        // so it persists after the pointer leaves.
        if viewport.width > DESKTOP_WIDTH
            && viewport
                .to_screen(self.region)
                .check_collision_point_rec(pointer)
        {
            self.overlay_shift = Vector2::new(
                (pointer.x - viewport.width / 2.0) / PARALLAX_DIVISOR,
                (pointer.y - viewport.height / 2.0) / PARALLAX_DIVISOR,
            );
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, viewport: &Viewport) {
        let Some(index) = self.active_index() else {
            return;
        };
        let slide = &self.slides[index];
        let screen = viewport.to_screen(self.region);

        match &slide.texture {
            Some(texture) => {
                let source = Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32);
                d.draw_texture_pro(texture, source, screen, Vector2::zero(), 0.0, Color::WHITE);
            }
            None => {
                let deep = Color::new(slide.tint.r / 4, slide.tint.g / 4, slide.tint.b / 4, 255);
                d.draw_rectangle_gradient_v(
                    screen.x as i32,
                    screen.y as i32,
                    screen.width as i32,
                    screen.height as i32,
                    slide.tint,
                    deep,
                );
            }
        }

        // Overlay copy, nudged by the parallax shift.
        let x = (screen.x + 120.0 + self.overlay_shift.x) as i32;
        let y = (screen.y + screen.height * 0.38 + self.overlay_shift.y) as i32;
        d.draw_text(slide.title, x, y, 56, Color::WHITE);
        d.draw_text(slide.caption, x, y + 72, 24, Color::new(255, 255, 255, 200));

        // Slide dots.
        for i in 0..self.slides.len() {
            let color = if i == index { Color::WHITE } else { Color::new(255, 255, 255, 90) };
            d.draw_circle(
                (screen.x + screen.width / 2.0) as i32 + (i as i32 - self.slides.len() as i32 / 2) * 24,
                (screen.y + screen.height - 40.0) as i32,
                5.0,
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(n: usize) -> HeroSlider {
        let slides = (0..n).map(|_| Slide::new("t", "c", Color::DARKBLUE)).collect();
        HeroSlider::new(Rectangle::new(0.0, 0.0, 1280.0, 800.0), slides)
    }

    #[test]
    fn advancing_n_times_wraps_back_to_the_first_slide() {
        for n in 1..=5 {
            let mut hero = slider(n);
            assert_eq!(hero.active_index(), Some(0));
            for _ in 0..n {
                hero.advance();
                assert!(hero.active_index().unwrap() < n); // always exactly one, in range
            }
            assert_eq!(hero.active_index(), Some(0));
        }
    }

    #[test]
    fn empty_collection_is_a_silent_no_op() {
        let mut hero = slider(0);
        let viewport = Viewport::new(1280.0, 800.0);
        hero.advance();
        hero.update(10.0, Vector2::new(100.0, 100.0), &viewport);
        assert_eq!(hero.active_index(), None);
    }

    #[test]
    fn timer_advances_the_active_slide() {
        let mut hero = slider(3);
        let viewport = Viewport::new(1280.0, 800.0);
        let pointer = Vector2::new(-1.0, -1.0);
        for _ in 0..60 {
            hero.update(0.1, pointer, &viewport); // 6 seconds
        }
        assert_eq!(hero.active_index(), Some(1));
    }

    #[test]
    fn parallax_shift_is_proportional_and_desktop_only() {
        let mut hero = slider(1);
        let viewport = Viewport::new(1280.0, 800.0);
        hero.update(0.0, Vector2::new(940.0, 640.0), &viewport);
        assert_eq!(hero.overlay_shift(), Vector2::new(5.0, 4.0)); // (940-640)/60, (640-400)/60

        let narrow = Viewport::new(1024.0, 800.0); // not strictly wider than the threshold
        let mut hero = slider(1);
        hero.update(0.0, Vector2::new(900.0, 600.0), &narrow);
        assert_eq!(hero.overlay_shift(), Vector2::zero());
    }

    #[test]
    fn parallax_shift_persists_after_the_pointer_leaves() {
        let mut hero = slider(1);
        let viewport = Viewport::new(1280.0, 800.0);
        hero.update(0.0, Vector2::new(940.0, 640.0), &viewport);
        hero.update(0.0, Vector2::new(-10.0, -10.0), &viewport); // off the hero
        assert_eq!(hero.overlay_shift(), Vector2::new(5.0, 4.0));
    }
}
