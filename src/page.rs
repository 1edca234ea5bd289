use raylib::prelude::*;

use crate::constants::*;

/// Window-sized view onto the page canvas. `scroll_y` is the page-space y
/// coordinate of the top edge of the window.
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_y: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }

    pub fn max_scroll(&self) -> f32 {
        (PAGE_HEIGHT - self.height).max(0.0)
    }

    pub fn scroll_to(&mut self, y: f32) {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
    }

    /// Page-space rect as it appears on screen.
    pub fn to_screen(&self, r: Rectangle) -> Rectangle {
        Rectangle::new(r.x, r.y - self.scroll_y, r.width, r.height)
    }

    /// Fraction of a page-space rect's height currently inside the window.
    pub fn visible_fraction(&self, r: Rectangle) -> f32 {
        if r.height <= 0.0 {
            return 0.0;
        }
        let top = r.y.max(self.scroll_y);
        let bottom = (r.y + r.height).min(self.scroll_y + self.height);
        ((bottom - top) / r.height).clamp(0.0, 1.0)
    }
}

/// A page section addressable from a `#fragment` link.
pub struct Section {
    pub id: &'static str,
    pub top: f32,
    pub height: f32,
}

/// Fixed page geometry, computed once at startup. Every behavioral unit binds
/// to its own slice of these rects and never reads another unit's.
pub struct PageLayout {
    pub sections: Vec<Section>,

    pub hero: Rectangle,

    pub stat_cards: Vec<Rectangle>,

    pub showcase: Rectangle,         // hover region around the whole showcase
    pub showcase_display: Rectangle, // the panel whose content swaps
    pub showcase_buttons: Vec<Rectangle>,

    pub marquee_labels: Vec<Rectangle>,

    pub contact: Rectangle,
}

impl PageLayout {
    pub fn build() -> Self {
        let sections = vec![
            Section { id: "home", top: 0.0, height: 800.0 },
            Section { id: "features", top: 800.0, height: 900.0 },
            Section { id: "industries", top: 1700.0, height: 400.0 },
            Section { id: "contact", top: 2100.0, height: 500.0 },
        ];

        let stat_cards = (0..3)
            .map(|i| Rectangle::new(120.0 + i as f32 * 360.0, 860.0, 320.0, 140.0))
            .collect();

        let showcase = Rectangle::new(80.0, 1060.0, PAGE_WIDTH - 160.0, 560.0);
        let showcase_display = Rectangle::new(440.0, 1140.0, 720.0, 420.0);
        let showcase_buttons = (0..3)
            .map(|i| Rectangle::new(120.0, 1140.0 + i as f32 * 90.0, 280.0, 70.0))
            .collect();

        let marquee_labels = (0..6)
            .map(|i| Rectangle::new(60.0 + i as f32 * 195.0, 1840.0, 175.0, 48.0))
            .collect();

        Self {
            sections,
            hero: Rectangle::new(0.0, 0.0, PAGE_WIDTH, 800.0),
            stat_cards,
            showcase,
            showcase_display,
            showcase_buttons,
            marquee_labels,
            contact: Rectangle::new(240.0, 2220.0, PAGE_WIDTH - 480.0, 260.0),
        }
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_fraction_tracks_the_scroll_window() {
        let mut viewport = Viewport::new(1280.0, 800.0);
        let rect = Rectangle::new(0.0, 1000.0, 100.0, 200.0);

        assert_eq!(viewport.visible_fraction(rect), 0.0); // below the fold
        viewport.scroll_to(900.0);
        assert_eq!(viewport.visible_fraction(rect), 1.0); // fully inside
        viewport.scroll_to(1100.0);
        assert_eq!(viewport.visible_fraction(rect), 0.5); // top half cut off
    }

    #[test]
    fn scroll_is_clamped_to_the_page() {
        let mut viewport = Viewport::new(1280.0, 800.0);
        viewport.scroll_to(-50.0);
        assert_eq!(viewport.scroll_y, 0.0);
        viewport.scroll_to(1e9);
        assert_eq!(viewport.scroll_y, PAGE_HEIGHT - 800.0);
    }

    #[test]
    fn every_fragment_link_target_exists() {
        let layout = PageLayout::build();
        for id in ["home", "features", "industries", "contact"] {
            assert!(layout.section(id).is_some(), "missing section {}", id);
        }
        assert!(layout.section("pricing").is_none());
    }
}
