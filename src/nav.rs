use raylib::prelude::*;

use crate::constants::*;
use crate::easing;
use crate::page::{PageLayout, Section};

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Rendered navbar state, rewritten wholesale on every scroll.
#[derive(Debug, PartialEq)]
pub struct NavbarStyle {
    pub height: f32,
    pub shadow: bool,
    pub background: Color,
}

impl NavbarStyle {
    fn default_state() -> Self {
        Self {
            height: NAV_HEIGHT,
            shadow: false,
            background: Color::new(0, 0, 0, 217),
        }
    }

    fn condensed() -> Self {
        Self {
            height: NAV_HEIGHT_CONDENSED,
            shadow: true,
            background: Color::new(0, 0, 0, 242),
        }
    }
}

struct ScrollTween {
    from: f32,
    to: f32,
    elapsed: f32,
}

/// Intercepts fragment-link clicks for offset-aware smooth scrolling and
/// keeps the navbar style and the single active link in step with the
/// scroll position.
pub struct NavController {
    links: Vec<NavLink>,
    active: Option<usize>,
    style: NavbarStyle,
    tween: Option<ScrollTween>,
}

impl NavController {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            links,
            active: None,
            style: NavbarStyle::default_state(),
            tween: None,
        }
    }

    pub fn active_link(&self) -> Option<usize> {
        self.active
    }

    pub fn style(&self) -> &NavbarStyle {
        &self.style
    }

    /// Click on link `i`. A same-page fragment link (a real one, not the bare
    /// "#") starts a smooth scroll to its section top minus the navbar's
    /// current rendered height and returns true. Anything else is left to its
    /// default behavior.
    pub fn click(&mut self, i: usize, layout: &PageLayout, scroll_y: f32) -> bool {
        let href = self.links[i].href;
        if !href.starts_with('#') || href == "#" {
            return false;
        }
        let Some(section) = layout.section(&href[1..]) else {
            return false;
        };
        self.tween = Some(ScrollTween {
            from: scroll_y,
            to: section.top - self.style.height,
            elapsed: 0.0,
        });
        true
    }

    /// Wheel input takes over from a smooth scroll in flight.
    pub fn cancel_scroll(&mut self) {
        self.tween = None;
    }

    /// Advances the pending smooth scroll, yielding the new scroll offset.
    pub fn update(&mut self, dt: f32) -> Option<f32> {
        let tween = self.tween.as_mut()?;
        tween.elapsed += dt;
        let t = tween.elapsed.min(SCROLL_TWEEN_DURATION);
        let y = easing::glide_out(t, tween.from, tween.to - tween.from, SCROLL_TWEEN_DURATION);
        if tween.elapsed >= SCROLL_TWEEN_DURATION {
            self.tween = None;
        }
        Some(y)
    }

    /// The scroll handler: navbar condensing plus scroll-spy. Outside every
    /// section's activation window the previous active link persists; the
    /// highlight is only rewritten inside a matching window (kept as the
    /// documented behavior).
    pub fn on_scroll(&mut self, scroll_y: f32, sections: &[Section]) {
        self.style = if scroll_y > NAV_CONDENSE_AT {
            NavbarStyle::condensed()
        } else {
            NavbarStyle::default_state()
        };

        for section in sections {
            let window_top = section.top - SCROLLSPY_LEAD;
            if scroll_y > window_top && scroll_y <= window_top + section.height {
                self.active = self
                    .links
                    .iter()
                    .position(|link| link.href.strip_prefix('#') == Some(section.id));
            }
        }
    }

    /// Screen-space rect of link `i`, laid out right-aligned in the navbar.
    pub fn link_rect(&self, i: usize, viewport_width: f32) -> Rectangle {
        let w = 110.0;
        let count = self.links.len() as f32;
        Rectangle::new(
            viewport_width - 40.0 - (count - i as f32) * (w + 10.0),
            0.0,
            w,
            self.style.height,
        )
    }

    pub fn link_hit(&self, pointer: Vector2, viewport_width: f32) -> Option<usize> {
        (0..self.links.len()).find(|&i| self.link_rect(i, viewport_width).check_collision_point_rec(pointer))
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, viewport_width: f32) {
        let h = self.style.height as i32;
        if self.style.shadow {
            d.draw_rectangle(0, h, viewport_width as i32, 10, Color::new(0, 0, 0, 60));
        }
        d.draw_rectangle(0, 0, viewport_width as i32, h, self.style.background);
        d.draw_text("NIVIA", 40, h / 2 - 14, 28, Color::WHITE);
        for (i, link) in self.links.iter().enumerate() {
            let rect = self.link_rect(i, viewport_width);
            let color = if self.active == Some(i) { Color::new(64, 110, 255, 255) } else { Color::WHITE };
            d.draw_text(link.label, rect.x as i32 + 10, h / 2 - 9, 18, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> NavController {
        NavController::new(vec![
            NavLink { label: "Home", href: "#home" },
            NavLink { label: "Features", href: "#features" },
            NavLink { label: "Status", href: "https://status.example.com" },
            NavLink { label: "Top", href: "#" },
        ])
    }

    fn features_section() -> Vec<Section> {
        vec![Section { id: "features", top: 500.0, height: 300.0 }]
    }

    #[test]
    fn navbar_condenses_past_the_threshold() {
        let mut nav = controller();
        nav.on_scroll(81.0, &[]);
        assert_eq!(*nav.style(), NavbarStyle::condensed());
        nav.on_scroll(79.0, &[]);
        assert_eq!(*nav.style(), NavbarStyle::default_state());
        nav.on_scroll(80.0, &[]); // boundary stays default
        assert_eq!(nav.style().height, NAV_HEIGHT);
        assert!(!nav.style().shadow);
    }

    #[test]
    fn activation_window_marks_exactly_one_link() {
        let mut nav = controller();
        let sections = features_section();

        // Window is (380, 680] for top=500, height=300.
        nav.on_scroll(400.0, &sections);
        assert_eq!(nav.active_link(), Some(1));
        nav.on_scroll(380.0, &sections);
        assert_eq!(nav.active_link(), Some(1)); // persists outside the window
        nav.on_scroll(700.0, &sections);
        assert_eq!(nav.active_link(), Some(1)); // likewise past the end
        nav.on_scroll(680.0, &sections);
        assert_eq!(nav.active_link(), Some(1)); // trailing edge still inside
    }

    #[test]
    fn section_without_a_matching_link_clears_the_highlight() {
        let mut nav = controller();
        let sections = vec![Section { id: "pricing", top: 500.0, height: 300.0 }];
        nav.on_scroll(400.0, &features_section());
        nav.on_scroll(400.0, &sections);
        assert_eq!(nav.active_link(), None);
    }

    #[test]
    fn fragment_click_scrolls_below_the_navbar() {
        let mut nav = controller();
        let layout = PageLayout::build();
        assert!(nav.click(1, &layout, 0.0));

        // Run the tween out; it must land on section top minus navbar height.
        let mut last = 0.0;
        for _ in 0..20 {
            if let Some(y) = nav.update(0.05) {
                last = y;
            }
        }
        assert_eq!(last, 800.0 - NAV_HEIGHT);
    }

    #[test]
    fn condensed_navbar_shifts_the_landing_offset() {
        let mut nav = controller();
        let layout = PageLayout::build();
        nav.on_scroll(200.0, &[]); // condensed: height 70
        assert!(nav.click(1, &layout, 200.0));
        let mut last = 200.0;
        for _ in 0..20 {
            if let Some(y) = nav.update(0.05) {
                last = y;
            }
        }
        // Target was computed against the rendered height at click time.
        assert_eq!(last, 800.0 - NAV_HEIGHT_CONDENSED);
    }

    #[test]
    fn non_fragment_links_are_left_alone() {
        let mut nav = controller();
        let layout = PageLayout::build();
        assert!(!nav.click(2, &layout, 0.0)); // external URL
        assert!(!nav.click(3, &layout, 0.0)); // bare "#"
        assert!(nav.update(0.1).is_none());
    }

    #[test]
    fn wheel_input_cancels_a_smooth_scroll() {
        let mut nav = controller();
        let layout = PageLayout::build();
        assert!(nav.click(0, &layout, 500.0));
        assert!(nav.update(0.05).is_some());
        nav.cancel_scroll();
        assert!(nav.update(0.05).is_none());
    }
}
