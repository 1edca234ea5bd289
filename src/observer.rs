use raylib::prelude::*;

use crate::page::Viewport;

/// One-shot visibility watcher for a page-space rect: reports `true` on the
/// first frame the rect is at least `threshold` visible, then unsubscribes
/// itself for good. Later exits and re-entries are ignored.
pub struct OnceVisible {
    target: Rectangle,
    threshold: f32,
    fired: bool,
}

impl OnceVisible {
    pub fn new(target: Rectangle, threshold: f32) -> Self {
        Self {
            target,
            threshold,
            fired: false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn check(&mut self, viewport: &Viewport) -> bool {
        if self.fired {
            return false;
        }
        if viewport.visible_fraction(self.target) >= self.threshold {
            self.fired = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once_across_reentries() {
        let mut viewport = Viewport::new(1280.0, 800.0);
        let mut observer = OnceVisible::new(Rectangle::new(0.0, 1000.0, 100.0, 100.0), 0.5);

        assert!(!observer.check(&viewport)); // off screen
        viewport.scroll_to(600.0); // enter
        assert!(observer.check(&viewport));
        viewport.scroll_to(0.0); // exit
        assert!(!observer.check(&viewport));
        viewport.scroll_to(600.0); // re-enter
        assert!(!observer.check(&viewport));
        assert!(observer.has_fired());
    }

    #[test]
    fn respects_the_visibility_threshold() {
        let mut viewport = Viewport::new(1280.0, 800.0);
        let mut observer = OnceVisible::new(Rectangle::new(0.0, 1000.0, 100.0, 200.0), 0.5);

        // 40% visible: 1000..1080 of a 200 tall rect.
        viewport.scroll_to(280.0);
        assert!(!observer.check(&viewport));
        // Exactly 50% visible.
        viewport.scroll_to(300.0);
        assert!(observer.check(&viewport));
    }
}
