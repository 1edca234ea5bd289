use raylib::prelude::*;

use crate::constants::*;
use crate::easing;
use crate::page::Viewport;

/// Animate-on-scroll configuration, fixed at the values the page ships with.
pub struct RevealConfig {
    pub duration: f32,
    pub once: bool,
    pub offset: f32,
    pub mirror: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration: REVEAL_DURATION,
            once: true,
            offset: REVEAL_OFFSET,
            mirror: false,
        }
    }
}

enum Phase {
    Below,
    Revealing { elapsed: f32 },
    Shown,
}

struct Block {
    rect: Rectangle, // page space
    phase: Phase,
}

/// Optional scroll-reveal collaborator: blocks fade in and glide up, each
/// exactly once, when scrolled past the trigger offset. Pages that declare
/// no reveal blocks simply never construct one.
pub struct ScrollReveal {
    config: RevealConfig,
    blocks: Vec<Block>,
}

impl ScrollReveal {
    pub fn new(blocks: Vec<Rectangle>) -> Option<Self> {
        if blocks.is_empty() {
            return None;
        }
        Some(Self {
            config: RevealConfig::default(),
            blocks: blocks
                .into_iter()
                .map(|rect| Block {
                    rect,
                    phase: Phase::Below,
                })
                .collect(),
        })
    }

    pub fn update(&mut self, dt: f32, viewport: &Viewport) {
        for block in &mut self.blocks {
            let triggered =
                block.rect.y <= viewport.scroll_y + viewport.height - self.config.offset;
            if triggered && matches!(block.phase, Phase::Below) {
                block.phase = Phase::Revealing { elapsed: 0.0 };
            }
            match &mut block.phase {
                Phase::Below => {}
                Phase::Revealing { elapsed } => {
                    *elapsed += dt;
                    if *elapsed >= self.config.duration {
                        block.phase = Phase::Shown;
                    }
                }
                Phase::Shown => {
                    // `once` semantics: never mirrors back out on reverse
                    // scroll. The mirror flag exists but the page ships with
                    // it off.
                    if self.config.mirror && !self.config.once && !triggered {
                        block.phase = Phase::Below;
                    }
                }
            }
        }
    }

    /// Eased progress of block `i`, 0 (hidden) to 1 (at rest).
    pub fn progress(&self, i: usize) -> f32 {
        match self.blocks[i].phase {
            Phase::Below => 0.0,
            Phase::Revealing { elapsed } => {
                easing::quint_out(elapsed, 0.0, 1.0, self.config.duration)
            }
            Phase::Shown => 1.0,
        }
    }

    /// (alpha, rise) drawing style for block `i`.
    pub fn style(&self, i: usize) -> (f32, f32) {
        let p = self.progress(i);
        (p, (1.0 - p) * REVEAL_RISE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_block() -> ScrollReveal {
        ScrollReveal::new(vec![Rectangle::new(0.0, 1000.0, 400.0, 200.0)]).unwrap()
    }

    #[test]
    fn no_blocks_means_no_collaborator() {
        assert!(ScrollReveal::new(Vec::new()).is_none());
    }

    #[test]
    fn triggers_at_the_configured_offset() {
        let mut reveal = single_block();
        let mut viewport = Viewport::new(1280.0, 800.0);

        // Block top 1000 must rise 100 above the bottom edge: scroll_y >= 300.
        viewport.scroll_to(299.0);
        reveal.update(0.1, &viewport);
        assert_eq!(reveal.progress(0), 0.0);

        viewport.scroll_to(300.0);
        reveal.update(0.1, &viewport);
        assert!(reveal.progress(0) > 0.0);
    }

    #[test]
    fn reveals_once_and_never_reverses() {
        let mut reveal = single_block();
        let mut viewport = Viewport::new(1280.0, 800.0);
        viewport.scroll_to(400.0);
        for _ in 0..12 {
            reveal.update(0.1, &viewport);
        }
        assert_eq!(reveal.progress(0), 1.0);

        viewport.scroll_to(0.0); // scroll back above the trigger
        reveal.update(0.1, &viewport);
        assert_eq!(reveal.progress(0), 1.0);
        assert_eq!(reveal.style(0), (1.0, 0.0));
    }
}
