use raylib::prelude::*;

use crate::constants::*;
use crate::page::Viewport;

#[derive(Debug, PartialEq)]
pub struct LabelTransform {
    pub offset: Vector2,
    pub scale: f32,
}

impl LabelTransform {
    fn rest() -> Self {
        Self {
            offset: Vector2::zero(),
            scale: 1.0,
        }
    }
}

struct Label {
    text: &'static str,
    rect: Rectangle, // page space
    transform: LabelTransform,
}

/// Industry tags that lean toward the pointer while hovered and snap back on
/// exit. Purely visual, per-label, nothing persists between hovers.
pub struct MagneticMarquee {
    labels: Vec<Label>,
}

impl MagneticMarquee {
    pub fn new(labels: Vec<(&'static str, Rectangle)>) -> Self {
        Self {
            labels: labels
                .into_iter()
                .map(|(text, rect)| Label {
                    text,
                    rect,
                    transform: LabelTransform::rest(),
                })
                .collect(),
        }
    }

    pub fn transform(&self, i: usize) -> &LabelTransform {
        &self.labels[i].transform
    }

    pub fn update(&mut self, pointer: Vector2, viewport: &Viewport) {
        for label in &mut self.labels {
            let screen = viewport.to_screen(label.rect);
            if screen.check_collision_point_rec(pointer) {
                let center = Vector2::new(screen.x + screen.width / 2.0, screen.y + screen.height / 2.0);
                label.transform = LabelTransform {
                    offset: Vector2::new(
                        (pointer.x - center.x) * MAGNET_PULL_X,
                        (pointer.y - center.y) * MAGNET_PULL_Y,
                    ),
                    scale: MAGNET_SCALE,
                };
            } else {
                label.transform = LabelTransform::rest();
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, viewport: &Viewport) {
        for label in &self.labels {
            let screen = viewport.to_screen(label.rect);
            let size = (20.0 * label.transform.scale) as i32;
            d.draw_text(
                label.text,
                (screen.x + 12.0 + label.transform.offset.x) as i32,
                (screen.y + 12.0 + label.transform.offset.y) as i32,
                size,
                Color::new(210, 210, 225, 255),
            );
        }
    }
}
