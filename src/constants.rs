pub const WINDOW_WIDTH: i32 = 1280;           // Default window size
pub const WINDOW_HEIGHT: i32 = 800;
pub const FPS: u32 = 60;

pub const PAGE_WIDTH: f32 = 1280.0;           // Fixed-width page layout
pub const PAGE_HEIGHT: f32 = 2600.0;          // Total scrollable height
pub const WHEEL_STEP: f32 = 60.0;             // Scroll units per wheel notch

pub const SLIDE_INTERVAL: f32 = 6.0;          // Seconds between hero slide changes
pub const PARALLAX_DIVISOR: f32 = 60.0;       // Pointer offset divisor for the hero overlay
pub const DESKTOP_WIDTH: f32 = 1024.0;        // Parallax only above this window width

pub const COUNTER_DURATION: f32 = 2.0;        // Stat count-up duration (seconds)
pub const COUNTER_THRESHOLD: f32 = 0.5;       // Visible fraction that arms a counter

pub const SHOWCASE_INTERVAL: f32 = 7.0;       // Seconds between automatic showcase switches
pub const SHOWCASE_SWAP_DELAY: f32 = 0.3;     // Fade-out lead before the content swap (seconds)
pub const SHOWCASE_GLIDE: f32 = 0.6;          // Glide-back duration after the swap (seconds)
pub const SHOWCASE_DROP: f32 = 10.0;          // Vertical offset of the panel while faded out

pub const NAV_CONDENSE_AT: f32 = 80.0;        // Scroll offset beyond which the navbar condenses
pub const NAV_HEIGHT: f32 = 85.0;             // Default navbar height
pub const NAV_HEIGHT_CONDENSED: f32 = 70.0;
pub const SCROLLSPY_LEAD: f32 = 120.0;        // Activation window starts this far above a section
pub const SCROLL_TWEEN_DURATION: f32 = 0.6;   // Smooth scroll duration (seconds)

pub const MAGNET_PULL_X: f32 = 0.3;           // Marquee label pull toward the pointer
pub const MAGNET_PULL_Y: f32 = 0.5;
pub const MAGNET_SCALE: f32 = 1.15;           // Marquee label scale while hovered

pub const REVEAL_DURATION: f32 = 1.0;         // Scroll reveal duration (seconds)
pub const REVEAL_OFFSET: f32 = 100.0;         // Trigger offset above the viewport bottom edge
pub const REVEAL_RISE: f32 = 24.0;            // Upward glide distance while revealing
