use std::path::PathBuf;

use clap::Parser;
use rand::Rng;
use raylib::prelude::*;
use tracing::info;

mod assets;
mod constants;
mod easing;
mod hero;
mod marquee;
mod nav;
mod observer;
mod page;
mod reveal;
mod showcase;
mod stats;
mod timer;

use crate::constants::*;
use crate::hero::{HeroSlider, Slide};
use crate::marquee::MagneticMarquee;
use crate::nav::{NavController, NavLink};
use crate::page::{PageLayout, Viewport};
use crate::reveal::ScrollReveal;
use crate::showcase::{ShowcaseCycler, VARIANTS};
use crate::stats::StatCounter;

/// Native showroom for the NIVIA marketing page.
#[derive(Parser)]
struct Args {
    /// Directory of slide and showcase images; placeholder art without it
    #[arg(long)]
    assets: Option<PathBuf>,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,
}

/// Placeholder art gets a slightly different cast on every run.
fn jittered(base: Color, rng: &mut impl Rng) -> Color {
    let mut j = |c: u8| (c as i16 + rng.random_range(-12..=12)).clamp(0, 255) as u8;
    Color::new(j(base.r), j(base.g), j(base.b), 255)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("NIVIA Showroom")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut art = match &args.assets {
        Some(dir) => assets::load_art(&mut rl, &thread, dir),
        None => Default::default(),
    };
    info!(textures = art.len(), "art loaded");

    let layout = PageLayout::build();
    let mut viewport = Viewport::new(args.width as f32, args.height as f32);

    // --- Hero ---
    let mut rng = rand::rng();
    let hero_slides: Vec<Slide> = [
        ("Hosting Beyond Servers", "Static-first delivery from the edge, everywhere.", Color::new(24, 40, 96, 255), "slide1"),
        ("Zero Cold Starts", "Your pages are already there before the click.", Color::new(64, 24, 88, 255), "slide2"),
        ("Built for the Long Run", "Infrastructure that scales down as well as up.", Color::new(16, 72, 64, 255), "slide3"),
    ]
    .into_iter()
    .map(|(title, caption, tint, key)| {
        let mut slide = Slide::new(title, caption, jittered(tint, &mut rng));
        slide.texture = art.remove(key);
        slide
    })
    .collect();
    let mut hero = HeroSlider::new(layout.hero, hero_slides);

    // --- Stat counters ---
    let mut counters: Vec<StatCounter> = [
        ("99.9%", "Uptime guarantee"),
        ("500+", "Sites launched"),
        ("120+", "Edge locations"),
    ]
    .into_iter()
    .zip(layout.stat_cards.iter())
    .map(|((text, label), card)| StatCounter::new(*card, text, label))
    .collect();

    // --- Showcase ---
    let mut showcase = ShowcaseCycler::new();

    // --- Navigation ---
    let mut nav = NavController::new(vec![
        NavLink { label: "Home", href: "#home" },
        NavLink { label: "Features", href: "#features" },
        NavLink { label: "Industries", href: "#industries" },
        NavLink { label: "Contact", href: "#contact" },
        NavLink { label: "Status", href: "https://status.nivia.example" },
    ]);

    // --- Marquee ---
    let tags = ["Fintech", "Healthcare", "E-Commerce", "SaaS", "Logistics", "Education"];
    let mut marquee = MagneticMarquee::new(
        tags.iter()
            .copied()
            .zip(layout.marquee_labels.iter().copied())
            .collect(),
    );

    // --- Scroll reveal (stat cards first, contact block last) ---
    let mut reveal_blocks: Vec<Rectangle> = layout.stat_cards.clone();
    reveal_blocks.push(layout.contact);
    let mut reveal = ScrollReveal::new(reveal_blocks);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        viewport.width = rl.get_screen_width() as f32;
        viewport.height = rl.get_screen_height() as f32;

        let pointer = rl.get_mouse_position();
        let wheel = rl.get_mouse_wheel_move();
        let clicked = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);

        // Wheel input takes over from any smooth scroll in flight.
        if wheel != 0.0 {
            nav.cancel_scroll();
            let y = viewport.scroll_y - wheel * WHEEL_STEP;
            viewport.scroll_to(y);
        }
        if let Some(y) = nav.update(dt) {
            viewport.scroll_to(y);
        }
        nav.on_scroll(viewport.scroll_y, &layout.sections);

        if clicked {
            if let Some(i) = nav.link_hit(pointer, viewport.width) {
                nav.click(i, &layout, viewport.scroll_y);
            }
            for (i, rect) in layout.showcase_buttons.iter().enumerate() {
                if viewport.to_screen(*rect).check_collision_point_rec(pointer) {
                    showcase.switch(VARIANTS[i].key, Some(i));
                }
            }
        }

        showcase.set_hovered(
            viewport
                .to_screen(layout.showcase)
                .check_collision_point_rec(pointer),
        );

        // Each unit owns its slice of the page; update order is not load
        // bearing, nothing here reads another unit's state.
        hero.update(dt, pointer, &viewport);
        for counter in counters.iter_mut().filter(|c| !c.is_done()) {
            counter.update(dt, &viewport);
        }
        showcase.update(dt);
        marquee.update(pointer, &viewport);
        if let Some(reveal) = reveal.as_mut() {
            reveal.update(dt, &viewport);
        }

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::new(8, 8, 12, 255));

        hero.draw(&mut d, &viewport);
        for (i, counter) in counters.iter().enumerate() {
            let (alpha, rise) = reveal.as_ref().map_or((1.0, 0.0), |r| r.style(i));
            counter.draw(&mut d, &viewport, alpha, rise);
        }
        showcase.draw(&mut d, &viewport, &layout, &art);
        marquee.draw(&mut d, &viewport);
        draw_contact(&mut d, &viewport, &layout, reveal.as_ref().map_or((1.0, 0.0), |r| r.style(3)));

        // Navbar last, it floats above the page.
        nav.draw(&mut d, viewport.width);
    }
}

fn draw_contact(d: &mut RaylibDrawHandle, viewport: &Viewport, layout: &PageLayout, style: (f32, f32)) {
    let (alpha, rise) = style;
    let screen = viewport.to_screen(layout.contact);
    let x = screen.x as i32;
    let y = (screen.y - rise) as i32;
    d.draw_rectangle(x, y, screen.width as i32, screen.height as i32, Color::new(18, 18, 26, 255).fade(alpha));
    d.draw_text("Ready to go serverless?", x + 32, y + 48, 36, Color::WHITE.fade(alpha));
    d.draw_text("hello@nivia.example", x + 32, y + 120, 22, Color::new(64, 110, 255, 255).fade(alpha));
}
