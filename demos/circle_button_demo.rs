//! Drives one press/release cycle of a circle button and prints what the
//! host would draw on each frame.
//!
//! Run with `RUST_LOG=debug cargo run --example circle_button_demo` to see the
//! widget's own logging.

use std::sync::Arc;
use std::time::Duration;

use circle_button::prelude::*;

const PLAY_ICON: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24">
  <path d="M8 5v14l11-7z" fill="white"/>
</svg>"#;

const FRAME: Duration = Duration::from_millis(16);

fn frame(button: &mut CircleButton, ctx: &mut PaintContext, label: &str) {
    let animating = button.advance_animations(FRAME);
    if button.needs_layout() {
        button.layout(Constraints::loose(Size::new(320.0, 320.0)));
        button.set_origin(8.0, 8.0);
    }
    if !button.needs_paint() {
        return;
    }

    button.paint(ctx);
    button.clear_dirty();

    println!(
        "[{label}] progress={:.2} animating={animating}",
        button.animation_progress()
    );
    for command in ctx.take_commands() {
        match command {
            DrawCommand::Circle {
                center,
                radius,
                paint,
            } => println!(
                "    circle {:?} at ({:.0}, {:.0}) r={:.2} color=#{:08X}",
                paint.style,
                center.0,
                center.1,
                radius,
                paint.color.to_argb()
            ),
            DrawCommand::Image { rect, .. } => println!("    image {:?}", rect),
            DrawCommand::Text { text, rect, .. } => println!("    text {:?} {:?}", text, rect),
        }
    }
}

fn main() {
    env_logger::init();

    let mut resources = Resources::new(DisplayMetrics::with_density(2.0));
    resources.register_drawable(
        ResourceId(1),
        ImageSource::SvgBytes(Arc::from(PLAY_ICON)),
    );
    let ctx = Context::new(resources);

    let attrs = AttributeSet::new()
        .with("color", "#3F51B5")
        .with("pressedRingWidth", "5dp");
    let mut button = match CircleButton::with_attributes(&ctx, &attrs) {
        Ok(button) => button.on_click(|| println!("*** clicked ***")),
        Err(err) => {
            log::error!("Invalid button attributes: {err}");
            return;
        }
    };
    button.set_size(160);
    button.set_image_resource(ResourceId(1));
    button.set_text("Play");
    button.set_text_color(Color::WHITE);
    button.set_text_size(24.0);

    let mut paint = PaintContext::new();
    frame(&mut button, &mut paint, "initial");

    let center = (8.0 + 80.0, 8.0 + 80.0);
    button.event(&Event::MouseDown {
        x: center.0,
        y: center.1,
        button: MouseButton::Left,
    });
    while button.is_animating() {
        frame(&mut button, &mut paint, "pressing");
    }

    button.event(&Event::MouseUp {
        x: center.0,
        y: center.1,
        button: MouseButton::Left,
    });
    while button.is_animating() {
        frame(&mut button, &mut paint, "releasing");
    }
    frame(&mut button, &mut paint, "idle");
}
