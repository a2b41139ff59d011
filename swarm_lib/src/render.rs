use crate::{boid::Boid, flock::Flock, vec2::Vec2Ext};

/// 8-bit RGB colour, converted by the surface to whatever its panel or
/// window wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
}

/// Fixed foreground colour boids are drawn with.
pub const FOREGROUND: Color = Color::WHITE;
/// Shown centered when there is nothing to simulate.
pub const EMPTY_MESSAGE: &str = "Tap to create Boids";

/// Minimal drawing surface the simulation renders onto.
///
/// Implementations wrap a window, a sprite buffer or a test recorder;
/// the render pass never learns which. Coordinates are in simulation
/// space, top-left origin, y growing downwards.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color);
    /// Text drawn centered on (x, y).
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color);
    /// Pushes the finished frame to the panel.
    fn present(&mut self);
}

/// Draws one boid as a short line from its position along its heading.
pub fn render_boid(boid: &Boid, surface: &mut dyn Surface) {
    let angle = boid.velocity.heading();
    let tip_x = boid.position.x + angle.cos() * boid.size;
    let tip_y = boid.position.y + angle.sin() * boid.size;

    surface.draw_line(boid.position.x, boid.position.y, tip_x, tip_y, FOREGROUND);
}

/// Render pass over the whole flock.
///
/// Reads final positions only; nothing here feeds back into simulation
/// state, which keeps the physics testable without any surface at all.
pub fn render_flock(flock: &Flock, surface: &mut dyn Surface) {
    if flock.is_empty() {
        surface.draw_text(
            EMPTY_MESSAGE,
            surface.width() / 2.,
            surface.height() / 2.,
            FOREGROUND,
        );
        return;
    }

    for boid in flock.view() {
        render_boid(boid, surface);
    }
}
