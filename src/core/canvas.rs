//! Raster helpers for drawing flat shapes onto an RGBA canvas.
//!
//! Writes replace pixels, they do not blend; drawing transparency erases.
//! Coordinates outside the canvas are skipped, so callers may pass shapes
//! that hang over the edge.

use crate::domain::model::Rect;
use image::{Rgba, RgbaImage};

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn put(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

pub fn fill_rect(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    if rect.is_empty() {
        return;
    }
    for y in rect.y0..=rect.y1 {
        for x in rect.x0..=rect.x1 {
            put(img, x, y, color);
        }
    }
}

/// Membership test for a rectangle with circular corners. The radius is
/// clamped so opposite corners never overlap.
fn in_rounded_rect(rect: Rect, radius: i32, x: i32, y: i32) -> bool {
    if x < rect.x0 || x > rect.x1 || y < rect.y0 || y > rect.y1 {
        return false;
    }

    let r = radius
        .min((rect.x1 - rect.x0) / 2)
        .min((rect.y1 - rect.y0) / 2)
        .max(0);
    if r == 0 {
        return true;
    }

    let cx = if x < rect.x0 + r {
        rect.x0 + r
    } else if x > rect.x1 - r {
        rect.x1 - r
    } else {
        return true;
    };
    let cy = if y < rect.y0 + r {
        rect.y0 + r
    } else if y > rect.y1 - r {
        rect.y1 - r
    } else {
        return true;
    };

    let dx = x - cx;
    let dy = y - cy;
    dx * dx + dy * dy <= r * r
}

/// Rounded rectangle with a filled interior and an outline of `stroke` pixels
/// drawn inside the shape boundary.
pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    rect: Rect,
    radius: i32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    stroke: i32,
) {
    if rect.is_empty() {
        return;
    }

    let inner = Rect::new(
        rect.x0 + stroke,
        rect.y0 + stroke,
        rect.x1 - stroke,
        rect.y1 - stroke,
    );
    let inner_radius = (radius - stroke).max(0);

    for y in rect.y0..=rect.y1 {
        for x in rect.x0..=rect.x1 {
            if !in_rounded_rect(rect, radius, x, y) {
                continue;
            }
            let color = if stroke > 0
                && (inner.is_empty() || !in_rounded_rect(inner, inner_radius, x, y))
            {
                outline
            } else {
                fill
            };
            put(img, x, y, color);
        }
    }
}

fn edge(a: (i32, i32), b: (i32, i32), p: (i32, i32)) -> i64 {
    (b.0 - a.0) as i64 * (p.1 - a.1) as i64 - (b.1 - a.1) as i64 * (p.0 - a.0) as i64
}

/// Filled triangle with a one-pixel outline along its edges.
pub fn fill_triangle(
    img: &mut RgbaImage,
    a: (i32, i32),
    b: (i32, i32),
    c: (i32, i32),
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) {
    let min_x = a.0.min(b.0).min(c.0);
    let max_x = a.0.max(b.0).max(c.0);
    let min_y = a.1.min(b.1).min(c.1);
    let max_y = a.1.max(b.1).max(c.1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let w0 = edge(a, b, (x, y));
            let w1 = edge(b, c, (x, y));
            let w2 = edge(c, a, (x, y));
            let inside = (w0 >= 0 && w1 >= 0 && w2 >= 0) || (w0 <= 0 && w1 <= 0 && w2 <= 0);
            if inside {
                put(img, x, y, fill);
            }
        }
    }

    draw_line(img, a, b, outline);
    draw_line(img, b, c, outline);
    draw_line(img, c, a, outline);
}

/// Bresenham line, one pixel wide.
pub fn draw_line(img: &mut RgbaImage, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(img, x, y, color);
        if (x, y) == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
