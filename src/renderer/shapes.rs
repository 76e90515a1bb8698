//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Two triangles covering the quad a-b-c-d (in winding order)
fn quad(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));

    out.push(Vertex::new(c.x, c.y, color));
    out.push(Vertex::new(d.x, d.y, color));
    out.push(Vertex::new(a.x, a.y, color));
}

/// A line of the given width with butt ends
pub fn thick_line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let mut vertices = Vec::with_capacity(6);
    quad(&mut vertices, from + perp, to + perp, to - perp, from - perp, color);
    vertices
}

/// A filled axis-aligned rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    quad(
        &mut vertices,
        min,
        Vec2::new(max.x, min.y),
        max,
        Vec2::new(min.x, max.y),
        color,
    );
    vertices
}

/// The outline of an axis-aligned rectangle, stroke centered on the edges
pub fn rect_outline(min: Vec2, max: Vec2, stroke: f32, color: [f32; 4]) -> Vec<Vertex> {
    let h = stroke / 2.0;
    let mut vertices = Vec::with_capacity(24);
    let (outer_min, outer_max) = (min - Vec2::splat(h), max + Vec2::splat(h));
    let (inner_min, inner_max) = (min + Vec2::splat(h), max - Vec2::splat(h));
    // Top and bottom bands, then the left and right bands between them
    let bands = [
        (outer_min, Vec2::new(outer_max.x, inner_min.y)),
        (Vec2::new(outer_min.x, inner_max.y), outer_max),
        (Vec2::new(outer_min.x, inner_min.y), Vec2::new(inner_min.x, inner_max.y)),
        (Vec2::new(inner_max.x, inner_min.y), Vec2::new(outer_max.x, inner_max.y)),
    ];
    for (band_min, band_max) in bands {
        vertices.extend(rect(band_min, band_max, color));
    }
    vertices
}
