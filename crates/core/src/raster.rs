//! Rasterizer: scan conversion of a screen-space mesh with depth testing.
//!
//! Owns the persistent depth buffer. The screen is borrowed per call and
//! receives one glyph per winning pixel; overlap is resolved by a strict
//! nearest-depth test, so draw order never changes the result.

use crate::math::Vector2;
use crate::mesh::{Mesh, Vertex};
use crate::screen::Screen;

/// Glyphs of increasing visual density.
///
/// A triangle's brightness in [0, 1] selects `min(floor(b * 9), 9)`.
pub const GLYPH_RAMP: [char; 10] = ['.', ':', '-', '~', '=', '+', '*', '#', '%', '@'];

#[derive(Debug, Clone, Default)]
pub struct Rasterizer {
    depth: Vec<f32>,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan-convert `mesh` into `screen`.
    ///
    /// Expects the mesh to be fully processed: vertices in pixel
    /// coordinates with z as depth, brightness per triangle. The depth
    /// buffer is resized to the screen resolution if needed and reset to
    /// +infinity at the start of every call.
    pub fn rasterize(&mut self, mesh: &Mesh, screen: &mut Screen) {
        let resolution = (screen.width() as usize) * (screen.height() as usize);
        if self.depth.len() != resolution {
            self.depth.resize(resolution, f32::INFINITY);
        }
        self.depth.fill(f32::INFINITY);

        for (tri, &brightness) in mesh.index_buffer.iter().zip(&mesh.tri_brightness) {
            let v0 = mesh.vertex_buffer[tri[0]];
            let v1 = mesh.vertex_buffer[tri[1]];
            let v2 = mesh.vertex_buffer[tri[2]];

            self.scan_triangle(&v0, &v1, &v2, brightness, screen);
        }
    }

    fn scan_triangle(
        &mut self,
        v0: &Vertex,
        v1: &Vertex,
        v2: &Vertex,
        brightness: f32,
        screen: &mut Screen,
    ) {
        let (x_min, x_max) = bounds(v0.position.x, v1.position.x, v2.position.x);
        let (y_min, y_max) = bounds(v0.position.y, v1.position.y, v2.position.y);

        for y in (y_min..=y_max).rev() {
            for x in x_min..=x_max {
                if !screen.is_inside(x, y) {
                    continue;
                }

                let point = Vector2::new(x as f32, y as f32);
                if !point_inside_triangle(point, v0, v1, v2) {
                    continue;
                }

                let depth = depth_at(v0, v1, v2, point);
                self.shade_pixel(x, y, brightness, depth, screen);
            }
        }
    }

    fn shade_pixel(&mut self, x: i32, y: i32, brightness: f32, depth: f32, screen: &mut Screen) {
        let last = GLYPH_RAMP.len() - 1;
        let index = ((brightness * last as f32) as usize).min(last);

        self.merge_pixel(x, y, GLYPH_RAMP[index], depth, screen);
    }

    /// Strict nearest-wins depth test. Equal depth keeps the first writer.
    ///
    /// The caller has already bounds-checked (x, y) against the screen.
    fn merge_pixel(&mut self, x: i32, y: i32, glyph: char, depth: f32, screen: &mut Screen) {
        let index = (y as usize) * (screen.width() as usize) + (x as usize);

        if depth < self.depth[index] {
            self.depth[index] = depth;
            screen.set(x as u16, y as u16, glyph);
        }
    }
}

/// Integer bounding range of three coordinates, truncated toward zero.
fn bounds(a: f32, b: f32, c: f32) -> (i32, i32) {
    let min = a.min(b).min(c);
    let max = a.max(b).max(c);
    (min as i32, max as i32)
}

/// Closed point-in-triangle test against the three directed edges.
///
/// Clockwise winding puts interior points on the non-positive side of
/// every edge cross product; `<=` keeps points exactly on an edge.
fn point_inside_triangle(point: Vector2, v0: &Vertex, v1: &Vertex, v2: &Vertex) -> bool {
    let a = Vector2::new(v0.position.x, v0.position.y);
    let b = Vector2::new(v1.position.x, v1.position.y);
    let c = Vector2::new(v2.position.x, v2.position.y);

    let edges = [(a, b - a), (b, c - b), (c, a - c)];

    edges
        .iter()
        .all(|&(start, edge)| edge.cross(point - start).z <= 0.0)
}

/// Depth at a pixel from the triangle's supporting plane
/// `ax + by + cz + d = 0`.
///
/// A plane with an exactly zero z coefficient is edge-on to the view
/// axis; its depth reads as +infinity so it never wins a depth test.
fn depth_at(v0: &Vertex, v1: &Vertex, v2: &Vertex, point: Vector2) -> f32 {
    let edge1 = v1.position - v0.position;
    let edge2 = v2.position - v0.position;
    let normal = edge1.cross(edge2);

    if normal.z == 0.0 {
        return f32::INFINITY;
    }

    let d = -normal.dot(v0.position);
    -(normal.x * point.x + normal.y * point.y + d) / normal.z
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    /// Screen-space triangle at constant depth, wound clockwise.
    fn flat_triangle(
        a: (f32, f32),
        b: (f32, f32),
        c: (f32, f32),
        depth: f32,
        brightness: f32,
    ) -> Mesh {
        let normal = Vector3::new(0.0, 0.0, -1.0);
        let mut mesh = Mesh::new(
            vec![
                Vertex::new(Vector3::new(a.0, a.1, depth), normal),
                Vertex::new(Vector3::new(b.0, b.1, depth), normal),
                Vertex::new(Vector3::new(c.0, c.1, depth), normal),
            ],
            vec![[0, 1, 2]],
        );
        mesh.tri_brightness = vec![brightness];
        mesh
    }

    #[test]
    fn brightness_point_eight_draws_hash() {
        let mesh = flat_triangle((0.0, 0.0), (0.0, 10.0), (10.0, 0.0), 1.0, 0.8);
        let mut screen = Screen::new(16, 16).unwrap();
        let mut raster = Rasterizer::new();

        raster.rasterize(&mesh, &mut screen);

        // floor(0.8 * 9) = 7, the eighth glyph.
        assert_eq!(GLYPH_RAMP[7], '#');
        assert_eq!(screen.get(1, 1), Some('#'));
        // Vertices sit on edges and the test is closed.
        assert_eq!(screen.get(0, 0), Some('#'));
        // Beyond the hypotenuse stays blank.
        assert_eq!(screen.get(9, 9), Some(' '));
    }

    #[test]
    fn ramp_endpoints_map_to_dot_and_at() {
        let mut screen = Screen::new(16, 16).unwrap();
        let mut raster = Rasterizer::new();

        let dark = flat_triangle((0.0, 0.0), (0.0, 10.0), (10.0, 0.0), 1.0, 0.0);
        raster.rasterize(&dark, &mut screen);
        assert_eq!(screen.get(1, 1), Some('.'));

        screen.clear();
        let bright = flat_triangle((0.0, 0.0), (0.0, 10.0), (10.0, 0.0), 1.0, 1.0);
        raster.rasterize(&bright, &mut screen);
        assert_eq!(screen.get(1, 1), Some('@'));

        screen.clear();
        let high = flat_triangle((0.0, 0.0), (0.0, 10.0), (10.0, 0.0), 1.0, 0.95);
        raster.rasterize(&high, &mut screen);
        // floor(0.95 * 9) = 8.
        assert_eq!(screen.get(1, 1), Some('%'));
    }

    #[test]
    fn rasterizing_twice_is_idempotent() {
        let mesh = flat_triangle((0.0, 0.0), (0.0, 10.0), (10.0, 0.0), 2.5, 0.8);
        let mut raster = Rasterizer::new();

        let mut once = Screen::new(16, 16).unwrap();
        raster.rasterize(&mesh, &mut once);

        let mut twice = Screen::new(16, 16).unwrap();
        raster.rasterize(&mesh, &mut twice);
        raster.rasterize(&mesh, &mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn equal_depth_keeps_the_first_writer() {
        // Identical geometry twice with different brightness: the second
        // triangle's equal-depth writes must all be dropped.
        let normal = Vector3::new(0.0, 0.0, -1.0);
        let mut mesh = Mesh::new(
            vec![
                Vertex::new(Vector3::new(0.0, 0.0, 1.0), normal),
                Vertex::new(Vector3::new(0.0, 10.0, 1.0), normal),
                Vertex::new(Vector3::new(10.0, 0.0, 1.0), normal),
            ],
            vec![[0, 1, 2], [0, 1, 2]],
        );
        mesh.tri_brightness = vec![0.8, 0.2];

        let mut screen = Screen::new(16, 16).unwrap();
        let mut raster = Rasterizer::new();
        raster.rasterize(&mesh, &mut screen);

        assert_eq!(screen.get(1, 1), Some('#'));
    }

    #[test]
    fn nearer_triangle_wins_regardless_of_draw_order() {
        let normal = Vector3::new(0.0, 0.0, -1.0);
        let far = (
            [
                Vertex::new(Vector3::new(0.0, 0.0, 5.0), normal),
                Vertex::new(Vector3::new(0.0, 10.0, 5.0), normal),
                Vertex::new(Vector3::new(10.0, 0.0, 5.0), normal),
            ],
            0.2,
        );
        let near = (
            [
                Vertex::new(Vector3::new(0.0, 0.0, 2.0), normal),
                Vertex::new(Vector3::new(0.0, 10.0, 2.0), normal),
                Vertex::new(Vector3::new(10.0, 0.0, 2.0), normal),
            ],
            0.9,
        );

        for order in [[far, near], [near, far]] {
            let mut vertex_buffer = Vec::new();
            let mut index_buffer = Vec::new();
            let mut tri_brightness = Vec::new();
            for (verts, brightness) in order {
                let base = vertex_buffer.len();
                vertex_buffer.extend(verts);
                index_buffer.push([base, base + 1, base + 2]);
                tri_brightness.push(brightness);
            }
            let mut mesh = Mesh::new(vertex_buffer, index_buffer);
            mesh.tri_brightness = tri_brightness;

            let mut screen = Screen::new(16, 16).unwrap();
            let mut raster = Rasterizer::new();
            raster.rasterize(&mesh, &mut screen);

            // floor(0.9 * 9) = 8: the near triangle's glyph.
            assert_eq!(screen.get(1, 1), Some('%'));
        }
    }

    #[test]
    fn edge_on_triangle_never_wins_a_depth_test() {
        // All three vertices on one screen-space line: the plane's z
        // coefficient is zero, so every depth reads +infinity and the
        // strict test drops every write.
        let normal = Vector3::new(0.0, 0.0, -1.0);
        let mut mesh = Mesh::new(
            vec![
                Vertex::new(Vector3::new(0.0, 3.0, 1.0), normal),
                Vertex::new(Vector3::new(5.0, 3.0, 2.0), normal),
                Vertex::new(Vector3::new(9.0, 3.0, 3.0), normal),
            ],
            vec![[0, 1, 2]],
        );
        mesh.tri_brightness = vec![1.0];

        let mut screen = Screen::new(16, 16).unwrap();
        let mut raster = Rasterizer::new();
        raster.rasterize(&mesh, &mut screen);

        assert!(screen.cells().iter().all(|&c| c == ' '));
    }

    #[test]
    fn offscreen_parts_are_skipped_without_panic() {
        // Bounding box reaches far outside the screen in every direction.
        let mesh = flat_triangle((-20.0, -20.0), (-20.0, 40.0), (40.0, -20.0), 1.0, 0.5);
        let mut screen = Screen::new(8, 8).unwrap();
        let mut raster = Rasterizer::new();

        raster.rasterize(&mesh, &mut screen);

        // The covered on-screen pixels got glyphs; floor(0.5 * 9) = 4.
        assert_eq!(screen.get(0, 0), Some('='));
        assert_eq!(screen.get(7, 7), Some('='));
    }

    #[test]
    fn screen_resize_between_calls_is_handled() {
        let mesh = flat_triangle((0.0, 0.0), (0.0, 4.0), (4.0, 0.0), 1.0, 0.8);
        let mut raster = Rasterizer::new();

        let mut small = Screen::new(8, 8).unwrap();
        raster.rasterize(&mesh, &mut small);
        assert_eq!(small.get(1, 1), Some('#'));

        // Same rasterizer against a larger screen: the depth buffer grows.
        let mut large = Screen::new(32, 32).unwrap();
        raster.rasterize(&mesh, &mut large);
        assert_eq!(large.get(1, 1), Some('#'));
    }
}
