use crate::types::{GridVertex, Vertex};
use std::f32::consts::TAU;

/// CPU-side mesh: vertex/index lists ready for upload
#[derive(Debug, Clone)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Tessellates a torus around the Z axis.
///
/// `radius` is the distance from the torus center to the tube center,
/// `tube` the tube radius. Produces (radial + 1) * (tubular + 1) vertices
/// with smooth normals pointing away from the tube center.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let mut vertices =
        Vec::with_capacity(((radial_segments + 1) * (tubular_segments + 1)) as usize);

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;

            let position = [
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            ];
            let center = [radius * u.cos(), radius * u.sin(), 0.0];
            let normal = normalize([
                position[0] - center[0],
                position[1] - center[1],
                position[2] - center[2],
            ]);

            vertices.push(Vertex { position, normal });
        }
    }

    let stride = tubular_segments + 1;
    let mut indices = Vec::with_capacity((radial_segments * tubular_segments * 6) as usize);
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;

            indices.extend_from_slice(&[a, b, d]);
            indices.extend_from_slice(&[b, c, d]);
        }
    }

    MeshData { vertices, indices }
}

/// Tessellates a UV sphere centered at the origin.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let mut vertices =
        Vec::with_capacity(((width_segments + 1) * (height_segments + 1)) as usize);

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let polar = v * std::f32::consts::PI;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let azimuth = u * TAU;

            let normal = normalize([
                -azimuth.cos() * polar.sin(),
                polar.cos(),
                azimuth.sin() * polar.sin(),
            ]);
            let position = [normal[0] * radius, normal[1] * radius, normal[2] * radius];

            vertices.push(Vertex { position, normal });
        }
    }

    let stride = width_segments + 1;
    let mut indices = Vec::new();
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = stride * iy + ix + 1;
            let b = stride * iy + ix;
            let c = stride * (iy + 1) + ix;
            let d = stride * (iy + 1) + ix + 1;

            // Skip the degenerate triangles at the poles
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Builds grid helper lines in the XZ plane.
///
/// `size` is the full side length, `divisions` the number of cells per
/// side. The two center lines get `center_color`, the rest `grid_color`.
/// Returns a line list: two vertices per line, 2 * (divisions + 1) lines.
pub fn grid_helper(
    size: f32,
    divisions: u32,
    center_color: [f32; 3],
    grid_color: [f32; 3],
) -> Vec<GridVertex> {
    let half = size / 2.0;
    let step = size / divisions as f32;
    let center = divisions / 2;

    let mut lines = Vec::with_capacity(((divisions + 1) * 4) as usize);
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let c = if i == center { center_color } else { grid_color };
        let color = [c[0], c[1], c[2], 1.0];

        // Line along X at z = k
        lines.push(GridVertex {
            position: [-half, 0.0, k],
            color,
        });
        lines.push(GridVertex {
            position: [half, 0.0, k],
            color,
        });
        // Line along Z at x = k
        lines.push(GridVertex {
            position: [k, 0.0, -half],
            color,
        });
        lines.push(GridVertex {
            position: [k, 0.0, half],
            color,
        });
    }
    lines
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len == 0.0 {
        return v;
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn torus_vertex_and_index_counts() {
        let mesh = torus(10.0, 3.0, 16, 100);

        assert_eq!(mesh.vertex_count(), 17 * 101);
        assert_eq!(mesh.indices.len(), (16 * 100 * 6) as usize);
    }

    #[test]
    fn torus_vertices_stay_in_radius_band() {
        let mesh = torus(10.0, 3.0, 16, 100);

        for v in &mesh.vertices {
            let planar = (v.position[0] * v.position[0] + v.position[1] * v.position[1]).sqrt();
            assert!(planar >= 10.0 - 3.0 - 1e-4, "planar distance {planar} below band");
            assert!(planar <= 10.0 + 3.0 + 1e-4, "planar distance {planar} above band");
            assert!(v.position[2].abs() <= 3.0 + 1e-4);
        }
    }

    #[test]
    fn torus_normals_are_unit_length() {
        let mesh = torus(10.0, 3.0, 8, 12);

        for v in &mesh.vertices {
            let len =
                (v.normal[0] * v.normal[0] + v.normal[1] * v.normal[1] + v.normal[2] * v.normal[2])
                    .sqrt();
            assert!((len - 1.0).abs() < 1e-4, "normal length {len}");
        }
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let mesh = uv_sphere(1.0, 24, 24);

        assert_eq!(mesh.vertex_count(), 25 * 25);
        for v in &mesh.vertices {
            let len = (v.position[0] * v.position[0]
                + v.position[1] * v.position[1]
                + v.position[2] * v.position[2])
                .sqrt();
            assert!((len - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn sphere_indices_reference_valid_vertices() {
        let mesh = uv_sphere(0.5, 8, 6);
        let count = mesh.vertex_count() as u32;

        assert!(!mesh.indices.is_empty());
        for &i in &mesh.indices {
            assert!(i < count, "index {i} out of range");
        }
    }

    #[test]
    fn grid_helper_line_count_and_extent() {
        let lines = grid_helper(200.0, 50, [0.25, 0.25, 0.25], [0.5, 0.5, 0.5]);

        // 51 lines along each of two axes, two vertices each
        assert_eq!(lines.len(), 51 * 2 * 2);
        for v in &lines {
            assert!(v.position[0].abs() <= 100.0 + 1e-4);
            assert!(v.position[2].abs() <= 100.0 + 1e-4);
            assert_eq!(v.position[1], 0.0);
        }
    }

    #[test]
    fn grid_helper_center_lines_use_center_color() {
        let center = [0.25, 0.25, 0.25];
        let outer = [0.5, 0.5, 0.5];
        let lines = grid_helper(200.0, 50, center, outer);

        let center_count = lines
            .iter()
            .filter(|v| v.color[0] == center[0])
            .count();
        // One X line and one Z line through the middle, two vertices each
        assert_eq!(center_count, 4);
    }
}
