use std::collections::HashMap;

use glam::Vec3;

use crate::lod::LodLevel;
use crate::options::LodOptions;

/// Vertex layout shared by every LOD mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
}

/// Indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Icosphere of the given radius.
    ///
    /// Level 0 = icosahedron (20 triangles, 12 vertices), each level
    /// multiplies the triangle count by four.
    #[must_use]
    pub fn icosphere(radius: f32, subdivisions: u32) -> Self {
        let (positions, indices) = unit_icosphere(subdivisions);
        let vertices = positions
            .iter()
            .map(|&p| Vertex {
                position: (p * radius).to_array(),
                normal: p.to_array(),
            })
            .collect();
        Self { vertices, indices }
    }
}

/// Exactly three meshes, indexed by [`LodLevel`].
#[derive(Debug, Clone, PartialEq)]
pub struct LodMeshSet {
    meshes: [Mesh; 3],
}

impl LodMeshSet {
    /// Wrap three meshes ordered high, medium, low.
    #[must_use]
    pub fn new(high: Mesh, medium: Mesh, low: Mesh) -> Self {
        Self {
            meshes: [high, medium, low],
        }
    }

    /// Generate the icosphere family described by the LOD options.
    #[must_use]
    pub fn from_options(options: &LodOptions) -> Self {
        let [high, medium, low] = options
            .subdivisions
            .map(|level| Mesh::icosphere(options.radius, level));
        Self::new(high, medium, low)
    }

    /// Mesh for a level.
    #[must_use]
    pub fn get(&self, level: LodLevel) -> &Mesh {
        &self.meshes[level.index()]
    }

    /// Levels paired with their meshes, high detail first.
    pub fn iter(&self) -> impl Iterator<Item = (LodLevel, &Mesh)> {
        LodLevel::ALL.into_iter().zip(self.meshes.iter())
    }
}

impl Default for LodMeshSet {
    fn default() -> Self {
        Self::from_options(&LodOptions::default())
    }
}

/// Subdivided icosahedron projected onto the unit sphere.
fn unit_icosphere(subdivisions: u32) -> (Vec<Vec3>, Vec<u32>) {
    // Golden ratio for icosahedron vertices
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let inv_len = 1.0 / (1.0 + phi * phi).sqrt();

    let mut positions: Vec<Vec3> = vec![
        Vec3::new(-1.0, phi, 0.0) * inv_len,
        Vec3::new(1.0, phi, 0.0) * inv_len,
        Vec3::new(-1.0, -phi, 0.0) * inv_len,
        Vec3::new(1.0, -phi, 0.0) * inv_len,
        Vec3::new(0.0, -1.0, phi) * inv_len,
        Vec3::new(0.0, 1.0, phi) * inv_len,
        Vec3::new(0.0, -1.0, -phi) * inv_len,
        Vec3::new(0.0, 1.0, -phi) * inv_len,
        Vec3::new(phi, 0.0, -1.0) * inv_len,
        Vec3::new(phi, 0.0, 1.0) * inv_len,
        Vec3::new(-phi, 0.0, -1.0) * inv_len,
        Vec3::new(-phi, 0.0, 1.0) * inv_len,
    ];

    // CCW winding for outward-facing normals
    #[rustfmt::skip]
    let mut indices: Vec<u32> = vec![
        0, 11, 5,   0, 5, 1,    0, 1, 7,    0, 7, 10,   0, 10, 11,
        1, 5, 9,    5, 11, 4,   11, 10, 2,  10, 7, 6,   7, 1, 8,
        3, 9, 4,    3, 4, 2,    3, 2, 6,    3, 6, 8,    3, 8, 9,
        4, 9, 5,    2, 4, 11,   6, 2, 10,   8, 6, 7,    9, 8, 1,
    ];

    let mut midpoint_cache: HashMap<(u32, u32), u32> = HashMap::new();

    for _ in 0..subdivisions {
        let mut next = Vec::with_capacity(indices.len() * 4);

        for tri in indices.chunks_exact(3) {
            let (v0, v1, v2) = (tri[0], tri[1], tri[2]);
            let a = midpoint(&mut positions, &mut midpoint_cache, v0, v1);
            let b = midpoint(&mut positions, &mut midpoint_cache, v1, v2);
            let c = midpoint(&mut positions, &mut midpoint_cache, v2, v0);

            next.extend_from_slice(&[v0, a, c]);
            next.extend_from_slice(&[v1, b, a]);
            next.extend_from_slice(&[v2, c, b]);
            next.extend_from_slice(&[a, b, c]);
        }

        indices = next;
    }

    (positions, indices)
}

fn midpoint(
    positions: &mut Vec<Vec3>,
    cache: &mut HashMap<(u32, u32), u32>,
    v0: u32,
    v1: u32,
) -> u32 {
    let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };

    if let Some(&idx) = cache.get(&key) {
        return idx;
    }

    let mid = ((positions[v0 as usize] + positions[v1 as usize]) * 0.5).normalize();
    let idx = positions.len() as u32;
    positions.push(mid);
    let _ = cache.insert(key, idx);
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icosphere_counts() {
        let base = Mesh::icosphere(1.0, 0);
        assert_eq!(base.vertices.len(), 12);
        assert_eq!(base.triangle_count(), 20);

        let level2 = Mesh::icosphere(1.0, 2);
        assert_eq!(level2.vertices.len(), 162);
        assert_eq!(level2.triangle_count(), 320);
    }

    #[test]
    fn vertices_lie_on_radius_with_unit_normals() {
        let mesh = Mesh::icosphere(0.5, 3);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            let n = Vec3::from_array(v.normal);
            assert!((p.length() - 0.5).abs() < 1e-5);
            assert!((n.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn triangles_wind_outward() {
        let mesh = Mesh::icosphere(1.0, 1);
        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]]
                .map(|i| Vec3::from_array(mesh.vertices[i as usize].position));
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn default_family_decreases_in_detail() {
        let set = LodMeshSet::default();
        let counts: Vec<usize> = set.iter().map(|(_, m)| m.triangle_count()).collect();
        assert_eq!(counts, vec![5120, 320, 20]);
        assert_eq!(set.get(LodLevel::Low).triangle_count(), 20);
    }
}
