/// Frustum - six clipping planes for visibility culling.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0 for all planes
///
/// Built from the render pass's cull matrix (`projection * world_to_view`)
/// so that callers can cull draw items against the pass's view volume.

use glam::{Mat4, Vec3, Vec4};

/// Result of a 3-way frustum/bounds classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// Bounds are entirely outside the frustum
    Outside,
    /// Bounds are entirely inside the frustum
    Inside,
    /// Bounds partially overlap the frustum
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes for culling.
///
/// Each plane is (A, B, C, D) where Ax + By + Cz + D = 0.
/// Normal (A, B, C) points inward (toward the visible volume).
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method. Works for both perspective
    /// and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();

        // Gribb & Hartmann: extract planes from rows of the VP matrix
        // Each plane is normalized so that (A, B, C) is a unit vector
        let mut planes = [
            // Left:   row3 + row0
            Vec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            Vec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom: row3 + row1
            Vec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Top:    row3 - row1
            Vec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Near:   row3 + row2
            Vec4::new(m[0][3] + m[0][2], m[1][3] + m[1][2], m[2][3] + m[2][2], m[3][3] + m[3][2]),
            // Far:    row3 - row2
            Vec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
        ];

        // Normalize each plane
        for plane in &mut planes {
            let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Signed distance from `point` to one plane (positive = inside)
    ///
    /// `None` when `plane` is not one of the `PLANE_*` indices.
    pub fn signed_distance(&self, plane: usize, point: Vec3) -> Option<f32> {
        self.planes.get(plane).map(|p| plane_distance(*p, point))
    }

    /// Test if a world-space point lies inside all six planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|p| plane_distance(*p, point) >= 0.0)
    }

    /// Test if a bounding sphere intersects this frustum.
    ///
    /// Conservative: may report spheres near a frustum corner as visible.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.classify_sphere(center, radius) != FrustumTest::Outside
    }

    /// Classify a bounding sphere against the frustum (3-way test).
    ///
    /// - Center farther than `radius` behind any plane -> `Outside`
    /// - Center closer than `radius` to any plane -> at least `Partial`
    /// - Otherwise -> `Inside`
    pub fn classify_sphere(&self, center: Vec3, radius: f32) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            let distance = plane_distance(*plane, center);
            if distance < -radius {
                return FrustumTest::Outside;
            }
            if distance < radius {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

fn plane_distance(plane: Vec4, point: Vec3) -> f32 {
    Vec3::new(plane.x, plane.y, plane.z).dot(point) + plane.w
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
