use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Direction of a keyboard-driven camera translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Against the right vector.
    Left,
    /// Along the right vector.
    Right,
}

/// First-person fly camera driven by yaw/pitch angles.
///
/// Only position and the two angles are stored. The front/right/up basis is
/// rebuilt from yaw and pitch on every query, so it stays orthonormal no
/// matter what input the camera has seen.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    position: Vec3,
    world_up: Vec3,
    /// Degrees. -90 looks down -Z.
    yaw: f32,
    /// Degrees, clamped to `[-pitch_limit, pitch_limit]`.
    pitch: f32,
    pitch_limit: f32,
    /// Vertical field of view in degrees.
    zoom: f32,
    zoom_min: f32,
    zoom_max: f32,
    /// Units per second.
    speed: f32,
    /// Degrees per pixel of mouse motion.
    sensitivity: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl CameraController {
    /// Create a camera at `position` with default orientation and tuning.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self::default();
        camera.position = position;
        camera
    }

    /// Create a camera from configured options.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let pitch_limit = options.pitch_limit.abs();
        let (zoom_min, zoom_max) = if options.zoom_min <= options.zoom_max {
            (options.zoom_min, options.zoom_max)
        } else {
            (options.zoom_max, options.zoom_min)
        };
        Self {
            position: Vec3::from_array(options.position),
            world_up: Vec3::Y,
            yaw: options.yaw,
            pitch: options.pitch.clamp(-pitch_limit, pitch_limit),
            pitch_limit,
            zoom: options.zoom.clamp(zoom_min, zoom_max),
            zoom_min,
            zoom_max,
            speed: options.speed,
            sensitivity: options.sensitivity,
        }
    }

    /// World-space eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport the camera. Orientation is unchanged.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Euclidean distance from the world origin.
    #[must_use]
    pub fn distance_from_origin(&self) -> f32 {
        self.position.length()
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Field of view in degrees.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Unit view direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize()
    }

    /// Unit right vector, perpendicular to front and world up.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.front().cross(self.world_up).normalize()
    }

    /// Unit camera-relative up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        let front = self.front();
        front.cross(self.world_up).normalize().cross(front).normalize()
    }

    /// Translate along the view basis by `speed * dt`.
    ///
    /// Non-positive `dt` leaves the camera where it is.
    pub fn move_in(&mut self, direction: CameraMovement, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let velocity = self.speed * dt;
        let offset = match direction {
            CameraMovement::Forward => self.front(),
            CameraMovement::Backward => -self.front(),
            CameraMovement::Left => -self.right(),
            CameraMovement::Right => self.right(),
        };
        self.position += offset * velocity;
    }

    /// Turn the camera by mouse offsets in pixels. Positive `y_offset`
    /// looks up.
    pub fn look(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.sensitivity;
        self.pitch = (self.pitch + y_offset * self.sensitivity)
            .clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Narrow (positive delta) or widen the field of view.
    pub fn zoom_by(&mut self, scroll_delta: f32) {
        self.zoom = (self.zoom - scroll_delta).clamp(self.zoom_min, self.zoom_max);
    }

    /// Right-handed look-at transform from the eye toward `position + front`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let front = self.front();
        Mat4::look_at_rh(self.position, self.position + front, self.up())
    }

    /// Perspective projection for the current zoom. Uses the [0, 1] depth
    /// range expected by wgpu.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, znear, zfar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = CameraController::new(Vec3::new(0.0, 0.0, 3.0));
        assert!(approx(camera.front(), Vec3::NEG_Z));
        assert!(approx(camera.right(), Vec3::X));
        assert!(approx(camera.up(), Vec3::Y));
        assert_eq!(camera.zoom(), 45.0);
    }

    #[test]
    fn move_displacement_matches_speed_times_dt() {
        let directions = [
            CameraMovement::Forward,
            CameraMovement::Backward,
            CameraMovement::Left,
            CameraMovement::Right,
        ];
        for direction in directions {
            let mut camera = CameraController::new(Vec3::ZERO);
            camera.look(37.0, 12.0);
            camera.move_in(direction, 0.4);
            let moved = camera.position().length();
            assert!((moved - 2.5 * 0.4).abs() < EPS, "{direction:?} moved {moved}");
        }
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut camera = CameraController::new(Vec3::new(1.0, 2.0, 3.0));
        camera.move_in(CameraMovement::Forward, 0.0);
        camera.move_in(CameraMovement::Left, -1.0);
        assert_eq!(camera.position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn movement_is_frame_rate_independent() {
        let mut coarse = CameraController::new(Vec3::ZERO);
        coarse.move_in(CameraMovement::Forward, 1.0);

        let mut fine = CameraController::new(Vec3::ZERO);
        for _ in 0..100 {
            fine.move_in(CameraMovement::Forward, 0.01);
        }
        assert!((coarse.position() - fine.position()).length() < 1e-4);
    }

    #[test]
    fn pitch_stays_clamped() {
        let mut camera = CameraController::default();
        for _ in 0..1000 {
            camera.look(0.0, 50.0);
        }
        assert_eq!(camera.pitch(), 89.0);
        for _ in 0..1000 {
            camera.look(0.0, -50.0);
        }
        assert_eq!(camera.pitch(), -89.0);
    }

    #[test]
    fn basis_stays_orthonormal_after_extreme_input() {
        let mut camera = CameraController::default();
        for i in 0..500 {
            camera.look(i as f32 * 13.7, if i % 2 == 0 { 900.0 } else { -41.0 });
            let (f, r, u) = (camera.front(), camera.right(), camera.up());
            assert!((f.length() - 1.0).abs() < 1e-4);
            assert!((r.length() - 1.0).abs() < 1e-4);
            assert!((u.length() - 1.0).abs() < 1e-4);
            assert!(f.dot(r).abs() < 1e-4);
            assert!(f.dot(u).abs() < 1e-4);
            assert!(r.dot(u).abs() < 1e-4);
        }
    }

    #[test]
    fn zoom_stays_in_range() {
        let mut camera = CameraController::default();
        camera.zoom_by(-100.0);
        assert_eq!(camera.zoom(), 45.0);
        camera.zoom_by(100.0);
        assert_eq!(camera.zoom(), 1.0);
    }

    #[test]
    fn zoom_round_trips_without_clamping() {
        let mut camera = CameraController::default();
        camera.zoom_by(10.0);
        camera.zoom_by(5.0);
        assert_eq!(camera.zoom(), 30.0);
        camera.zoom_by(-15.0);
        assert_eq!(camera.zoom(), 45.0);

        // Clamped on the way out, so the original value is not restored.
        camera.zoom_by(-5.0);
        camera.zoom_by(5.0);
        assert_eq!(camera.zoom(), 40.0);
    }

    #[test]
    fn view_matrix_moves_origin_in_front_of_camera() {
        let camera = CameraController::new(Vec3::new(0.0, 0.0, 3.0));
        let view = camera.view_matrix();
        let origin = view.transform_point3(Vec3::ZERO);
        assert!(approx(origin, Vec3::new(0.0, 0.0, -3.0)));

        let eye = view.transform_point3(camera.position());
        assert!(approx(eye, Vec3::ZERO));
    }

    #[test]
    fn view_matrix_follows_yaw() {
        let mut camera = CameraController::new(Vec3::ZERO);
        // Yaw from -90 to 0 turns the camera to look down +X.
        camera.look(900.0, 0.0);
        assert!(approx(camera.front(), Vec3::X));
        let ahead = camera.view_matrix().transform_point3(Vec3::new(2.0, 0.0, 0.0));
        assert!(approx(ahead, Vec3::new(0.0, 0.0, -2.0)));
    }
}
