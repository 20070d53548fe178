use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Default yaw in degrees. Points the initial front vector down -Z.
pub const YAW: f32 = -90.0;
/// Default pitch in degrees.
pub const PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
pub const SPEED: f32 = 2.5;
/// Default mouse sensitivity (degrees per pixel).
pub const SENSITIVITY: f32 = 0.1;
/// Default (and maximum) vertical field of view in degrees.
pub const ZOOM: f32 = 45.0;

/// Pitch limit in degrees; keeps `front` away from the world-up axis.
pub const PITCH_LIMIT: f32 = 89.0;
/// Smallest vertical field of view in degrees.
pub const MIN_ZOOM: f32 = 1.0;
/// Largest vertical field of view in degrees.
pub const MAX_ZOOM: f32 = 45.0;

/// Direction of a keyboard-driven camera translation.
///
/// Abstracts away windowing-system key codes; the input layer maps keys
/// onto these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
    /// Along the camera's `up`.
    Up,
    /// Against the camera's `up`.
    Down,
}

impl CameraMovement {
    /// Every direction, in the order the input processor applies them.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];
}

/// Free-fly camera driven by Euler angles.
///
/// `front`, `right` and `up` are derived from `yaw`/`pitch` and always
/// form a right-handed orthonormal basis. They are only rewritten by the
/// constructors, [`Camera::reset`] and [`Camera::process_mouse_movement`].
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    /// Translation speed in world units per second.
    pub movement_speed: f32,
    /// Degrees of rotation per pixel of cursor movement.
    pub mouse_sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Camera at `position` with default orientation (yaw -90°, pitch 0°,
    /// +Y up).
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, YAW, PITCH, Vec3::Y)
    }

    /// Camera at `position` looking along the direction given by `yaw` and
    /// `pitch` (degrees), with `world_up` as the fixed reference axis.
    #[must_use]
    pub fn with_orientation(
        position: Vec3,
        yaw: f32,
        pitch: f32,
        world_up: Vec3,
    ) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            zoom: ZOOM,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
        };
        camera.update_camera_vectors();
        camera
    }

    /// Scalar form of [`Camera::with_orientation`].
    #[must_use]
    pub fn from_scalars(
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self::with_orientation(
            Vec3::new(pos_x, pos_y, pos_z),
            yaw,
            pitch,
            Vec3::new(up_x, up_y, up_z),
        )
    }

    /// Camera configured from options, including tuning parameters.
    ///
    /// Out-of-range pitch and zoom values are clamped like any other input.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self::with_orientation(
            Vec3::from_array(options.position),
            options.yaw,
            options.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            Vec3::from_array(options.world_up),
        );
        camera.movement_speed = options.movement_speed;
        camera.mouse_sensitivity = options.mouse_sensitivity;
        camera.zoom = options.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        camera
    }

    /// Restore the configured initial state.
    pub fn reset(&mut self, options: &CameraOptions) {
        *self = Self::from_options(options);
        log::debug!(
            "camera reset to ({:.2}, {:.2}, {:.2})",
            self.position.x,
            self.position.y,
            self.position.z
        );
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit look direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit camera-local up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Reference up axis supplied at construction.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
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

    /// Vertical field of view in degrees, within `[MIN_ZOOM, MAX_ZOOM]`.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Right-handed look-at matrix from `position` towards
    /// `position + front`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using `zoom` as the vertical field of view.
    ///
    /// Depth maps to `[0, 1]` (wgpu convention).
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, near, far)
    }

    /// Translate along one basis vector by `movement_speed * delta_time`.
    ///
    /// Call once per held direction per frame; diagonal movement is the sum
    /// of the individual translations.
    pub fn process_keyboard(
        &mut self,
        direction: CameraMovement,
        delta_time: f32,
    ) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.up * velocity,
            CameraMovement::Down => self.position -= self.up * velocity,
        }
    }

    /// Rotate by cursor offsets in pixels. Positive `y_offset` looks up.
    ///
    /// With `constrain_pitch` the pitch is clamped to ±89° after the offsets
    /// are applied.
    pub fn process_mouse_movement(
        &mut self,
        x_offset: f32,
        y_offset: f32,
        constrain_pitch: bool,
    ) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_camera_vectors();
    }

    /// Narrow the field of view by `y_offset` degrees (scrolling up zooms
    /// in), clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn update_camera_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front =
            Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos)
                .normalize();
        // cross products shrink as pitch approaches the poles
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices and lighting inputs.
pub struct CameraUniform {
    /// View matrix.
    pub view: [[f32; 4]; 4],
    /// Projection matrix.
    pub projection: [[f32; 4]; 4],
    /// Combined projection * view matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Camera front direction for view-dependent lighting.
    pub front: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fovy: ZOOM,
            front: [0.0, 0.0, -1.0],
            _pad: 0.0,
        }
    }

    /// Refresh every field from the camera's current state.
    pub fn update(&mut self, camera: &Camera, aspect: f32, near: f32, far: f32) {
        let view = camera.view_matrix();
        let projection = camera.projection_matrix(aspect, near, far);
        self.view = view.to_cols_array_2d();
        self.projection = projection.to_cols_array_2d();
        self.view_proj = (projection * view).to_cols_array_2d();
        self.position = camera.position().to_array();
        self.fovy = camera.zoom();
        self.front = camera.front().to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    // near the pitch limit the cross products are small before
    // normalization, so allow more slack than EPS
    const BASIS_TOL: f32 = 1e-4;

    fn assert_orthonormal(camera: &Camera) {
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        assert!((f.length() - 1.0).abs() < BASIS_TOL, "front {f}");
        assert!((r.length() - 1.0).abs() < BASIS_TOL, "right {r}");
        assert!((u.length() - 1.0).abs() < BASIS_TOL, "up {u}");
        assert!(f.dot(r).abs() < BASIS_TOL);
        assert!(f.dot(u).abs() < BASIS_TOL);
        assert!(r.dot(u).abs() < BASIS_TOL);
        // right-handed: right x up == -front (camera looks down its -Z)
        assert!(r.cross(u).abs_diff_eq(-f, 1e-3));
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(camera.right().abs_diff_eq(Vec3::X, EPS));
        assert!(camera.up().abs_diff_eq(Vec3::Y, EPS));
        assert_eq!(camera.yaw(), YAW);
        assert_eq!(camera.pitch(), PITCH);
        assert_eq!(camera.zoom(), ZOOM);
        assert_eq!(camera.movement_speed, SPEED);
        assert_eq!(camera.mouse_sensitivity, SENSITIVITY);
    }

    #[test]
    fn basis_stays_orthonormal_across_orientations() {
        let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        assert_orthonormal(&camera);
        for step in 0..200 {
            let dx = ((step * 37) % 101) as f32 - 50.0;
            let dy = ((step * 53) % 97) as f32 - 48.0;
            camera.process_mouse_movement(dx * 7.0, dy * 11.0, true);
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn pitch_clamped_when_constrained() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        assert_orthonormal(&camera);

        camera.process_mouse_movement(0.0, -50_000.0, true);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
        assert_orthonormal(&camera);
    }

    #[test]
    fn pitch_unbounded_when_unconstrained() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 1200.0, false);
        assert!((camera.pitch() - 120.0).abs() < 1e-3);
    }

    #[test]
    fn zoom_stays_within_bounds() {
        let mut camera = Camera::default();
        for delta in [3.0, 20.0, 50.0, -0.5, -100.0, 44.5, 7.25] {
            camera.process_mouse_scroll(delta);
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&camera.zoom()));
        }
        camera.process_mouse_scroll(1000.0);
        assert_eq!(camera.zoom(), MIN_ZOOM);
    }

    #[test]
    fn scroll_up_narrows_field_of_view() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(5.0);
        assert_eq!(camera.zoom(), 40.0);

        let mut camera = Camera::default();
        camera.process_mouse_scroll(-5.0);
        assert_eq!(camera.zoom(), 45.0);
    }

    #[test]
    fn forward_moves_along_front() {
        let mut camera = Camera::default();
        camera.process_keyboard(CameraMovement::Forward, 1.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, -2.5), EPS));
    }

    #[test]
    fn directions_compose_and_cancel() {
        let mut camera = Camera::default();
        camera.process_keyboard(CameraMovement::Forward, 0.5);
        camera.process_keyboard(CameraMovement::Right, 0.5);
        camera.process_keyboard(CameraMovement::Up, 0.5);
        assert!(camera
            .position()
            .abs_diff_eq(Vec3::new(1.25, 1.25, -1.25), EPS));

        camera.process_keyboard(CameraMovement::Backward, 0.5);
        camera.process_keyboard(CameraMovement::Left, 0.5);
        camera.process_keyboard(CameraMovement::Down, 0.5);
        assert!(camera.position().abs_diff_eq(Vec3::ZERO, EPS));
    }

    #[test]
    fn view_matrix_at_origin_matches_look_at() {
        let camera = Camera::default();
        let expected = Mat4::look_at_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        assert!(camera.view_matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn projection_uses_zoom_as_fov() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(15.0);
        let expected =
            Mat4::perspective_rh(30.0_f32.to_radians(), 4.0 / 3.0, 0.1, 100.0);
        assert!(camera
            .projection_matrix(4.0 / 3.0, 0.1, 100.0)
            .abs_diff_eq(expected, EPS));
    }

    #[test]
    fn zero_mouse_movement_is_idempotent() {
        let mut camera = Camera::with_orientation(
            Vec3::new(4.0, -1.0, 2.0),
            33.0,
            -12.0,
            Vec3::Y,
        );
        let before = camera.clone();
        camera.process_mouse_movement(0.0, 0.0, true);
        assert_eq!(camera.yaw(), before.yaw());
        assert_eq!(camera.pitch(), before.pitch());
        assert!(camera.front().abs_diff_eq(before.front(), EPS));
        assert!(camera.right().abs_diff_eq(before.right(), EPS));
        assert!(camera.up().abs_diff_eq(before.up(), EPS));
    }

    #[test]
    fn scalar_constructor_matches_vector_constructor() {
        let a = Camera::from_scalars(1.0, 2.0, 3.0, 0.0, 1.0, 0.0, -45.0, 10.0);
        let b = Camera::with_orientation(
            Vec3::new(1.0, 2.0, 3.0),
            -45.0,
            10.0,
            Vec3::Y,
        );
        assert_eq!(a, b);
        assert_orthonormal(&a);
    }

    #[test]
    fn world_up_never_changes() {
        let world_up = Vec3::new(0.0, 0.0, 1.0);
        let mut camera =
            Camera::with_orientation(Vec3::ZERO, 0.0, 0.0, world_up);
        assert_orthonormal(&camera);
        camera.process_mouse_movement(120.0, 40.0, true);
        assert_orthonormal(&camera);
        camera.process_keyboard(CameraMovement::Up, 2.0);
        assert_eq!(camera.world_up(), world_up);
        assert_orthonormal(&camera);
    }

    #[test]
    fn from_options_applies_tuning_and_clamps() {
        let options = CameraOptions {
            position: [0.0, 1.0, 5.0],
            pitch: 120.0,
            zoom: 90.0,
            movement_speed: 10.0,
            mouse_sensitivity: 0.5,
            ..CameraOptions::default()
        };
        let mut camera = Camera::from_options(&options);
        assert_eq!(camera.position(), Vec3::new(0.0, 1.0, 5.0));
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        assert_eq!(camera.zoom(), MAX_ZOOM);
        assert_eq!(camera.movement_speed, 10.0);
        assert_eq!(camera.mouse_sensitivity, 0.5);

        camera.process_keyboard(CameraMovement::Right, 1.0);
        camera.reset(&options);
        assert_eq!(camera, Camera::from_options(&options));
    }

    #[test]
    fn uniform_tracks_camera_state() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        camera.process_mouse_scroll(5.0);
        let mut uniform = CameraUniform::new();
        uniform.update(&camera, 800.0 / 600.0, 0.1, 100.0);

        assert_eq!(uniform.position, [0.0, 0.0, 3.0]);
        assert_eq!(uniform.fovy, 40.0);
        let expected = camera.projection_matrix(800.0 / 600.0, 0.1, 100.0)
            * camera.view_matrix();
        assert!(Mat4::from_cols_array_2d(&uniform.view_proj)
            .abs_diff_eq(expected, EPS));
        assert_eq!(size_of::<CameraUniform>(), 224);
    }
}
