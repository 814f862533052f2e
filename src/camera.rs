use cgmath::*;
use std::time::Duration;
use winit::dpi::PhysicalPosition;
use winit::event::*;
use winit::keyboard::{Key, NamedKey};

/// Degrees of yaw per pixel of mouse travel per second.
const MOUSE_SENSITIVITY: f32 = 15.0;
/// Camera translation speed in world units per second.
const MOVE_SPEED: f32 = 5.0;
/// The pitch is clamped short of the poles to keep the look vector and the
/// world up axis from becoming collinear.
const PITCH_LIMIT: f32 = 89.0;

/// Represents a camera in 3D space.
///
/// Orientation is stored as yaw and pitch in degrees. Yaw 180 with pitch 0
/// looks down the negative z axis, which is the demo's resting view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new<V: Into<Point3<f32>>>(position: V, yaw: f32, pitch: f32) -> Self {
        Self {
            position: position.into(),
            yaw,
            pitch,
        }
    }

    /// The unit look vector for the current yaw/pitch.
    pub fn look_vector(&self) -> Vector3<f32> {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        Vector3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch)
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            self.position,
            self.position + self.look_vector(),
            Vector3::unit_y(),
        )
    }
}

impl Default for Camera {
    /// The resting view: origin, looking down negative z.
    fn default() -> Self {
        Self::new((0.0, 0.0, 0.0), 180.0, 0.0)
    }
}

/// Discrete movement key state. W and the up arrow share an axis, as do
/// their three counterparts.
#[derive(Debug, Clone, Copy, Default)]
struct TrackedButtons {
    up_arrow: bool,
    down_arrow: bool,
    left_arrow: bool,
    right_arrow: bool,
    w: bool,
    s: bool,
    a: bool,
    d: bool,
}

impl TrackedButtons {
    /// -1, 0 or +1 along the forward/backward axis.
    fn forward_axis(&self) -> i32 {
        (self.up_arrow || self.w) as i32 - (self.down_arrow || self.s) as i32
    }

    /// -1, 0 or +1 along the strafe axis.
    fn strafe_axis(&self) -> i32 {
        (self.right_arrow || self.d) as i32 - (self.left_arrow || self.a) as i32
    }
}

/// Controls the movement and rotation of a camera.
///
/// The controller accumulates mouse deltas while the left button is held and
/// tracks discrete key state; `update_camera` folds both into the camera once
/// per frame, scaled by the frame's delta time. It also owns the demo-wide
/// display toggles that live on the same keys: vsync (`V`), the scripted
/// camera path (`C`) and the reset shortcut (`R`).
#[derive(Debug)]
pub struct CameraController {
    buttons: TrackedButtons,
    mouse_left: bool,
    rotate_horizontal: f32,
    rotate_vertical: f32,
    zoom: f32,
    reset_requested: bool,
    vsync: bool,
    tearing_supported: bool,
    scripted_cam: bool,
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            buttons: TrackedButtons::default(),
            mouse_left: false,
            rotate_horizontal: 0.0,
            rotate_vertical: 0.0,
            zoom: 0.0,
            reset_requested: false,
            vsync: false,
            tearing_supported: false,
            scripted_cam: false,
        }
    }

    pub fn process_keyboard(&mut self, key: &Key, state: &ElementState) -> bool {
        let pressed = state == &ElementState::Pressed;
        match key {
            Key::Character(c) if c.to_lowercase() == "w" => {
                self.buttons.w = pressed;
                true
            }
            Key::Character(c) if c.to_lowercase() == "s" => {
                self.buttons.s = pressed;
                true
            }
            Key::Character(c) if c.to_lowercase() == "a" => {
                self.buttons.a = pressed;
                true
            }
            Key::Character(c) if c.to_lowercase() == "d" => {
                self.buttons.d = pressed;
                true
            }
            Key::Named(NamedKey::ArrowUp) => {
                self.buttons.up_arrow = pressed;
                true
            }
            Key::Named(NamedKey::ArrowDown) => {
                self.buttons.down_arrow = pressed;
                true
            }
            Key::Named(NamedKey::ArrowLeft) => {
                self.buttons.left_arrow = pressed;
                true
            }
            Key::Named(NamedKey::ArrowRight) => {
                self.buttons.right_arrow = pressed;
                true
            }
            Key::Character(c) if c.to_lowercase() == "r" => {
                if pressed {
                    self.reset_requested = true;
                }
                true
            }
            Key::Character(c) if c.to_lowercase() == "v" => {
                if pressed {
                    self.vsync = !self.vsync;
                }
                true
            }
            Key::Character(c) if c.to_lowercase() == "c" => {
                if pressed {
                    self.scripted_cam = !self.scripted_cam;
                    // Leaving the scripted path snaps back to the resting view.
                    if !self.scripted_cam {
                        self.reset_requested = true;
                    }
                }
                true
            }
            _ => false,
        }
    }

    pub fn process_mouse_button(&mut self, button: &MouseButton, state: &ElementState) {
        if button == &MouseButton::Left {
            self.mouse_left = state == &ElementState::Pressed;
        }
    }

    /// Accumulates a cursor delta. Deltas only steer the camera while the
    /// left button is held.
    pub fn process_mouse(&mut self, mouse_dx: f64, mouse_dy: f64) {
        if self.mouse_left {
            self.rotate_horizontal += mouse_dx as f32;
            self.rotate_vertical += mouse_dy as f32;
        }
    }

    pub fn process_scroll(&mut self, delta: &MouseScrollDelta) {
        self.zoom += match delta {
            // I'm assuming a line is about 100 pixels
            MouseScrollDelta::LineDelta(_, scroll) => -scroll * 0.5,
            MouseScrollDelta::PixelDelta(PhysicalPosition { y: scroll, .. }) => -*scroll as f32,
        };
    }

    pub fn update_camera(&mut self, camera: &mut Camera, dt: Duration) {
        let dt = dt.as_secs_f32();

        if self.reset_requested {
            self.reset_requested = false;
            *camera = Camera::default();
            self.rotate_horizontal = 0.0;
            self.rotate_vertical = 0.0;
            // Reset covers the display state too, not just the pose.
            self.vsync = false;
            self.scripted_cam = false;
            return;
        }

        // Fold the accumulated drag into yaw/pitch. Yaw wraps, pitch clamps
        // short of the poles. Dragging the mouse up raises the view.
        camera.yaw = (camera.yaw + MOUSE_SENSITIVITY * self.rotate_horizontal * dt).rem_euclid(360.0);
        camera.pitch = (camera.pitch - MOUSE_SENSITIVITY * self.rotate_vertical * dt)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.rotate_horizontal = 0.0;
        self.rotate_vertical = 0.0;

        // Move along the look vector and its horizontal perpendicular.
        let look = camera.look_vector();
        let right = look.cross(Vector3::unit_y());
        camera.position += look * self.buttons.forward_axis() as f32 * MOVE_SPEED * dt;
        camera.position += right * -self.buttons.strafe_axis() as f32 * MOVE_SPEED * dt;
    }

    /// Whether presentation should wait for vblank. Tearing support is what
    /// makes turning vsync off meaningful; without it the swap chain blocks
    /// either way.
    pub fn effective_vsync(&self) -> bool {
        !(self.tearing_supported && !self.vsync)
    }

    pub fn set_vsync(&mut self, state: bool) {
        self.vsync = state;
    }

    pub fn set_tearing_support(&mut self, state: bool) {
        self.tearing_supported = state;
    }

    pub fn scripted_cam(&self) -> bool {
        self.scripted_cam
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::SmolStr;

    fn press(controller: &mut CameraController, c: &str) {
        controller.process_keyboard(&Key::Character(SmolStr::new(c)), &ElementState::Pressed);
    }

    fn release(controller: &mut CameraController, c: &str) {
        controller.process_keyboard(&Key::Character(SmolStr::new(c)), &ElementState::Released);
    }

    fn one_second() -> Duration {
        Duration::from_secs(1)
    }

    #[test]
    fn test_default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        let look = camera.look_vector();
        assert!(look.x.abs() < 1e-6);
        assert!(look.y.abs() < 1e-6);
        assert!((look.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_forward_key_moves_along_look_vector() {
        let mut camera = Camera::default();
        let mut controller = CameraController::new();
        press(&mut controller, "w");
        controller.update_camera(&mut camera, one_second());
        assert!(camera.position.x.abs() < 1e-4);
        assert!((camera.position.z + MOVE_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut camera = Camera::default();
        let mut controller = CameraController::new();
        press(&mut controller, "w");
        press(&mut controller, "s");
        controller.update_camera(&mut camera, one_second());
        assert_eq!(camera.position, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_arrow_and_letter_share_an_axis() {
        let mut controller = CameraController::new();
        press(&mut controller, "w");
        controller.process_keyboard(&Key::Named(NamedKey::ArrowUp), &ElementState::Pressed);
        release(&mut controller, "w");
        // The arrow key is still held, so the axis stays engaged.
        assert_eq!(controller.buttons.forward_axis(), 1);
    }

    #[test]
    fn test_mouse_drag_requires_left_button() {
        let mut controller = CameraController::new();
        controller.process_mouse(10.0, 0.0);
        assert_eq!(controller.rotate_horizontal, 0.0);

        controller.process_mouse_button(&MouseButton::Left, &ElementState::Pressed);
        controller.process_mouse(10.0, 0.0);
        assert_eq!(controller.rotate_horizontal, 10.0);
    }

    #[test]
    fn test_yaw_wraps_into_circle() {
        let mut camera = Camera::new((0.0, 0.0, 0.0), 350.0, 0.0);
        let mut controller = CameraController::new();
        controller.process_mouse_button(&MouseButton::Left, &ElementState::Pressed);
        controller.process_mouse(2.0, 0.0); // 30 degrees over one second
        controller.update_camera(&mut camera, one_second());
        assert!((camera.yaw - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_pitch_clamps_at_limit() {
        let mut camera = Camera::default();
        let mut controller = CameraController::new();
        controller.process_mouse_button(&MouseButton::Left, &ElementState::Pressed);
        controller.process_mouse(0.0, -10_000.0);
        controller.update_camera(&mut camera, one_second());
        assert_eq!(camera.pitch, PITCH_LIMIT);
    }

    #[test]
    fn test_upward_drag_raises_pitch() {
        let mut camera = Camera::default();
        let mut controller = CameraController::new();
        controller.process_mouse_button(&MouseButton::Left, &ElementState::Pressed);
        controller.process_mouse(0.0, -1.0); // cursor y decreases toward the top
        controller.update_camera(&mut camera, one_second());
        assert!(camera.pitch > 0.0);
    }

    #[test]
    fn test_reset_key_restores_resting_view() {
        let mut camera = Camera::new((3.0, 4.0, 5.0), 90.0, 45.0);
        let mut controller = CameraController::new();
        press(&mut controller, "r");
        controller.update_camera(&mut camera, one_second());
        assert_eq!(camera, Camera::default());
    }

    #[test]
    fn test_reset_clears_display_toggles() {
        let mut camera = Camera::default();
        let mut controller = CameraController::new();
        controller.set_tearing_support(true);
        press(&mut controller, "v");
        press(&mut controller, "c");
        assert!(controller.effective_vsync());
        assert!(controller.scripted_cam());

        press(&mut controller, "r");
        controller.update_camera(&mut camera, one_second());
        // Tearing is still supported and vsync is back off, so presentation
        // no longer waits for vblank; the scripted path is off as well.
        assert!(!controller.effective_vsync());
        assert!(!controller.scripted_cam());
    }

    #[test]
    fn test_vsync_toggle_and_tearing() {
        let mut controller = CameraController::new();
        // Without tearing support vsync is effectively always on.
        assert!(controller.effective_vsync());
        controller.set_tearing_support(true);
        assert!(!controller.effective_vsync());
        press(&mut controller, "v");
        assert!(controller.effective_vsync());
    }

    #[test]
    fn test_leaving_scripted_cam_resets() {
        let mut controller = CameraController::new();
        press(&mut controller, "c");
        release(&mut controller, "c");
        assert!(controller.scripted_cam());
        assert!(!controller.reset_requested);
        press(&mut controller, "c");
        assert!(!controller.scripted_cam());
        assert!(controller.reset_requested);
    }

    #[test]
    fn test_scroll_accumulates_zoom() {
        let mut controller = CameraController::new();
        controller.process_scroll(&MouseScrollDelta::LineDelta(0.0, 2.0));
        assert_eq!(controller.zoom(), -1.0);
    }

    #[test]
    fn test_unhandled_key_is_not_consumed() {
        let mut controller = CameraController::new();
        assert!(!controller.process_keyboard(&Key::Named(NamedKey::Space), &ElementState::Pressed));
    }
}
