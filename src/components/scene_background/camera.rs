//! Pointer-following perspective camera and screen projection.

use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

use super::config::CameraConfig;

/// Canvas size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width: width.max(1.0),
			height: height.max(1.0),
		}
	}

	pub fn aspect(&self) -> f32 {
		(self.width / self.height) as f32
	}
}

/// A world point mapped onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
	pub x: f64,
	pub y: f64,
	/// Distance along the view axis.
	pub depth: f32,
}

/// Camera that eases towards a pointer-driven target and always looks at the origin.
#[derive(Clone, Debug)]
pub struct CameraRig {
	pub position: Vec3,
	/// Pointer in normalized device coordinates, y pointing up.
	pub pointer: Vec2,
	reach: f32,
	follow: f32,
}

impl CameraRig {
	pub fn new(config: &CameraConfig) -> Self {
		Self {
			position: Vec3::new(0.0, 0.0, config.distance),
			pointer: Vec2::ZERO,
			reach: config.reach,
			follow: config.follow.clamp(0.0, 1.0),
		}
	}

	/// Records a pointer position given in client pixels.
	pub fn set_pointer(&mut self, client_x: f64, client_y: f64, viewport: Viewport) {
		self.pointer = Vec2::new(
			((client_x / viewport.width) * 2.0 - 1.0) as f32,
			(-(client_y / viewport.height) * 2.0 + 1.0) as f32,
		);
	}

	pub fn target(&self) -> Vec2 {
		self.pointer * self.reach
	}

	/// Moves a fixed fraction of the remaining distance towards the target.
	pub fn follow(&mut self) {
		let target = self.target();
		self.position.x += (target.x - self.position.x) * self.follow;
		self.position.y += (target.y - self.position.y) * self.follow;
	}

	pub fn view(&self) -> Mat4 {
		Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
	}
}

/// Pre-computed projection for one frame.
///
/// Build it once per frame after the camera has moved and pass it to every
/// draw call.
#[derive(Clone, Debug)]
pub struct Projector {
	view_projection: Mat4,
	viewport: Viewport,
	/// Pixels per world unit at depth 1.
	focal: f64,
}

impl Projector {
	pub fn new(camera: &CameraRig, config: &CameraConfig, viewport: Viewport) -> Self {
		let fov = config.fov_degrees.to_radians();
		let projection = Mat4::perspective_rh(fov, viewport.aspect(), config.near, config.far);
		Self {
			view_projection: projection * camera.view(),
			viewport,
			focal: viewport.height / 2.0 / (fov as f64 / 2.0).tan(),
		}
	}

	/// Maps a world point to canvas pixels, or `None` when it falls outside
	/// the view frustum depth range.
	pub fn project(&self, point: Vec3) -> Option<Projected> {
		let clip = self.view_projection * point.extend(1.0);
		if clip.w <= 0.0 {
			return None;
		}
		let ndc = clip.xyz() / clip.w;
		if !(0.0..=1.0).contains(&ndc.z) {
			return None;
		}
		Some(Projected {
			x: (ndc.x as f64 + 1.0) / 2.0 * self.viewport.width,
			y: (1.0 - ndc.y as f64) / 2.0 * self.viewport.height,
			depth: clip.w,
		})
	}

	/// On-screen size of something `size` world units wide at `depth`.
	pub fn scale_at(&self, size: f32, depth: f32) -> f64 {
		size as f64 * self.focal / depth as f64
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	fn viewport() -> Viewport {
		Viewport::new(1280.0, 720.0)
	}

	#[test]
	fn pointer_at_center_targets_origin() {
		let mut rig = CameraRig::new(&CameraConfig::default());
		rig.set_pointer(640.0, 360.0, viewport());
		assert_eq!(rig.target(), Vec2::ZERO);
	}

	#[test]
	fn pointer_y_is_inverted() {
		let mut rig = CameraRig::new(&CameraConfig::default());
		rig.set_pointer(1280.0, 0.0, viewport());
		assert_eq!(rig.target(), Vec2::new(15.0, 15.0));
		rig.set_pointer(0.0, 720.0, viewport());
		assert_eq!(rig.target(), Vec2::new(-15.0, -15.0));
	}

	#[test]
	fn follow_converges_without_overshoot() {
		let mut rig = CameraRig::new(&CameraConfig::default());
		rig.set_pointer(1280.0, 720.0, viewport());
		let target = rig.target();

		let mut previous = (target - rig.position.truncate()).length();
		let mut ticks = 0;
		while previous > target.length() * 0.01 {
			rig.follow();
			let remaining = (target - rig.position.truncate()).length();
			assert!(remaining < previous);
			assert!(rig.position.x <= target.x);
			assert!(rig.position.y >= target.y);
			previous = remaining;
			ticks += 1;
			assert!(ticks < 400, "camera failed to converge");
		}
		assert!(ticks > 100);
		assert_eq!(rig.position.z, 100.0);
	}

	#[test]
	fn origin_projects_to_canvas_center() {
		let rig = CameraRig::new(&CameraConfig::default());
		let projector = Projector::new(&rig, &CameraConfig::default(), viewport());
		let p = projector.project(Vec3::ZERO).unwrap();
		assert_relative_eq!(p.x, 640.0, epsilon = 1e-3);
		assert_relative_eq!(p.y, 360.0, epsilon = 1e-3);
		assert_relative_eq!(p.depth, 100.0, epsilon = 1e-3);
	}

	#[test]
	fn points_behind_camera_are_culled() {
		let rig = CameraRig::new(&CameraConfig::default());
		let projector = Projector::new(&rig, &CameraConfig::default(), viewport());
		assert!(projector.project(Vec3::new(0.0, 0.0, 150.0)).is_none());
		assert!(projector.project(Vec3::new(0.0, 10.0, 0.0)).unwrap().y < 360.0);
	}

	#[test]
	fn size_shrinks_with_depth() {
		let rig = CameraRig::new(&CameraConfig::default());
		let projector = Projector::new(&rig, &CameraConfig::default(), viewport());
		assert!(projector.scale_at(1.0, 50.0) > projector.scale_at(1.0, 100.0));
	}
}
