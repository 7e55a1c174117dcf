//! Tunable constants for the background scene.
//!
//! Everything the generator and the per-frame update read lives here, so the
//! look of the scene can be adjusted without touching the simulation code.
//! Every struct deserializes with `#[serde(default)]`: a JSON override only
//! needs the fields it changes.
//!
//! ```json
//! { "flow": { "count": 800 }, "camera": { "follow": 0.05 } }
//! ```

use serde::Deserialize;

/// Static starfield layer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarFieldConfig {
	/// Number of stars.
	pub count: usize,
	/// Side of the centered cube the stars are sampled in.
	pub extent: f32,
	/// Point size in world units.
	pub size: f32,
	/// Yaw added to the whole layer each tick (radians).
	pub spin: f32,
}

impl Default for StarFieldConfig {
	fn default() -> Self {
		Self {
			count: 2000,
			extent: 500.0,
			size: 0.3,
			spin: 0.0001,
		}
	}
}

/// Flowing color-particle layer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlowFieldConfig {
	/// Number of particles.
	pub count: usize,
	/// Box the particles are sampled in, centered on the origin (x, y, z).
	pub extent: [f32; 3],
	/// Point size in world units.
	pub size: f32,
	/// Horizontal drift per tick is sampled from `speed_min..speed_max`.
	pub speed_min: f32,
	/// Exclusive upper bound of the drift speed.
	pub speed_max: f32,
	/// Particles passing `+wrap_bound` on x reappear at `-wrap_bound`.
	pub wrap_bound: f32,
	/// Amplitude of the vertical wave.
	pub bob_amplitude: f32,
}

impl Default for FlowFieldConfig {
	fn default() -> Self {
		Self {
			count: 1500,
			extent: [200.0, 200.0, 100.0],
			size: 0.6,
			speed_min: 0.01,
			speed_max: 0.06,
			wrap_bound: 150.0,
			bob_amplitude: 0.05,
		}
	}
}

/// Rotating wireframe octahedra.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PrismConfig {
	/// Number of prisms.
	pub count: usize,
	/// Edge scale is sampled from `scale_min..scale_max`.
	pub scale_min: f32,
	/// Exclusive upper bound of the edge scale.
	pub scale_max: f32,
	/// Width and height of the placement box (x, y).
	pub spread: [f32; 2],
	/// Fixed z of every prism.
	pub depth: f32,
	/// Rotation speed is sampled from `-spin_max..spin_max`.
	pub spin_max: f32,
	/// Vertical offset added per tick at the crest of the bob.
	pub bob_amplitude: f32,
	/// Bob angular speed relative to the simulation clock.
	pub bob_frequency: f32,
}

impl Default for PrismConfig {
	fn default() -> Self {
		Self {
			count: 4,
			scale_min: 2.0,
			scale_max: 6.0,
			spread: [150.0, 100.0],
			depth: -50.0,
			spin_max: 0.005,
			bob_amplitude: 0.02,
			bob_frequency: 0.5,
		}
	}
}

/// Perspective camera following the pointer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
	/// Vertical field of view in degrees.
	pub fov_degrees: f32,
	/// Near clipping distance.
	pub near: f32,
	/// Far clipping distance.
	pub far: f32,
	/// Fixed distance from the origin along +z.
	pub distance: f32,
	/// Pointer position (normalized to -1..1) is scaled by this to get the target.
	pub reach: f32,
	/// Fraction of the remaining distance covered each tick.
	pub follow: f32,
}

impl Default for CameraConfig {
	fn default() -> Self {
		Self {
			fov_degrees: 75.0,
			near: 0.1,
			far: 2000.0,
			distance: 100.0,
			reach: 15.0,
			follow: 0.02,
		}
	}
}

/// Line segments between nearby flow particles (light theme only).
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinkConfig {
	/// Upper bound on stored segments.
	pub max_segments: usize,
	/// Particles closer than this are linked.
	pub max_distance: f32,
	/// Particles `0..sources` are tested against later particles up to `candidates`.
	pub sources: usize,
	/// Size of the particle prefix searched for partners.
	pub candidates: usize,
	/// Links are recomputed on every n-th frame.
	pub refresh_every: u64,
}

impl Default for LinkConfig {
	fn default() -> Self {
		Self {
			max_segments: 80,
			max_distance: 25.0,
			sources: 40,
			candidates: 120,
			refresh_every: 3,
		}
	}
}

/// Complete scene configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
	/// Starfield layer.
	pub stars: StarFieldConfig,
	/// Flow-field layer.
	pub flow: FlowFieldConfig,
	/// Wireframe prisms.
	pub prisms: PrismConfig,
	/// Camera and projection.
	pub camera: CameraConfig,
	/// Light-theme network lines.
	pub links: LinkConfig,
	/// Amount the simulation clock advances per frame.
	pub time_step: f32,
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			stars: StarFieldConfig::default(),
			flow: FlowFieldConfig::default(),
			prisms: PrismConfig::default(),
			camera: CameraConfig::default(),
			links: LinkConfig::default(),
			time_step: 0.01,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_override_keeps_other_defaults() {
		let config: SceneConfig =
			serde_json::from_str(r#"{ "flow": { "count": 800 }, "time_step": 0.02 }"#).unwrap();
		assert_eq!(config.flow.count, 800);
		assert_eq!(config.flow.wrap_bound, 150.0);
		assert_eq!(config.time_step, 0.02);
		assert_eq!(config.stars, StarFieldConfig::default());
	}

	#[test]
	fn empty_object_is_default() {
		let config: SceneConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, SceneConfig::default());
	}
}
