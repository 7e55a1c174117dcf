//! Floating wireframe octahedra.

use std::f32::consts::PI;

use glam::{EulerRot, Quat, Vec2, Vec3};
use rand::Rng;

use super::config::PrismConfig;
use super::field::{sample_centered, sample_range};

/// Unit octahedron corners.
const VERTICES: [Vec3; 6] = [
	Vec3::X,
	Vec3::NEG_X,
	Vec3::Y,
	Vec3::NEG_Y,
	Vec3::Z,
	Vec3::NEG_Z,
];

/// Every pair of non-opposite corners.
const EDGES: [(usize, usize); 12] = [
	(0, 2),
	(0, 3),
	(0, 4),
	(0, 5),
	(1, 2),
	(1, 3),
	(1, 4),
	(1, 5),
	(2, 4),
	(2, 5),
	(3, 4),
	(3, 5),
];

/// One rotating, bobbing octahedron.
#[derive(Clone, Debug, PartialEq)]
pub struct Prism {
	pub position: Vec3,
	/// Rotation about x and y (radians).
	pub rotation: Vec2,
	pub scale: f32,
	/// Added to both rotation axes every tick.
	pub spin: f32,
}

impl Prism {
	/// Advances rotation and applies the vertical bob, whose phase follows the
	/// prism's own x so neighbouring prisms move out of step.
	pub fn advance(&mut self, time: f32, config: &PrismConfig) {
		self.rotation.x += self.spin;
		self.rotation.y += self.spin;
		self.position.y +=
			(time * config.bob_frequency + self.position.x).sin() * config.bob_amplitude;
	}

	/// World-space endpoints of all twelve edges.
	pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
		let orientation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0);
		let corners = VERTICES.map(|v| self.position + orientation * (v * self.scale));
		EDGES.iter().map(move |&(a, b)| (corners[a], corners[b]))
	}
}

/// Samples `config.count` prisms spread over the placement box.
pub fn generate(config: &PrismConfig, rng: &mut impl Rng) -> Vec<Prism> {
	(0..config.count)
		.map(|_| Prism {
			position: Vec3::new(
				sample_centered(rng, config.spread[0]),
				sample_centered(rng, config.spread[1]),
				config.depth,
			),
			rotation: Vec2::new(sample_range(rng, 0.0, PI), sample_range(rng, 0.0, PI)),
			scale: sample_range(rng, config.scale_min, config.scale_max),
			spin: sample_range(rng, -config.spin_max, config.spin_max),
		})
		.collect()
}
