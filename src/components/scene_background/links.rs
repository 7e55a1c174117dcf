//! Network lines joining nearby flow particles.
//!
//! Only a small prefix of the flow field is sampled, and the result is capped,
//! so the pairwise search stays cheap enough to rerun every few frames.

use glam::Vec3;

use super::config::LinkConfig;
use super::field::FlowField;

#[derive(Clone, Debug, Default)]
pub struct NetworkLinks {
	segments: Vec<(Vec3, Vec3)>,
}

impl NetworkLinks {
	pub fn with_capacity(config: &LinkConfig) -> Self {
		Self {
			segments: Vec::with_capacity(config.max_segments),
		}
	}

	/// Rebuilds the segment list from the current particle positions.
	pub fn rebuild(&mut self, field: &FlowField, config: &LinkConfig) {
		self.segments.clear();
		let candidates = config.candidates.min(field.count());
		let sources = config.sources.min(candidates);
		let max_sq = config.max_distance * config.max_distance;

		'outer: for i in 0..sources {
			let a = field.position(i);
			for j in i + 1..candidates {
				if self.segments.len() >= config.max_segments {
					break 'outer;
				}
				let b = field.position(j);
				if a.distance_squared(b) < max_sq {
					self.segments.push((a, b));
				}
			}
		}
	}

	pub fn clear(&mut self) {
		self.segments.clear();
	}

	pub fn segments(&self) -> &[(Vec3, Vec3)] {
		&self.segments
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn links_only_close_pairs() {
		let field = FlowField::from_particles(&[
			([0.0, 0.0, 0.0], 0.0, 0.0),
			([3.0, 0.0, 0.0], 0.0, 0.0),
			([50.0, 0.0, 0.0], 0.0, 0.0),
		]);
		let mut links = NetworkLinks::default();
		links.rebuild(&field, &LinkConfig::default());
		assert_eq!(links.segments().len(), 1);
		assert_eq!(links.segments()[0].1, Vec3::new(3.0, 0.0, 0.0));
	}

	#[test]
	fn segment_count_is_capped() {
		let particles: Vec<_> = (0..20).map(|i| ([i as f32 * 0.1, 0.0, 0.0], 0.0, 0.0)).collect();
		let field = FlowField::from_particles(&particles);
		let config = LinkConfig {
			max_segments: 5,
			..LinkConfig::default()
		};
		let mut links = NetworkLinks::with_capacity(&config);
		links.rebuild(&field, &config);
		assert_eq!(links.segments().len(), 5);

		links.clear();
		assert!(links.segments().is_empty());
	}
}
