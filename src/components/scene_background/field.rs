//! Point layers: the static starfield and the flowing color field.
//!
//! Both layers keep their data in flat `f32` buffers (three components per
//! particle for positions and colors, one for speeds and phases). Buffers are
//! sized once at generation and only ever mutated in place.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::config::{FlowFieldConfig, StarFieldConfig};
use super::theme::{Color, PALETTE_SIZE};

/// Uniform sample from `lo..hi`, or `lo` when the range is empty.
pub(super) fn sample_range(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
	if lo < hi { rng.gen_range(lo..hi) } else { lo }
}

/// Uniform sample from a span of width `extent` centered on zero.
pub(super) fn sample_centered(rng: &mut impl Rng, extent: f32) -> f32 {
	sample_range(rng, -extent / 2.0, extent / 2.0)
}

/// Distant stars. Positions never change after generation; the whole layer
/// only yaws as a group.
#[derive(Clone, Debug, Default)]
pub struct StarField {
	positions: Vec<f32>,
	size: f32,
	/// Accumulated yaw of the layer (radians).
	pub yaw: f32,
}

impl StarField {
	pub fn generate(config: &StarFieldConfig, rng: &mut impl Rng) -> Self {
		let positions = (0..config.count * 3)
			.map(|_| sample_centered(rng, config.extent))
			.collect();

		Self {
			positions,
			size: config.size,
			yaw: 0.0,
		}
	}

	pub fn count(&self) -> usize {
		self.positions.len() / 3
	}

	pub fn positions(&self) -> &[f32] {
		&self.positions
	}

	pub fn size(&self) -> f32 {
		self.size
	}

	/// Drops the position buffer.
	pub fn release(&mut self) {
		self.positions = Vec::new();
	}
}

/// Flowing particles with per-particle drift speed and wave phase.
///
/// Each particle owns a palette slot picked at generation; the rgb color
/// buffer is derived from the slot and whichever palette the theme supplies,
/// so recoloring never resamples anything.
#[derive(Clone, Debug, Default)]
pub struct FlowField {
	positions: Vec<f32>,
	colors: Vec<f32>,
	slots: Vec<u8>,
	speeds: Vec<f32>,
	phases: Vec<f32>,
	size: f32,
}

impl FlowField {
	pub fn generate(
		config: &FlowFieldConfig,
		palette: &[Color; PALETTE_SIZE],
		rng: &mut impl Rng,
	) -> Self {
		let [ex, ey, ez] = config.extent;
		let mut positions = Vec::with_capacity(config.count * 3);
		let mut slots = Vec::with_capacity(config.count);
		let mut speeds = Vec::with_capacity(config.count);
		let mut phases = Vec::with_capacity(config.count);

		for _ in 0..config.count {
			positions.push(sample_centered(rng, ex));
			positions.push(sample_centered(rng, ey));
			positions.push(sample_centered(rng, ez));
			slots.push(rng.gen_range(0..PALETTE_SIZE) as u8);
			speeds.push(sample_range(rng, config.speed_min, config.speed_max));
			phases.push(sample_range(rng, 0.0, TAU));
		}

		let mut field = Self {
			positions,
			colors: vec![0.0; config.count * 3],
			slots,
			speeds,
			phases,
			size: config.size,
		};
		field.recolor(palette);
		field
	}

	/// Rewrites the color buffer from each particle's palette slot.
	pub fn recolor(&mut self, palette: &[Color; PALETTE_SIZE]) {
		for (rgb, &slot) in self.colors.chunks_exact_mut(3).zip(&self.slots) {
			rgb.copy_from_slice(&palette[slot as usize % PALETTE_SIZE].to_unit());
		}
	}

	/// Drifts every particle right by its speed and bobs it on a sine wave.
	/// Particles reaching `+wrap_bound` jump to `-wrap_bound`.
	pub fn advance(&mut self, time: f32, config: &FlowFieldConfig) {
		let bound = config.wrap_bound;
		for ((p, &speed), &phase) in self
			.positions
			.chunks_exact_mut(3)
			.zip(&self.speeds)
			.zip(&self.phases)
		{
			p[0] += speed;
			p[1] += (time + phase).sin() * config.bob_amplitude;
			if p[0] >= bound {
				p[0] = -bound;
			}
		}
	}

	pub fn count(&self) -> usize {
		self.slots.len()
	}

	pub fn position(&self, i: usize) -> Vec3 {
		Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
	}

	#[cfg(test)]
	pub fn positions(&self) -> &[f32] {
		&self.positions
	}

	/// Positions of the particles holding palette `slot`.
	pub fn slot_positions(&self, slot: usize) -> impl Iterator<Item = Vec3> + '_ {
		self.positions
			.chunks_exact(3)
			.zip(&self.slots)
			.filter(move |&(_, &s)| s as usize == slot)
			.map(|(c, _)| Vec3::from_slice(c))
	}

	#[cfg(test)]
	pub fn colors(&self) -> &[f32] {
		&self.colors
	}

	#[cfg(test)]
	pub fn slots(&self) -> &[u8] {
		&self.slots
	}

	#[cfg(test)]
	pub fn speeds(&self) -> &[f32] {
		&self.speeds
	}

	#[cfg(test)]
	pub fn phases(&self) -> &[f32] {
		&self.phases
	}

	pub fn size(&self) -> f32 {
		self.size
	}

	/// Drops every buffer.
	pub fn release(&mut self) {
		*self = Self {
			size: self.size,
			..Self::default()
		};
	}

	/// Builds a field from explicit `(position, speed, phase)` triples, slot 0 for all.
	#[cfg(test)]
	pub(crate) fn from_particles(particles: &[([f32; 3], f32, f32)]) -> Self {
		Self {
			positions: particles.iter().flat_map(|(p, _, _)| *p).collect(),
			colors: vec![0.0; particles.len() * 3],
			slots: vec![0; particles.len()],
			speeds: particles.iter().map(|(_, s, _)| *s).collect(),
			phases: particles.iter().map(|(_, _, a)| *a).collect(),
			size: 0.6,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::scene_background::theme::Appearance;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn flow(seed: u64) -> FlowField {
		let mut rng = StdRng::seed_from_u64(seed);
		FlowField::generate(
			&FlowFieldConfig::default(),
			&Appearance::dark().flow.palette,
			&mut rng,
		)
	}

	#[test]
	fn starfield_buffers_match_count() {
		let mut rng = StdRng::seed_from_u64(1);
		let stars = StarField::generate(&StarFieldConfig::default(), &mut rng);
		assert_eq!(stars.count(), 2000);
		assert_eq!(stars.positions().len(), 2000 * 3);
	}

	#[test]
	fn starfield_stays_inside_cube() {
		let mut rng = StdRng::seed_from_u64(2);
		let stars = StarField::generate(&StarFieldConfig::default(), &mut rng);
		assert!(stars.positions().iter().all(|c| (-250.0..250.0).contains(c)));
	}

	#[test]
	fn flow_buffers_match_count() {
		let field = flow(3);
		assert_eq!(field.count(), 1500);
		assert_eq!(field.positions().len(), 1500 * 3);
		assert_eq!(field.colors().len(), 1500 * 3);
		assert_eq!(field.speeds().len(), 1500);
		assert_eq!(field.phases().len(), 1500);
	}

	#[test]
	fn flow_samples_respect_bounds() {
		let field = flow(4);
		for p in field.positions().chunks_exact(3) {
			assert!((-100.0..100.0).contains(&p[0]));
			assert!((-100.0..100.0).contains(&p[1]));
			assert!((-50.0..50.0).contains(&p[2]));
		}
		assert!(field.speeds().iter().all(|s| (0.01..0.06).contains(s)));
		assert!(field.phases().iter().all(|a| (0.0..TAU).contains(a)));
		assert!(field.slots().iter().all(|&s| (s as usize) < PALETTE_SIZE));
	}

	#[test]
	fn particle_past_bound_wraps_to_opposite_edge() {
		let mut field = FlowField::from_particles(&[([149.99, 0.0, 0.0], 0.05, 0.0)]);
		field.advance(0.0, &FlowFieldConfig::default());
		assert_eq!(field.positions()[0], -150.0);
	}

	#[test]
	fn particle_inside_bound_drifts_and_bobs() {
		let mut field = FlowField::from_particles(&[([10.0, 0.0, 0.0], 0.05, 0.5)]);
		field.advance(1.0, &FlowFieldConfig::default());
		approx::assert_relative_eq!(field.positions()[0], 10.05, epsilon = 1e-5);
		approx::assert_relative_eq!(field.positions()[1], 1.5f32.sin() * 0.05, epsilon = 1e-6);
		assert_eq!(field.positions()[2], 0.0);
	}

	#[test]
	fn recolor_follows_slots_and_is_repeatable() {
		let mut field = flow(5);
		let light = Appearance::light().flow.palette;
		field.recolor(&light);
		let once = field.colors().to_vec();
		field.recolor(&light);
		assert_eq!(field.colors(), once.as_slice());

		let slot = field.slots()[0] as usize;
		assert_eq!(&field.colors()[0..3], light[slot].to_unit().as_slice());
	}

	#[test]
	fn slot_batches_cover_every_particle_once() {
		let field = flow(8);
		let palette = Appearance::dark().flow.palette;
		let mut seen = 0;
		for (slot, color) in palette.iter().enumerate() {
			for p in field.slot_positions(slot) {
				let i = (0..field.count())
					.find(|&i| field.position(i) == p)
					.unwrap();
				assert_eq!(field.slots()[i] as usize, slot);
				assert_eq!(&field.colors()[i * 3..i * 3 + 3], color.to_unit().as_slice());
				seen += 1;
			}
		}
		assert_eq!(seen, field.count());
	}

	#[test]
	fn release_empties_buffers() {
		let mut field = flow(6);
		field.release();
		assert_eq!(field.count(), 0);
		assert!(field.positions().is_empty());
		assert!(field.colors().is_empty());
	}
}
