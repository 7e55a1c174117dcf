//! Background scene state.
//!
//! Created once when the component mounts, then mutated each frame by the
//! animation loop. The `tick` method advances every layer by one fixed step;
//! `apply_theme` swaps appearance attributes without touching geometry.

use rand::Rng;

use super::camera::{CameraRig, Viewport};
use super::config::SceneConfig;
use super::field::{FlowField, StarField};
use super::lifecycle::SceneLifecycle;
use super::links::NetworkLinks;
use super::prism::{self, Prism};
use super::theme::{Appearance, ThemeMode};

pub struct SceneState {
	pub config: SceneConfig,
	pub stars: StarField,
	pub flow: FlowField,
	pub prisms: Vec<Prism>,
	pub links: NetworkLinks,
	pub camera: CameraRig,
	pub appearance: Appearance,
	pub viewport: Viewport,
	/// Simulation clock, advanced by `config.time_step` per tick.
	pub time: f32,
	pub frame: u64,
	lifecycle: SceneLifecycle,
}

impl SceneState {
	/// Generates every layer. Call once per mount.
	pub fn new(
		config: SceneConfig,
		mode: ThemeMode,
		viewport: Viewport,
		rng: &mut impl Rng,
	) -> Self {
		let appearance = Appearance::for_mode(mode);
		let stars = StarField::generate(&config.stars, rng);
		let flow = FlowField::generate(&config.flow, &appearance.flow.palette, rng);
		let prisms = prism::generate(&config.prisms, rng);

		Self {
			stars,
			flow,
			prisms,
			links: NetworkLinks::with_capacity(&config.links),
			camera: CameraRig::new(&config.camera),
			appearance,
			viewport,
			time: 0.0,
			frame: 0,
			lifecycle: SceneLifecycle::Init,
			config,
		}
	}

	#[cfg(test)]
	pub fn lifecycle(&self) -> SceneLifecycle {
		self.lifecycle
	}

	/// Marks the scene live. Has no effect once disposed.
	pub fn start(&mut self) {
		if self.lifecycle == SceneLifecycle::Init {
			self.lifecycle = SceneLifecycle::Running;
		}
	}

	/// Advances the simulation by one step. Returns `false` (and changes
	/// nothing) unless the scene is running.
	pub fn tick(&mut self) -> bool {
		if !self.lifecycle.is_running() {
			return false;
		}
		self.time += self.config.time_step;
		self.frame += 1;

		self.stars.yaw += self.config.stars.spin;
		self.flow.advance(self.time, &self.config.flow);
		for prism in &mut self.prisms {
			prism.advance(self.time, &self.config.prisms);
		}
		self.camera.follow();

		if self.appearance.mode.is_light() {
			let every = self.config.links.refresh_every.max(1);
			if self.frame % every == 0 {
				self.links.rebuild(&self.flow, &self.config.links);
			}
		}
		true
	}

	/// Applies the materials for `mode`. Idempotent.
	pub fn apply_theme(&mut self, mode: ThemeMode) {
		self.appearance = Appearance::for_mode(mode);
		self.flow.recolor(&self.appearance.flow.palette);
		if !mode.is_light() {
			self.links.clear();
		}
	}

	pub fn set_pointer(&mut self, client_x: f64, client_y: f64) {
		self.camera.set_pointer(client_x, client_y, self.viewport);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.viewport = Viewport::new(width, height);
	}

	/// Releases every buffer and stops further ticks.
	pub fn dispose(&mut self) {
		self.lifecycle = SceneLifecycle::Disposed;
		self.stars.release();
		self.flow.release();
		self.prisms = Vec::new();
		self.links = NetworkLinks::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn running(mode: ThemeMode) -> SceneState {
		let mut rng = StdRng::seed_from_u64(42);
		let mut state = SceneState::new(
			SceneConfig::default(),
			mode,
			Viewport::new(1280.0, 720.0),
			&mut rng,
		);
		state.start();
		state
	}

	#[test]
	fn generation_produces_every_layer() {
		let state = running(ThemeMode::Dark);
		assert_eq!(state.stars.count(), 2000);
		assert_eq!(state.flow.count(), 1500);
		assert_eq!(state.prisms.len(), 4);
		assert_eq!(state.lifecycle(), SceneLifecycle::Running);
	}

	#[test]
	fn counts_survive_ticks_and_theme_changes() {
		let mut state = running(ThemeMode::Dark);
		let prisms_before: Vec<_> = state.prisms.iter().map(|p| p.scale).collect();
		for _ in 0..10 {
			state.tick();
		}
		state.apply_theme(ThemeMode::Light);
		for _ in 0..10 {
			state.tick();
		}
		assert_eq!(state.stars.positions().len(), 2000 * 3);
		assert_eq!(state.flow.colors().len(), 1500 * 3);
		assert_eq!(state.flow.speeds().len(), 1500);
		let prisms_after: Vec<_> = state.prisms.iter().map(|p| p.scale).collect();
		assert_eq!(prisms_before, prisms_after);
	}

	#[test]
	fn theme_change_keeps_geometry() {
		let mut state = running(ThemeMode::Dark);
		let positions = state.flow.positions().to_vec();
		let slots = state.flow.slots().to_vec();
		state.apply_theme(ThemeMode::Light);
		assert_eq!(state.flow.positions(), positions.as_slice());
		assert_eq!(state.flow.slots(), slots.as_slice());
	}

	#[test]
	fn applying_same_theme_twice_is_stable() {
		let mut state = running(ThemeMode::Light);
		state.apply_theme(ThemeMode::Light);
		let appearance = state.appearance.clone();
		let colors = state.flow.colors().to_vec();
		state.apply_theme(ThemeMode::Light);
		assert_eq!(state.appearance, appearance);
		assert_eq!(state.flow.colors(), colors.as_slice());
	}

	#[test]
	fn toggling_twice_restores_dark_materials() {
		let mut state = running(ThemeMode::Dark);
		let initial = state.appearance.clone();
		state.apply_theme(ThemeMode::Dark.toggled());
		assert_ne!(state.appearance, initial);
		state.apply_theme(ThemeMode::Dark.toggled().toggled());
		assert_eq!(state.appearance.stars.opacity, initial.stars.opacity);
		assert_eq!(state.appearance.flow.opacity, initial.flow.opacity);
		assert_eq!(state.appearance.prisms.opacity, initial.prisms.opacity);
		assert_eq!(state.appearance, initial);
	}

	#[test]
	fn centered_pointer_keeps_camera_on_axis() {
		let mut state = running(ThemeMode::Dark);
		state.set_pointer(640.0, 360.0);
		for _ in 0..100 {
			assert!(state.tick());
		}
		assert_abs_diff_eq!(state.camera.position.x, 0.0, epsilon = 1e-4);
		assert_abs_diff_eq!(state.camera.position.y, 0.0, epsilon = 1e-4);
	}

	#[test]
	fn time_advances_by_fixed_step() {
		let mut state = running(ThemeMode::Dark);
		for _ in 0..50 {
			state.tick();
		}
		assert_abs_diff_eq!(state.time, 0.5, epsilon = 1e-4);
		assert_eq!(state.frame, 50);
	}

	#[test]
	fn links_only_build_in_light_theme() {
		let mut state = running(ThemeMode::Dark);
		for _ in 0..6 {
			state.tick();
		}
		assert!(state.links.segments().is_empty());

		state.apply_theme(ThemeMode::Light);
		let config = state.config.links.clone();
		for _ in 0..config.refresh_every {
			state.tick();
		}
		assert!(!state.links.segments().is_empty());
		assert!(state.links.segments().len() <= config.max_segments);

		state.apply_theme(ThemeMode::Dark);
		assert!(state.links.segments().is_empty());
	}

	#[test]
	fn default_links_are_dense_enough_to_show() {
		for seed in 0..20 {
			let mut state = SceneState::new(
				SceneConfig::default(),
				ThemeMode::Light,
				Viewport::new(1280.0, 720.0),
				&mut StdRng::seed_from_u64(seed),
			);
			state.start();
			for _ in 0..state.config.links.refresh_every {
				state.tick();
			}
			let built = state.links.segments().len();
			assert!(built >= 5, "seed {seed}: only {built} segments");
		}
	}

	#[test]
	fn tick_before_start_is_a_no_op() {
		let mut rng = StdRng::seed_from_u64(1);
		let mut state = SceneState::new(
			SceneConfig::default(),
			ThemeMode::Dark,
			Viewport::new(800.0, 600.0),
			&mut rng,
		);
		assert!(!state.tick());
		assert_eq!(state.frame, 0);
	}

	#[test]
	fn frame_after_dispose_is_a_no_op() {
		let mut state = running(ThemeMode::Dark);
		state.tick();
		state.dispose();
		let (time, frame) = (state.time, state.frame);

		// A frame queued before teardown still arrives.
		assert!(!state.tick());
		assert_eq!((state.time, state.frame), (time, frame));
		assert_eq!(state.stars.count(), 0);
		assert_eq!(state.flow.count(), 0);
		assert!(state.prisms.is_empty());

		state.start();
		assert!(state.lifecycle().is_disposed());
	}

	#[test]
	fn resize_updates_viewport() {
		let mut state = running(ThemeMode::Dark);
		state.resize(400.0, 0.0);
		assert_eq!(state.viewport, Viewport::new(400.0, 1.0));
	}
}
