//! Leptos component wrapping the animated background scene.
//!
//! The component renders an empty container, then on mount creates a canvas
//! inside it, generates the scene, and wires up pointer/resize listeners, a
//! body-class theme observer and a `requestAnimationFrame` loop. Every one of
//! those is registered with a [`Teardown`] that runs when the component is
//! cleaned up.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

use super::config::SceneConfig;
use super::frame_loop::FrameLoop;
use super::host::{self, BodyClassTheme, Listener, Surface, ThemeObserver};
use super::lifecycle::{SceneError, Teardown};
use super::render;
use super::state::SceneState;
use super::theme::ThemeSource;

/// Id of the optional `<script type="application/json">` holding a
/// [`SceneConfig`] override.
const CONFIG_SCRIPT_ID: &str = "scene-config";

/// Scene state plus the surface it is drawn on.
struct Background {
	state: SceneState,
	surface: Surface,
}

type SharedBackground = Rc<RefCell<Option<Background>>>;

/// Runs `f` on the live scene, skipping the call while it is borrowed or gone.
fn with_background(slot: &SharedBackground, f: impl FnOnce(&mut Background)) {
	if let Ok(mut guard) = slot.try_borrow_mut() {
		if let Some(background) = guard.as_mut() {
			f(background);
		}
	}
}

/// Renders the decorative particle scene behind the page.
///
/// Takes no props. Scene constants can be overridden with a JSON script
/// element whose id is `scene-config`. If the browser cannot provide a 2d
/// canvas the container simply stays empty.
#[component]
pub fn SceneBackground() -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let background: SharedBackground = Rc::new(RefCell::new(None));
	let teardown: Rc<RefCell<Option<Teardown>>> = Rc::new(RefCell::new(None));
	let mounted = Rc::new(Cell::new(false));
	let (background_init, teardown_init) = (background.clone(), teardown.clone());

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		if mounted.replace(true) {
			return;
		}
		let container: Element = container.into();

		let mut steps = Teardown::new();
		match mount(&container, &background_init, &mut steps) {
			Ok(()) => info!("scene background: mounted ({} release steps)", steps.len()),
			Err(e) => {
				warn!("scene background: disabled: {}", e);
				steps.run();
				return;
			}
		}
		*teardown_init.borrow_mut() = Some(steps);
	});

	// on_cleanup needs Send; the Rc stays on this thread in local storage.
	let teardown_cleanup = StoredValue::new_local(teardown);
	on_cleanup(move || {
		let steps = teardown_cleanup
			.try_with_value(|slot| slot.borrow_mut().take())
			.flatten();
		if let Some(steps) = steps {
			let failed = steps.run().len();
			info!("scene background: disposed ({} failed steps)", failed);
		}
	});

	view! {
		<div
			node_ref=container_ref
			class="scene-background"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none;"
		/>
	}
}

/// Builds the scene inside `container`, recording a release step for every
/// resource acquired. On error, already-recorded steps are left for the
/// caller to run.
fn mount(
	container: &Element,
	slot: &SharedBackground,
	teardown: &mut Teardown,
) -> Result<(), SceneError> {
	let window = host::window()?;
	let viewport = host::viewport(&window);
	let config: SceneConfig = crate::load_json_script(CONFIG_SCRIPT_ID).unwrap_or_default();
	let theme: Rc<dyn ThemeSource> = Rc::new(BodyClassTheme);

	let surface = Surface::attach(container, viewport)?;
	let detached = surface.detached_handle();
	teardown.defer("render surface", move || {
		detached.detach();
		Ok(())
	});

	let mut state = SceneState::new(config, theme.current(), viewport, &mut rand::thread_rng());
	state.start();
	debug!(
		"scene background: {} stars, {} flow particles, {} prisms",
		state.stars.count(),
		state.flow.count(),
		state.prisms.len()
	);
	*slot.borrow_mut() = Some(Background { state, surface });

	let slot_release = slot.clone();
	teardown.defer("scene buffers", move || {
		let mut guard = slot_release.try_borrow_mut().map_err(|_| SceneError::Busy)?;
		if let Some(mut background) = guard.take() {
			background.state.dispose();
		}
		Ok(())
	});

	let slot_theme = slot.clone();
	let observer = ThemeObserver::observe(theme, move |mode| {
		with_background(&slot_theme, |bg| {
			if bg.state.appearance.mode != mode {
				info!("scene background: theme -> {:?}", mode);
			}
			bg.state.apply_theme(mode);
		});
	})?;
	teardown.defer("theme observer", move || {
		observer.disconnect();
		Ok(())
	});

	let slot_frame = slot.clone();
	let frames = FrameLoop::start(move || {
		with_background(&slot_frame, |bg| {
			if !bg.state.tick() {
				return;
			}
			if let Err(e) = render::render(&bg.state, &bg.surface.ctx) {
				debug!("scene background: skipped frame: {:?}", e);
			}
		});
	})?;
	teardown.defer("frame loop", move || frames.stop());

	let slot_resize = slot.clone();
	let resize = Listener::attach(&window, "resize", move |_: Event| {
		let Ok(win) = host::window() else {
			return;
		};
		let viewport = host::viewport(&win);
		with_background(&slot_resize, |bg| {
			bg.state.resize(viewport.width, viewport.height);
			if let Err(e) = bg.surface.resize(viewport) {
				warn!("scene background: resize failed: {}", e);
			}
		});
	})?;
	teardown.defer("resize listener", move || resize.detach());

	let slot_pointer = slot.clone();
	let pointer = Listener::attach(&window, "mousemove", move |ev: Event| {
		let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
			return;
		};
		with_background(&slot_pointer, |bg| {
			bg.state.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
		});
	})?;
	teardown.defer("pointer listener", move || pointer.detach());

	Ok(())
}
