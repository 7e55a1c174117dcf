//! Browser plumbing: window access, event listeners, theme observation and
//! the canvas the scene draws into.
//!
//! Every handle here owns its JS closure and has an explicit release method,
//! so the component can hand them to its [`Teardown`](super::lifecycle::Teardown).

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Element, Event, EventTarget, HtmlCanvasElement, MutationObserver,
	MutationObserverInit, Window,
};

use super::camera::Viewport;
use super::lifecycle::SceneError;
use super::theme::{LIGHT_THEME_CLASS, ThemeMode, ThemeSource};

/// Upper bound on the device pixel ratio the canvas is rendered at.
const MAX_PIXEL_RATIO: f64 = 2.0;

pub fn window() -> Result<Window, SceneError> {
	web_sys::window().ok_or(SceneError::NoWindow)
}

/// Current window inner size, falling back to 800x600 if unreadable.
pub fn viewport(window: &Window) -> Viewport {
	let width = window
		.inner_width()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(800.0);
	let height = window
		.inner_height()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(600.0);
	Viewport::new(width, height)
}

/// Reads the theme from the `light-theme` class on `document.body`.
pub struct BodyClassTheme;

impl ThemeSource for BodyClassTheme {
	fn current(&self) -> ThemeMode {
		let is_light = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.body())
			.map(|b| b.class_list().contains(LIGHT_THEME_CLASS))
			.unwrap_or(false);
		ThemeMode::from_is_light(is_light)
	}
}

/// An event listener that stays attached until [`Listener::detach`].
pub struct Listener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
	pub fn attach(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<Self, SceneError> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
		Ok(Self {
			target: target.clone(),
			event,
			callback,
		})
	}

	pub fn detach(self) -> Result<(), SceneError> {
		self.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())?;
		Ok(())
	}
}

/// Watches `document.body` class changes and reports the resulting theme.
pub struct ThemeObserver {
	observer: MutationObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl ThemeObserver {
	/// Calls `on_change` once right away with the current theme, then again
	/// after every class mutation on the body.
	pub fn observe(
		source: Rc<dyn ThemeSource>,
		mut on_change: impl FnMut(ThemeMode) + 'static,
	) -> Result<Self, SceneError> {
		let body = window()?
			.document()
			.and_then(|d| d.body())
			.ok_or(SceneError::NoDocument)?;

		on_change(source.current());

		let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
			move |_records: js_sys::Array, _observer: MutationObserver| {
				on_change(source.current());
			},
		);
		let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;

		let init = MutationObserverInit::new();
		init.set_attributes(true);
		init.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));
		observer.observe_with_options(&body, &init)?;

		Ok(Self {
			observer,
			_callback: callback,
		})
	}

	pub fn disconnect(self) {
		self.observer.disconnect();
	}
}

/// The canvas the scene renders into, appended to the component's container.
pub struct Surface {
	pub canvas: HtmlCanvasElement,
	pub ctx: CanvasRenderingContext2d,
	pixel_ratio: f64,
}

impl Surface {
	/// Creates a canvas sized to `viewport` and appends it to `container`.
	pub fn attach(container: &Element, viewport: Viewport) -> Result<Self, SceneError> {
		let window = window()?;
		let document = window.document().ok_or(SceneError::NoDocument)?;

		let canvas: HtmlCanvasElement = document
			.create_element("canvas")?
			.dyn_into()
			.map_err(|_| SceneError::Surface("created element is not a canvas".into()))?;
		canvas.set_class_name("scene-background-canvas");

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or_else(|| SceneError::Surface("2d context not supported".into()))?
			.dyn_into()
			.map_err(|_| SceneError::Surface("unexpected context type".into()))?;

		let surface = Self {
			canvas,
			ctx,
			pixel_ratio: window.device_pixel_ratio().clamp(1.0, MAX_PIXEL_RATIO),
		};
		surface.resize(viewport)?;
		container.append_child(&surface.canvas)?;
		Ok(surface)
	}

	/// Matches the backing store to `viewport` at the surface's pixel ratio.
	pub fn resize(&self, viewport: Viewport) -> Result<(), SceneError> {
		let ratio = self.pixel_ratio;
		self.canvas.set_width((viewport.width * ratio) as u32);
		self.canvas.set_height((viewport.height * ratio) as u32);

		let style = self.canvas.style();
		style.set_property("width", &format!("{}px", viewport.width))?;
		style.set_property("height", &format!("{}px", viewport.height))?;

		// Resizing resets the context transform.
		self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)?;
		Ok(())
	}

	/// A handle that can remove the canvas after the surface itself is gone.
	pub fn detached_handle(&self) -> SurfaceHandle {
		SurfaceHandle {
			canvas: self.canvas.clone(),
		}
	}
}

/// Removes a surface's canvas from the DOM.
pub struct SurfaceHandle {
	canvas: HtmlCanvasElement,
}

impl SurfaceHandle {
	pub fn detach(self) {
		self.canvas.remove();
	}
}
