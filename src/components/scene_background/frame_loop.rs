//! Cancellable `requestAnimationFrame` loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::host;
use super::lifecycle::SceneError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Calls a closure once per animation frame until [`FrameLoop::stop`].
///
/// The callback re-requests itself after each run. `stop` clears the active
/// flag before cancelling, so a frame the browser has already dispatched
/// returns without running the closure or scheduling another.
pub struct FrameLoop {
	callback: FrameCallback,
	pending: Rc<Cell<Option<i32>>>,
	active: Rc<Cell<bool>>,
}

impl FrameLoop {
	pub fn start(mut on_frame: impl FnMut() + 'static) -> Result<Self, SceneError> {
		let window = host::window()?;
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));
		let active = Rc::new(Cell::new(true));

		let (callback_inner, pending_inner, active_inner) =
			(callback.clone(), pending.clone(), active.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			if !active_inner.get() {
				return;
			}
			on_frame();
			if !active_inner.get() {
				return;
			}
			if let Some(ref cb) = *callback_inner.borrow() {
				match web_sys::window().map(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()))
				{
					Some(Ok(id)) => pending_inner.set(Some(id)),
					_ => warn!("frame loop: could not schedule next frame"),
				}
			}
		}));

		let id = match *callback.borrow() {
			Some(ref cb) => window.request_animation_frame(cb.as_ref().unchecked_ref())?,
			None => return Err(SceneError::Busy),
		};
		pending.set(Some(id));

		Ok(Self {
			callback,
			pending,
			active,
		})
	}

	/// Stops the loop and cancels the pending frame request.
	///
	/// A frame the browser dispatched before the cancel still reaches the
	/// scene, where the released slot or `SceneState::tick` returning `false`
	/// turns it into a no-op.
	pub fn stop(&self) -> Result<(), SceneError> {
		self.active.set(false);
		let cancelled = match self.pending.take() {
			Some(id) => host::window()
				.and_then(|w| w.cancel_animation_frame(id).map_err(SceneError::from)),
			None => Ok(()),
		};
		// Dropping the closure breaks the callback's reference to itself.
		match self.callback.try_borrow_mut() {
			Ok(mut cb) => {
				cb.take();
			}
			Err(_) => return Err(SceneError::Busy),
		}
		cancelled
	}
}
