//! Mount/dispose bookkeeping and error types for the background scene.
//!
//! Teardown is a list of independent release steps, run last-registered-first
//! so resources come down in the reverse of the order they went up. Every step
//! runs even when an earlier one fails; failures are logged and reported back
//! to the caller.

use log::warn;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by the background scene.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
	#[error("no global window")]
	NoWindow,
	#[error("no document on window")]
	NoDocument,
	#[error("render surface unavailable: {0}")]
	Surface(String),
	#[error("scene state is in use")]
	Busy,
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for SceneError {
	fn from(value: JsValue) -> Self {
		SceneError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Where a scene is in its life.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SceneLifecycle {
	#[default]
	Init,
	Running,
	Disposed,
}

impl SceneLifecycle {
	pub fn is_running(self) -> bool {
		self == SceneLifecycle::Running
	}

	#[cfg(test)]
	pub fn is_disposed(self) -> bool {
		self == SceneLifecycle::Disposed
	}
}

type ReleaseFn = Box<dyn FnOnce() -> Result<(), SceneError>>;

/// Ordered release steps collected while mounting.
#[derive(Default)]
pub struct Teardown {
	steps: Vec<(&'static str, ReleaseFn)>,
}

impl Teardown {
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues a named release step.
	pub fn defer(
		&mut self,
		name: &'static str,
		step: impl FnOnce() -> Result<(), SceneError> + 'static,
	) {
		self.steps.push((name, Box::new(step)));
	}

	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// Runs every step, newest first, and returns the ones that failed.
	pub fn run(self) -> Vec<(&'static str, SceneError)> {
		let mut failures = Vec::new();
		for (name, step) in self.steps.into_iter().rev() {
			if let Err(e) = step() {
				warn!("scene teardown: {} failed: {}", name, e);
				failures.push((name, e));
			}
		}
		failures
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::RefCell;
	use std::collections::BTreeSet;
	use std::rc::Rc;

	#[test]
	fn failing_step_does_not_block_the_rest() {
		let registry: Rc<RefCell<BTreeSet<&str>>> = Rc::new(RefCell::new(
			["mousemove", "resize", "frame", "observer", "surface"].into(),
		));

		let mut teardown = Teardown::new();
		for name in ["mousemove", "resize", "frame", "observer", "surface"] {
			let registry = registry.clone();
			teardown.defer(name, move || {
				registry.borrow_mut().remove(name);
				if name == "frame" {
					Err(SceneError::Js("cancel failed".into()))
				} else {
					Ok(())
				}
			});
		}
		assert_eq!(teardown.len(), 5);

		let failures = teardown.run();
		assert!(registry.borrow().is_empty());
		assert_eq!(failures.len(), 1);
		assert_eq!(failures[0].0, "frame");
	}

	#[test]
	fn steps_run_newest_first() {
		let order = Rc::new(RefCell::new(Vec::new()));
		let mut teardown = Teardown::new();
		for name in ["observer", "frame", "listeners"] {
			let order = order.clone();
			teardown.defer(name, move || {
				order.borrow_mut().push(name);
				Ok(())
			});
		}
		assert!(teardown.run().is_empty());
		assert_eq!(*order.borrow(), vec!["listeners", "frame", "observer"]);
	}

	#[test]
	fn lifecycle_flags() {
		assert!(!SceneLifecycle::default().is_running());
		assert!(SceneLifecycle::Running.is_running());
		assert!(SceneLifecycle::Disposed.is_disposed());
	}
}
