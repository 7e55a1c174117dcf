//! civic-landing: landing page for the Community AI civic assistant.
//!
//! The page is static content layered over an animated 3D particle scene
//! that follows the pointer and the light/dark theme.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Only needed for its `js` feature so `rand` can seed on wasm.
use getrandom as _;

pub mod components;

pub use components::landing::{Landing, LandingContent};
pub use components::scene_background::{SceneBackground, SceneConfig, ThemeMode};
pub use components::theme_toggle::ThemeToggle;

const CONTENT_SCRIPT_ID: &str = "landing-content";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("civic-landing: logging initialized");
}

/// Parses the JSON body of `<script id="{id}">`.
///
/// Returns `None` when the element is missing. Malformed JSON is logged and
/// also yields `None` so callers fall back to their defaults.
pub(crate) fn load_json_script<T: DeserializeOwned>(id: &str) -> Option<T> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<T>(&json_text) {
		Ok(data) => {
			info!("civic-landing: loaded #{}", id);
			Some(data)
		}
		Err(e) => {
			warn!("civic-landing: failed to parse #{}: {}", id, e);
			None
		}
	}
}

/// Main application component.
/// Background scene at the back, landing page on top, theme toggle pinned.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let content = load_json_script::<LandingContent>(CONTENT_SCRIPT_ID).unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Community AI - Empowering Communities Through AI" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<SceneBackground />
		<ThemeToggle />
		<main class="page">
			<Landing content=content />
		</main>
	}
}
