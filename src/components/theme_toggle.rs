//! Light/dark switch.
//!
//! The toggle is the only writer of the `light-theme` class on
//! `document.body`; the background scene just observes it. The choice is
//! remembered in `localStorage`.

use leptos::prelude::*;
use log::{debug, warn};
use web_sys::Storage;

use super::scene_background::{LIGHT_THEME_CLASS, ThemeMode};

const STORAGE_KEY: &str = "theme";

fn local_storage() -> Option<Storage> {
	web_sys::window()?.local_storage().ok()?
}

/// Interprets a stored preference. Anything but `"dark"` means light.
fn parse_saved(value: &str) -> ThemeMode {
	ThemeMode::from_is_light(value != "dark")
}

fn storage_value(mode: ThemeMode) -> &'static str {
	if mode.is_light() { "light" } else { "dark" }
}

fn saved_theme() -> Option<ThemeMode> {
	let value = local_storage()?.get_item(STORAGE_KEY).ok()??;
	Some(parse_saved(&value))
}

/// Writes `mode` to the body class and to storage.
fn apply(mode: ThemeMode) {
	let Some(body) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	else {
		warn!("theme toggle: no document body");
		return;
	};
	if let Err(e) = body
		.class_list()
		.toggle_with_force(LIGHT_THEME_CLASS, mode.is_light())
	{
		warn!("theme toggle: could not set body class: {:?}", e);
	}
	if let Some(storage) = local_storage() {
		let _ = storage.set_item(STORAGE_KEY, storage_value(mode));
	}
	debug!("theme toggle: {:?}", mode);
}

/// Button that flips between light and dark. Starts from the saved choice,
/// or light when nothing is saved.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let mode = RwSignal::new(saved_theme().unwrap_or(ThemeMode::Light));

	Effect::new(move |_| apply(mode.get()));

	view! {
		<button
			class="theme-toggle"
			aria-label="Toggle theme"
			on:click=move |_| mode.update(|m| *m = m.toggled())
		>
			{move || if mode.get().is_light() { "☾" } else { "☀" }}
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn saved_values_round_trip() {
		for mode in [ThemeMode::Light, ThemeMode::Dark] {
			assert_eq!(parse_saved(storage_value(mode)), mode);
		}
	}

	#[test]
	fn unknown_saved_value_means_light() {
		assert_eq!(parse_saved("sepia"), ThemeMode::Light);
	}
}
