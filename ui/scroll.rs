use crate::NavbarOptions;
use wasm_bindgen::{prelude::*, JsCast};

/// Whether the navbar should render in its scrolled style at this vertical offset.
pub fn is_scrolled(scroll_offset: f64, threshold: f64) -> bool {
	scroll_offset > threshold
}

pub fn apply_scroll_state(
	navbar: &web_sys::Element,
	scrolled_class: &str,
	scrolled: bool,
) -> Result<(), JsValue> {
	navbar
		.class_list()
		.toggle_with_force(scrolled_class, scrolled)?;
	Ok(())
}

/// Keep the navbar's scrolled class in sync with the window's scroll offset.
///
/// The navbar is looked up once. If it is missing the listener is still registered and every update is a no-op. The listener is passive so it never holds up scrolling.
pub fn boot_scroll_state(
	window: &web_sys::Window,
	document: &web_sys::Document,
	options: &NavbarOptions,
) -> Result<(), JsValue> {
	let navbar = document.query_selector(&options.navbar_selector)?;
	if navbar.is_none() {
		crate::console::debug("navbar: no navbar on this page");
	}
	let update = {
		let window = window.clone();
		let scrolled_class = options.scrolled_class.clone();
		let threshold = options.scroll_threshold;
		move || -> Result<(), JsValue> {
			if let Some(navbar) = navbar.as_ref() {
				let scrolled = is_scrolled(window.scroll_y()?, threshold);
				apply_scroll_state(navbar, &scrolled_class, scrolled)?;
			}
			Ok(())
		}
	};
	update()?;
	let callback_fn = Closure::<dyn Fn()>::wrap(Box::new(move || {
		if let Err(error) = update() {
			crate::console::error("navbar: failed to update scroll state", &error);
		}
	}));
	let listener_options = web_sys::AddEventListenerOptions::new();
	listener_options.set_passive(true);
	window.add_event_listener_with_callback_and_add_event_listener_options(
		"scroll",
		callback_fn.as_ref().unchecked_ref(),
		&listener_options,
	)?;
	callback_fn.forget();
	Ok(())
}

#[test]
fn test_is_scrolled() {
	let threshold = NavbarOptions::default().scroll_threshold;
	assert!(!is_scrolled(0.0, threshold));
	assert!(!is_scrolled(7.5, threshold));
	assert!(!is_scrolled(8.0, threshold));
	assert!(is_scrolled(8.5, threshold));
	assert!(is_scrolled(9.0, threshold));
	assert!(is_scrolled(1200.0, threshold));
	// Scrolling back up clears the flag again.
	assert!(!is_scrolled(3.0, threshold));
}
