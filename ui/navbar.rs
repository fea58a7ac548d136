use crate::{boot_scroll_state, console, mark_active_links, MobileMenu, NavbarOptions};

/// Wire up the navbar: the scrolled class, the active link markers, and the mobile menu. Each of the three is independent, so a failure or a missing element in one leaves the others working.
pub fn boot_navbar(options: &NavbarOptions) {
	let window = match web_sys::window() {
		Some(window) => window,
		None => return,
	};
	let document = match window.document() {
		Some(document) => document,
		None => return,
	};

	if let Err(error) = boot_scroll_state(&window, &document, options) {
		console::error("navbar: failed to set up scroll state", &error);
	}

	// The path never changes without a page load, so links are marked once.
	match window.location().pathname() {
		Ok(current_path) => {
			if let Err(error) = mark_active_links(&document, &current_path, &options.link_selector) {
				console::error("navbar: failed to mark active links", &error);
			}
		}
		Err(error) => console::error("navbar: failed to read the current path", &error),
	}

	match MobileMenu::find(&document, options) {
		Some(menu) => {
			if let Err(error) = menu.attach(&document) {
				console::error("navbar: failed to set up mobile menu", &error);
			}
		}
		None => console::debug("navbar: no mobile menu on this page"),
	}
}
