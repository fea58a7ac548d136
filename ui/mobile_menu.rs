use crate::NavbarOptions;
use std::rc::Rc;
use wasm_bindgen::{prelude::*, JsCast};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
	Closed,
	Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
	ToggleClick,
	/// A click whose target is a link inside the menu panel.
	LinkClick,
	Escape,
}

impl MenuState {
	/// The state recorded in the toggle button's `aria-expanded` attribute. Anything but `"true"` is closed.
	pub fn from_expanded(aria_expanded: Option<&str>) -> MenuState {
		match aria_expanded {
			Some("true") => MenuState::Open,
			_ => MenuState::Closed,
		}
	}

	/// The next state after `event`, or `None` if the event does nothing in this state.
	pub fn transition(self, event: MenuEvent) -> Option<MenuState> {
		match (self, event) {
			(MenuState::Closed, MenuEvent::ToggleClick) => Some(MenuState::Open),
			(MenuState::Open, MenuEvent::ToggleClick) => Some(MenuState::Closed),
			(MenuState::Open, MenuEvent::LinkClick) => Some(MenuState::Closed),
			(MenuState::Open, MenuEvent::Escape) => Some(MenuState::Closed),
			(MenuState::Closed, MenuEvent::LinkClick) => None,
			(MenuState::Closed, MenuEvent::Escape) => None,
		}
	}

	pub fn is_open(self) -> bool {
		self == MenuState::Open
	}
}

/// The mobile menu: a toggle button and the panel it shows and hides.
///
/// The button's `aria-expanded` attribute is the only record of the state. It is read on every event, and every transition writes it together with the panel's `hidden` flag.
pub struct MobileMenu {
	button: web_sys::HtmlElement,
	panel: web_sys::HtmlElement,
	open_label: String,
	close_label: String,
}

impl MobileMenu {
	pub fn new(
		button: web_sys::HtmlElement,
		panel: web_sys::HtmlElement,
		options: &NavbarOptions,
	) -> MobileMenu {
		MobileMenu {
			button,
			panel,
			open_label: options.open_label.clone(),
			close_label: options.close_label.clone(),
		}
	}

	/// Find the toggle button and the panel. Both must be present.
	pub fn find(document: &web_sys::Document, options: &NavbarOptions) -> Option<MobileMenu> {
		let button = document
			.query_selector(&options.menu_button_selector)
			.ok()
			.flatten()?
			.dyn_into::<web_sys::HtmlElement>()
			.ok()?;
		let panel = document
			.get_element_by_id(&options.menu_panel_id)?
			.dyn_into::<web_sys::HtmlElement>()
			.ok()?;
		Some(MobileMenu::new(button, panel, options))
	}

	pub fn button(&self) -> &web_sys::HtmlElement {
		&self.button
	}

	pub fn panel(&self) -> &web_sys::HtmlElement {
		&self.panel
	}

	pub fn state(&self) -> MenuState {
		MenuState::from_expanded(self.button.get_attribute("aria-expanded").as_deref())
	}

	fn apply(&self, state: MenuState) -> Result<(), JsValue> {
		let (expanded, label) = match state {
			MenuState::Open => ("true", &self.close_label),
			MenuState::Closed => ("false", &self.open_label),
		};
		self.button.set_attribute("aria-expanded", expanded)?;
		self.panel.set_hidden(!state.is_open());
		self.button.set_attribute("aria-label", label)?;
		Ok(())
	}

	/// Run `event` against the current state. Returns the new state, or `None` if nothing changed.
	pub fn dispatch(&self, event: MenuEvent) -> Result<Option<MenuState>, JsValue> {
		let next = match self.state().transition(event) {
			Some(next) => next,
			None => return Ok(None),
		};
		self.apply(next)?;
		if event == MenuEvent::Escape {
			self.button.focus()?;
		}
		Ok(Some(next))
	}

	/// Close the menu if the click landed on a link. Clicks on anything else in the panel are ignored.
	pub fn handle_panel_click(&self, event: &web_sys::Event) -> Result<Option<MenuState>, JsValue> {
		let target = match event
			.target()
			.and_then(|target| target.dyn_into::<web_sys::Element>().ok())
		{
			Some(target) => target,
			None => return Ok(None),
		};
		if target.matches("a")? {
			self.dispatch(MenuEvent::LinkClick)
		} else {
			Ok(None)
		}
	}

	pub fn handle_keydown(&self, event: &web_sys::KeyboardEvent) -> Result<Option<MenuState>, JsValue> {
		if event.key() == "Escape" {
			self.dispatch(MenuEvent::Escape)
		} else {
			Ok(None)
		}
	}

	/// Start closed and listen for toggle clicks, link clicks in the panel, and the escape key anywhere in the document.
	pub fn attach(self, document: &web_sys::Document) -> Result<(), JsValue> {
		self.apply(MenuState::Closed)?;
		let menu = Rc::new(self);

		let menu_for_closure = menu.clone();
		let callback_fn = Closure::<dyn Fn()>::wrap(Box::new(move || {
			report(menu_for_closure.dispatch(MenuEvent::ToggleClick));
		}));
		menu.button
			.add_event_listener_with_callback("click", callback_fn.as_ref().unchecked_ref())?;
		callback_fn.forget();

		let menu_for_closure = menu.clone();
		let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |event: web_sys::Event| {
			report(menu_for_closure.handle_panel_click(&event));
		}));
		menu.panel
			.add_event_listener_with_callback("click", callback_fn.as_ref().unchecked_ref())?;
		callback_fn.forget();

		let menu_for_closure = menu;
		let callback_fn =
			Closure::<dyn Fn(_)>::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
				report(menu_for_closure.handle_keydown(&event));
			}));
		document.add_event_listener_with_callback("keydown", callback_fn.as_ref().unchecked_ref())?;
		callback_fn.forget();

		Ok(())
	}
}

fn report(result: Result<Option<MenuState>, JsValue>) {
	if let Err(error) = result {
		crate::console::error("navbar: failed to update mobile menu", &error);
	}
}

#[test]
fn test_transitions() {
	use MenuEvent::*;
	use MenuState::*;
	assert_eq!(Closed.transition(ToggleClick), Some(Open));
	assert_eq!(Open.transition(ToggleClick), Some(Closed));
	assert_eq!(Open.transition(LinkClick), Some(Closed));
	assert_eq!(Open.transition(Escape), Some(Closed));
	assert_eq!(Closed.transition(LinkClick), None);
	assert_eq!(Closed.transition(Escape), None);
}

#[test]
fn test_state_from_expanded_attribute() {
	assert_eq!(MenuState::from_expanded(Some("true")), MenuState::Open);
	assert_eq!(MenuState::from_expanded(Some("false")), MenuState::Closed);
	assert_eq!(MenuState::from_expanded(Some("TRUE")), MenuState::Closed);
	assert_eq!(MenuState::from_expanded(None), MenuState::Closed);
}

#[test]
fn test_toggle_twice_returns_to_closed() {
	let state = MenuState::Closed;
	let state = state.transition(MenuEvent::ToggleClick).unwrap();
	assert!(state.is_open());
	let state = state.transition(MenuEvent::ToggleClick).unwrap();
	assert!(!state.is_open());
}
