#![cfg(target_arch = "wasm32")]

use site_ui::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
	web_sys::window().unwrap().document().unwrap()
}

fn render(markup: &str) -> web_sys::Document {
	let document = document();
	document.body().unwrap().set_inner_html(markup);
	document
}

fn html_element(document: &web_sys::Document, selector: &str) -> web_sys::HtmlElement {
	document
		.query_selector(selector)
		.unwrap()
		.unwrap()
		.dyn_into::<web_sys::HtmlElement>()
		.unwrap()
}

fn dispatch_click(target: &web_sys::Element) {
	let init = web_sys::EventInit::new();
	init.set_bubbles(true);
	let event = web_sys::Event::new_with_event_init_dict("click", &init).unwrap();
	target.dispatch_event(&event).unwrap();
}

fn press_key(document: &web_sys::Document, key: &str) {
	let init = web_sys::KeyboardEventInit::new();
	init.set_key(key);
	init.set_bubbles(true);
	let event = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
	document.dispatch_event(&event).unwrap();
}

const MENU_MARKUP: &str = r##"
	<nav class="navbar">
		<a class="nav__link" href="/docs">Docs</a>
		<button class="icon-btn" aria-expanded="false" aria-label="Open menu">Menu</button>
	</nav>
	<div id="mobileMenu" class="mobile-menu" hidden>
		<a class="mobile-menu__link" href="#features">Features</a>
		<p class="mobile-menu__note">Questions? Write to us.</p>
	</div>
"##;

fn attached_menu() -> (web_sys::Document, web_sys::HtmlElement, web_sys::HtmlElement) {
	let document = render(MENU_MARKUP);
	let menu = MobileMenu::find(&document, &NavbarOptions::default()).unwrap();
	let button = menu.button().clone();
	let panel = menu.panel().clone();
	menu.attach(&document).unwrap();
	(document, button, panel)
}

fn assert_closed(button: &web_sys::HtmlElement, panel: &web_sys::HtmlElement) {
	assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("false"));
	assert_eq!(button.get_attribute("aria-label").as_deref(), Some("Open menu"));
	assert!(panel.hidden());
}

fn assert_open(button: &web_sys::HtmlElement, panel: &web_sys::HtmlElement) {
	assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("true"));
	assert_eq!(button.get_attribute("aria-label").as_deref(), Some("Close menu"));
	assert!(!panel.hidden());
}

#[wasm_bindgen_test]
fn stamps_year_into_footer() {
	let document = render(r#"<footer><span id="year">0000</span></footer>"#);
	assert!(stamp_year(&document, &FooterOptions::default(), "2026"));
	let year = document.get_element_by_id("year").unwrap();
	assert_eq!(year.text_content().as_deref(), Some("2026"));
}

#[wasm_bindgen_test]
fn boot_footer_writes_a_four_digit_year() {
	let document = render(r#"<footer><span id="year"></span></footer>"#);
	boot_footer(&FooterOptions::default());
	let text = document.get_element_by_id("year").unwrap().text_content().unwrap();
	assert_eq!(text.len(), 4);
	assert!(text.parse::<i32>().unwrap() >= 2024);
}

#[wasm_bindgen_test]
fn missing_year_element_changes_nothing() {
	let markup = r#"<nav class="navbar"><a class="nav__link" href="/">Home</a></nav>"#;
	let document = render(markup);
	assert!(!stamp_year(&document, &FooterOptions::default(), "2026"));
	boot_footer(&FooterOptions::default());
	assert_eq!(document.body().unwrap().inner_html(), markup);
}

#[wasm_bindgen_test]
fn scrolled_class_follows_the_offset() {
	let document = render(r#"<nav class="navbar"></nav>"#);
	let navbar = document.query_selector(".navbar").unwrap().unwrap();
	let options = NavbarOptions::default();
	for (offset, expected) in &[(0.0, false), (9.0, true), (8.0, false), (40.0, true), (2.0, false)] {
		let scrolled = is_scrolled(*offset, options.scroll_threshold);
		apply_scroll_state(&navbar, &options.scrolled_class, scrolled).unwrap();
		assert_eq!(navbar.class_list().contains("is-scrolled"), *expected);
	}
}

#[wasm_bindgen_test]
fn scroll_state_boots_without_a_navbar() {
	let document = render("<main></main>");
	let window = web_sys::window().unwrap();
	boot_scroll_state(&window, &document, &NavbarOptions::default()).unwrap();
}

#[wasm_bindgen_test]
fn scroll_state_tracks_the_window_offset() {
	let document = render(
		r#"<nav class="navbar"></nav><div class="spacer" style="height:5000px"></div>"#,
	);
	let window = web_sys::window().unwrap();
	let navbar = document.query_selector(".navbar").unwrap().unwrap();
	window.scroll_to_with_x_and_y(0.0, 20.0);
	assert!(window.scroll_y().unwrap() > 8.0);
	// A page that loads already scrolled gets the class before any scroll event.
	boot_scroll_state(&window, &document, &NavbarOptions::default()).unwrap();
	assert!(navbar.class_list().contains("is-scrolled"));
	window.scroll_to_with_x_and_y(0.0, 0.0);
	let event = web_sys::Event::new("scroll").unwrap();
	window.dispatch_event(&event).unwrap();
	assert!(!navbar.class_list().contains("is-scrolled"));
}

#[wasm_bindgen_test]
fn marks_current_links_and_clears_stale_markers() {
	let document = render(
		r#"
		<a class="nav__link" href="/">Home</a>
		<a class="nav__link" href="/docs/" aria-current="page">Docs</a>
		<a class="nav__link" href="/blog" aria-current="page">Blog</a>
		<a class="nav__link" href="https://example.com" aria-current="page">Elsewhere</a>
		<a class="mobile-menu__link" href="/docs">Docs</a>
		<a class="mobile-menu__link">No target</a>
	"#,
	);
	let selector = NavbarOptions::default().link_selector;
	let marked = mark_active_links(&document, "/docs/intro", &selector).unwrap();
	assert_eq!(marked, 2);
	let current = |selector: &str| {
		document
			.query_selector(selector)
			.unwrap()
			.unwrap()
			.get_attribute("aria-current")
	};
	assert_eq!(current(r#".nav__link[href="/"]"#), None);
	assert_eq!(current(r#".nav__link[href="/docs/"]"#).as_deref(), Some("page"));
	assert_eq!(current(r#".nav__link[href="/blog"]"#), None);
	// External links are left exactly as they were.
	assert_eq!(current(r#".nav__link[href="https://example.com"]"#).as_deref(), Some("page"));
	assert_eq!(current(r#".mobile-menu__link[href="/docs"]"#).as_deref(), Some("page"));

	let before = document.body().unwrap().inner_html();
	assert_eq!(mark_active_links(&document, "/docs/intro", &selector).unwrap(), 2);
	assert_eq!(document.body().unwrap().inner_html(), before);
}

#[wasm_bindgen_test]
fn toggle_button_opens_and_closes_the_menu() {
	let (_, button, panel) = attached_menu();
	assert_closed(&button, &panel);
	button.click();
	assert_open(&button, &panel);
	button.click();
	assert_closed(&button, &panel);
}

#[wasm_bindgen_test]
fn attach_starts_closed_even_if_markup_disagrees() {
	let document = render(MENU_MARKUP);
	let button = html_element(&document, ".icon-btn");
	let panel = html_element(&document, "#mobileMenu");
	button.set_attribute("aria-expanded", "true").unwrap();
	panel.set_hidden(false);
	MobileMenu::find(&document, &NavbarOptions::default())
		.unwrap()
		.attach(&document)
		.unwrap();
	assert_closed(&button, &panel);
}

#[wasm_bindgen_test]
fn link_click_closes_but_other_clicks_do_not() {
	let (document, button, panel) = attached_menu();
	button.click();
	assert_open(&button, &panel);
	let note = document.query_selector(".mobile-menu__note").unwrap().unwrap();
	dispatch_click(&note);
	dispatch_click(&panel);
	assert_open(&button, &panel);
	let link = document.query_selector(".mobile-menu__link").unwrap().unwrap();
	dispatch_click(&link);
	assert_closed(&button, &panel);
	dispatch_click(&link);
	assert_closed(&button, &panel);
}

#[wasm_bindgen_test]
fn escape_closes_an_open_menu_and_focuses_the_button() {
	let (document, button, panel) = attached_menu();
	button.click();
	let link = html_element(&document, ".mobile-menu__link");
	link.focus().unwrap();
	press_key(&document, "Enter");
	assert_open(&button, &panel);
	press_key(&document, "Escape");
	assert_closed(&button, &panel);
	let active = document.active_element().unwrap();
	let button: &web_sys::Node = &button;
	assert!(active.is_same_node(Some(button)));
}

#[wasm_bindgen_test]
fn escape_on_a_closed_menu_does_nothing() {
	let (document, button, panel) = attached_menu();
	let link = html_element(&document, ".nav__link");
	link.focus().unwrap();
	press_key(&document, "Escape");
	assert_closed(&button, &panel);
	let active = document.active_element().unwrap();
	let link: &web_sys::Node = &link;
	assert!(active.is_same_node(Some(link)));
}

#[wasm_bindgen_test]
fn menu_reads_state_from_the_button_each_time() {
	let (_, button, panel) = attached_menu();
	// Something else opens the menu behind our back.
	button.set_attribute("aria-expanded", "true").unwrap();
	panel.set_hidden(false);
	button.click();
	assert_closed(&button, &panel);
}

#[wasm_bindgen_test]
fn menu_needs_both_button_and_panel() {
	let options = NavbarOptions::default();
	let document = render(r#"<button class="icon-btn" aria-expanded="false">Menu</button>"#);
	assert!(MobileMenu::find(&document, &options).is_none());
	let document = render(r#"<div id="mobileMenu" hidden><a href="/docs">Docs</a></div>"#);
	assert!(MobileMenu::find(&document, &options).is_none());
}

#[wasm_bindgen_test]
fn navbar_boots_on_a_page_without_a_menu() {
	let window = web_sys::window().unwrap();
	window.scroll_to_with_x_and_y(0.0, 0.0);
	let current_path = window.location().pathname().unwrap();
	let document = render(&format!(
		r#"<nav class="navbar"><a class="nav__link" href="{}">Here</a><a class="nav__link" href="https://example.com">Elsewhere</a></nav>"#,
		current_path
	));
	boot_navbar(&NavbarOptions::default());
	let navbar = document.query_selector(".navbar").unwrap().unwrap();
	assert!(!navbar.class_list().contains("is-scrolled"));
	let here = document.query_selector(".nav__link").unwrap().unwrap();
	assert_eq!(here.get_attribute("aria-current").as_deref(), Some("page"));
}
