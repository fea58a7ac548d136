use site_ui as ui;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();
	let options = read_options();
	ui::boot_footer(&options.footer);
	ui::boot_navbar(&options.navbar);
}

/// Options may be overridden per page with a JSON `data-site-options` attribute on `<body>`.
fn read_options() -> ui::SiteOptions {
	let site_options = web_sys::window()
		.and_then(|window| window.document())
		.and_then(|document| document.body())
		.and_then(|body| body.dataset().get("siteOptions"));
	let site_options = match site_options {
		Some(site_options) => site_options,
		None => return ui::SiteOptions::default(),
	};
	match ui::SiteOptions::from_json(&site_options) {
		Ok(options) => options,
		Err(error) => {
			web_sys::console::warn_2(
				&JsValue::from_str("ignoring malformed data-site-options"),
				&JsValue::from_str(&error.to_string()),
			);
			ui::SiteOptions::default()
		}
	}
}
