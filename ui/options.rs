use serde::Deserialize;

/// Options for every behavior on the page. Any field missing from the JSON
/// falls back to the markup the site ships with.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteOptions {
	pub footer: FooterOptions,
	pub navbar: NavbarOptions,
}

impl SiteOptions {
	pub fn from_json(json: &str) -> serde_json::Result<SiteOptions> {
		serde_json::from_str(json)
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterOptions {
	/// Id of the element whose text becomes the current year.
	pub year_element_id: String,
}

impl Default for FooterOptions {
	fn default() -> FooterOptions {
		FooterOptions {
			year_element_id: "year".to_owned(),
		}
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NavbarOptions {
	pub navbar_selector: String,
	pub scrolled_class: String,
	/// The navbar counts as scrolled once the vertical offset is strictly greater than this.
	pub scroll_threshold: f64,
	/// Matches both the desktop and the mobile navigation links.
	pub link_selector: String,
	pub menu_button_selector: String,
	pub menu_panel_id: String,
	pub open_label: String,
	pub close_label: String,
}

impl Default for NavbarOptions {
	fn default() -> NavbarOptions {
		NavbarOptions {
			navbar_selector: ".navbar".to_owned(),
			scrolled_class: "is-scrolled".to_owned(),
			scroll_threshold: 8.0,
			link_selector: ".nav__link, .mobile-menu__link".to_owned(),
			menu_button_selector: ".icon-btn".to_owned(),
			menu_panel_id: "mobileMenu".to_owned(),
			open_label: "Open menu".to_owned(),
			close_label: "Close menu".to_owned(),
		}
	}
}

#[test]
fn test_empty_options_use_defaults() {
	let options = SiteOptions::from_json("{}").unwrap();
	assert_eq!(options, SiteOptions::default());
	assert_eq!(options.footer.year_element_id, "year");
	assert_eq!(options.navbar.scroll_threshold, 8.0);
}

#[test]
fn test_partial_options_override_only_named_fields() {
	let options = SiteOptions::from_json(
		r#"{ "navbar": { "scrollThreshold": 24, "menuPanelId": "drawer" } }"#,
	)
	.unwrap();
	assert_eq!(options.navbar.scroll_threshold, 24.0);
	assert_eq!(options.navbar.menu_panel_id, "drawer");
	assert_eq!(options.navbar.navbar_selector, ".navbar");
	assert_eq!(options.navbar.close_label, "Close menu");
	assert_eq!(options.footer, FooterOptions::default());
}

#[test]
fn test_malformed_options_are_an_error() {
	assert!(SiteOptions::from_json("{ navbar: ").is_err());
	assert!(SiteOptions::from_json(r#"{ "footer": { "yearElementId": 7 } }"#).is_err());
}
