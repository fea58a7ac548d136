use crate::{console, FooterOptions};
use chrono::{Datelike, Local};

/// The text written into the footer for the given date: the calendar year in decimal.
pub fn year_text(date: &impl Datelike) -> String {
	date.year().to_string()
}

/// Write `year` into the footer's year element. Returns false if the page has no such element.
pub fn stamp_year(document: &web_sys::Document, options: &FooterOptions, year: &str) -> bool {
	match document.get_element_by_id(&options.year_element_id) {
		Some(year_element) => {
			year_element.set_text_content(Some(year));
			true
		}
		None => false,
	}
}

/// Stamp the current year into the footer. This runs once, the text is not updated at midnight on new year's eve.
pub fn boot_footer(options: &FooterOptions) {
	let document = match web_sys::window().and_then(|window| window.document()) {
		Some(document) => document,
		None => return,
	};
	let year = year_text(&Local::now());
	if !stamp_year(&document, options, &year) {
		console::debug("footer: no year element on this page");
	}
}

#[test]
fn test_year_text() {
	use chrono::NaiveDate;
	let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
	assert_eq!(year_text(&date), "2026");
	let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
	assert_eq!(year_text(&date), "1999");
	let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
	assert_eq!(year_text(&date), "2000");
}
