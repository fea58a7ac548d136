use wasm_bindgen::{prelude::*, JsCast};

/// Strip one trailing slash, so `/docs/` and `/docs` compare equal. The root path `/` becomes the empty string.
pub fn normalize_path(path: &str) -> &str {
	path.strip_suffix('/').unwrap_or(path)
}

/// Decide whether a link with `href` points at the page at `current_path`.
///
/// Returns `None` for links that are not root-relative, such as external URLs and fragments. Those are never marked or unmarked. A link is current if its target equals the current path or is a prefix of it, except that the root link never matches by prefix. The prefix comparison is on the raw string, so nested section links can be current at the same time.
pub fn match_link(current_path: &str, href: &str) -> Option<bool> {
	if !href.starts_with('/') {
		return None;
	}
	let current_path = normalize_path(current_path);
	let target = normalize_path(href);
	let is_current =
		target == current_path || (target.len() > 1 && current_path.starts_with(target));
	Some(is_current)
}

pub fn is_active_link(current_path: &str, href: &str) -> bool {
	match_link(current_path, href).unwrap_or(false)
}

/// Set `aria-current="page"` on every link matching `selector` that points at `current_path` and remove it from every other root-relative link. Returns how many links were marked.
pub fn mark_active_links(
	document: &web_sys::Document,
	current_path: &str,
	selector: &str,
) -> Result<usize, JsValue> {
	let links = document.query_selector_all(selector)?;
	let mut marked = 0;
	for link_index in 0..links.length() {
		let link = match links
			.item(link_index)
			.and_then(|link| link.dyn_into::<web_sys::Element>().ok())
		{
			Some(link) => link,
			None => continue,
		};
		let href = match link.get_attribute("href") {
			Some(href) => href,
			None => continue,
		};
		match match_link(current_path, &href) {
			Some(true) => {
				link.set_attribute("aria-current", "page")?;
				marked += 1;
			}
			Some(false) => link.remove_attribute("aria-current")?,
			None => {}
		}
	}
	Ok(marked)
}

#[test]
fn test_normalize_path() {
	assert_eq!(normalize_path("/docs/"), "/docs");
	assert_eq!(normalize_path("/docs"), "/docs");
	assert_eq!(normalize_path("/"), "");
	assert_eq!(normalize_path("/docs//"), "/docs/");
}

#[test]
fn test_exact_and_trailing_slash_matches() {
	assert!(is_active_link("/docs", "/docs"));
	assert!(is_active_link("/docs/", "/docs"));
	assert!(is_active_link("/docs", "/docs/"));
	assert!(is_active_link("/", "/"));
}

#[test]
fn test_prefix_matches_exclude_root() {
	assert!(is_active_link("/docs/intro", "/docs"));
	assert!(!is_active_link("/docs/intro", "/"));
	assert!(!is_active_link("/blog", "/docs"));
	assert!(!is_active_link("/", "/docs"));
}

#[test]
fn test_links_that_are_not_root_relative_are_skipped() {
	assert_eq!(match_link("/docs", "https://example.com"), None);
	assert_eq!(match_link("/docs", "#pricing"), None);
	assert_eq!(match_link("/docs", ""), None);
	assert_eq!(match_link("/docs", "docs"), None);
	assert!(!is_active_link("/docs", "https://example.com/docs"));
}

#[test]
fn test_navigation_table() {
	let hrefs = [
		"/",
		"/docs",
		"/docs/intro",
		"/docs/intro/setup/",
		"/blog",
		"https://example.com",
	];
	let table = hrefs
		.iter()
		.map(|href| (*href, match_link("/docs/intro/setup", href)))
		.collect::<Vec<_>>();
	insta::assert_debug_snapshot!(table, @r###"
	[
	    (
	        "/",
	        Some(
	            false,
	        ),
	    ),
	    (
	        "/docs",
	        Some(
	            true,
	        ),
	    ),
	    (
	        "/docs/intro",
	        Some(
	            true,
	        ),
	    ),
	    (
	        "/docs/intro/setup/",
	        Some(
	            true,
	        ),
	    ),
	    (
	        "/blog",
	        Some(
	            false,
	        ),
	    ),
	    (
	        "https://example.com",
	        None,
	    ),
	]
	"###);
}

#[test]
fn test_matching_does_not_depend_on_link_order() {
	let hrefs = ["/docs", "/", "/docs/intro", "/pricing"];
	let forward = hrefs
		.iter()
		.map(|href| is_active_link("/docs/intro/", href))
		.collect::<Vec<_>>();
	let backward = hrefs
		.iter()
		.rev()
		.map(|href| is_active_link("/docs/intro/", href))
		.collect::<Vec<_>>();
	assert_eq!(forward, backward.into_iter().rev().collect::<Vec<_>>());
	assert_eq!(forward, vec![true, false, true, false]);
}
