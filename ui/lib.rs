//! Browser behaviors for the marketing site: the footer year stamp and the
//! navbar (scrolled state, active links, mobile menu).
//!
//! Each behavior is booted once per page load. Every booter looks up the
//! elements it needs and quietly does nothing when they are missing, so the
//! same wasm module runs on every page regardless of which pieces it has.

mod active_link;
mod console;
mod footer;
mod mobile_menu;
mod navbar;
mod options;
mod scroll;

pub use self::active_link::*;
pub use self::footer::*;
pub use self::mobile_menu::*;
pub use self::navbar::*;
pub use self::options::*;
pub use self::scroll::*;

