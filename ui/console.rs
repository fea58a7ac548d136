use wasm_bindgen::JsValue;
use web_sys::console;

pub(crate) fn debug(message: &str) {
	console::debug_1(&JsValue::from_str(message));
}

pub(crate) fn error(message: &str, error: &JsValue) {
	console::error_2(&JsValue::from_str(message), error);
}
