use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn log(s: &str);
}

macro_rules! console_log {
    ($fmt:expr, $($arg1:expr),*) => {
        crate::wasm_util::log(&format!($fmt, $($arg1),+))
    };
    ($fmt:expr) => {
        crate::wasm_util::log($fmt)
    }
}

pub(crate) use console_log;

pub(crate) fn set_panic_hook() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}

pub(crate) fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no global `window` exists"))?
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))
}
