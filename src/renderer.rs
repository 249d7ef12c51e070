use wasm_bindgen::prelude::*;

use crate::{style::Decoration, wasm_util::document};

/// Appends one `div` per decoration to `container`, carrying the inline style the
/// server would have rendered. Returns how many elements were added.
pub(crate) fn mount<D: Decoration>(container: &web_sys::Element, items: &[D]) -> Result<usize, JsValue> {
    let document = document()?;
    for item in items {
        let element = document.create_element("div")?;
        element.set_attribute("aria-hidden", "true")?;
        let class_name = item.class_name();
        if !class_name.is_empty() {
            element.set_class_name(class_name);
        }
        element.set_attribute("style", &item.style())?;
        container.append_child(&element)?;
    }
    Ok(items.len())
}
