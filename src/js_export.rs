//! Conversion of layouts into plain JS values.

use wasm_bindgen::prelude::*;

use crate::{
    layout::{GridDot, Orb, Particle},
    style::Decoration,
};

fn set(object: &js_sys::Object, key: &str, value: JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(object, &JsValue::from_str(key), &value)?;
    Ok(())
}

pub(crate) trait ToJsObject: Decoration {
    /// Fields specific to the element type.
    fn write_fields(&self, object: &js_sys::Object) -> Result<(), JsValue>;

    fn to_js_object(&self) -> Result<js_sys::Object, JsValue> {
        let object = js_sys::Object::new();
        let position = self.position();
        set(&object, "left", position.x.into())?;
        set(&object, "top", position.y.into())?;
        self.write_fields(&object)?;
        set(&object, "className", self.class_name().into())?;
        set(&object, "style", self.style().into())?;
        Ok(object)
    }
}

impl ToJsObject for Orb {
    fn write_fields(&self, object: &js_sys::Object) -> Result<(), JsValue> {
        set(object, "size", self.size.into())?;
        set(object, "blur", self.blur.into())?;
        set(object, "opacity", self.opacity.into())?;
        set(object, "duration", self.duration.into())?;
        set(object, "delay", self.delay.into())?;
        set(object, "driftIndex", (self.drift_index as u32).into())?;
        set(object, "color1", self.colors.0.into())?;
        set(object, "color2", self.colors.1.into())
    }
}

impl ToJsObject for GridDot {
    fn write_fields(&self, object: &js_sys::Object) -> Result<(), JsValue> {
        set(object, "size", self.size.into())?;
        set(object, "delay", self.delay.into())?;
        set(object, "duration", self.duration.into())
    }
}

impl ToJsObject for Particle {
    fn write_fields(&self, object: &js_sys::Object) -> Result<(), JsValue> {
        set(object, "size", self.size.into())?;
        set(object, "delay", self.delay.into())?;
        set(object, "duration", self.duration.into())?;
        set(object, "color", self.tint.as_str().into())
    }
}

pub(crate) fn to_js_array<T: ToJsObject>(items: &[T]) -> Result<js_sys::Array, JsValue> {
    let array = js_sys::Array::new();
    for item in items {
        array.push(&item.to_js_object()?.into());
    }
    Ok(array)
}
