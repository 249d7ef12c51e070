use wasm_bindgen::prelude::*;

use crate::bit_util::to_int32;

/// Upper bound for element counts coming from JS.
pub const MAX_COUNT: usize = 4096;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LayoutParams {
    pub seed: i32,
    pub count: usize,
}

impl LayoutParams {
    /// Background orbs on most pages.
    pub const ORBS: Self = Self { seed: 7, count: 4 };
    pub const BLOG_INDEX_ORBS: Self = Self { seed: 55, count: 4 };
    pub const ABOUT_ORBS: Self = Self { seed: 77, count: 4 };
    /// Glowing dots on the hero grid.
    pub const GRID_DOTS: Self = Self { seed: 42, count: 28 };
    /// Drifting particles behind the IP showcase.
    pub const PARTICLES: Self = Self { seed: 1337, count: 30 };

    /// Orbs behind a blog post, seeded from the slug so every post looks a little different.
    pub fn blog_post_orbs(slug: &str) -> Self {
        Self {
            seed: seed_from_slug(slug),
            ..Self::ORBS
        }
    }

    /// Returns a copy with `seed` and `count` taken from a JS object where present.
    ///
    /// `undefined` and `null` mean "no overrides". Properties that are missing or not
    /// numbers are ignored.
    pub fn with_overrides(self, overrides: &JsValue) -> Result<Self, JsValue> {
        if overrides.is_undefined() || overrides.is_null() {
            return Ok(self);
        }
        if !overrides.is_object() {
            return Err(JsValue::from_str("layout parameters must be an object"));
        }

        let number = |name: &str| -> Result<Option<f64>, JsValue> {
            Ok(js_sys::Reflect::get(overrides, &JsValue::from_str(name))?.as_f64())
        };
        Ok(self.apply(number("seed")?, number("count")?))
    }

    /// Applies JS numbers read from an override object. `None` keeps the current value.
    pub fn apply(self, seed: Option<f64>, count: Option<f64>) -> Self {
        Self {
            seed: seed.map_or(self.seed, to_int32),
            count: count.map_or(self.count, count_from_js),
        }
    }
}

/// JS string length counts UTF-16 code units, so a slug with non-ASCII characters
/// still gets the same seed the server computed.
pub fn seed_from_slug(slug: &str) -> i32 {
    (slug.encode_utf16().count() as i32).wrapping_mul(13)
}

fn count_from_js(value: f64) -> usize {
    if value.is_nan() || value <= 0. {
        0
    } else {
        (value as usize).min(MAX_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_defaults() {
        assert_eq!(LayoutParams::ORBS, LayoutParams { seed: 7, count: 4 });
        assert_eq!(LayoutParams::GRID_DOTS.seed, 42);
        assert_eq!(LayoutParams::GRID_DOTS.count, 28);
        assert_eq!(LayoutParams::PARTICLES.seed, 1337);
        assert_eq!(LayoutParams::PARTICLES.count, 30);
    }

    #[test]
    fn slug_seeds() {
        assert_eq!(seed_from_slug(""), 0);
        assert_eq!(seed_from_slug("hello-world"), 143);
        assert_eq!(seed_from_slug("café"), 52);
        // One astral character is two UTF-16 code units.
        assert_eq!(seed_from_slug("🎮"), 26);

        let params = LayoutParams::blog_post_orbs("launch");
        assert_eq!(params.seed, 78);
        assert_eq!(params.count, LayoutParams::ORBS.count);
    }

    #[test]
    fn overrides() {
        let preset = LayoutParams::GRID_DOTS;
        assert_eq!(preset.apply(None, None), preset);
        assert_eq!(preset.apply(Some(9.), None), LayoutParams { seed: 9, count: 28 });
        assert_eq!(preset.apply(None, Some(3.)), LayoutParams { seed: 42, count: 3 });
        assert_eq!(preset.apply(Some(-7.), Some(100.)), LayoutParams { seed: -7, count: 100 });
    }

    #[test]
    fn override_seeds_use_int32() {
        let preset = LayoutParams::ORBS;
        assert_eq!(preset.apply(Some(3.7), None).seed, 3);
        assert_eq!(preset.apply(Some(4294967301.), None).seed, 5);
        assert_eq!(preset.apply(Some(2147483648.), None).seed, i32::MIN);
        assert_eq!(preset.apply(Some(f64::NAN), None).seed, 0);
        assert_eq!(preset.apply(Some(f64::INFINITY), None).seed, 0);
    }

    #[test]
    fn override_counts_clamp() {
        let preset = LayoutParams::PARTICLES;
        assert_eq!(preset.apply(None, Some(-1.)).count, 0);
        assert_eq!(preset.apply(None, Some(f64::NAN)).count, 0);
        assert_eq!(preset.apply(None, Some(12.9)).count, 12);
        assert_eq!(preset.apply(None, Some(1e9)).count, MAX_COUNT);
        assert_eq!(preset.apply(None, Some(1e9)).seed, 1337);
    }

    #[test]
    fn counts() {
        assert_eq!(count_from_js(28.), 28);
        assert_eq!(count_from_js(3.9), 3);
        assert_eq!(count_from_js(-4.), 0);
        assert_eq!(count_from_js(f64::NAN), 0);
        assert_eq!(count_from_js(1e12), MAX_COUNT);
        assert_eq!(count_from_js(f64::INFINITY), MAX_COUNT);
    }
}
