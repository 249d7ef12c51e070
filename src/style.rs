//! Inline CSS for decorative elements.
//!
//! Fractional numbers are formatted with `ryu-js`, which follows JS `Number#toString`
//! (including the switch to exponent notation below 1e-6), so a server-rendered style
//! attribute and a browser-built one compare equal as strings.

use std::fmt::Write;

use crate::layout::{GridDot, Orb, Particle, ParticleTint, Placement};

const BRAND_FROM: &str = "var(--brand-from)";
const DOT_GLOW: &str = "0 0 6px 2px rgba(124,58,237,0.5)";

pub trait Decoration: Placement {
    fn style(&self) -> String;

    fn class_name(&self) -> &'static str {
        ""
    }
}

/// Formats `x` the way JS would print it.
pub fn js_number(x: f64) -> String {
    ryu_js::Buffer::new().format(x).to_owned()
}

/// Common `left`/`top`/`width`/`height` prefix.
fn placement_style<P: Placement>(item: &P, size: f64) -> String {
    let position = item.position();
    let size = js_number(size);
    format!(
        "left: {}%; top: {}%; width: {}px; height: {}px;",
        js_number(position.x),
        js_number(position.y),
        size,
        size
    )
}

impl Decoration for Orb {
    fn style(&self) -> String {
        let mut s = placement_style(self, self.size as f64);
        let _ = write!(
            s,
            " background: radial-gradient(circle at center, {}, {}, transparent 70%);\
             \x20filter: blur({}px); opacity: {};\
             \x20animation: orb-drift-{} {}s ease-in-out {}s infinite;",
            self.colors.0,
            self.colors.1,
            self.blur,
            js_number(self.opacity),
            self.drift_index,
            self.duration,
            self.delay
        );
        s
    }

    fn class_name(&self) -> &'static str {
        "floating-orb absolute rounded-full"
    }
}

impl Decoration for GridDot {
    fn style(&self) -> String {
        let mut s = String::from("position: absolute; ");
        s.push_str(&placement_style(self, self.size));
        let _ = write!(
            s,
            " border-radius: 50%; background-color: {}; box-shadow: {};\
             \x20animation: dot-glow {}s ease-in-out {}s infinite;\
             \x20will-change: opacity, transform; opacity: 0;",
            BRAND_FROM,
            DOT_GLOW,
            js_number(self.duration),
            js_number(self.delay)
        );
        s
    }
}

impl ParticleTint {
    pub fn background(&self) -> &'static str {
        match self {
            Self::Accent => "rgba(6,214,160,0.5)",
            Self::Brand => "rgba(124,58,237,0.5)",
            Self::White => "rgba(255,255,255,0.35)",
        }
    }

    pub fn glow(&self) -> &'static str {
        match self {
            Self::Accent => "0 0 4px 1px rgba(6,214,160,0.3)",
            Self::Brand => "0 0 4px 1px rgba(124,58,237,0.3)",
            Self::White => "0 0 3px 1px rgba(255,255,255,0.15)",
        }
    }
}

impl Decoration for Particle {
    fn style(&self) -> String {
        let mut s = placement_style(self, self.size as f64);
        let _ = write!(
            s,
            " border-radius: 50%; background-color: {}; box-shadow: {};\
             \x20animation: ip-particle-drift {}s ease-in-out {}s infinite; opacity: 0;",
            self.tint.background(),
            self.tint.glow(),
            js_number(self.duration),
            js_number(self.delay)
        );
        s
    }

    fn class_name(&self) -> &'static str {
        "pointer-events-none absolute"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{generate_grid_dots, generate_orbs, generate_particles};

    #[test]
    fn orb_style() {
        let orb = &generate_orbs(7, 1)[0];
        assert_eq!(
            orb.style(),
            "left: 10.819332720711827%; top: 9.337078030221164%; width: 495px; height: 495px; \
             background: radial-gradient(circle at center, rgba(124, 58, 237, 0.6), rgba(99, 40, 210, 0.2), transparent 70%); \
             filter: blur(108px); opacity: 0.09607226342661307; \
             animation: orb-drift-1 45s ease-in-out 5s infinite;"
        );
        assert_eq!(orb.class_name(), "floating-orb absolute rounded-full");
    }

    #[test]
    fn grid_dot_style() {
        let dot = &generate_grid_dots(42, 1)[0];
        assert_eq!(
            dot.style(),
            "position: absolute; left: 60%; top: 45%; width: 2.3496277974918485px; height: 2.3496277974918485px; \
             border-radius: 50%; background-color: var(--brand-from); box-shadow: 0 0 6px 2px rgba(124,58,237,0.5); \
             animation: dot-glow 5.678936165757477s ease-in-out 6.819726347923279s infinite; \
             will-change: opacity, transform; opacity: 0;"
        );
        assert_eq!(dot.class_name(), "");
    }

    #[test]
    fn particle_style() {
        let particle = &generate_particles(1337, 1)[0];
        assert_eq!(
            particle.style(),
            "left: 19%; top: 81%; width: 2px; height: 2px; \
             border-radius: 50%; background-color: rgba(255,255,255,0.35); box-shadow: 0 0 3px 1px rgba(255,255,255,0.15); \
             animation: ip-particle-drift 9.04836717620492s ease-in-out 4.30774615611881s infinite; opacity: 0;"
        );
    }

    #[test]
    fn numbers_format_like_js() {
        assert_eq!(js_number(60.), "60");
        assert_eq!(js_number(35.00000000000001), "35.00000000000001");
        assert_eq!(js_number(0.000001), "0.000001");
        assert_eq!(js_number(1e-7), "1e-7");
        assert_eq!(js_number(9.890645742416382e-7), "9.890645742416382e-7");
        assert_eq!(js_number(1e21), "1e+21");
    }

    #[test]
    fn tiny_delay_uses_exponent() {
        let dot = &generate_grid_dots(36107, 28)[14];
        assert_eq!(dot.delay, 9.890645742416382e-7);
        assert!(
            dot.style().contains("ease-in-out 9.890645742416382e-7s infinite;"),
            "{}",
            dot.style()
        );
    }

    #[test]
    fn tint_colors_differ() {
        let tints = [ParticleTint::White, ParticleTint::Brand, ParticleTint::Accent];
        for (i, a) in tints.iter().enumerate() {
            for b in &tints[i + 1..] {
                assert_ne!(a.background(), b.background());
                assert_ne!(a.glow(), b.glow());
            }
        }
    }
}
