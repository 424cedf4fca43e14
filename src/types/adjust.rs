//! Colour adjustment helpers for palette authoring and compositing.
//!
//! Lightness and saturation moves happen in HSL space; `mix` and
//! `luminance` stay in plain sRGB. These back custom-palette derivation
//! (shade ramps from a base yarn colour) and the renderer's grid-line
//! compositing.

use palette::{Hsl, IntoColor, Srgb};

use super::Colour;

/// Increase lightness by a percentage of the remaining headroom.
pub fn lighten(colour: Colour, percent: f32) -> Colour {
    adjust_lightness(colour, percent)
}

/// Decrease lightness by a percentage of the current value.
pub fn darken(colour: Colour, percent: f32) -> Colour {
    adjust_lightness(colour, -percent)
}

/// Increase saturation by a percentage of the remaining headroom.
pub fn saturate(colour: Colour, percent: f32) -> Colour {
    adjust_saturation(colour, percent)
}

/// Decrease saturation by a percentage of the current value.
pub fn desaturate(colour: Colour, percent: f32) -> Colour {
    adjust_saturation(colour, -percent)
}

/// Adjust lightness in HSL space.
fn adjust_lightness(colour: Colour, percent: f32) -> Colour {
    let rgb: Srgb<f32> = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );

    let mut hsl: Hsl = rgb.into_color();

    // Relative to the remaining range in the chosen direction
    let delta = percent / 100.0;
    if delta > 0.0 {
        hsl.lightness += (1.0 - hsl.lightness) * delta;
    } else {
        hsl.lightness += hsl.lightness * delta;
    }
    hsl.lightness = hsl.lightness.clamp(0.0, 1.0);

    let rgb_out: Srgb<f32> = hsl.into_color();
    Colour::new(
        (rgb_out.red * 255.0).round() as u8,
        (rgb_out.green * 255.0).round() as u8,
        (rgb_out.blue * 255.0).round() as u8,
        colour.a,
    )
}

/// Adjust saturation in HSL space.
fn adjust_saturation(colour: Colour, percent: f32) -> Colour {
    let rgb: Srgb<f32> = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );

    let mut hsl: Hsl = rgb.into_color();

    let delta = percent / 100.0;
    if delta > 0.0 {
        hsl.saturation += (1.0 - hsl.saturation) * delta;
    } else {
        hsl.saturation += hsl.saturation * delta;
    }
    hsl.saturation = hsl.saturation.clamp(0.0, 1.0);

    let rgb_out: Srgb<f32> = hsl.into_color();
    Colour::new(
        (rgb_out.red * 255.0).round() as u8,
        (rgb_out.green * 255.0).round() as u8,
        (rgb_out.blue * 255.0).round() as u8,
        colour.a,
    )
}

/// Mix two colours by a factor (0.0 = first colour, 1.0 = second colour).
pub fn mix(a: Colour, b: Colour, factor: f32) -> Colour {
    let factor = factor.clamp(0.0, 1.0);
    let inv = 1.0 - factor;

    Colour::new(
        ((a.r as f32 * inv) + (b.r as f32 * factor)).round() as u8,
        ((a.g as f32 * inv) + (b.g as f32 * factor)).round() as u8,
        ((a.b as f32 * inv) + (b.b as f32 * factor)).round() as u8,
        ((a.a as f32 * inv) + (b.a as f32 * factor)).round() as u8,
    )
}

/// BT.601 luminance of a colour, in `[0, 255]`.
pub fn luminance(colour: Colour) -> f64 {
    0.299 * colour.r as f64 + 0.587 * colour.g as f64 + 0.114 * colour.b as f64
}

/// Whether a swatch reads as light (dark text needed for contrast).
pub fn is_light(colour: Colour) -> bool {
    luminance(colour) / 255.0 > 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darken_white() {
        let c = darken(Colour::WHITE, 50.0);
        assert!(c.r < 255);
        // Greyscale stays greyscale
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn test_lighten_black() {
        let c = lighten(Colour::BLACK, 50.0);
        assert!(c.r > 0);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn test_lighten_then_darken_is_near_identity() {
        let grey = Colour::rgb(128, 128, 128);
        let c = darken(lighten(grey, 20.0), 20.0);
        assert!((c.r as i32 - 128).abs() < 10);
    }

    #[test]
    fn test_desaturate_fully_is_greyscale() {
        let c = desaturate(Colour::rgb(255, 100, 100), 100.0);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn test_saturate_widens_channel_gap() {
        let muted = Colour::rgb(0xB0, 0x80, 0x80);
        let vivid = saturate(muted, 50.0);
        assert!(vivid.r > vivid.g);
        let muted_gap = muted.r as i32 - muted.g as i32;
        let vivid_gap = vivid.r as i32 - vivid.g as i32;
        assert!(vivid_gap >= muted_gap);
    }

    #[test]
    fn test_mix_midpoint() {
        let grey = mix(Colour::BLACK, Colour::WHITE, 0.5);
        assert_eq!(grey.r, 128);
        assert_eq!(grey.g, 128);
        assert_eq!(grey.b, 128);
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Colour::rgb(10, 20, 30);
        let b = Colour::rgb(200, 100, 0);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
    }

    #[test]
    fn test_luminance_weights() {
        assert_eq!(luminance(Colour::BLACK), 0.0);
        assert_eq!(luminance(Colour::WHITE), 255.0);
        // Green dominates the weighting
        assert!(luminance(Colour::rgb(0, 255, 0)) > luminance(Colour::rgb(255, 0, 0)));
    }

    #[test]
    fn test_is_light() {
        assert!(is_light(Colour::WHITE));
        assert!(is_light(Colour::rgb(255, 255, 0)));
        assert!(!is_light(Colour::BLACK));
        assert!(!is_light(Colour::rgb(0, 0, 255)));
    }
}
