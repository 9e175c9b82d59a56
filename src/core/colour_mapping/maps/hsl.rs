use crate::core::data::colour::Colour;

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn round_channel(value: f64) -> u8 {
    (value * 255.0).round() as u8
}

/// Standard HSL to RGB, all inputs in `[0, 1]`.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Colour {
    if saturation == 0.0 {
        let grey = round_channel(lightness);
        return Colour::new(grey, grey, grey);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Colour::new(
        round_channel(hue_to_channel(p, q, hue + 1.0 / 3.0)),
        round_channel(hue_to_channel(p, q, hue)),
        round_channel(hue_to_channel(p, q, hue - 1.0 / 3.0)),
    )
}
