//! Color string conversions for [`Vector3`] used as an RGB triple
//!
//! Thin collaborators around the engine's vector output; no interpolation
//! happens here. Components are rounded to the nearest integer and clamped to
//! `[0, 255]` when rendering to a string.

use crate::value::vector3::Vector3;
use crate::{KeyframeError, Result};

#[inline]
fn component_to_byte(component: f64) -> u8 {
    component.clamp(0.0, 255.0).round() as u8
}

fn invalid(input: &str, reason: impl Into<String>) -> KeyframeError {
    KeyframeError::InvalidColor {
        input: input.to_string(),
        reason: reason.into(),
    }
}

/// Render an RGB vector as a `#rrggbb` hex color string.
pub fn vector3_to_hex(vector: &Vector3) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        component_to_byte(vector.x),
        component_to_byte(vector.y),
        component_to_byte(vector.z)
    )
}

/// Parse a `#rrggbb` hex color string into an RGB vector.
pub fn hex_to_vector3(hex: &str) -> Result<Vector3> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| invalid(hex, "missing '#' prefix"))?;

    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid(hex, "expected six hex digits"));
    }

    let byte_at = |range: std::ops::Range<usize>| -> Result<f64> {
        u8::from_str_radix(&digits[range], 16)
            .map(f64::from)
            .map_err(|e| invalid(hex, e.to_string()))
    };

    Ok(Vector3::new(byte_at(0..2)?, byte_at(2..4)?, byte_at(4..6)?))
}

/// Render an RGB vector as an `rgb(r,g,b)` color string.
pub fn vector3_to_rgb(vector: &Vector3) -> String {
    format!(
        "rgb({},{},{})",
        component_to_byte(vector.x),
        component_to_byte(vector.y),
        component_to_byte(vector.z)
    )
}

/// Parse an `rgb(r,g,b)` color string into an RGB vector. Whitespace between
/// components is tolerated.
pub fn rgb_to_vector3(rgb: &str) -> Result<Vector3> {
    let inner = rgb
        .trim()
        .strip_prefix("rgb(")
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| invalid(rgb, "expected rgb(r,g,b) form"))?;

    let mut components = inner.split(',').map(|part| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| invalid(rgb, e.to_string()))
    });

    let x = components.next().ok_or_else(|| invalid(rgb, "missing red"))??;
    let y = components
        .next()
        .ok_or_else(|| invalid(rgb, "missing green"))??;
    let z = components
        .next()
        .ok_or_else(|| invalid(rgb, "missing blue"))??;

    if components.next().is_some() {
        return Err(invalid(rgb, "too many components"));
    }

    Ok(Vector3::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_rejects_malformed_input() {
        assert!(hex_to_vector3("7f7f7f").is_err());
        assert!(hex_to_vector3("#7f7f").is_err());
        assert!(hex_to_vector3("#zz0000").is_err());
    }

    #[test]
    fn test_rgb_rejects_malformed_input() {
        assert!(rgb_to_vector3("rgba(0,0,0,1)").is_err());
        assert!(rgb_to_vector3("rgb(0,0)").is_err());
        assert!(rgb_to_vector3("rgb(0,0,x)").is_err());
        assert!(rgb_to_vector3("rgb(0,0,0,0)").is_err());
    }
}
