use std::fmt;

use serde::Serialize;

use crate::color::{Rgb, parse_hex_color};
use crate::store::ColorEntry;

/// Alpha carried by every blended color; not user-configurable
pub const MIX_ALPHA: f64 = 0.7;

/// Weighted-average blend of the valid entries
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MixResult {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl MixResult {
    fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: MIX_ALPHA,
        }
    }
}

impl fmt::Display for MixResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// Blend the entries whose hex text passes the color pattern, or `None`
/// when fewer than two do.
///
/// Weights are normalized against the total across all entries, valid or
/// not (a zero total counts as 1), so an invalid entry that still carries
/// weight dilutes the blend toward black. Channels accumulate in entry
/// order; rounding is `f64::round`, ties away from zero.
pub fn mix(entries: &[ColorEntry]) -> Option<MixResult> {
    let valid: Vec<(Rgb, f64)> = entries
        .iter()
        .filter_map(|entry| {
            parse_hex_color(entry.hex())
                .ok()
                .map(|rgb| (rgb, f64::from(entry.weight())))
        })
        .collect();

    if valid.len() < 2 {
        return None;
    }

    let total: u32 = entries.iter().map(|entry| u32::from(entry.weight())).sum();
    let total = f64::from(total.max(1));

    let mut channels = [0.0f64; 3];
    for (rgb, weight) in &valid {
        let normalized = weight / total;
        for (sum, &channel) in channels.iter_mut().zip(rgb.iter()) {
            *sum += f64::from(channel) * normalized;
        }
    }

    let [red, green, blue] = channels.map(|sum| sum.round().clamp(0.0, 255.0) as u8);
    Some(MixResult::new(red, green, blue))
}
