//! Extended data encoding (`chd=e:`) for the chart image service.
//!
//! Each value is scaled linearly from the chart's y range into `0..=4095` and written
//! as two characters of a 64-symbol alphabet. Series are separated by commas.

use anyhow::{Result, anyhow, bail};

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-.";

/// Largest value representable in extended encoding.
pub const EXTENDED_MAX: u64 = 4095;

/// Scale `value` from `[lo, hi]` into `0..=EXTENDED_MAX`, rounding to nearest.
/// A flat range maps everything to 0.
pub fn scale(value: u64, (lo, hi): (u64, u64)) -> u64 {
    if hi <= lo {
        return 0;
    }
    let span = hi - lo;
    let v = value.clamp(lo, hi) - lo;
    (2 * v * EXTENDED_MAX + span) / (2 * span)
}

/// Inverse of [`scale`], rounding to the nearest integer.
pub fn unscale(scaled: u64, (lo, hi): (u64, u64)) -> u64 {
    if hi <= lo {
        return lo;
    }
    let span = hi - lo;
    lo + (2 * scaled.min(EXTENDED_MAX) * span + EXTENDED_MAX) / (2 * EXTENDED_MAX)
}

/// Encode every series against a shared range, e.g. `e:AA..,Ag..`.
pub fn encode_extended(series: &[Vec<u64>], range: (u64, u64)) -> String {
    let encoded: Vec<String> = series
        .iter()
        .map(|s| {
            s.iter()
                .flat_map(|v| {
                    let scaled = scale(*v, range) as usize;
                    [ALPHABET[scaled / 64] as char, ALPHABET[scaled % 64] as char]
                })
                .collect()
        })
        .collect();
    format!("e:{}", encoded.join(","))
}

/// Parse a `chd` value produced by [`encode_extended`] back into scaled values.
pub fn decode_extended(chd: &str) -> Result<Vec<Vec<u64>>> {
    let body = chd
        .strip_prefix("e:")
        .ok_or_else(|| anyhow!("not extended encoding: {chd}"))?;
    body.split(',')
        .map(|s| -> Result<Vec<u64>> {
            let bytes = s.as_bytes();
            if bytes.len() % 2 != 0 {
                bail!("odd-length series {s:?}");
            }
            bytes
                .chunks(2)
                .map(|pair| -> Result<u64> { Ok(symbol(pair[0])? * 64 + symbol(pair[1])?) })
                .collect()
        })
        .collect()
}

fn symbol(c: u8) -> Result<u64> {
    ALPHABET
        .iter()
        .position(|a| *a == c)
        .map(|p| p as u64)
        .ok_or_else(|| anyhow!("invalid extended-encoding symbol {:?}", c as char))
}
