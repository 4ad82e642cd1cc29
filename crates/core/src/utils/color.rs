const FALLBACK_SEED: &str = "aicactus";

/// Derives a stable `rgb(r, g, b)` color from `text`, e.g. for avatar
/// placeholders. Empty text gets the color of a fixed seed.
///
/// The hash works on UTF-16 code units with 32-bit shifts so that the
/// same name produces the same color on every platform the apps run on.
pub fn generate_color(text: &str) -> String {
    let text = if text.is_empty() { FALLBACK_SEED } else { text };

    let mut hash = 0f64;
    for unit in text.encode_utf16() {
        let shifted = to_int32(hash).wrapping_shl(5) as f64;
        hash = f64::from(unit) + (shifted - hash);
    }

    let red = channel(hash);
    let green = channel(hash + 2.0);
    let blue = channel(hash + 4.0);

    format!("rgb({red}, {green}, {blue})")
}

fn channel(seed: f64) -> u32 {
    (((seed.sin() + 1.0) / 2.0) * 256.0).floor() as u32
}

// hash is always integral and well inside i64, truncating through i64
// gives the modulo 2^32 wrap
fn to_int32(value: f64) -> i32 {
    value as i64 as i32
}
