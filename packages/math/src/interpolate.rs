// Linear interpolation between two boost values

/// Value at `elapsed` out of `duration` on the line from `start` to `end`,
/// floored. Clamped to `end` once the duration has passed.
///
/// Upward moves add floor(delta * t / d); downward moves subtract
/// ceil(delta * t / d), so both directions floor the exact value.
pub fn lin_interpolate(start: u32, end: u32, elapsed: u64, duration: u64) -> u32 {
    if duration == 0 || elapsed >= duration {
        return end;
    }

    if end >= start {
        let step = (end - start) as u128 * elapsed as u128 / duration as u128;
        start + step as u32
    } else {
        let step = ((start - end) as u128 * elapsed as u128).div_ceil(duration as u128);
        start - step as u32
    }
}
