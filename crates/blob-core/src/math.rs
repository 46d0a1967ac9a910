/// Linearly remap `v` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Values outside the input range extrapolate; callers that need clamping
/// clamp themselves.
#[inline]
pub fn map_range(v: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (v - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}
