// Extra easings in raylib's `ease` signature (t = elapsed, b = start value,
// c = total change, d = duration) so they slot into `ease::Tween` alongside
// the built-in ones.

/// Quintic ease-out, the "ease-out-quint" curve used by the scroll reveal.
pub fn quint_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if d <= 0.0 {
        return b + c;
    }
    let p = (t / d).clamp(0.0, 1.0) - 1.0;
    c * (p * p * p * p * p + 1.0) + b
}

/// The showcase "fade & glide" restore curve: a fast launch with a long
/// settle, normalized so that f(d) lands exactly on b + c.
pub fn glide_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if d <= 0.0 {
        return b + c;
    }
    let x = (t / d).clamp(0.0, 1.0);
    let settle = 1.0 - 2f32.powf(-10.0 * x);
    c * (settle / (1.0 - 2f32.powf(-10.0))) + b
}
