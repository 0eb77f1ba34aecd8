/// Linear interpolation between `a` and `b` at parameter `t`.
///
/// `t` is not clamped; callers that need clamping do it at the call site or go
/// through [`piecewise_linear`].
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Samples a piecewise-linear envelope at `x`.
///
/// `stops` are `(x, y)` pairs with non-decreasing `x`. Outside the covered
/// range the envelope clamps to the first/last `y`; between stops it
/// interpolates linearly. Zero-width segments resolve to the later stop.
/// An empty stop list yields 0.
pub fn piecewise_linear(x: f64, stops: &[(f64, f64)]) -> f64 {
    let Some(&(first_x, first_y)) = stops.first() else {
        return 0.0;
    };
    let &(last_x, last_y) = stops.last().unwrap_or(&(first_x, first_y));
    if x <= first_x {
        return first_y;
    }
    if x >= last_x {
        return last_y;
    }

    // Index of the first stop strictly past x; x lies in [stops[i-1], stops[i]).
    let i = stops.partition_point(|&(sx, _)| sx <= x);
    let (x0, y0) = stops[i - 1];
    let (x1, y1) = stops[i];
    if x1 <= x0 {
        return y1;
    }
    lerp(y0, y1, (x - x0) / (x1 - x0))
}
