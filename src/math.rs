//! Numeric helpers that the standard library doesn't quite have.

/// Returns `x` modulo `n`, wrapped into the range `[0, n)` for positive `n`.
///
/// Unlike `%`, negative values of `x` wrap around instead of producing a negative result. For
/// negative `n` the result lies in `(n, 0]`.
///
/// # Panics
/// Panics if `n` is 0.
///
/// # Examples
/// ```
/// # use dawn::math::modulo;
/// assert_eq!(modulo(7, 3), 1);
/// assert_eq!(modulo(-1, 3), 2);
/// assert_eq!(modulo(-6, 3), 0);
/// ```
pub const fn modulo(x: i32, n: i32) -> i32 {
    assert!(n != 0, "attempted to calculate a modulo of zero");

    // Widening keeps x % n + n in range for every input.
    let (x, n) = (x as i64, n as i64);
    ((x % n + n) % n) as i32
}

/// Returns a random float, uniformly distributed in `[0, 1)`, from the thread-local generator.
#[cfg(feature = "rand")]
pub fn rand_float() -> f32 {
    rand::random::<f32>()
}
