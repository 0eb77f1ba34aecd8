use crate::foundation::core::FrameContext;

/// Critically-damped-like spring used for entrance animations.
///
/// The response starts at 0, rises monotonically and saturates toward 1, so a
/// value sampled at a later frame is never smaller than one sampled earlier.
/// Defaults match the conventional motion-design spring (stiffness 100,
/// damping 10, mass 1).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Spring stiffness, must be > 0.
    pub stiffness: f64,
    /// Damping; higher values settle more slowly here.
    pub damping: f64,
    /// Attached mass, must be > 0.
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
        }
    }
}

impl SpringConfig {
    /// Default spring with a replaced damping.
    pub fn with_damping(damping: f64) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }

    /// Spring response in `[0, 1)` after `secs` seconds.
    pub fn value(self, secs: f64) -> f64 {
        let omega = self.stiffness.max(0.0);
        let d = self.damping.max(0.0);
        let m = self.mass.max(1e-6);
        let rate = (omega / (m * (1.0 + d))).max(1e-6);
        let e = (-rate * secs).exp();
        // Critically-damped-like response.
        1.0 - e * (1.0 + rate * secs)
    }

    /// Spring response at the context's frame time.
    pub fn sample(self, ctx: FrameContext) -> f64 {
        self.value(ctx.secs())
    }
}
