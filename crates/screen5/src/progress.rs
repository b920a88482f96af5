//! Progress reporting side channel.
//!
//! Stages report the fraction of rows processed and announce themselves with
//! a message when they start. Reporting never affects control flow.

/// Receiver of progress updates.
///
/// Implemented for closures taking `(fraction, message)`, so a caller can
/// pass `&mut |f, m| ...` directly.
pub trait Progress {
    /// Report completion of the current stage in `0.0..=1.0`, optionally
    /// naming the stage that just started.
    fn report_progress(&mut self, fraction: f64, message: Option<&str>);

    /// Announce a new stage.
    fn stage(&mut self, message: &str) {
        self.report_progress(0.0, Some(message));
    }
}

/// Discards all updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    #[inline]
    fn report_progress(&mut self, _fraction: f64, _message: Option<&str>) {}
}

impl<F> Progress for F
where
    F: FnMut(f64, Option<&str>),
{
    fn report_progress(&mut self, fraction: f64, message: Option<&str>) {
        self(fraction, message)
    }
}

/// Fraction of rows done after finishing row `y`.
#[inline]
pub(crate) fn row_fraction(y: usize, height: usize) -> f64 {
    if height == 0 {
        1.0
    } else {
        (y + 1) as f64 / height as f64
    }
}
