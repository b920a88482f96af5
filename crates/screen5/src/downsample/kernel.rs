//! Error scatter kernel definition.

/// An error diffusion kernel.
///
/// Each entry gives an offset (dx, dy) from the current pixel and the
/// numerator of the share of quantization error it receives. The share is
/// `weight / divisor`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries, applied in order.
    pub entries: &'static [(i32, i32, u8)],

    /// Common denominator of all weights.
    pub divisor: u8,
}

impl Kernel {
    /// Share of the error sent through entry `(.., weight)`.
    #[inline]
    pub fn share(&self, weight: u8) -> f64 {
        weight as f64 / self.divisor as f64
    }

    /// Sum of all weights over the divisor.
    pub fn propagation(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, _, weight)| self.share(weight))
            .sum()
    }
}

/// Error scatter table used by the downsampler.
///
/// Looks like Floyd-Steinberg but sends both the 3/16 and the 5/16 share to
/// the bottom-left neighbor and nothing straight down:
///
/// ```text
///          X    7
///   3+5    .    1
/// ```
///
/// Existing SC5/SR5 files were produced with this table, so it is kept as is.
pub const SCATTER_KERNEL: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (-1, 1, 5), // bottom-left, again
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_kernel_propagates_all_error() {
        assert_eq!(SCATTER_KERNEL.propagation(), 1.0);
    }

    #[test]
    fn test_scatter_kernel_never_reaches_back() {
        for &(dx, dy, _) in SCATTER_KERNEL.entries {
            assert!(dy > 0 || (dy == 0 && dx > 0), "({dx}, {dy}) already visited");
        }
    }

    #[test]
    fn test_scatter_kernel_skips_straight_down() {
        assert!(!SCATTER_KERNEL
            .entries
            .iter()
            .any(|&(dx, dy, _)| dx == 0 && dy == 1));
        let bottom_left: u8 = SCATTER_KERNEL
            .entries
            .iter()
            .filter(|&&(dx, dy, _)| dx == -1 && dy == 1)
            .map(|&(_, _, w)| w)
            .sum();
        assert_eq!(bottom_left, 8);
    }
}
