//! Integer horizontal shift search between two regions.
//!
//! The search domain is `[0, width(a) / 4)`: images are assumed to be offset
//! in a single, known direction, so negative shifts are not searched even
//! though the kernels can evaluate them. The domain is split into contiguous
//! partitions evaluated independently, then reduced by a linear scan for the
//! lowest activation.

use crate::image::{Image, Region};
#[cfg(feature = "rayon")]
use crate::kernel::rayon::scan_partitioned_par;
use crate::kernel::scalar::scan_partitioned;
#[cfg(not(feature = "simd"))]
use crate::kernel::scalar::SadScalar as Sad;
#[cfg(feature = "simd")]
use crate::kernel::simd::SadSimd as Sad;
use crate::kernel::ShiftWindow;
use crate::trace::{trace_event, trace_span, trace_warn};
use crate::util::{StitchError, StitchResult};

/// Matches scoring below this emit a warning.
pub const DEFAULT_SCORE_THRESHOLD: f32 = 0.8;

/// Number of contiguous partitions of the shift domain.
pub const DEFAULT_WORKERS: usize = 4;

/// Fraction of the reference width searched: shifts lie in `[0, width / DIVISOR)`.
pub const SHIFT_DOMAIN_DIVISOR: usize = 4;

/// Configuration for shift correlation.
#[derive(Clone, Debug)]
pub struct CorrelationConfig {
    /// Scores below this threshold are reported as low confidence.
    pub score_threshold: f32,
    /// Number of partitions the shift domain is split into.
    pub workers: usize,
    /// Evaluate partitions on the rayon pool when the feature is enabled.
    pub parallel: bool,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            workers: DEFAULT_WORKERS,
            parallel: true,
        }
    }
}

/// Best integer shift and its confidence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShiftResult {
    /// Column offset of `b` relative to `a` (positive: content moved left in `b`).
    pub shift: isize,
    /// Confidence in `[0, 1]`; 1 is a perfect match.
    pub score: f32,
}

impl ShiftResult {
    /// Returns true when the score reaches `threshold`.
    pub fn is_confident(&self, threshold: f32) -> bool {
        self.score >= threshold
    }
}

/// Finds the shift of `region_b` inside `region_a` with the lowest activation.
///
/// Fails when a region leaves its image, the region heights differ, `b` is
/// wider than `a`, or `a` is narrower than four columns.
pub fn correlate(
    a: &Image,
    region_a: Region,
    b: &Image,
    region_b: Region,
    cfg: &CorrelationConfig,
) -> StitchResult<ShiftResult> {
    let window = ShiftWindow::new(a, region_a, b, region_b)?;
    let domain_len = window.width_a() / SHIFT_DOMAIN_DIVISOR;
    if domain_len == 0 {
        return Err(StitchError::EmptyShiftDomain {
            width: window.width_a(),
        });
    }

    let _span = trace_span!(
        "correlate",
        width = window.width_a(),
        height = window.height(),
        shifts = domain_len
    )
    .entered();

    let mut activations = vec![0.0f32; domain_len];
    scan(&window, &mut activations, cfg);

    let mut best = 0usize;
    for (idx, value) in activations.iter().enumerate() {
        if *value < activations[best] {
            best = idx;
        }
    }

    let area = (window.width_a() * window.height()) as f32;
    let score = 1.0 - activations[best] / area;
    let result = ShiftResult {
        shift: best as isize,
        score,
    };
    trace_event!("shift_found", shift = result.shift, score = result.score);

    if !result.is_confident(cfg.score_threshold) {
        trace_warn!(
            "correlation between regions of images '{}' and '{}' resulted in a match scoring {}, lower than threshold ({})",
            a.display_name(),
            b.display_name(),
            score,
            cfg.score_threshold
        );
    }

    Ok(result)
}

#[cfg(feature = "rayon")]
fn scan(window: &ShiftWindow<'_>, out: &mut [f32], cfg: &CorrelationConfig) {
    if cfg.parallel {
        scan_partitioned_par::<Sad>(window, 0, out, cfg.workers);
    } else {
        scan_partitioned::<Sad>(window, 0, out, cfg.workers);
    }
}

#[cfg(not(feature = "rayon"))]
fn scan(window: &ShiftWindow<'_>, out: &mut [f32], cfg: &CorrelationConfig) {
    scan_partitioned::<Sad>(window, 0, out, cfg.workers);
}

#[cfg(test)]
mod tests {
    use super::{correlate, CorrelationConfig, ShiftResult};
    use crate::image::{Image, Pixel, Region};
    use crate::util::StitchError;

    fn textured(width: usize, height: usize) -> Image {
        Image::from_fn(width, height, |x, y| {
            let v = (x * 37 + y * 11) ^ (x * x);
            Pixel::rgb(v as u8, (v >> 3) as u8, (x * 7) as u8)
        })
        .unwrap()
    }

    #[test]
    fn identical_images_match_at_zero() {
        let img = textured(64, 5);
        let region = Region::full(&img);
        let res = correlate(&img, region, &img, region, &CorrelationConfig::default()).unwrap();
        assert_eq!(
            res,
            ShiftResult {
                shift: 0,
                score: 1.0,
            }
        );
    }

    #[test]
    fn too_narrow_region_has_no_domain() {
        let img = textured(3, 2);
        let region = Region::full(&img);
        let err = correlate(&img, region, &img, region, &CorrelationConfig::default()).unwrap_err();
        assert_eq!(err, StitchError::EmptyShiftDomain { width: 3 });
    }

    #[test]
    fn confidence_check_uses_threshold() {
        let res = ShiftResult {
            shift: 2,
            score: 0.79,
        };
        assert!(!res.is_confident(0.8));
        assert!(res.is_confident(0.5));
    }

    #[cfg(feature = "tracing")]
    mod warnings {
        use super::super::{correlate, CorrelationConfig};
        use crate::image::{Image, Pixel, Region};
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        impl Captured {
            fn text(&self) -> String {
                String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
            }
        }

        fn correlate_logged(a: &Image, b: &Image) -> (f32, String) {
            let captured = Captured::default();
            let writer = captured.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .with_max_level(tracing::Level::WARN)
                .with_ansi(false)
                .finish();
            let res = tracing::subscriber::with_default(subscriber, || {
                correlate(
                    a,
                    Region::full(a),
                    b,
                    Region::full(b),
                    &CorrelationConfig::default(),
                )
                .unwrap()
            });
            (res.score, captured.text())
        }

        #[test]
        fn low_score_warns_with_both_labels() {
            let a = Image::new(16, 2, Pixel::BLACK).unwrap().with_label("left.png");
            let b = Image::new(16, 2, Pixel::WHITE).unwrap().with_label("right.png");
            let (score, log) = correlate_logged(&a, &b);
            assert!(score < 0.8);
            let warnings: Vec<&str> = log.lines().filter(|l| l.contains("WARN")).collect();
            assert_eq!(warnings.len(), 1, "{log}");
            assert!(warnings[0].contains("'left.png'"), "{log}");
            assert!(warnings[0].contains("'right.png'"), "{log}");
            assert!(warnings[0].contains("threshold (0.8)"), "{log}");
        }

        #[test]
        fn confident_match_is_silent() {
            let a = Image::from_fn(16, 2, |x, _| Pixel::rgb(x as u8 * 9, 0, 0))
                .unwrap()
                .with_label("same.png");
            let (score, log) = correlate_logged(&a, &a);
            assert_eq!(score, 1.0);
            assert!(log.is_empty(), "{log}");
        }
    }
}
