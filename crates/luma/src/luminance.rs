use crate::Color;

// sRGB transfer function as used by WCAG 2.x; note the 0.03928 breakpoint
// rather than the 0.04045 of IEC 61966-2-1.
const BREAKPOINT: f64 = 0.03928;
const LINEAR_SCALE: f64 = 12.92;
const OFFSET: f64 = 0.055;
const OFFSET_SCALE: f64 = 1.055;
const GAMMA: f64 = 2.4;

// ITU-R BT.709 luma weights
const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;

/// Converts one gamma-encoded sRGB channel to linear light.
#[inline]
pub fn gamma_expand(c: f64) -> f64 {
    if c <= BREAKPOINT {
        c / LINEAR_SCALE
    } else {
        ((c + OFFSET) / OFFSET_SCALE).powf(GAMMA)
    }
}

/// Relative luminance of `color`, in `[0.0, 1.0]` for in-range channels.
///
/// Alpha is ignored. Channels outside `[0.0, 1.0]` are not rejected and
/// simply produce a luminance outside that range.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let r = gamma_expand(color.r);
    let g = gamma_expand(color.g);
    let b = gamma_expand(color.b);

    RED_WEIGHT * r + GREEN_WEIGHT * g + BLUE_WEIGHT * b
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn black_is_exactly_zero() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
    }

    #[test]
    fn white_is_one() {
        assert!((relative_luminance(Color::WHITE) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn primaries_match_their_weights() {
        let red = relative_luminance(Color::rgb(1.0, 0.0, 0.0));
        let green = relative_luminance(Color::rgb(0.0, 1.0, 0.0));
        let blue = relative_luminance(Color::rgb(0.0, 0.0, 1.0));

        assert!((red - 0.2126).abs() < EPSILON);
        assert!((green - 0.7152).abs() < EPSILON);
        assert!((blue - 0.0722).abs() < EPSILON);
    }

    #[test]
    fn alpha_is_ignored() {
        let opaque = Color::rgb(0.2, 0.4, 0.6);
        let clear = opaque.with_alpha(0.0);
        assert_eq!(relative_luminance(opaque), relative_luminance(clear));
    }

    #[test]
    fn linear_segment_below_breakpoint() {
        assert_eq!(gamma_expand(0.03928), 0.03928 / 12.92);
        assert_eq!(gamma_expand(0.02), 0.02 / 12.92);
    }

    #[test]
    fn step_at_breakpoint_is_below_one_millionth() {
        let below = gamma_expand(0.03928);
        let above = gamma_expand(f64::from_bits(0.03928f64.to_bits() + 1));
        assert!((below - above).abs() < 1e-6);
    }

    #[test]
    fn mid_gray_known_value() {
        // ((0.5 + 0.055) / 1.055)^2.4
        let expected = 0.214_041_140_482_232_5;
        let gray = relative_luminance(Color::rgb(0.5, 0.5, 0.5));
        assert!((gray - expected).abs() < 1e-6, "{gray}");
    }

    #[test]
    fn out_of_range_input_is_not_rejected() {
        let bright = relative_luminance(Color::rgb(2.0, 2.0, 2.0));
        assert!(bright > 1.0);
        let negative = relative_luminance(Color::rgb(-1.0, -1.0, -1.0));
        assert!(negative < 0.0);
    }

    fn channel() -> impl Strategy<Value = f64> {
        0.0_f64..=1.0
    }

    proptest! {
        #[test]
        fn stays_within_unit_range(r in channel(), g in channel(), b in channel()) {
            let l = relative_luminance(Color::rgb(r, g, b));
            prop_assert!(l >= 0.0, "{l}");
            prop_assert!(l <= 1.0 + EPSILON, "{l}");
        }

        #[test]
        fn monotonic_in_each_channel(
            x1 in channel(),
            x2 in channel(),
            a in channel(),
            b in channel(),
        ) {
            let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
            // tolerance covers the step where the two segments meet
            let tolerance = 1e-6;

            let pairs = [
                (Color::rgb(lo, a, b), Color::rgb(hi, a, b)),
                (Color::rgb(a, lo, b), Color::rgb(a, hi, b)),
                (Color::rgb(a, b, lo), Color::rgb(a, b, hi)),
            ];
            for (darker, lighter) in pairs {
                prop_assert!(
                    relative_luminance(lighter) + tolerance >= relative_luminance(darker),
                    "{darker:?} vs {lighter:?}"
                );
            }
        }

        #[test]
        fn repeated_calls_agree(r in channel(), g in channel(), b in channel()) {
            let color = Color::rgb(r, g, b);
            let first = relative_luminance(color);
            for _ in 0..8 {
                prop_assert_eq!(relative_luminance(color).to_bits(), first.to_bits());
            }
        }
    }
}
