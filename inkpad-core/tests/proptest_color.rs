//! Property-based tests for range bookkeeping and color normalization
//!
//! Exercises the scaling and persistence laws with generated ranges and
//! channel values instead of hand-picked cases.

use inkpad::{ColorModeState, ColorSpace, DrawingContext, Instruction, RecordingRenderer};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn last_fill(ctx: &DrawingContext<RecordingRenderer>) -> [f64; 4] {
    match ctx.renderer().last() {
        Some(Instruction::SetFillColor(rgba)) => *rgba,
        other => panic!("expected a fill instruction, got {other:?}"),
    }
}

// Strategy for positive, finite channel maxes
fn max_strategy() -> impl Strategy<Value = f64> {
    (0.5f64..10000.0).prop_filter("finite", |m| m.is_finite())
}

proptest! {
    #[test]
    fn test_scaling_law(
        max in max_strategy(),
        r in 0.0f64..=1.0,
        g in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let mut scaled = DrawingContext::new(RecordingRenderer::new(10, 10));
        scaled.color_mode(ColorSpace::Rgb, &[max]);
        scaled.fill((r * max, g * max, b * max)).unwrap();

        let mut reference = DrawingContext::new(RecordingRenderer::new(10, 10));
        reference.color_mode(ColorSpace::Rgb, &[255.0]);
        reference.fill((r * 255.0, g * 255.0, b * 255.0)).unwrap();

        let a = last_fill(&scaled);
        let e = last_fill(&reference);
        for i in 0..4 {
            prop_assert!((a[i] - e[i]).abs() < EPS, "channel {} differs: {} vs {}", i, a[i], e[i]);
        }
    }

    #[test]
    fn test_ranges_round_trip_exactly(
        max1 in max_strategy(),
        max2 in max_strategy(),
        max3 in max_strategy(),
        max_alpha in max_strategy(),
    ) {
        let mut modes = ColorModeState::new();
        modes.set_mode(ColorSpace::Hsl, &[max1, max2, max3, max_alpha]);
        let configured = modes.ranges();

        modes.set_mode(ColorSpace::Rgb, &[1.0]);
        modes.set_mode(ColorSpace::Hsb, &[]);
        modes.set_mode(ColorSpace::Hsl, &[]);

        prop_assert_eq!(modes.ranges(), configured);
    }

    #[test]
    fn test_hue_wraps_a_full_turn(hue in 0.0f64..360.0) {
        let mut modes = ColorModeState::new();
        modes.set_mode(ColorSpace::Hsb, &[360.0, 100.0, 100.0, 1.0]);

        let base = inkpad::Color::from_channels(&modes, hue, 100.0, 100.0, None).normalized();
        let wrapped = inkpad::Color::from_channels(&modes, hue + 360.0, 100.0, 100.0, None).normalized();

        for i in 0..4 {
            prop_assert!((base[i] - wrapped[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_normalized_channels_stay_in_unit_range(
        v1 in -1000.0f64..1000.0,
        v2 in -1000.0f64..1000.0,
        v3 in -1000.0f64..1000.0,
        alpha in -1000.0f64..1000.0,
        space in 0..3usize,
    ) {
        let mut modes = ColorModeState::new();
        let space = match space {
            0 => ColorSpace::Rgb,
            1 => ColorSpace::Hsb,
            _ => ColorSpace::Hsl,
        };
        modes.set_mode(space, &[]);

        let c = inkpad::Color::from_channels(&modes, v1, v2, v3, Some(alpha)).normalized();
        for channel in c {
            prop_assert!((0.0..=1.0).contains(&channel), "channel {} escaped [0,1]", channel);
        }
    }
}
