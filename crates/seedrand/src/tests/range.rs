// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::RandomError;
use crate::lcg::Lcg32;
use crate::range::{int, int_with_step, number, number_with_step};
use crate::support::test_utils::{CountingSource, ScriptedSource};

#[test]
fn test_number_scales_draw() {
    let mut source = ScriptedSource::new(&[0.0, 0.5, 0.75]);

    assert_eq!(number(&mut source, 10.0, 20.0), Ok(10.0));
    assert_eq!(number(&mut source, 10.0, 20.0), Ok(15.0));
    assert_eq!(number(&mut source, -4.0, 4.0), Ok(2.0));
}

#[test]
fn test_number_stays_below_hi() {
    let mut rng = Lcg32::from_number(12345);

    for _ in 0..1000 {
        let value = number(&mut rng, -3.5, 7.25).expect("Failed to number(..)");
        assert!((-3.5..7.25).contains(&value), "number() produced {value}");
    }
}

#[test]
fn test_number_rejects_misordered_or_equal_bounds() {
    let mut source = ScriptedSource::new(&[0.5]);

    assert_eq!(number(&mut source, 5.0, 5.0), Err(RandomError::InvalidBounds));
    assert_eq!(number(&mut source, 6.0, 5.0), Err(RandomError::InvalidBounds));
    assert_eq!(
        number(&mut source, f64::NEG_INFINITY, 5.0),
        Err(RandomError::InvalidBounds)
    );
}

#[test]
fn test_number_rejects_nan() {
    let mut source = ScriptedSource::new(&[0.5]);

    assert_eq!(number(&mut source, f64::NAN, 5.0), Err(RandomError::NotANumber));
    assert_eq!(number(&mut source, 0.0, f64::NAN), Err(RandomError::NotANumber));
}

#[test]
fn test_number_with_step_quantizes() {
    let mut source = ScriptedSource::new(&[0.0, 0.3, 0.99]);

    // maxN = 4, so N = floor(u * 5)
    assert_eq!(number_with_step(&mut source, 0.0, 1.0, 0.25), Ok(0.0));
    assert_eq!(number_with_step(&mut source, 0.0, 1.0, 0.25), Ok(0.25));
    assert_eq!(number_with_step(&mut source, 0.0, 1.0, 0.25), Ok(1.0));
}

#[test]
fn test_number_with_step_reference_sequence() {
    let mut rng = Lcg32::from_number(12345);
    let values: Vec<f64> = (0..5)
        .map(|_| number_with_step(&mut rng, 0.0, 1.0, 0.3).expect("Failed to number_with_step(..)"))
        .collect();

    assert_eq!(values, vec![0.0, 0.0, 0.6, 0.6, 3.0 * 0.3]);
}

// Known asymmetry: 17 * 0.1 overshoots 1.7 in floating point, so the top
// bucket is clamped back to `hi`.
#[test]
fn test_number_with_step_clamps_top_bucket_to_hi() {
    let mut source = ScriptedSource::new(&[0.999]);

    assert!(17.0 * 0.1 > 1.7);
    assert_eq!(number_with_step(&mut source, 0.0, 1.7, 0.1), Ok(1.7));
}

// Known asymmetry: with hi - lo = 1.0 and step = 0.3 the top candidate 0.9
// sits 0.1 below hi, yet it is drawn as often as any interior candidate.
#[test]
fn test_number_with_step_top_bucket_is_drawn_uniformly() {
    let mut rng = Lcg32::from_number(7);
    let mut counts = [0usize; 4];

    for _ in 0..4000 {
        let value = number_with_step(&mut rng, 0.0, 1.0, 0.3).expect("Failed to number_with_step(..)");
        counts[(value / 0.3).round() as usize] += 1;
    }

    for count in counts {
        assert!((800..1200).contains(&count), "bucket counts {counts:?}");
    }
}

#[test]
fn test_number_with_step_rejects_bad_step() {
    let mut source = ScriptedSource::new(&[0.5]);

    assert_eq!(
        number_with_step(&mut source, 0.0, 1.0, 0.0),
        Err(RandomError::InvalidStep)
    );
    assert_eq!(
        number_with_step(&mut source, 0.0, 1.0, -0.5),
        Err(RandomError::InvalidStep)
    );
    assert_eq!(
        number_with_step(&mut source, 0.0, 1.0, f64::INFINITY),
        Err(RandomError::InvalidStep)
    );
    assert_eq!(
        number_with_step(&mut source, 0.0, 1.0, f64::NAN),
        Err(RandomError::NotANumber)
    );
}

#[test]
fn test_int_is_inclusive() {
    let mut source = ScriptedSource::new(&[0.0, 0.999_999]);

    assert_eq!(int(&mut source, 1, 6), Ok(1));
    assert_eq!(int(&mut source, 1, 6), Ok(6));
}

#[test]
fn test_int_reference_sequence() {
    let mut rng = Lcg32::from_number(12345);
    let rolls: Vec<i64> = (0..10)
        .map(|_| int(&mut rng, 1, 6).expect("Failed to int(..)"))
        .collect();

    assert_eq!(rolls, vec![1, 1, 4, 4, 6, 1, 3, 4, 4, 5]);
}

#[test]
fn test_int_equal_bounds() {
    let mut source = ScriptedSource::new(&[0.7]);

    assert_eq!(int(&mut source, -3, -3), Ok(-3));
}

#[test]
fn test_int_rejects_misordered_bounds() {
    let mut source = ScriptedSource::new(&[0.5]);

    assert_eq!(int(&mut source, 2, 1), Err(RandomError::InvalidBounds));
}

#[test]
fn test_int_full_i64_range_stays_in_bounds() {
    let mut source = ScriptedSource::new(&[0.0, 0.999_999_999_999]);

    assert_eq!(int(&mut source, i64::MIN, i64::MAX), Ok(i64::MIN));

    let high = int(&mut source, i64::MIN, i64::MAX).expect("Failed to int(..)");
    assert!(high > 0);
}

#[test]
fn test_int_with_step_reference_sequence() {
    let mut rng = Lcg32::from_number(12345);
    let values: Vec<i64> = (0..5)
        .map(|_| int_with_step(&mut rng, 0, 100, 10).expect("Failed to int_with_step(..)"))
        .collect();

    assert_eq!(values, vec![0, 0, 50, 60, 100]);
}

#[test]
fn test_int_with_step_never_exceeds_hi() {
    let mut rng = Lcg32::from_number(3);

    for _ in 0..1000 {
        let value = int_with_step(&mut rng, -10, 10, 3).expect("Failed to int_with_step(..)");
        assert!((-10..=10).contains(&value));
        assert_eq!((value + 10) % 3, 0);
    }
}

#[test]
fn test_int_with_step_rejects_bad_step() {
    let mut source = ScriptedSource::new(&[0.5]);

    assert_eq!(int_with_step(&mut source, 0, 10, 0), Err(RandomError::InvalidStep));
    assert_eq!(int_with_step(&mut source, 0, 10, -2), Err(RandomError::InvalidStep));
    assert_eq!(int_with_step(&mut source, 10, 0, 2), Err(RandomError::InvalidBounds));
}

#[test]
fn test_rejected_calls_do_not_draw() {
    let mut source = CountingSource::new(Lcg32::from_number(1));

    let _ = number(&mut source, 1.0, 0.0);
    let _ = number_with_step(&mut source, 0.0, 1.0, 0.0);
    let _ = int(&mut source, 5, 4);
    let _ = int_with_step(&mut source, 0, 4, -1);

    assert_eq!(source.draws(), 0);
    assert_eq!(source.into_inner().state(), 1);
}

#[test]
fn test_number_rejects_overflowing_span() {
    let mut source = CountingSource::new(ScriptedSource::new(&[0.5, 0.0]));

    assert_eq!(
        number(&mut source, -f64::MAX, f64::MAX),
        Err(RandomError::RangeTooWide)
    );
    assert_eq!(
        number_with_step(&mut source, -f64::MAX, f64::MAX, 1.0),
        Err(RandomError::RangeTooWide)
    );
    assert_eq!(source.draws(), 0);
}

#[test]
fn test_number_with_step_rejects_overflowing_step_count() {
    let mut source = CountingSource::new(ScriptedSource::new(&[0.0]));

    assert_eq!(
        number_with_step(&mut source, 0.0, 1e10, 1e-300),
        Err(RandomError::RangeTooWide)
    );
    assert_eq!(source.draws(), 0);
}

#[test]
fn test_number_accepts_widest_finite_span() {
    let mut source = ScriptedSource::new(&[0.0, 0.5]);

    assert_eq!(number(&mut source, -f64::MAX / 2.0, f64::MAX / 2.0), Ok(-f64::MAX / 2.0));
    assert_eq!(number(&mut source, -f64::MAX / 2.0, f64::MAX / 2.0), Ok(0.0));
}

// Known rounding: a span of one ulp can round up to `hi`.
#[test]
fn test_number_tiny_span_may_round_to_hi() {
    let hi = 1.0 + f64::EPSILON;
    let mut source = ScriptedSource::new(&[0.75]);

    assert_eq!(number(&mut source, 1.0, hi), Ok(hi));
}
