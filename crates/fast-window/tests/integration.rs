//! Integration tests for the public API.
//!
//! Typical usage through the prelude: views, apply over one and several
//! inputs, builder configurations and the helpers.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

mod common;

use common::{assert_series_eq, bits_eq, generate_series, init_logging};
use fast_window::prelude::*;

const EPSILON: f64 = 1e-10;

fn sum(w: &[&[f64]]) -> f64 {
    w[0].iter().sum()
}

// ==================== Views ====================

#[test]
fn test_rolling_materialized_matrix() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    let windows = rolling(&data, 2, false, true).unwrap();
    assert!(windows.is_materialized());
    let rows: Vec<Vec<f64>> = windows.map(|w| w.into_owned()).collect();
    assert_eq!(rows.len(), 5);
    assert!(rows[0][0].is_nan());
    assert_eq!(rows[0][1], 1.0);
    assert_eq!(&rows[1..], &[vec![1.0, 2.0], vec![2.0, 3.0], vec![3.0, 4.0], vec![4.0, 5.0]]);
}

#[test]
fn test_rolling_matrix_matches_stream() {
    let data = generate_series(40);
    let flat = rolling_matrix(&data, 7).unwrap();
    let rows: Vec<f64> = rolling(&data, 7, false, false)
        .unwrap()
        .flat_map(|w| w.into_owned())
        .collect();
    assert!(bits_eq(&flat, &rows));
}

#[test]
fn test_window_counts() {
    let data = generate_series(30);
    assert_eq!(rolling(&data, 5, true, false).unwrap().len(), 26);
    assert_eq!(rolling(&data, 5, false, false).unwrap().len(), 30);
    assert_eq!(expanding(&data, 5, true, false).unwrap().len(), 26);
    assert_eq!(expanding(&data, 5, false, true).unwrap().len(), 30);
}

#[test]
fn test_full_windows_are_borrowed() {
    let data = [1.0_f64, 2.0, 3.0];
    for w in rolling(&data, 2, false, false).unwrap().skip(1) {
        assert!(matches!(w, std::borrow::Cow::Borrowed(_)));
    }
}

// ==================== Apply ====================

#[test]
fn test_rolling_apply_sum() {
    init_logging();
    let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let out = rolling_apply(&[&data], 2, Parallelism::Sequential, sum).unwrap();
    assert_series_eq(&out, &[f64::NAN, 3.0, 5.0, 7.0, 9.0], EPSILON);
}

#[test]
fn test_expanding_apply_sum() {
    let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let out = expanding_apply(&[&data], 2, Parallelism::Sequential, sum).unwrap();
    assert_series_eq(&out, &[f64::NAN, 3.0, 6.0, 10.0, 15.0], EPSILON);
}

#[test]
fn test_two_input_apply_with_captured_argument() {
    let a = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let b = vec![1.5, 2.5, 3.5, 4.5, 5.5];
    let k = -1.0;
    let func = |w: &[&[f64]]| {
        let max = w[1].iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (w[0].iter().sum::<f64>() + max) * k
    };

    let rolled = rolling_apply(&[&a, &b], 2, Parallelism::Workers(2), func).unwrap();
    assert_series_eq(&rolled, &[f64::NAN, -5.5, -8.5, -11.5, -14.5], EPSILON);

    let expanded = expanding_apply(&[&a, &b], 2, Parallelism::Available, func).unwrap();
    assert_series_eq(&expanded, &[f64::NAN, -5.5, -9.5, -14.5, -20.5], EPSILON);
}

#[test]
fn test_parallel_is_bit_identical_to_sequential() {
    init_logging();
    let data = generate_series(2_000);
    let func = |w: &[&[f64]]| {
        let mean = w[0].iter().sum::<f64>() / w[0].len() as f64;
        (w[0].iter().map(|x| (x - mean).powi(2)).sum::<f64>() / w[0].len() as f64).sqrt()
    };

    let seq = rolling_apply(&[&data], 50, Parallelism::Sequential, func).unwrap();
    for parallelism in [Parallelism::Workers(3), Parallelism::Workers(8), Parallelism::Available] {
        let par = rolling_apply(&[&data], 50, parallelism, func).unwrap();
        assert!(bits_eq(&seq, &par), "{parallelism:?} differs");
    }

    let seq = expanding_apply(&[&data], 10, Parallelism::Sequential, func).unwrap();
    let par = expanding_apply(&[&data], 10, Parallelism::Workers(4), func).unwrap();
    assert!(bits_eq(&seq, &par));
}

#[test]
fn test_apply_with_injected_pool() {
    let pool = fast_window::dispatch::ThreadPoolMap::new(2).unwrap();
    let data = generate_series(100);
    let direct = rolling_apply(&[&data], 10, Parallelism::Sequential, sum).unwrap();
    let injected = rolling_apply_with(&[&data], 10, &pool, sum).unwrap();
    let again = expanding_apply_with(&[&data], 10, &pool, sum).unwrap();
    assert!(bits_eq(&direct, &injected));
    assert_eq!(again.len(), 100);
}

#[test]
fn test_user_function_error_reports_position() {
    let data = generate_series(100);
    let result = try_rolling_apply(&[&data], 5, Parallelism::Workers(4), |w: &[&[f64]]| {
        if w[0][4] == data[70] {
            Err(format!("rejected {}", w[0][4]))
        } else {
            Ok(w[0][4])
        }
    });
    match result {
        Err(Error::UserFunction { position, message }) => {
            assert_eq!(position, 70);
            assert!(message.starts_with("rejected"));
        }
        other => panic!("expected UserFunction error, got {other:?}"),
    }
}

#[test]
fn test_builder_configurations() {
    let data = generate_series(64);
    let rolling_cfg = RollingApply::new(8).parallelism(Parallelism::Workers(2));
    let out = rolling_cfg.run(&[&data], sum).unwrap();
    assert_eq!(count_nan_prefix(&out), rolling_cfg.lookback());
    assert_eq!(drop_na(&out).len(), data.len() - rolling_cfg.lookback());

    let expanding_cfg = ExpandingApply::default().min_periods(4);
    let out = expanding_cfg.run(&[&data], sum).unwrap();
    assert_eq!(count_nan_prefix(&out), 3);
}

#[test]
fn test_f32_inputs() {
    let data: Vec<f32> = (1..=6).map(|i| i as f32).collect();
    let out = rolling_apply(&[&data], 3, Parallelism::Sequential, |w: &[&[f32]]| {
        w[0].iter().sum::<f32>()
    })
    .unwrap();
    assert!(out[1].is_nan());
    assert_eq!(&out[2..], &[6.0_f32, 9.0, 12.0, 15.0]);
}

#[cfg(feature = "ndarray")]
#[test]
fn test_ndarray_inputs() {
    use ndarray::{s, Array1};

    let a = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let strided = a.slice(s![..;2]).to_owned();
    let view = a.slice(s![..;2]);
    let out = rolling_apply(&[view], 2, Parallelism::Sequential, sum).unwrap();
    assert_series_eq(&out, &[f64::NAN, 4.0, 8.0], EPSILON);
    let out = rolling_apply(&[strided], 2, Parallelism::Sequential, sum).unwrap();
    assert_series_eq(&out, &[f64::NAN, 4.0, 8.0], EPSILON);
}

#[cfg(feature = "ndarray")]
#[test]
fn test_mixed_vec_and_array_inputs() {
    use ndarray::{arr1, s};

    let a = vec![1.0, 2.0, 3.0, 4.0];
    let full = arr1(&[10.0, 0.0, 20.0, 0.0, 30.0, 0.0, 40.0, 0.0]);
    let strided = full.slice(s![..;2]);
    let inputs: [&dyn SeriesInput<f64>; 2] = [&a, &strided];

    let out = rolling_apply(&inputs, 2, Parallelism::Workers(2), |w: &[&[f64]]| {
        w[0][1] + w[1][1]
    })
    .unwrap();
    assert_series_eq(&out, &[f64::NAN, 22.0, 33.0, 44.0], EPSILON);

    let short = arr1(&[1.0, 2.0]);
    let inputs: [&dyn SeriesInput<f64>; 2] = [&a, &short];
    assert!(matches!(
        rolling_apply(&inputs, 2, Parallelism::Sequential, sum),
        Err(Error::LengthMismatch { index: 1, .. })
    ));
}

// ==================== Helpers ====================

#[test]
fn test_expstep_scan_windows() {
    let data = generate_series(200);
    let sizes = expstep_range_rounded(2.0, 100.0, 1.0, 1.5, f64::ceil).unwrap();
    for size in sizes {
        let window = size as usize;
        let out = RollingApply::new(window).run(&[&data], sum).unwrap();
        assert_eq!(out.len(), data.len());
        assert_eq!(count_nan_prefix(&out), window - 1);
    }
}

#[test]
fn test_nan_helpers() {
    let padded = prepend_na(&[1.0, 2.0], 3);
    assert_eq!(padded.len(), 5);
    assert_eq!(count_nan_prefix(&padded), 3);
    assert_eq!(fill_na(&padded, 0.0), vec![0.0, 0.0, 0.0, 1.0, 2.0]);
    assert_eq!(
        fill_not_finite(&[f64::INFINITY, 1.0, f64::NAN], -1.0),
        vec![-1.0, 1.0, -1.0]
    );
    assert!(nans::<f64>(4).iter().all(|x| x.is_nan()));
    assert_eq!(apply_map(&[1.0, 4.0], f64::sqrt), vec![1.0, 2.0]);
    assert_eq!(expstep_range(1.0, 100.0, 1.0, 1.5).unwrap().len(), 10);
}
