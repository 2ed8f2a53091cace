//! Rolling and Expanding Apply Examples
//!
//! This example computes a rolling spread of two series, an expanding
//! maximum, and scans window sizes picked with `expstep_range_rounded`.
//!
//! Run with: `cargo run --example basic_apply`

use fast_window::apply::{rolling_apply, ExpandingApply, RollingApply};
use fast_window::dispatch::Parallelism;
use fast_window::nan::fill_na;
use fast_window::range::expstep_range_rounded;
use fast_window::window::rolling_lookback;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let close: Vec<f64> = vec![
        44.34, 44.09, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03, 45.61, 46.28,
        46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
    ];
    let open: Vec<f64> = close.iter().map(|c| c - 0.25).collect();

    // mean close minus mean open over 5 rows, on 2 workers
    let spread = rolling_apply(&[&close, &open], 5, Parallelism::Workers(2), |w: &[&[f64]]| {
        let n = w[0].len() as f64;
        (w[0].iter().sum::<f64>() - w[1].iter().sum::<f64>()) / n
    })?;
    println!("5-row spread (first {} values are NaN):", rolling_lookback(5));
    for (i, value) in spread.iter().enumerate().filter(|(_, v)| !v.is_nan()) {
        println!("  [{i}] {value:.4}");
    }
    println!();

    let running_max = ExpandingApply::new(3).run(&[&close], |w: &[&[f64]]| {
        w[0].iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })?;
    println!("Expanding max from 3 rows:");
    println!("  {:?}", fill_na(&running_max, 0.0));
    println!();

    println!("Window scan:");
    for size in expstep_range_rounded(2.0, close.len() as f64, 1.0, 1.5, f64::ceil)? {
        let window = size as usize;
        let last = RollingApply::new(window)
            .run(&[&close], |w: &[&[f64]]| w[0].iter().sum::<f64>() / w[0].len() as f64)?;
        println!("  window {window:>3}: last mean {:.4}", last[last.len() - 1]);
    }

    Ok(())
}
