use std::io::Write;

use merge_sort::{merge_sort, merge_sort_by, par_merge_sort_by, ParallelConfig};
use rand::Rng;
use serde::Serialize;

use crate::writer::ReportWriter;

pub fn sort_values<W: Write>(
    out: &mut ReportWriter<W>,
    values: &[f64],
    parallel: bool,
    json: bool,
) -> anyhow::Result<()> {
    log::debug!("Sorting {} values (parallel: {parallel})", values.len());
    let sorted = if parallel {
        par_merge_sort_by(values, &ParallelConfig::default(), f64::total_cmp)
    } else {
        merge_sort_by(values, f64::total_cmp)
    };
    if json {
        out.json(&sorted)
    } else {
        out.line(&format!("{sorted:?}"))
    }
}

pub fn run_demo<W: Write>(out: &mut ReportWriter<W>) -> anyhow::Result<()> {
    let cases: [(&str, Vec<i32>); 5] = [
        ("empty array", vec![]),
        ("single element", vec![42]),
        ("already sorted", vec![1, 2, 3, 4, 5]),
        ("descending", vec![5, 4, 3, 2, 1]),
        ("duplicates", vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]),
    ];
    for (name, input) in cases {
        let sorted = merge_sort(&input);
        out.line(&format!("{name}: {input:?} -> {sorted:?}"))?;
    }
    Ok(())
}

pub struct CheckSettings {
    pub len: usize,
    pub max: i64,
    pub runs: usize,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    runs: usize,
    len: usize,
    passed: bool,
}

/// Sorts `settings.runs` random arrays and compares every result with `slice::sort`.
///
/// Fails on the first mismatch.
pub fn check<W: Write>(
    out: &mut ReportWriter<W>,
    rng: &mut impl Rng,
    settings: &CheckSettings,
    json: bool,
) -> anyhow::Result<()> {
    if settings.max <= 0 {
        anyhow::bail!("--max must be positive, got {}", settings.max);
    }
    let mut passed = true;
    for run in 0..settings.runs {
        let input: Vec<i64> = (0..settings.len)
            .map(|_| rng.random_range(0..settings.max))
            .collect();
        let mut expected = input.clone();
        expected.sort();
        if merge_sort(&input) != expected {
            log::error!("Run {run} failed for input {input:?}");
            passed = false;
            break;
        }
        log::info!("Run {run}: {} elements sorted correctly", settings.len);
    }

    if json {
        out.json(&CheckReport {
            runs: settings.runs,
            len: settings.len,
            passed,
        })?;
    } else if passed {
        out.line("Merge Sort works as expected.")?;
    } else {
        out.line("Merge Sort works incorrectly.")?;
    }
    if !passed {
        anyhow::bail!("merge sort disagrees with the standard library sort");
    }
    Ok(())
}
