use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use ndarray::Array1;

use crate::errors;
use crate::store;

const BAR_WIDTH: usize = 60;

/// Gaussian fitted to one file's bucketed scores.
#[derive(Debug)]
pub struct GaussianFit {
    pub mean: f64,
    pub std_dev: f64,
    pub samples: usize,
}

/// Read one score file, bucket its positive scores and print a terminal
/// histogram with the fitted Gaussian density alongside each bar.
pub fn run(file: &Path, granularity: u32) -> Result<()> {
    let content =
        fs::read_to_string(file).with_context(|| errors::store_context("read", file))?;

    let buckets = bucket_scores(&store::parse_scores(&content), granularity);
    if buckets.is_empty() {
        anyhow::bail!("No positive scores in {}", file.display());
    }

    let fit = fit_gaussian(&buckets);
    render_histogram(&count_buckets(&buckets), &fit);
    println!(
        "{}",
        format!(
            "Gaussian fit: mu = {:.2}, std = {:.2} ({} samples)",
            fit.mean, fit.std_dev, fit.samples
        )
        .bold()
    );
    Ok(())
}

/// Scores scaled to hundredths and floored to the bucket granularity.
/// Zero scores are dropped: 0.0 mostly means "finished last", which swamps
/// the distribution.
fn bucket_scores(scores: &[f64], granularity: u32) -> Vec<i64> {
    scores
        .iter()
        .filter(|score| **score > 0.0)
        .map(|score| floor_to(score * 100.0, granularity))
        .collect()
}

fn floor_to(value: f64, granularity: u32) -> i64 {
    let g = f64::from(granularity.max(1));
    (value - value.rem_euclid(g)) as i64
}

/// Population mean and standard deviation over the bucketed values.
fn fit_gaussian(buckets: &[i64]) -> GaussianFit {
    let values = Array1::from_iter(buckets.iter().map(|&b| b as f64));
    let mean = values.mean().unwrap_or(0.0);
    let std_dev = values.std(0.0);

    GaussianFit {
        mean,
        std_dev,
        samples: buckets.len(),
    }
}

fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return 0.0;
    }
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * std::f64::consts::PI).sqrt())
}

fn count_buckets(buckets: &[i64]) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for &bucket in buckets {
        *counts.entry(bucket).or_insert(0) += 1;
    }
    counts
}

fn render_histogram(counts: &BTreeMap<i64, usize>, fit: &GaussianFit) {
    let max_count = counts.values().copied().max().unwrap_or(1);

    for (&bucket, &count) in counts {
        let bar = "#".repeat(count * BAR_WIDTH / max_count);
        let density = normal_pdf(bucket as f64, fit.mean, fit.std_dev);
        println!(
            "{:>5.2} | {:<width$} {:.4}",
            bucket as f64 / 100.0,
            bar.green(),
            density,
            width = BAR_WIDTH
        );
    }
}
