//! Sample command implementation
//!
//! Draws points with one of the sampling methods and prints them in the
//! configured output format.

use std::io::{self, BufWriter, Write};

use sampler_core::{resolve, Bounds, SampleMatrix, SamplingMethod, Seed};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{OutputFormat, SamplerConfig};
use crate::Result;

/// JSON document written by `--format json`
#[derive(Debug, Serialize)]
struct SampleReport<'a> {
    method: SamplingMethod,
    seed: Option<u64>,
    bounds: &'a Bounds,
    shape: (usize, usize),
    points: Vec<Vec<f64>>,
}

/// Run the sample command
///
/// `seed` is the raw `--seed` text. When absent, the configured seed is used,
/// and failing that the process default state, whose seed is reported so the
/// run can be repeated.
pub fn run(
    config: &SamplerConfig,
    method: SamplingMethod,
    bounds: &Bounds,
    points: usize,
    seed: Option<&str>,
) -> Result<()> {
    info!("Starting sampling...");
    info!("  Method: {}", method);
    info!("  Bounds: {}", bounds);
    info!("  Points: {}", points);
    info!("  Output format: {}", config.format);

    let seed = if method.is_random() {
        Some(effective_seed(config, seed)?)
    } else {
        None
    };
    if let Some(seed) = seed {
        info!("  Seed: {}", seed);
    }

    let sample = method.sample(bounds, points, Seed::from(seed))?;
    debug!(rows = sample.nrows(), cols = sample.ncols(), "Sample drawn");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match config.format {
        OutputFormat::Table => write_table(&mut out, &sample, config.precision)?,
        OutputFormat::Csv => write_csv(&mut out, &sample, config.precision)?,
        OutputFormat::Json => {
            let report = SampleReport {
                method,
                seed,
                bounds,
                shape: sample.shape(),
                points: sample.to_rows(),
            };
            write_json(&mut out, &report)?;
        }
    }
    out.flush()?;

    info!("Sampling complete");
    Ok(())
}

/// CLI flag, then configuration, then the seed of the default state.
fn effective_seed(config: &SamplerConfig, flag: Option<&str>) -> Result<u64> {
    let parsed = match flag {
        Some(text) => text.parse::<Seed<'static>>()?,
        None => Seed::Unseeded,
    };
    let seed = match parsed {
        Seed::Value(value) => value,
        _ => match config.seed {
            Some(value) => value,
            // The guard is released before sampling resolves its own seed.
            None => resolve(Seed::Unseeded).seed(),
        },
    };
    Ok(seed)
}

fn column_names(ncols: usize) -> Vec<String> {
    (0..ncols).map(|j| format!("x{}", j)).collect()
}

fn rule(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(mid), right)
}

fn table_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!(" {:>w$} ", cell, w = w))
        .collect();
    format!("│{}│", padded.join("│"))
}

fn write_table<W: Write>(out: &mut W, sample: &SampleMatrix, precision: usize) -> io::Result<()> {
    let mut header = vec!["#".to_string()];
    header.extend(column_names(sample.ncols()));

    let body: Vec<Vec<String>> = sample
        .rows()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = vec![i.to_string()];
            cells.extend(row.iter().map(|x| format!("{:.*}", precision, x)));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for cells in &body {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    writeln!(out, "{}", rule(&widths, "┌", "┬", "┐"))?;
    writeln!(out, "{}", table_row(&header, &widths))?;
    writeln!(out, "{}", rule(&widths, "├", "┼", "┤"))?;
    for cells in &body {
        writeln!(out, "{}", table_row(cells, &widths))?;
    }
    writeln!(out, "{}", rule(&widths, "└", "┴", "┘"))
}

fn write_csv<W: Write>(out: W, sample: &SampleMatrix, precision: usize) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(column_names(sample.ncols()))?;
    for row in sample.rows() {
        writer.write_record(row.iter().map(|x| format!("{:.*}", precision, x)))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json<W: Write>(out: &mut W, report: &SampleReport<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;
    use sampler_core::{grid, SamplingError};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>),
    {
        let mut buffer = Vec::new();
        f(&mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let sample = SampleMatrix::from_vec(2, 2, vec![0.0, 3.0, 1.0, 4.0]);
        let text = render(|out| write_table(out, &sample, 2).unwrap());
        let lines: Vec<&str> = text.lines().collect();

        // Top rule, header, separator, two rows, bottom rule.
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("x0") && lines[1].contains("x1"));
        assert!(lines[3].contains("0.00") && lines[3].contains("3.00"));
        assert!(lines[4].contains("1.00") && lines[4].contains("4.00"));
        assert!(lines[5].ends_with('┘'));

        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_csv_output() {
        let sample = grid([(0.0, 1.0), (3.0, 4.0)], 2).unwrap();
        let text = render(|out| write_csv(out, &sample, 1).unwrap());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines, ["x0,x1", "0.0,3.0", "0.0,4.0", "1.0,3.0", "1.0,4.0"]);
    }

    #[test]
    fn test_csv_empty_sample() {
        let sample = SampleMatrix::empty(3);
        let text = render(|out| write_csv(out, &sample, 3).unwrap());
        assert_eq!(text.trim_end(), "x0,x1,x2");
    }

    #[test]
    fn test_json_report() {
        let bounds: Bounds = "0:1,3:4".parse().unwrap();
        let sample = SamplingMethod::Latin.sample(&bounds, 4, 11u64).unwrap();
        let report = SampleReport {
            method: SamplingMethod::Latin,
            seed: Some(11),
            bounds: &bounds,
            shape: sample.shape(),
            points: sample.to_rows(),
        };
        let text = render(|out| write_json(out, &report).unwrap());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["method"], "latin");
        assert_eq!(value["seed"], 11);
        assert_eq!(value["shape"], serde_json::json!([4, 2]));
        assert_eq!(value["points"].as_array().unwrap().len(), 4);
        assert_relative_eq!(
            value["points"][0][0].as_f64().unwrap(),
            sample.get(0, 0).unwrap()
        );
    }

    #[test]
    fn test_effective_seed_priority() {
        let config = SamplerConfig {
            seed: Some(9),
            ..SamplerConfig::default()
        };

        assert_eq!(effective_seed(&config, Some("42")).unwrap(), 42);
        assert_eq!(effective_seed(&config, None).unwrap(), 9);
        assert_eq!(effective_seed(&config, Some("none")).unwrap(), 9);
    }

    #[test]
    fn test_effective_seed_falls_back_to_default_state() {
        let config = SamplerConfig::default();
        let expected = resolve(Seed::Unseeded).seed();
        assert_eq!(effective_seed(&config, None).unwrap(), expected);
    }

    #[test]
    fn test_effective_seed_rejects_text() {
        let config = SamplerConfig::default();
        assert!(matches!(
            effective_seed(&config, Some("foo")),
            Err(CliError::Sampling(SamplingError::InvalidSeed(_)))
        ));
    }
}
