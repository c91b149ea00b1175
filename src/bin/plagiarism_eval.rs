use std::env;

use anyhow::{anyhow, Context, Result};

fn main() {
    if let Err(e) = parse_args().and_then(|(threshold, seed)| {
        picrete_plagiarism::run_evaluation(threshold, seed)
    }) {
        eprintln!("plagiarism_eval fatal: {e:#}");
        std::process::exit(1);
    }
}

fn parse_args() -> Result<(f64, u64)> {
    let mut threshold = match env::var("PLAGIARISM_EVAL_THRESHOLD") {
        Ok(raw) => parse_threshold(&raw)?,
        Err(_) => picrete_plagiarism::DEFAULT_EVAL_THRESHOLD,
    };
    let mut seed = 42;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--threshold" => {
                let raw = args.next().ok_or_else(|| anyhow!("--threshold missing value"))?;
                threshold = parse_threshold(&raw)?;
            }
            "--seed" => {
                let raw = args.next().ok_or_else(|| anyhow!("--seed missing value"))?;
                seed = raw.parse().with_context(|| format!("Invalid seed: {raw}"))?;
            }
            _ => return Err(anyhow!("Unknown argument: {arg}")),
        }
    }

    Ok((threshold, seed))
}

fn parse_threshold(raw: &str) -> Result<f64> {
    raw.trim().parse().with_context(|| format!("Invalid threshold: {raw}"))
}
