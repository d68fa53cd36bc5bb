use saw_model::{DecisionModel, Kind, Weight};
use std::{io::stdin, time::Instant};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // One record per line:
    //   criterion,<name>,<weight>,<kind>
    //   alternative,<name>,<v1>,<v2>,...
    let mut model = DecisionModel::default();
    for line in stdin().lines() {
        let line = line.unwrap();
        if line.trim().is_empty() {
            continue;
        }
        let fields = line.split(',').map(str::trim).collect::<Vec<&str>>();
        match fields.as_slice() {
            ["criterion", name, weight, kind] => {
                let weight = weight
                    .parse()
                    .ok()
                    .and_then(Weight::new)
                    .expect("non-negative weight");
                let kind = kind.parse::<Kind>().expect("criterion kind");
                model.add_criterion(*name, weight, kind);
            }
            ["alternative", name, values @ ..] => {
                let values = values
                    .iter()
                    .map(|value| value.parse().expect("alternative value"))
                    .collect();
                model
                    .add_alternative(*name, values)
                    .expect("alternative value count");
            }
            _ => panic!("unrecognized row: {line}"),
        }
    }
    tracing::info!(
        criteria = model.criteria().len(),
        alternatives = model.alternatives().len(),
        "loaded decision matrix"
    );

    let total_runs = 1000;
    let mut total_selection_μs = 0;
    let mut winner = None;
    for _ in 0..total_runs {
        let t0 = Instant::now();
        let best = model
            .calculate_best_alternative()
            .expect("consistent registries");
        total_selection_μs += Instant::now().duration_since(t0).as_micros();
        if let Some(previous) = winner.replace(best) {
            assert_eq!(previous, best, "selection must be stable across runs");
        }
    }

    for alternative in model.alternatives() {
        let score: f64 = alternative
            .normalized()
            .iter()
            .zip(model.criteria())
            .map(|(normalized, criterion)| normalized * criterion.weight.as_f64())
            .sum();
        println!(
            "{}: normalized={:?} score={score:.4}",
            alternative.name,
            alternative.normalized(),
        );
    }
    println!(
        "avg_selection_μs: {}",
        total_selection_μs as f64 / total_runs as f64
    );
    match winner.flatten() {
        Some(index) => println!(
            "best_alternative: {} (index {index})",
            model.alternatives()[index].name
        ),
        None => println!("best_alternative: none"),
    }
}
