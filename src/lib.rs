pub mod criteria;

pub use crate::criteria::{Criterion, Kind, Weight};

/// A candidate option holding one raw value per registered criterion, paired
/// positionally with the criteria in registration order.
#[derive(Clone, Debug)]
pub struct Alternative {
    pub name: String,
    values: Vec<f64>,
    normalized: Vec<f64>,
}

impl Alternative {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Normalized values from the most recent scoring call. Empty until the
    /// model has scored at least once; overwritten on every scoring call.
    pub fn normalized(&self) -> &[f64] {
        &self.normalized
    }

    fn normalize(&mut self, max: &[f64], min: &[f64], criteria: &[Criterion]) {
        self.normalized.clear();
        self.normalized
            .extend(self.values.iter().zip(criteria).enumerate().map(
                |(i, (value, criterion))| match criterion.kind {
                    // IEEE-754 division, unguarded: zero extrema or zero raw
                    // values produce non-finite results that flow into
                    // scoring.
                    Kind::Benefit => value / max[i],
                    Kind::Cost => min[i] / value,
                },
            ));
    }
}

/// An alternative whose value count does not match the registered criteria.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("alternative {name:?} has {got} values for {expected} criteria")]
pub struct InvalidAlternative {
    pub name: String,
    pub expected: usize,
    pub got: usize,
}

/// Ordered registries of criteria and alternatives, scored with the
/// [simple additive weighting](https://en.wikipedia.org/wiki/Weighted_sum_model)
/// method. Both registries are append-only for the life of the model.
#[derive(Debug, Default)]
pub struct DecisionModel {
    criteria: Vec<Criterion>,
    alternatives: Vec<Alternative>,
}

impl DecisionModel {
    pub fn add_criterion(&mut self, name: impl Into<String>, weight: Weight, kind: Kind) {
        self.criteria.push(Criterion {
            name: name.into(),
            weight,
            kind,
        });
    }

    /// Register an alternative with one raw value per criterion. The values
    /// are copied in; a count mismatch is rejected before anything is stored.
    pub fn add_alternative(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), InvalidAlternative> {
        let name = name.into();
        if values.len() != self.criteria.len() {
            return Err(InvalidAlternative {
                name,
                expected: self.criteria.len(),
                got: values.len(),
            });
        }
        let normalized = Vec::with_capacity(values.len());
        self.alternatives.push(Alternative {
            name,
            values,
            normalized,
        });
        Ok(())
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Normalize every alternative against the current per-criterion extrema,
    /// then return the index of the alternative with the highest weighted sum
    /// of normalized values. Ties keep the earliest registered alternative.
    /// Returns `Ok(None)` when no alternatives are registered.
    ///
    /// Idempotent: normalization always recomputes from the raw values, so
    /// repeated calls without intervening registration agree.
    pub fn calculate_best_alternative(&mut self) -> Result<Option<usize>, InvalidAlternative> {
        // A criterion registered after an alternative breaks the positional
        // pairing; catch it here instead of reading out of bounds.
        if let Some(alternative) = self
            .alternatives
            .iter()
            .find(|a| a.values.len() != self.criteria.len())
        {
            return Err(InvalidAlternative {
                name: alternative.name.clone(),
                expected: self.criteria.len(),
                got: alternative.values.len(),
            });
        }

        let (max, min) = self.extrema();
        for alternative in &mut self.alternatives {
            alternative.normalize(&max, &min, &self.criteria);
        }

        let mut best_score = -1.0;
        let mut best = None;
        for (index, alternative) in self.alternatives.iter().enumerate() {
            let score: f64 = alternative
                .normalized
                .iter()
                .zip(&self.criteria)
                .map(|(normalized, criterion)| normalized * criterion.weight.as_f64())
                .sum();
            tracing::debug!(name = %alternative.name, score, "scored alternative");
            // Strict comparison: ties keep the earlier index, and a NaN score
            // never displaces the running best.
            if score > best_score {
                best_score = score;
                best = Some(index);
            }
        }
        Ok(best)
    }

    /// Per-criterion `(max, min)` raw values across all alternatives, both
    /// seeded from the first alternative's value.
    fn extrema(&self) -> (Vec<f64>, Vec<f64>) {
        (0..self.criteria.len())
            .map(|i| {
                let mut column = self.alternatives.iter().map(|a| a.values[i]);
                let seed = column.next().unwrap_or(0.0);
                column.fold((seed, seed), |(max, min), value| {
                    (max.max(value), min.min(value))
                })
            })
            .unzip()
    }
}
