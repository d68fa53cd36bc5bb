use std::str::FromStr;

use ordered_float::NotNan;

/// Direction of a criterion: benefit values are maximized, cost values are
/// minimized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Benefit,
    Cost,
}

impl Kind {
    /// Legacy boundary behavior: anything other than `"benefit"` is treated
    /// as a cost criterion. Unknown kinds are flagged, since they usually
    /// mean a typo in the caller's configuration.
    pub fn parse_lossy(kind: &str) -> Self {
        match kind.parse() {
            Ok(kind) => kind,
            Err(_) => {
                tracing::warn!(kind, "unrecognized criterion kind, defaulting to cost");
                Self::Cost
            }
        }
    }
}

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "benefit" => Ok(Self::Benefit),
            "cost" => Ok(Self::Cost),
            _ => Err(UnknownKind(kind.to_string())),
        }
    }
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("unknown criterion kind {0:?}, expected \"benefit\" or \"cost\"")]
pub struct UnknownKind(String);

/// A weighted axis of comparison. Weights are used as-is; they are not
/// required to sum to 1.
#[derive(Clone, Debug)]
pub struct Criterion {
    pub name: String,
    pub weight: Weight,
    pub kind: Kind,
}

#[derive(Clone, Copy)]
pub struct Weight(NotNan<f64>);

impl Weight {
    pub fn new(value: f64) -> Option<Self> {
        let value = NotNan::new(value).ok()?;
        if value.is_sign_negative() {
            return None;
        }
        Some(Self(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }
}

impl std::fmt::Debug for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn weight_rejects_nan_and_negative() {
        assert!(Weight::new(f64::NAN).is_none());
        assert!(Weight::new(-1.0).is_none());
        assert_eq!(Weight::new(0.0).map(|w| w.as_f64()), Some(0.0));
        assert_eq!(Weight::new(2.5).map(|w| w.as_f64()), Some(2.5));
    }

    #[test]
    fn kind_parsing() {
        assert_eq!("benefit".parse::<Kind>().ok(), Some(Kind::Benefit));
        assert_eq!("cost".parse::<Kind>().ok(), Some(Kind::Cost));
        assert!("profit".parse::<Kind>().is_err());
        assert!("Benefit".parse::<Kind>().is_err());
    }

    #[test]
    fn lossy_parsing_defaults_to_cost() {
        assert_eq!(Kind::parse_lossy("benefit"), Kind::Benefit);
        assert_eq!(Kind::parse_lossy("cost"), Kind::Cost);
        assert_eq!(Kind::parse_lossy("profit"), Kind::Cost);
        assert_eq!(Kind::parse_lossy(""), Kind::Cost);
    }
}
