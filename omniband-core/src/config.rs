//! Slider configuration.

use serde::{Deserialize, Serialize};

/// A raw bound as supplied by the caller: a number, or a string that is an
/// ISO-like date in date mode (and a plain numeral otherwise).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundInput {
    Number(f64),
    Date(String),
}

impl From<f64> for BoundInput {
    fn from(n: f64) -> Self {
        BoundInput::Number(n)
    }
}

impl From<&str> for BoundInput {
    fn from(s: &str) -> Self {
        BoundInput::Date(s.to_string())
    }
}

/// Slider options. All fields are optional with permissive defaults;
/// normalization happens in [`crate::mapping::Bounds::from_config`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Single-handle mode: only the range's upper bound is adjustable.
    pub is_one_way: bool,
    /// Date mode: bounds are date strings, values are dates.
    pub is_date: bool,
    /// Whether the two handles may occupy the same or crossing positions.
    pub overlap: bool,
    pub min: Option<BoundInput>,
    pub max: Option<BoundInput>,
    pub start: Option<BoundInput>,
    pub end: Option<BoundInput>,
}

impl SliderConfig {
    /// Numeric config over `[min, max]` with the full range selected.
    pub fn numeric(min: f64, max: f64) -> Self {
        Self {
            min: Some(BoundInput::Number(min)),
            max: Some(BoundInput::Number(max)),
            ..Self::default()
        }
    }

    /// Date config over `[min, max]` with the full range selected.
    pub fn dates(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            is_date: true,
            min: Some(BoundInput::Date(min.into())),
            max: Some(BoundInput::Date(max.into())),
            ..Self::default()
        }
    }

    pub fn with_range(mut self, start: impl Into<BoundInput>, end: impl Into<BoundInput>) -> Self {
        self.start = Some(start.into());
        self.end = Some(end.into());
        self
    }

    pub fn with_overlap(mut self, overlap: bool) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn one_way(mut self) -> Self {
        self.is_one_way = true;
        self
    }

    /// Apply one-way preprocessing: a single-handle slider always allows
    /// overlap, keeps only an upper bound (a lone `start` becomes `end`),
    /// and pins the lower bound at the minimum.
    pub fn normalized(mut self) -> Self {
        if self.is_one_way {
            self.overlap = true;
            if self.start.is_some() && self.end.is_none() {
                self.end = self.start.take();
            }
            self.start = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_way_promotes_start_to_end() {
        let config = SliderConfig::numeric(0.0, 10.0)
            .with_overlap(false)
            .one_way();
        let config = SliderConfig {
            start: Some(BoundInput::Number(7.0)),
            ..config
        }
        .normalized();

        assert!(config.overlap);
        assert_eq!(config.start, None);
        assert_eq!(config.end, Some(BoundInput::Number(7.0)));
    }

    #[test]
    fn one_way_keeps_explicit_end() {
        let config = SliderConfig::numeric(0.0, 10.0)
            .with_range(2.0, 8.0)
            .one_way()
            .normalized();
        assert_eq!(config.start, None);
        assert_eq!(config.end, Some(BoundInput::Number(8.0)));
    }

    #[test]
    fn config_deserializes_mixed_bounds() {
        let config: SliderConfig = serde_json::from_str(
            r#"{"is_date": true, "min": "2020-01-01", "max": "2020-06-01", "overlap": true}"#,
        )
        .unwrap();
        assert!(config.is_date);
        assert_eq!(config.min, Some(BoundInput::Date("2020-01-01".into())));
        assert_eq!(config.start, None);

        let config: SliderConfig = serde_json::from_str(r#"{"min": 5, "max": 10}"#).unwrap();
        assert_eq!(config.min, Some(BoundInput::Number(5.0)));
    }
}
