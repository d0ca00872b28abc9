//! Headline metrics shown above the transactions table.

use std::fmt;
use std::str::FromStr;

/// Which way a metric moved since the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    pub const ALL: [TrendDirection; 2] = [TrendDirection::Up, TrendDirection::Down];

    /// Lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
        }
    }

    /// Sign shown in front of the trend percentage.
    pub fn sign(&self) -> char {
        match self {
            TrendDirection::Up => '+',
            TrendDirection::Down => '-',
        }
    }

    pub fn arrow(&self) -> char {
        match self {
            TrendDirection::Up => '▲',
            TrendDirection::Down => '▼',
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendDirection {
    type Err = UnknownTrendDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or_else(|| UnknownTrendDirection(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown trend direction '{0}' (expected up or down)")]
pub struct UnknownTrendDirection(pub String);

/// One KPI card: a label, a preformatted value, and its trend.
///
/// `value` is display text ("$45,231", "3.24%") and is never reformatted.
/// `trend` is a percentage; its sign is carried by `direction`, so only the
/// magnitude is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiMetric {
    label: String,
    value: String,
    trend: f64,
    direction: TrendDirection,
}

impl KpiMetric {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        trend: f64,
        direction: TrendDirection,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            trend,
            direction,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn trend(&self) -> f64 {
        self.trend
    }

    pub fn direction(&self) -> TrendDirection {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_direction_parses_wire_form() {
        assert_eq!("up".parse(), Ok(TrendDirection::Up));
        assert_eq!("down".parse(), Ok(TrendDirection::Down));
        assert_eq!(
            "Up".parse::<TrendDirection>(),
            Err(UnknownTrendDirection("Up".to_string()))
        );
    }

    #[test]
    fn trend_direction_display_round_trips() {
        for direction in TrendDirection::ALL {
            assert_eq!(direction.to_string().parse(), Ok(direction));
        }
    }

    #[test]
    fn sign_and_arrow_follow_direction() {
        assert_eq!(TrendDirection::Up.sign(), '+');
        assert_eq!(TrendDirection::Down.sign(), '-');
        assert_eq!(TrendDirection::Down.arrow(), '▼');
    }
}
