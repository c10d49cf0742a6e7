use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{round_dp, RiskFlag};

/// Z-score at or below which a series is flagged for attention
const WATCH_ZSCORE: f64 = -1.5;
/// Minimum number of points before a trend is flagged
const MIN_TREND_POINTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodPoint {
    pub date: NaiveDate,
    pub mood_index: f64,
}

/// Chronological mood index history for one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodSeries {
    #[serde(default)]
    pub points: Vec<MoodPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub ema7: f64,
    pub ema14: f64,
    pub zscore: f64,
    pub flag: RiskFlag,
}

impl MoodSeries {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.mood_index).collect()
    }

    /// Trend statistics computed locally from the points
    pub fn stats(&self) -> SeriesStats {
        let values = self.values();

        if values.is_empty() {
            return SeriesStats {
                ema7: 0.0,
                ema14: 0.0,
                zscore: 0.0,
                flag: RiskFlag::Safe,
            };
        }

        let zscore = zscore(&values);
        let flag = if values.len() >= MIN_TREND_POINTS && zscore <= WATCH_ZSCORE {
            RiskFlag::Watch
        } else {
            RiskFlag::Safe
        };

        SeriesStats {
            ema7: ema(&values, 7),
            ema14: ema(&values, 14),
            zscore,
            flag,
        }
    }
}

/// Exponential moving average seeded with the first value, alpha = 2/(k+1)
fn ema(values: &[f64], k: u32) -> f64 {
    let Some((first, rest)) = values.split_first() else {
        return 0.0;
    };

    let alpha = 2.0 / (f64::from(k) + 1.0);
    let ema = rest
        .iter()
        .fold(*first, |acc, value| alpha * value + (1.0 - alpha) * acc);

    round_dp(ema, 2)
}

/// Z-score of the last value against the population mean and deviation
fn zscore(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();

    if std == 0.0 {
        return 0.0;
    }

    let last = values[values.len() - 1];
    round_dp((last - mean) / std, 3)
}
