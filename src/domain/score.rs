use std::fmt;

/// Normalized competition score, held as integer hundredths (0..=100).
///
/// Scores live in [0, 1] rounded to two decimals, so hundredths carry the
/// full information while giving `Eq`/`Ord`/`Hash` for free. That lets
/// per-glider score collections be plain ordered sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u32);

impl Score {
    pub const ZERO: Score = Score(0);

    /// Rescale `points` relative to a competition's minimum and spread.
    /// A zero spread maps every glider to 0.
    pub fn from_ratio(points: i64, min: i64, range: i64) -> Self {
        if range <= 0 {
            return Score::ZERO;
        }
        let ratio = (points - min) as f64 / range as f64;
        Score((ratio * 100.0).round() as u32)
    }

    pub fn hundredths(&self) -> u32 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}.0", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}", whole, frac)
        }
    }
}
