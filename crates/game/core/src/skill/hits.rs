use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How many times an offensive skill strikes.
///
/// Ranges cycle through their values as the user's team keeps casting, so a
/// `2-4` skill hits 2, 3, 4, 2, ... times across successive team skill uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitCount {
    Fixed(u32),
    Cycle { min: u32, max: u32 },
}

impl Default for HitCount {
    fn default() -> Self {
        Self::Fixed(1)
    }
}

impl HitCount {
    /// Parses catalog notation: `""`/`"1"`, `"n"`, `"a-b"` or `"[a,b]"`.
    ///
    /// Anything unreadable falls back to a single hit.
    pub fn parse(spec: &str) -> Self {
        let spec = spec.trim();
        if spec.is_empty() {
            return Self::default();
        }

        if let Some(range) = parse_pair(spec, '-') {
            return range;
        }

        let inner = spec.trim_matches(|c: char| c == '[' || c == ']' || c.is_whitespace());
        if let Some(range) = parse_pair(inner, ',') {
            return range;
        }

        inner.parse().map(Self::Fixed).unwrap_or_default()
    }

    /// Hit count for a team that has cast `uses` skills so far.
    pub fn resolve(self, uses: u32) -> u32 {
        match self {
            Self::Fixed(hits) => hits,
            Self::Cycle { min, max } => {
                let span = u64::from(max - min) + 1;
                let offset = u64::from(uses) % span;
                // offset <= max - min, so the sum stays within u32.
                min + u32::try_from(offset).unwrap_or(max - min)
            }
        }
    }
}

fn parse_pair(spec: &str, separator: char) -> Option<HitCount> {
    let (low, high) = spec.split_once(separator)?;
    let low: u32 = low.trim().parse().ok()?;
    let high: u32 = high.trim().parse().ok()?;
    Some(HitCount::Cycle {
        min: low.min(high),
        max: low.max(high),
    })
}

impl FromStr for HitCount {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for HitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(hits) => write!(f, "{hits}"),
            Self::Cycle { min, max } => write!(f, "{min}-{max}"),
        }
    }
}
