use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

/// Inclusive, ascending range of deflate levels given as `N` or `N-M`.
///
/// Levels are produced lazily, a huge range costs nothing until swept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeflateLevels(RangeInclusive<u32>);

impl DeflateLevels {
    pub fn iter(&self) -> RangeInclusive<u32> {
        self.0.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DeflateLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0.start(), self.0.end())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRangeError(String);

impl fmt::Display for LevelRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a range of number. Expected forms like '0-5' or '2'.",
            self.0
        )
    }
}

impl std::error::Error for LevelRangeError {}

fn range_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]+)(?:-([0-9]+))?$").unwrap())
}

impl FromStr for DeflateLevels {
    type Err = LevelRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || LevelRangeError(s.to_string());

        let caps = range_regex().captures(s).ok_or_else(err)?;
        let start: u32 = caps[1].parse().map_err(|_| err())?;
        let end: u32 = match caps.get(2) {
            Some(m) => m.as_str().parse().map_err(|_| err())?,
            None => start,
        };

        // `5-2` is well formed but empty.
        Ok(DeflateLevels(start..=end))
    }
}

/// clap value parser for `--dlevel`.
pub fn parse_levels(s: &str) -> Result<DeflateLevels, LevelRangeError> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(s: &str) -> Vec<u32> {
        parse_levels(s).unwrap().iter().collect()
    }

    #[test]
    fn parses_inclusive_range() {
        assert_eq!(levels("2-5"), [2, 3, 4, 5]);
        assert_eq!(parse_levels("2-5").unwrap().to_string(), "2-5");
    }

    #[test]
    fn parses_single_level() {
        assert_eq!(levels("7"), [7]);
        assert_eq!(levels("0-0"), [0]);
        assert_eq!(parse_levels("7").unwrap().to_string(), "7-7");
    }

    #[test]
    fn default_covers_all_levels() {
        assert_eq!(levels("0-9"), (0..=9u32).collect::<Vec<_>>());
    }

    #[test]
    fn reversed_range_is_empty() {
        let reversed = parse_levels("5-2").unwrap();
        assert!(reversed.is_empty());
        assert_eq!(reversed.iter().count(), 0);
    }

    #[test]
    fn wide_range_is_not_materialised() {
        let wide = parse_levels("0-4000000000").unwrap();
        assert!(!wide.is_empty());
        assert_eq!(wide.iter().take(3).collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(wide.iter().next_back(), Some(4_000_000_000));
    }

    #[test]
    fn only_ascii_digits() {
        for bad in ["\u{661}\u{662}", "1-\u{663}", "\u{ff11}"] {
            let err = parse_levels(bad).unwrap_err();
            assert!(err.to_string().contains(bad));
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["abc", "5-", "-3", "", "1-2-3", " 4", "4 ", "1,2", "+1"] {
            let err = parse_levels(bad).unwrap_err();
            assert!(
                err.to_string().contains(&format!("'{}'", bad)),
                "error for {:?} was {}",
                bad,
                err
            );
        }
    }

    #[test]
    fn rejects_overflowing_numbers() {
        let err = parse_levels("99999999999").unwrap_err();
        assert!(err.to_string().starts_with("'99999999999' is not a range"));
    }
}
