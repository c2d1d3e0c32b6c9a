//! Severity definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
    Fatal = 4,
}

impl Severity {
    /// Every severity in ordinal order
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Debug => Blue,
            Severity::Info => Green,
            Severity::Warning => Yellow,
            Severity::Error => Red,
            Severity::Fatal => BrightRed,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

/// A fixed set of severities an output records
///
/// Membership is exact: `{Debug, Error}` does not imply `Info`.
///
/// ```
/// use trace_logger::{Severities, Severity};
///
/// let levels: Severities = [Severity::Debug, Severity::Error].into_iter().collect();
/// assert!(levels.contains(Severity::Error));
/// assert!(!levels.contains(Severity::Info));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Severities(u8);

impl Severities {
    pub const fn none() -> Self {
        Severities(0)
    }

    pub const fn all() -> Self {
        Severities(0b1_1111)
    }

    /// Raw bit representation, one bit per severity ordinal
    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn from_bits_truncate(bits: u8) -> Self {
        Severities(bits & 0b1_1111)
    }

    #[must_use]
    pub fn with(mut self, level: Severity) -> Self {
        self.0 |= level.bit();
        self
    }

    #[inline]
    pub fn contains(&self, level: Severity) -> bool {
        self.0 & level.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Severity> + '_ {
        Severity::ALL.into_iter().filter(|level| self.contains(*level))
    }
}

impl FromIterator<Severity> for Severities {
    fn from_iter<I: IntoIterator<Item = Severity>>(iter: I) -> Self {
        iter.into_iter().fold(Severities::none(), Severities::with)
    }
}

impl<'a> FromIterator<&'a Severity> for Severities {
    fn from_iter<I: IntoIterator<Item = &'a Severity>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl From<Severity> for Severities {
    fn from(level: Severity) -> Self {
        Severities::none().with(level)
    }
}

impl<const N: usize> From<[Severity; N]> for Severities {
    fn from(levels: [Severity; N]) -> Self {
        levels.into_iter().collect()
    }
}

impl From<&[Severity]> for Severities {
    fn from(levels: &[Severity]) -> Self {
        levels.iter().collect()
    }
}

impl Serialize for Severities {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Severities {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let levels = Vec::<Severity>::deserialize(deserializer)?;
        Ok(levels.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_cover_every_ordinal() {
        let names: Vec<&str> = Severity::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["DEBUG", "INFO", "WARNING", "ERROR", "FATAL"]);
    }

    #[test]
    fn test_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("Fatal".parse::<Severity>(), Ok(Severity::Fatal));
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn test_set_membership_is_not_a_range() {
        let set = Severities::from([Severity::Debug, Severity::Error]);
        assert!(set.contains(Severity::Debug));
        assert!(!set.contains(Severity::Info));
        assert!(!set.contains(Severity::Warning));
        assert!(set.contains(Severity::Error));
        assert!(!set.contains(Severity::Fatal));
    }

    #[test]
    fn test_all_and_none() {
        assert!(Severity::ALL.iter().all(|s| Severities::all().contains(*s)));
        assert!(Severities::none().is_empty());
        assert_eq!(Severities::all().iter().count(), 5);
    }

    #[test]
    fn test_bits_roundtrip() {
        let set = Severities::from([Severity::Info, Severity::Fatal]);
        assert_eq!(Severities::from_bits_truncate(set.bits()), set);
        assert_eq!(Severities::from_bits_truncate(0xFF), Severities::all());
    }

    #[test]
    fn test_serde_as_list() {
        let set = Severities::from([Severity::Info, Severity::Fatal]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["INFO","FATAL"]"#);
        let back: Severities = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
