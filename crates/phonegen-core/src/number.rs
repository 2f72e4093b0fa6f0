//! Phone number value types.
//!
//! A generated number has the shape `<country><area><prefix><suffix>`:
//! the fixed [`COUNTRY_CODE`], a validated [`AreaCode`], one [`Prefix`] from
//! a [`PrefixSet`], and a zero-padded six-digit suffix.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    COUNTRY_CODE, DEFAULT_AREA_CODE, DEFAULT_PREFIXES, MIN_AREA_CODE_LEN, PREFIX_LEN,
    SUFFIX_DIGITS, SUFFIX_MAX,
};
use crate::error::PhoneGenError;

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Regional dialing code, two or more digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AreaCode(String);

impl AreaCode {
    /// Validate and wrap an area code. Surrounding whitespace is ignored.
    pub fn new(code: &str) -> Result<Self, PhoneGenError> {
        let code = code.trim();
        if code.len() < MIN_AREA_CODE_LEN || !is_digits(code) {
            return Err(PhoneGenError::InvalidAreaCode(code.to_string()));
        }
        Ok(Self(code.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AreaCode {
    fn default() -> Self {
        Self(DEFAULT_AREA_CODE.to_string())
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AreaCode {
    type Err = PhoneGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Three-digit block following the area code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(String);

impl Prefix {
    /// Validate and wrap a prefix. Surrounding whitespace is ignored.
    pub fn new(prefix: &str) -> Result<Self, PhoneGenError> {
        let prefix = prefix.trim();
        if prefix.len() != PREFIX_LEN || !is_digits(prefix) {
            return Err(PhoneGenError::InvalidPrefix(prefix.to_string()));
        }
        Ok(Self(prefix.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, non-empty list of distinct prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSet(Vec<Prefix>);

impl PrefixSet {
    /// Build a prefix set, rejecting empty lists, malformed entries and duplicates.
    pub fn new<I, S>(prefixes: I) -> Result<Self, PhoneGenError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut list = Vec::new();
        for raw in prefixes {
            let prefix = Prefix::new(raw.as_ref())?;
            if !seen.insert(prefix.clone()) {
                return Err(PhoneGenError::DuplicatePrefix(prefix.0));
            }
            list.push(prefix);
        }
        if list.is_empty() {
            return Err(PhoneGenError::EmptyPrefixes);
        }
        Ok(Self(list))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prefix> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Prefix] {
        &self.0
    }
}

impl Default for PrefixSet {
    fn default() -> Self {
        Self(
            DEFAULT_PREFIXES
                .iter()
                .map(|p| Prefix((*p).to_string()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a PrefixSet {
    type Item = &'a Prefix;
    type IntoIter = std::slice::Iter<'a, Prefix>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parses a comma-separated list such as `"991, 992,993"`.
impl FromStr for PrefixSet {
    type Err = PhoneGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.split(',').filter(|p| !p.trim().is_empty()))
    }
}

impl fmt::Display for PrefixSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, prefix) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(prefix.as_str())?;
        }
        Ok(())
    }
}

/// A complete, all-digit phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Assemble `<country><area><prefix><suffix>` with the suffix zero-padded to six digits.
    ///
    /// `suffix` must not exceed [`SUFFIX_MAX`].
    #[must_use]
    pub fn compose(area_code: &AreaCode, prefix: &Prefix, suffix: u32) -> Self {
        debug_assert!(suffix <= SUFFIX_MAX, "suffix {suffix} exceeds {SUFFIX_MAX}");
        Self(format!(
            "{COUNTRY_CODE}{area_code}{prefix}{suffix:0width$}",
            width = SUFFIX_DIGITS
        ))
    }

    /// Wrap an existing digit string.
    pub fn from_digits(digits: &str) -> Result<Self, PhoneGenError> {
        let digits = digits.trim();
        if !is_digits(digits) {
            return Err(PhoneGenError::InvalidNumber(digits.to_string()));
        }
        Ok(Self(digits.to_string()))
    }

    /// Number whose digits are the decimal form of `value`.
    #[must_use]
    pub fn from_value(value: u64) -> Self {
        Self(value.to_string())
    }

    /// Expected length of numbers composed for `area_code`.
    #[must_use]
    pub fn composed_len(area_code: &AreaCode) -> usize {
        COUNTRY_CODE.len() + area_code.as_str().len() + PREFIX_LEN + SUFFIX_DIGITS
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = PhoneGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_digits(s)
    }
}

impl From<PhoneNumber> for String {
    fn from(number: PhoneNumber) -> Self {
        number.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_code_validation() {
        assert!(AreaCode::new("92").is_ok());
        assert!(AreaCode::new(" 011 ").is_ok());
        assert!(AreaCode::new("9").is_err());
        assert!(AreaCode::new("").is_err());
        assert!(AreaCode::new("9a").is_err());
        assert_eq!(AreaCode::default().as_str(), "92");
    }

    #[test]
    fn prefix_validation() {
        assert!(Prefix::new("991").is_ok());
        assert!(Prefix::new("99").is_err());
        assert!(Prefix::new("9911").is_err());
        assert!(Prefix::new("9x1").is_err());
    }

    #[test]
    fn prefix_set_rejects_empty_and_duplicates() {
        assert!(matches!(
            PrefixSet::new(Vec::<String>::new()),
            Err(PhoneGenError::EmptyPrefixes)
        ));
        assert!(matches!(
            PrefixSet::new(["991", "992", "991"]),
            Err(PhoneGenError::DuplicatePrefix(p)) if p == "991"
        ));
    }

    #[test]
    fn prefix_set_parses_comma_list() {
        let set: PrefixSet = "991, 992,993".parse().unwrap();
        let names: Vec<&str> = set.iter().map(Prefix::as_str).collect();
        assert_eq!(names, ["991", "992", "993"]);
        assert_eq!(set.to_string(), "991, 992, 993");
        assert!(",,".parse::<PrefixSet>().is_err());
    }

    #[test]
    fn default_prefix_set_has_ten_entries() {
        let set = PrefixSet::default();
        assert_eq!(set.len(), 10);
        assert_eq!(set.as_slice()[0].as_str(), "991");
    }

    #[test]
    fn compose_pads_suffix() {
        let area = AreaCode::new("92").unwrap();
        let prefix = Prefix::new("991").unwrap();
        assert_eq!(
            PhoneNumber::compose(&area, &prefix, 42).as_str(),
            "5592991000042"
        );
        assert_eq!(
            PhoneNumber::compose(&area, &prefix, 999_999).as_str(),
            "5592991999999"
        );
        assert_eq!(PhoneNumber::composed_len(&area), 13);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "exceeds")]
    fn compose_rejects_oversized_suffix() {
        let area = AreaCode::new("92").unwrap();
        let prefix = Prefix::new("991").unwrap();
        let _ = PhoneNumber::compose(&area, &prefix, SUFFIX_MAX + 1);
    }

    #[test]
    fn from_digits_rejects_non_numeric() {
        assert!(PhoneNumber::from_digits("5592991234567").is_ok());
        assert!(PhoneNumber::from_digits("+5592991234567").is_err());
        assert!(PhoneNumber::from_digits("").is_err());
        assert_eq!(PhoneNumber::from_value(5_592_981_780_000).as_str(), "5592981780000");
    }
}
