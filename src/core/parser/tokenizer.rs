use crate::core::messages;
use crate::core::{DoctorBaseError, Result};
use regex::Regex;
use std::collections::HashMap;

/// Arguments split by prefix. Text before the first prefix is the preamble.
#[derive(Debug, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<&'static str, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: &str) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: &str) -> &[String] {
        self.values.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.values.contains_key(prefix)
    }

    pub fn contains_all(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().all(|p| self.contains(p))
    }

    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[&str]) -> Result<()> {
        let duplicated: Vec<&str> = prefixes
            .iter()
            .copied()
            .filter(|p| self.all_values(p).len() > 1)
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(DoctorBaseError::parse(messages::duplicate_fields(&duplicated)))
        }
    }
}

/// Splits `args` on the given prefixes. A prefix only counts when it follows
/// whitespace, so `a/` inside `Blk 30 a/b` is part of the address.
pub fn tokenize(args: &str, prefixes: &[&'static str]) -> Result<ArgumentMultimap> {
    if prefixes.is_empty() {
        return Ok(ArgumentMultimap {
            preamble: args.trim().to_string(),
            values: HashMap::new(),
        });
    }

    // longest first so `dt/` is never read as `d/` followed by `t/`
    let mut ordered: Vec<&'static str> = prefixes.to_vec();
    ordered.sort_by_key(|p| std::cmp::Reverse(p.len()));
    let alternatives: Vec<String> = ordered.iter().map(|p| regex::escape(p)).collect();
    let pattern = format!(r"\s({})", alternatives.join("|"));
    let re = Regex::new(&pattern).map_err(|e| {
        DoctorBaseError::parse(format!("Cannot build argument pattern: {}", e))
    })?;

    // (prefix, start of the whitespace before it, start of its value)
    let mut markers: Vec<(&'static str, usize, usize)> = Vec::new();
    for caps in re.captures_iter(args) {
        let (Some(whole), Some(prefix)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if let Some(known) = ordered.iter().copied().find(|p| *p == prefix.as_str()) {
            markers.push((known, whole.start(), prefix.end()));
        }
    }

    let preamble_end = markers.first().map(|m| m.1).unwrap_or(args.len());
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (prefix, _, value_start)) in markers.iter().enumerate() {
        let value_end = markers.get(i + 1).map(|m| m.1).unwrap_or(args.len());
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[*value_start..value_end].trim().to_string());
    }

    Ok(multimap)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIXES: [&str; 4] = ["n/", "t/", "d/", "dt/"];

    #[test]
    fn test_preamble_only() {
        let map = tokenize("  some preamble ", &PREFIXES).unwrap();
        assert_eq!(map.preamble(), "some preamble");
        assert!(!map.contains("n/"));
    }

    #[test]
    fn test_values_split_by_prefix() {
        let map = tokenize(" 3 n/Alice Tan  t/asthma t/smoker", &PREFIXES).unwrap();
        assert_eq!(map.preamble(), "3");
        assert_eq!(map.value("n/"), Some("Alice Tan"));
        assert_eq!(map.all_values("t/"), &["asthma".to_string(), "smoker".to_string()]);
        assert_eq!(map.value("t/"), Some("smoker"));
    }

    #[test]
    fn test_prefix_must_follow_whitespace() {
        let map = tokenize(" n/Alice/n/Bob", &PREFIXES).unwrap();
        assert_eq!(map.value("n/"), Some("Alice/n/Bob"));
    }

    #[test]
    fn test_longer_prefix_wins() {
        let map = tokenize(" 1 d/Checkup dt/2030-01-01 09:00", &PREFIXES).unwrap();
        assert_eq!(map.value("d/"), Some("Checkup"));
        assert_eq!(map.value("dt/"), Some("2030-01-01 09:00"));
    }

    #[test]
    fn test_empty_value_is_kept() {
        let map = tokenize(" 1 t/", &PREFIXES).unwrap();
        assert_eq!(map.all_values("t/"), &[String::new()]);
    }

    #[test]
    fn test_duplicate_prefix_detection() {
        let map = tokenize(" n/Alice n/Bob t/a t/b", &PREFIXES).unwrap();
        assert!(map.verify_no_duplicate_prefixes_for(&["t/"]).is_err());
        let err = map.verify_no_duplicate_prefixes_for(&["n/", "d/"]).unwrap_err();
        assert!(err.to_string().ends_with("n/"));
        assert!(map.contains_all(&["n/", "t/"]));
    }
}
