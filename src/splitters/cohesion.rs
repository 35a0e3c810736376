use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Association strength between a softword and one of its dictionary
/// expansions. Higher is a better match; values may be zero or negative.
pub trait Cohesion: Send + Sync {
    fn cohesion(&self, softword: &str, expansion: &str) -> f64;
}

/// `len(softword)² / len(expansion)`: the softword length weighted by how
/// much of the expansion it covers. An exact match scores the softword length.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageCohesion;

impl Cohesion for CoverageCohesion {
    fn cohesion(&self, softword: &str, expansion: &str) -> f64 {
        let expansion_len = expansion.chars().count();
        if expansion_len == 0 {
            return 0.0;
        }
        let softword_len = softword.chars().count() as f64;
        softword_len * softword_len / expansion_len as f64
    }
}

/// `len(softword) - levenshtein(softword, expansion)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistanceCohesion;

impl Cohesion for EditDistanceCohesion {
    fn cohesion(&self, softword: &str, expansion: &str) -> f64 {
        softword.chars().count() as f64 - edit_distance(softword, expansion) as f64
    }
}

/// Cohesion metric selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CohesionKind {
    #[default]
    Coverage,
    EditDistance,
}

impl CohesionKind {
    pub fn metric(self) -> Box<dyn Cohesion> {
        match self {
            CohesionKind::Coverage => Box::new(CoverageCohesion),
            CohesionKind::EditDistance => Box::new(EditDistanceCohesion),
        }
    }
}

impl FromStr for CohesionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coverage" => Ok(CohesionKind::Coverage),
            "edit-distance" => Ok(CohesionKind::EditDistance),
            _ => Err(format!("Unknown cohesion metric: {}", s)),
        }
    }
}

impl fmt::Display for CohesionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CohesionKind::Coverage => write!(f, "coverage"),
            CohesionKind::EditDistance => write!(f, "edit-distance"),
        }
    }
}

/// Calculate Levenshtein distance between two strings
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Two rolling rows instead of the full matrix.
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("hello", "hello"), 0);
        assert_eq!(edit_distance("hello", "hallo"), 1);
        assert_eq!(edit_distance("str", "string"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("hello", "world"), 4);
    }

    #[test]
    fn test_coverage_cohesion() {
        let metric = CoverageCohesion;
        assert_eq!(metric.cohesion("get", "get"), 3.0);
        assert_eq!(metric.cohesion("str", "string"), 1.5);
        assert_eq!(metric.cohesion("g", ""), 0.0);
    }

    #[test]
    fn test_edit_distance_cohesion_can_be_negative() {
        let metric = EditDistanceCohesion;
        assert_eq!(metric.cohesion("type", "type"), 4.0);
        assert_eq!(metric.cohesion("g", "configuration"), -11.0);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("coverage".parse::<CohesionKind>(), Ok(CohesionKind::Coverage));
        assert_eq!("Edit-Distance".parse::<CohesionKind>(), Ok(CohesionKind::EditDistance));
        assert!("cosine".parse::<CohesionKind>().is_err());
        assert_eq!(CohesionKind::EditDistance.to_string(), "edit-distance");
    }
}
