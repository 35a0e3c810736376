use crate::splitters::markers::SEPARATOR;
use serde::Serialize;

/// A candidate dictionary word for a softword, with its association strength.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expansion {
    pub word: String,
    pub cohesion: f64,
}

impl Expansion {
    pub fn new(word: impl Into<String>, cohesion: f64) -> Self {
        Self {
            word: word.into(),
            cohesion,
        }
    }
}

/// One segment of a hardword and its candidate expansions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Softword {
    pub word: String,
    pub expansions: Vec<Expansion>,
}

impl Softword {
    pub fn new(word: impl Into<String>, expansions: Vec<Expansion>) -> Self {
        Self {
            word: word.into(),
            expansions,
        }
    }

    /// Highest cohesion over all expansions, 0 when there are none.
    pub fn highest_cohesion(&self) -> f64 {
        self.best().map_or(0.0, |e| e.cohesion)
    }

    /// The expansion with the highest cohesion, or the softword itself.
    pub fn best_expansion(&self) -> &str {
        self.best().map_or(self.word.as_str(), |e| e.word.as_str())
    }

    // First maximal expansion in list order.
    fn best(&self) -> Option<&Expansion> {
        let mut best: Option<&Expansion> = None;
        for expansion in &self.expansions {
            if best.map_or(true, |b| expansion.cohesion > b.cohesion) {
                best = Some(expansion);
            }
        }
        best
    }
}

/// One complete candidate decomposition of a hardword.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PotentialSplit {
    pub split: String,
    pub softwords: Vec<Softword>,
}

impl PotentialSplit {
    /// Build a split from a separator-marked hardword; softwords start
    /// without expansions.
    pub fn new(marked: &str) -> Self {
        let softwords = marked
            .split(SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(|s| Softword::new(s, Vec::new()))
            .collect();

        Self {
            split: marked.to_string(),
            softwords,
        }
    }

    pub fn highest_cohesion(&self) -> f64 {
        self.softwords.iter().map(Softword::highest_cohesion).sum()
    }

    pub fn best_expansion(&self) -> String {
        self.softwords
            .iter()
            .map(Softword::best_expansion)
            .collect::<Vec<_>>()
            .join(&SEPARATOR.to_string())
    }

    /// Softword texts in order.
    pub fn words(&self) -> Vec<String> {
        self.softwords.iter().map(|s| s.word.clone()).collect()
    }
}

/// The candidate with the highest cohesion; the first one wins ties, and an
/// empty candidate list yields the empty split.
pub fn find_best_split(candidates: &[PotentialSplit]) -> PotentialSplit {
    let mut best: Option<(&PotentialSplit, f64)> = None;

    for candidate in candidates {
        let cohesion = candidate.highest_cohesion();
        if best.map_or(true, |(_, max)| cohesion > max) {
            best = Some((candidate, cohesion));
        }
    }

    best.map(|(split, _)| split.clone()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn softword(word: &str, expansions: &[(&str, f64)]) -> Softword {
        Softword::new(
            word,
            expansions.iter().map(|(w, c)| Expansion::new(*w, *c)).collect(),
        )
    }

    fn bar_bum() -> PotentialSplit {
        PotentialSplit {
            split: "bar_bum".to_string(),
            softwords: vec![
                softword("bar", &[("bar", 1.2345)]),
                softword("bum", &[("bump", 0.5551), ("bumpy", 0.1999)]),
            ],
        }
    }

    #[test]
    fn test_new_on_marked_hardword() {
        let split = PotentialSplit::new("foo_bar");
        assert_eq!(split.split, "foo_bar");
        assert_eq!(split.softwords, vec![softword("foo", &[]), softword("bar", &[])]);
    }

    #[test]
    fn test_new_on_empty_hardword() {
        let split = PotentialSplit::new("");
        assert_eq!(split.split, "");
        assert!(split.softwords.is_empty());
    }

    #[test]
    fn test_softword_without_expansions() {
        let sw = softword("foo", &[]);
        assert_eq!(sw.highest_cohesion(), 0.0);
        assert_eq!(sw.best_expansion(), "foo");
    }

    #[test]
    fn test_softword_with_one_expansion() {
        let sw = softword("foo", &[("floor", 1.2345)]);
        assert_eq!(sw.highest_cohesion(), 1.2345);
        assert_eq!(sw.best_expansion(), "floor");
    }

    #[test]
    fn test_softword_picks_highest_cohesion() {
        let sw = softword("foo", &[("floor", 1.2345), ("foot", 2.1123), ("football", -0.1123)]);
        assert_eq!(sw.highest_cohesion(), 2.1123);
        assert_eq!(sw.best_expansion(), "foot");
    }

    #[test]
    fn test_softword_negative_only() {
        let sw = softword("foo", &[("football", -0.5), ("fool", -0.1)]);
        assert_eq!(sw.highest_cohesion(), -0.1);
        assert_eq!(sw.best_expansion(), "fool");
    }

    #[test]
    fn test_softword_tie_keeps_first() {
        let sw = softword("st", &[("steer", 1.0), ("string", 1.0)]);
        assert_eq!(sw.best_expansion(), "steer");
    }

    #[test]
    fn test_empty_split() {
        let split = PotentialSplit::default();
        assert_eq!(split.highest_cohesion(), 0.0);
        assert_eq!(split.best_expansion(), "");
    }

    #[test]
    fn test_split_with_one_softword() {
        let split = PotentialSplit {
            split: "bar".to_string(),
            softwords: vec![softword("bar", &[("bar", 1.2345)])],
        };
        assert_eq!(split.highest_cohesion(), 1.2345);
        assert_eq!(split.best_expansion(), "bar");
    }

    #[test]
    fn test_split_sums_softword_cohesions() {
        let split = bar_bum();
        assert!((split.highest_cohesion() - 1.7896).abs() < 1e-12);
        assert_eq!(split.best_expansion(), "bar_bump");
    }

    #[test]
    fn test_find_best_split_on_empty_list() {
        assert_eq!(find_best_split(&[]), PotentialSplit::default());
    }

    #[test]
    fn test_find_best_split_on_single_candidate() {
        let only = bar_bum();
        assert_eq!(find_best_split(std::slice::from_ref(&only)), only);
    }

    #[test]
    fn test_find_best_split_picks_highest_cohesion() {
        let best = PotentialSplit {
            split: "str_len".to_string(),
            softwords: vec![
                softword("str", &[("string", 2.3432)]),
                softword("len", &[("length", 2.0011)]),
            ],
        };
        let not_so_bad = PotentialSplit {
            split: "st_rlen".to_string(),
            softwords: vec![
                softword("st", &[("string", 1.9432)]),
                softword("rlen", &[("riflemen", 0.9011)]),
            ],
        };
        let bad = PotentialSplit {
            split: "s_trlen".to_string(),
            softwords: vec![softword("s", &[]), softword("trlen", &[])],
        };

        let got = find_best_split(&[bad, best.clone(), not_so_bad]);
        assert_eq!(got, best);
    }

    #[test]
    fn test_find_best_split_tie_keeps_first() {
        let first = PotentialSplit {
            split: "a_b".to_string(),
            softwords: vec![softword("a", &[("ab", 1.0)]), softword("b", &[])],
        };
        let second = PotentialSplit {
            split: "ab".to_string(),
            softwords: vec![softword("ab", &[("ab", 1.0)])],
        };

        assert_eq!(find_best_split(&[first.clone(), second]), first);
    }
}
