use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A read-only set of lowercase affixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffixSet {
    entries: HashSet<String>,
}

impl AffixSet {
    pub fn from_list(affixes: &[&str]) -> Self {
        Self {
            entries: affixes.iter().map(|a| a.to_lowercase()).collect(),
        }
    }

    /// Common English prefixes.
    pub fn default_prefixes() -> Self {
        Self::from_list(COMMON_PREFIXES)
    }

    /// Common English suffixes.
    pub fn default_suffixes() -> Self {
        Self::from_list(COMMON_SUFFIXES)
    }

    /// Load one affix per line; blank lines and `#` comments are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read affix list: {}", path.display()))?;

        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        Ok(Self { entries })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const COMMON_PREFIXES: &[&str] = &[
    "afro", "ambi", "amphi", "ana", "anglo", "apo", "astro", "bi", "bio", "circum", "cis", "co",
    "col", "com", "con", "contra", "cor", "cryo", "crypto", "de", "demi", "di", "dif", "dis", "du",
    "duo", "eco", "electro", "em", "en", "epi", "euro", "ex", "franco", "geo", "hemi", "hetero",
    "homo", "hydro", "hypo", "ideo", "idio", "il", "im", "infra", "inter", "intra", "ir", "iso",
    "macr", "mal", "maxi", "mega", "megalo", "micro", "midi", "mini", "mis", "mon", "multi", "neo",
    "omni", "paleo", "para", "ped", "peri", "poly", "pre", "preter", "proto", "pyro", "re", "retro",
    "semi", "socio", "supra", "sur", "sy", "syl", "sym", "syn", "tele", "trans", "tri", "twi",
    "ultra", "un", "uni",
];

const COMMON_SUFFIXES: &[&str] = &[
    "a", "ac", "acea", "aceae", "acean", "aceous", "ade", "aemia", "agogue", "aholic", "al",
    "ales", "algia", "amine", "ana", "anae", "ance", "ancy", "androus", "andry", "ane", "ar",
    "archy", "ard", "aria", "arian", "arium", "ary", "ase", "athon", "ation", "ative", "ator",
    "atory", "biont", "biosis", "cade", "caine", "carp", "carpic", "carpous", "cele", "cene",
    "centric", "cephalic", "cephalous", "cephaly", "chory", "chrome", "cide", "clast", "clinal",
    "cline", "coccus", "coel", "coele", "colous", "cracy", "crat", "cratic", "cratical", "cy",
    "cyte", "derm", "derma", "dermatous", "dom", "drome", "dromous", "eae", "ectomy", "ed", "ee",
    "eer", "ein", "eme", "emia", "en", "ence", "enchyma", "ency", "ene", "ent", "eous", "er",
    "ergic", "ergy", "es", "escence", "escent", "ese", "esque", "ess", "est", "et", "eth", "etic",
    "ette", "ey", "facient", "fer", "ferous", "fic", "fication", "fid", "florous", "foliate",
    "foliolate", "fuge", "ful", "fy", "gamous", "gamy", "gen", "genesis", "genic", "genous",
    "geny", "gnathous", "gon", "gony", "grapher", "graphy", "gyne", "gynous", "gyny", "ia", "ial",
    "ian", "iana", "iasis", "iatric", "iatrics", "iatry", "ibility", "ible", "ic", "icide",
    "ician", "ick", "ics", "idae", "ide", "ie", "ify", "ile", "ina", "inae", "ine", "ineae", "ing",
    "ini", "ious", "isation", "ise", "ish", "ism", "ist", "istic", "istical", "istically", "ite",
    "itious", "itis", "ity", "ium", "ive", "ization", "ize", "kinesis", "kins", "latry", "lepry",
    "ling", "lite", "lith", "lithic", "logue", "logist", "logy", "ly", "lyse", "lysis", "lyte",
    "lytic", "lyze", "mancy", "mania", "meister", "ment", "merous", "metry", "mo", "morph",
    "morphic", "morphism", "morphous", "mycete", "mycetes", "mycetidae", "mycin", "mycota",
    "mycotina", "ness", "nik", "nomy", "odon", "odont", "odontia", "oholic", "oic", "oid", "oidea",
    "oideae", "ol", "ole", "oma", "ome", "ont", "onym", "onymy", "opia", "opsida", "opsis", "opsy",
    "orama", "ory", "ose", "osis", "otic", "otomy", "ous", "para", "parous", "pathy", "ped",
    "pede", "penia", "phage", "phagia", "phagous", "phagy", "phane", "phasia", "phil", "phile",
    "philia", "philiac", "philic", "philous", "phobe", "phobia", "phobic", "phony", "phore",
    "phoresis", "phorous", "phrenia", "phyll", "phyllous", "phyceae", "phycidae", "phyta",
    "phyte", "phytina", "plasia", "plasm", "plast", "plasty", "plegia", "plex", "ploid", "pode",
    "podous", "poieses", "poietic", "pter", "rrhagia", "rrhea", "ric", "ry", "s", "scopy",
    "sepalous", "sperm", "sporous", "st", "stasis", "stat", "ster", "stome", "stomy", "taxy", "th",
    "therm", "thermal", "thermic", "thermy", "thon", "thymia", "tion", "tome", "tomy", "tonia",
    "trichous", "trix", "tron", "trophic", "tropism", "tropous", "tropy", "tude", "ty", "ular",
    "ule", "ure", "urgy", "uria", "uronic", "urous", "valent", "virile", "vorous", "xor", "y", "yl",
    "yne", "zoic", "zoon", "zygous", "zyme",
];

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_sets() {
        let prefixes = AffixSet::default_prefixes();
        let suffixes = AffixSet::default_suffixes();

        assert!(prefixes.contains("re"));
        assert!(prefixes.contains("micro"));
        assert!(!prefixes.contains("get"));
        assert!(suffixes.contains("ing"));
        assert!(suffixes.contains("s"));
        assert!(!suffixes.contains("string"));
    }

    #[test]
    fn test_from_list_lowercases() {
        let set = AffixSet::from_list(&["Pre", "UN"]);
        assert!(set.contains("pre"));
        assert!(set.contains("un"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_load_skips_comments() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefixes.txt");
        std::fs::write(&path, "# prefixes\nauto\n\nPseudo\n").unwrap();

        let set = AffixSet::load(&path).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("pseudo"));
    }
}
