//! Combined Java/Kotlin keyword table and near-miss detection.

/// Reserved words and built-in type names recognized as keywords.
pub const KEYWORDS: &[&str] = &[
    "int", "float", "double", "char", "if", "else", "for", "while", "class", "public", "private",
    "return", "static", "void", "new", "fun", "var", "val", "when", "is", "in", "object", "null",
    "true", "false", "package", "import", "override", "data", "sealed", "lateinit", "Int",
    "Float", "Double", "Char", "String", "Boolean", "Long", "Short", "Byte",
];

/// Maximum edit distance at which a word is considered a misspelled keyword.
pub const MISSPELLING_DISTANCE: usize = 2;

/// Words shorter than this are never reported as misspellings.
pub const MISSPELLING_MIN_CHARS: usize = 3;

// Beyond this length the exact distance is not worth computing.
const LEVENSHTEIN_MAX_CHARS: usize = 300;

/// Returns `true` when `word` is in [`KEYWORDS`].
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Returns the closest keyword within [`MISSPELLING_DISTANCE`] edits, if any.
pub fn closest_keyword(word: &str) -> Option<&'static str> {
    if word.chars().count() < MISSPELLING_MIN_CHARS {
        return None;
    }
    KEYWORDS
        .iter()
        .map(|keyword| (levenshtein(word, keyword), *keyword))
        .filter(|(distance, _)| *distance <= MISSPELLING_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, keyword)| keyword)
}

/// Returns `true` when `word` is a plausible misspelling of some keyword.
pub fn resembles_keyword(word: &str) -> bool {
    closest_keyword(word).is_some()
}

/// Character-level edit distance between `a` and `b`.
///
/// Inputs longer than 300 characters get the estimate `|len(a) - len(b)| + 3`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len() > LEVENSHTEIN_MAX_CHARS || b.len() > LEVENSHTEIN_MAX_CHARS {
        return a.len().abs_diff(b.len()) + 3;
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, left) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, right) in b.iter().enumerate() {
            current[j + 1] = if left == right {
                previous[j]
            } else {
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}
