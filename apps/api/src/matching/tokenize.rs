//! Tokenizers feeding the two TF-IDF indexes.

/// English stop words dropped from content text before n-grams are formed.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "but", "by", "can", "cannot", "could", "do", "done", "down", "due",
    "during", "each", "eg", "either", "else", "elsewhere", "enough", "etc", "even", "ever",
    "every", "everyone", "everything", "everywhere", "except", "few", "for", "former",
    "formerly", "from", "further", "get", "give", "go", "had", "has", "have", "he", "hence",
    "her", "here", "hereafter", "hereby", "herein", "hers", "herself", "him", "himself", "his",
    "how", "however", "ie", "if", "in", "inc", "indeed", "into", "is", "it", "its", "itself",
    "just", "keep", "last", "latter", "least", "less", "ltd", "made", "many", "may", "me",
    "meanwhile", "might", "mine", "more", "moreover", "most", "mostly", "much", "must", "my",
    "myself", "namely", "neither", "never", "nevertheless", "next", "no", "nobody", "none",
    "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one",
    "only", "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
    "over", "own", "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see",
    "seem", "seemed", "seeming", "seems", "several", "she", "should", "since", "so", "some",
    "somehow", "someone", "something", "sometime", "sometimes", "somewhere", "still", "such",
    "than", "that", "the", "their", "them", "themselves", "then", "thence", "there",
    "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they", "this",
    "those", "though", "through", "throughout", "thru", "thus", "to", "together", "too",
    "toward", "towards", "under", "until", "up", "upon", "us", "very", "via", "was", "we",
    "well", "were", "what", "whatever", "when", "whence", "whenever", "where", "whereafter",
    "whereas", "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// How raw text is split into terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPattern {
    /// Whole words of at least two ASCII letters. Words touching digits or
    /// underscores are dropped entirely.
    Alphabetic,
    /// Runs of ASCII letters plus `+`, `#` and `.`, so `c++` and `node.js`
    /// survive intact. A run must hold at least one letter.
    SkillSymbols,
}

/// Lowercases `text` and extracts tokens of at least two characters.
pub fn tokenize(text: &str, pattern: TokenPattern) -> Vec<String> {
    let lower = text.to_lowercase();
    match pattern {
        TokenPattern::Alphabetic => lower
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|w| w.len() >= 2 && w.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_string)
            .collect(),
        TokenPattern::SkillSymbols => lower
            .split(|c: char| !(c.is_ascii_alphabetic() || matches!(c, '+' | '#' | '.')))
            .filter(|w| w.len() >= 2 && w.chars().any(|c| c.is_ascii_alphabetic()))
            .map(str::to_string)
            .collect(),
    }
}

/// Produces every n-gram for `n` in `1..=max_n`, joined by single spaces.
/// Unigrams come first, in token order.
pub fn ngrams(tokens: &[String], max_n: usize) -> Vec<String> {
    let mut terms = tokens.to_vec();
    for n in 2..=max_n {
        terms.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    terms
}
