//! Built-in Tagging Lexicon
//!
//! Closed-class English words with their Penn-style tags. Open-class words
//! (most nouns, verbs, adjectives) are handled by the tagger's suffix rules.

/// Embedded lexicon entries as (word, tag) pairs. Words are matched
/// case-insensitively by the tagger.
const LEXICON: &[(&str, &str)] = &[
    // Determiners
    ("a", "DT"),
    ("an", "DT"),
    ("the", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("each", "DT"),
    ("every", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("no", "DT"),
    ("all", "DT"),
    ("both", "DT"),
    ("another", "DT"),
    // Personal pronouns
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("her", "PRP"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("myself", "PRP"),
    ("himself", "PRP"),
    ("herself", "PRP"),
    ("itself", "PRP"),
    ("themselves", "PRP"),
    // Possessive pronouns
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    // Verbs (base, inflected, auxiliaries)
    ("be", "VB"),
    ("am", "VBP"),
    ("is", "VBZ"),
    ("are", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("done", "VBN"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("go", "VB"),
    ("goes", "VBZ"),
    ("went", "VBD"),
    ("gone", "VBN"),
    ("get", "VB"),
    ("gets", "VBZ"),
    ("got", "VBD"),
    ("make", "VB"),
    ("makes", "VBZ"),
    ("made", "VBD"),
    ("see", "VB"),
    ("sees", "VBZ"),
    ("saw", "VBD"),
    ("seen", "VBN"),
    ("say", "VB"),
    ("says", "VBZ"),
    ("said", "VBD"),
    ("take", "VB"),
    ("takes", "VBZ"),
    ("took", "VBD"),
    ("taken", "VBN"),
    ("find", "VB"),
    ("found", "VBD"),
    ("think", "VB"),
    ("thought", "VBD"),
    ("know", "VB"),
    ("knew", "VBD"),
    ("look", "VB"),
    ("looks", "VBZ"),
    ("looked", "VBD"),
    // Modals
    ("will", "MD"),
    ("would", "MD"),
    ("can", "MD"),
    ("could", "MD"),
    ("should", "MD"),
    ("shall", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    // Adverbs
    ("not", "RB"),
    ("never", "RB"),
    ("always", "RB"),
    ("often", "RB"),
    ("very", "RB"),
    ("too", "RB"),
    ("so", "RB"),
    ("just", "RB"),
    ("now", "RB"),
    ("then", "RB"),
    ("here", "RB"),
    ("there", "RB"),
    ("again", "RB"),
    ("still", "RB"),
    ("already", "RB"),
    ("soon", "RB"),
    ("quite", "RB"),
    ("well", "RB"),
    ("ever", "RB"),
    ("today", "RB"),
    // Adjectives the suffix rules would miss
    ("good", "JJ"),
    ("bad", "JJ"),
    ("big", "JJ"),
    ("small", "JJ"),
    ("new", "JJ"),
    ("old", "JJ"),
    ("first", "JJ"),
    ("last", "JJ"),
    ("best", "JJ"),
    ("worst", "JJ"),
    ("cute", "JJ"),
    ("little", "JJ"),
    ("great", "JJ"),
    ("free", "JJ"),
    ("happy", "JJ"),
    // Prepositions and conjunctions
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("of", "IN"),
    ("for", "IN"),
    ("with", "IN"),
    ("from", "IN"),
    ("by", "IN"),
    ("about", "IN"),
    ("after", "IN"),
    ("before", "IN"),
    ("into", "IN"),
    ("over", "IN"),
    ("under", "IN"),
    ("between", "IN"),
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    // Wh-words
    ("what", "WP"),
    ("who", "WP"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
    ("which", "WDT"),
    // Misc
    ("to", "TO"),
    ("yes", "UH"),
    ("oh", "UH"),
    ("wow", "UH"),
];

/// The built-in (word, tag) entries, owned, in lexicon order.
pub fn builtin_lexicon() -> Vec<(String, String)> {
    LEXICON
        .iter()
        .map(|&(word, tag)| (word.to_string(), tag.to_string()))
        .collect()
}
