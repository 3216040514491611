//! Case and identifier-style conversions.
//!
//! | Case            | `"hello big World"`   |
//! |-----------------|-----------------------|
//! | `Camel`         | `helloBigWorld`       |
//! | `Pascal`        | `HelloBigWorld`       |
//! | `Snake`         | `hello_big_world`     |
//! | `Kebab`         | `hello-big-world`     |
//! | `Constant`      | `HELLO_BIG_WORLD`     |
//! | `Title`         | `Hello Big World`     |
//! | `Sentence`      | `Hello big world`     |
//!
//! Word splitting understands camel humps as well as separators, so
//! `parseHTTPResponse` snake-cases to `parse_http_response`.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// A target case for [`transform`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Case {
    #[default]
    Camel,
    Snake,
    Kebab,
    Pascal,
    Constant,
    Sentence,
    Title,
    /// Strip diacritics (`café` → `cafe`), leaving case alone.
    RemoveAccents,
    /// Lowercase, accent-free, hyphen-separated URL slug.
    Slug,
}

impl Case {
    /// Every case, in display order.
    pub const ALL: [Self; 9] = [
        Self::Camel,
        Self::Snake,
        Self::Kebab,
        Self::Pascal,
        Self::Constant,
        Self::Sentence,
        Self::Title,
        Self::RemoveAccents,
        Self::Slug,
    ];
}

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));
static HUMP_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)(\p{Lu}\p{Ll}+)").expect("valid regex"));
static HUMP_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\p{Ll}0-9])(\p{Lu})").expect("valid regex"));
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));
static SLUG_DROP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));
static SLUG_JOIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// Output when the selection is empty.
pub const EMPTY_MESSAGE: &str = "No text selected for transformation.";

/// Run the transform-case filter: trim the selection, then convert it.
#[must_use]
pub fn transform_case(input: &str, case: Case) -> String {
    if input.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    log::debug!("transform-case: {case:?}");
    transform(input.trim(), case)
}

/// Convert `text` to `case`.
#[must_use]
pub fn transform(text: &str, case: Case) -> String {
    match case {
        Case::Camel => camel(text),
        Case::Snake => split_words(text).join("_").to_lowercase(),
        Case::Kebab => split_words(text).join("-").to_lowercase(),
        Case::Pascal => WORD.find_iter(text).map(|m| capitalize(m.as_str())).collect(),
        Case::Constant => split_words(text).join("_").to_uppercase(),
        Case::Sentence => sentence(text),
        Case::Title => title(text),
        Case::RemoveAccents => remove_accents(text),
        Case::Slug => slug(text),
    }
}

fn camel(text: &str) -> String {
    let mut words = WORD.find_iter(text).map(|m| m.as_str());
    let Some(first) = words.next() else {
        return text.to_string();
    };
    let mut out = first.to_lowercase();
    for word in words {
        out.push_str(&capitalize(word));
    }
    out
}

/// Split on separators and camel humps.
///
/// Humps are marked first (`getHTTPResponse` → `get_HTTP_Response`), then
/// anything that is not a letter or digit separates words.
fn split_words(text: &str) -> Vec<String> {
    let marked = HUMP_WORD.replace_all(text, "${1}_${2}");
    let marked = HUMP_TAIL.replace_all(&marked, "${1}_${2}");
    marked
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Upper-case the first character, lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Each sentence capitalized, trimmed, and kept with its terminal
/// punctuation; sentences are joined by one space.
fn sentence(text: &str) -> String {
    let mut parts = Vec::new();
    let mut last = 0;
    for end in SENTENCE_END.find_iter(text) {
        let body = capitalize(text[last..end.start()].trim());
        parts.push(format!("{body}{}", end.as_str()));
        last = end.end();
    }
    let tail = text[last..].trim();
    if !tail.is_empty() {
        parts.push(capitalize(tail));
    }
    parts.join(" ")
}

/// Capitalize every run of letters; other characters split runs.
fn title(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

fn remove_accents(text: &str) -> String {
    text.nfd().filter(|&c| !is_combining_mark(c)).collect()
}

fn slug(text: &str) -> String {
    let lowered = remove_accents(text).to_lowercase();
    let kept = SLUG_DROP.replace_all(&lowered, "");
    let joined = SLUG_JOIN.replace_all(&kept, "-");
    joined.trim_matches('-').to_string()
}
