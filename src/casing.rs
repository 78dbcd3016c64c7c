use std::fmt;
use std::str::FromStr;

use crate::error::FnombreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Casing {
    #[default]
    Lower,
    Upper,
    Title,
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Casing::Lower => "lower",
            Casing::Upper => "upper",
            Casing::Title => "title",
        };
        f.write_str(name)
    }
}

impl FromStr for Casing {
    type Err = FnombreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lower" => Ok(Casing::Lower),
            "upper" => Ok(Casing::Upper),
            "title" => Ok(Casing::Title),
            _ => Err(FnombreError::InvalidCasing(s.to_string())),
        }
    }
}

impl Casing {
    pub fn apply(&self, word: &str) -> String {
        match self {
            Casing::Lower => word.to_lowercase(),
            Casing::Upper => word.to_uppercase(),
            Casing::Title => title_case(word),
        }
    }
}

/// Apply `casing` to each word independently.
pub fn format_words<S: AsRef<str>>(words: &[S], casing: Casing) -> Vec<String> {
    words.iter().map(|w| casing.apply(w.as_ref())).collect()
}

// Uppercase the first letter of every letter run, lowercase the rest.
// An apostrophe does not start a new run ("d'agua" -> "D'agua").
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_start = true;
    for c in word.chars() {
        if c.is_alphanumeric() {
            if at_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_start = false;
        } else {
            out.push(c);
            at_start = c != '\'';
        }
    }
    out
}
