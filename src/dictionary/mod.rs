pub mod parse;
pub mod word;

use std::fmt;
use std::sync::OnceLock;

use crate::error::{FnombreError, Result};

pub use word::{Gender, Plurality, Word};

const ADJECTIVES: &str = include_str!("../../data/adjective");
const ADVERBS: &str = include_str!("../../data/adverb");
const NOUNS: &str = include_str!("../../data/noun");
const VERBS: &str = include_str!("../../data/verb");

static BUNDLED: OnceLock<Dictionary> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Adjective,
    Adverb,
    Noun,
    Verb,
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
        };
        f.write_str(name)
    }
}

/// Read-only word lists, one per part of speech.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    adjectives: Vec<Word>,
    adverbs: Vec<Word>,
    nouns: Vec<Word>,
    verbs: Vec<Word>,
}

impl Dictionary {
    pub fn new(adjectives: Vec<Word>, adverbs: Vec<Word>, nouns: Vec<Word>, verbs: Vec<Word>) -> Self {
        Dictionary {
            adjectives,
            adverbs,
            nouns,
            verbs,
        }
    }

    /// Build a dictionary from raw list text. Adverbs are ungendered,
    /// the other three lists are `word,gender,plurality`.
    pub fn from_sources(adjectives: &str, adverbs: &str, nouns: &str, verbs: &str) -> Self {
        Dictionary::new(
            parse::parse_gendered(adjectives),
            parse::parse_ungendered(adverbs),
            parse::parse_gendered(nouns),
            parse::parse_gendered(verbs),
        )
    }

    /// The word lists compiled into the binary, parsed on first use.
    pub fn bundled() -> &'static Dictionary {
        BUNDLED.get_or_init(|| Dictionary::from_sources(ADJECTIVES, ADVERBS, NOUNS, VERBS))
    }

    pub fn words(&self, pos: PartOfSpeech) -> &[Word] {
        match pos {
            PartOfSpeech::Adjective => &self.adjectives,
            PartOfSpeech::Adverb => &self.adverbs,
            PartOfSpeech::Noun => &self.nouns,
            PartOfSpeech::Verb => &self.verbs,
        }
    }

    pub fn len(&self, pos: PartOfSpeech) -> usize {
        self.words(pos).len()
    }

    pub fn get(&self, pos: PartOfSpeech, index: usize) -> Option<&Word> {
        self.words(pos).get(index)
    }

    /// Check that generation can always terminate: every list is non-empty
    /// and every noun has at least one agreeing adjective and verb.
    pub fn validate(&self) -> Result<()> {
        for pos in [
            PartOfSpeech::Adjective,
            PartOfSpeech::Adverb,
            PartOfSpeech::Noun,
            PartOfSpeech::Verb,
        ] {
            if self.words(pos).is_empty() {
                return Err(FnombreError::EmptyWordList(pos));
            }
        }

        for noun in &self.nouns {
            for pos in [PartOfSpeech::Adjective, PartOfSpeech::Verb] {
                if !self.words(pos).iter().any(|w| w.matches(noun)) {
                    return Err(FnombreError::UnmatchedAgreement {
                        pos,
                        noun: noun.text.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
