use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::casing::{self, Casing};
use crate::dictionary::{Dictionary, PartOfSpeech, Word};
use crate::error::{FnombreError, Result};

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub casing: Casing,
    pub delimiter: String,
    pub size: usize,
    pub seed: Option<i64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            casing: Casing::Lower,
            delimiter: "-".to_string(),
            size: MIN_SIZE,
            seed: None,
        }
    }
}

/// Produces names like "gato-feliz" from a shared dictionary.
///
/// Each generator owns its random stream, so two generators built with the
/// same seed and config yield the same sequence of names.
pub struct Generator<'d> {
    dict: &'d Dictionary,
    config: GeneratorConfig,
    seed: i64,
    rng: StdRng,
}

impl<'d> Generator<'d> {
    pub fn new(dict: &'d Dictionary, config: GeneratorConfig) -> Self {
        let seed = config.seed.unwrap_or_else(time_seed);
        Generator {
            dict,
            config,
            seed,
            rng: StdRng::seed_from_u64(seed as u64),
        }
    }

    /// The seed actually in use, explicit or time-derived.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one name: cased words joined by the delimiter.
    pub fn generate(&mut self) -> Result<String> {
        let words = self.generate_words()?;
        Ok(casing::format_words(&words, self.config.casing).join(&self.config.delimiter))
    }

    /// Pick the raw words for one name, in order: noun, adjective, then a
    /// verb for size 3 and above, then an adverb for size 4.
    pub fn generate_words(&mut self) -> Result<Vec<String>> {
        let size = self.config.size;
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(FnombreError::InvalidSize(size));
        }

        let mut words = Vec::with_capacity(size);

        let noun = self.pick(PartOfSpeech::Noun)?;
        let adjective = self.pick_matching(PartOfSpeech::Adjective, noun)?;
        words.push(noun.text.clone());
        words.push(adjective.text.clone());

        if size >= 3 {
            let verb = self.pick_matching(PartOfSpeech::Verb, noun)?;
            words.push(verb.text.clone());
        }

        if size == MAX_SIZE {
            let adverb = self.pick(PartOfSpeech::Adverb)?;
            words.push(adverb.text.clone());
        }

        Ok(words)
    }

    fn pick(&mut self, pos: PartOfSpeech) -> Result<&'d Word> {
        self.dict
            .words(pos)
            .choose(&mut self.rng)
            .ok_or(FnombreError::EmptyWordList(pos))
    }

    // Redraw until the candidate agrees with the noun. There is no cap;
    // `Dictionary::validate` guarantees a match exists.
    fn pick_matching(&mut self, pos: PartOfSpeech, noun: &Word) -> Result<&'d Word> {
        loop {
            let candidate = self.pick(pos)?;
            if candidate.matches(noun) {
                return Ok(candidate);
            }
        }
    }
}

fn time_seed() -> i64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp())
}
