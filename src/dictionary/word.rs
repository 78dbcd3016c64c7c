/// Grammatical gender tag used for agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    #[default]
    Neutral,
    Feminine,
    Masculine,
}

impl Gender {
    /// `"1"` is feminine, `"2"` is masculine, anything else is neutral.
    pub fn from_code(code: &str) -> Self {
        match code {
            "1" => Gender::Feminine,
            "2" => Gender::Masculine,
            _ => Gender::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Plurality {
    #[default]
    Singular,
    Plural,
}

impl Plurality {
    /// `"1"` is plural, anything else is singular.
    pub fn from_code(code: &str) -> Self {
        match code {
            "1" => Plurality::Plural,
            _ => Plurality::Singular,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub gender: Gender,
    pub plurality: Plurality,
}

impl Word {
    pub fn new(text: impl Into<String>, gender: Gender, plurality: Plurality) -> Self {
        Word {
            text: text.into(),
            gender,
            plurality,
        }
    }

    /// A word from an ungendered list: always neutral and singular.
    pub fn ungendered(text: impl Into<String>) -> Self {
        Word::new(text, Gender::Neutral, Plurality::Singular)
    }

    /// Whether this adjective or verb agrees with `noun`.
    ///
    /// A neutral noun is read as feminine before comparing. After that, the
    /// pluralities must be equal and the genders must be equal unless either
    /// side is neutral. Since the noun can no longer be neutral at that point,
    /// only a neutral candidate gets the wildcard.
    pub fn matches(&self, noun: &Word) -> bool {
        let noun_gender = match noun.gender {
            Gender::Neutral => Gender::Feminine,
            g => g,
        };

        let gender_ok = self.gender == noun_gender
            || self.gender == Gender::Neutral
            || noun_gender == Gender::Neutral;

        gender_ok && self.plurality == noun.plurality
    }
}
