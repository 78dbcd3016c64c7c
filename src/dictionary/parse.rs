use super::word::{Gender, Plurality, Word};

/// Parse a gendered list where each line is `word,gender,plurality`.
/// Lines that don't split into exactly three fields are skipped.
pub fn parse_gendered(raw: &str) -> Vec<Word> {
    raw.lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            match fields.as_slice() {
                [text, gender, plurality] => Some(Word::new(
                    *text,
                    Gender::from_code(gender),
                    Plurality::from_code(plurality),
                )),
                _ => None,
            }
        })
        .collect()
}

/// Parse an ungendered list, one word per line.
pub fn parse_ungendered(raw: &str) -> Vec<Word> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(Word::ungendered)
        .collect()
}
