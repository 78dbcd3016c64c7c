//! Random, human-friendly names built from Spanish words that agree in
//! gender and number, such as "gato-feliz" or "estrellas-doradas-brillan".

pub mod casing;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod generator;

pub use casing::Casing;
pub use dictionary::{Dictionary, Gender, PartOfSpeech, Plurality, Word};
pub use error::{FnombreError, Result};
pub use generator::{Generator, GeneratorConfig};
