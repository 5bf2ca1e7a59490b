pub mod language;
pub mod translations;

pub use language::{Language, LanguageStore, LANGUAGE_STORAGE_KEY};
pub use translations::{t, Translator};
