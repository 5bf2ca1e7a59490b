use std::fmt;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use shared_utils::storage::{KeyValueStorage, StorageError};

pub const LANGUAGE_STORAGE_KEY: &str = "booking_app_language";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Bg,
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Bg, Language::En, Language::De];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Bg => "bg",
            Language::En => "en",
            Language::De => "de",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Bg => "Български",
            Language::En => "English",
            Language::De => "Deutsch",
        }
    }

    /// Unknown codes fall back to Bulgarian.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Language::En,
            "de" => Language::De,
            "bg" => Language::Bg,
            other => {
                if !other.is_empty() {
                    debug!("Unknown language code '{}', falling back to bg", other);
                }
                Language::Bg
            }
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Selected UI language, persisted as the bare language code.
pub struct LanguageStore {
    storage: Arc<dyn KeyValueStorage>,
    current: RwLock<Language>,
}

impl LanguageStore {
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let current = match storage.get_item(LANGUAGE_STORAGE_KEY) {
            Ok(Some(code)) => Language::from_code(&code),
            Ok(None) => Language::default(),
            Err(e) => {
                warn!("Could not read stored language: {}", e);
                Language::default()
            }
        };

        Self {
            storage,
            current: RwLock::new(current),
        }
    }

    pub fn language(&self) -> Language {
        self.current
            .read()
            .map(|guard| *guard)
            .unwrap_or_default()
    }

    pub fn change_language(&self, language: Language) -> Result<(), StorageError> {
        debug!("Changing language to {}", language);
        self.storage.set_item(LANGUAGE_STORAGE_KEY, language.code())?;

        match self.current.write() {
            Ok(mut guard) => *guard = language,
            Err(poisoned) => *poisoned.into_inner() = language,
        }

        Ok(())
    }
}
