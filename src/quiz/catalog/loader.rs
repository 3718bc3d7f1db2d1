use super::{
    CharacterRoster, CharacterStyleEntry, Energy, PersonaCatalog, PersonaId, Style,
    TeachingPersona,
};
use crate::config::QuizConfig;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum CatalogLoadError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    InvalidRow { line: u64, reason: String },
}

impl std::fmt::Display for CatalogLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogLoadError::Io(err) => write!(f, "failed to read reference table: {}", err),
            CatalogLoadError::Csv(err) => write!(f, "invalid character roster CSV: {}", err),
            CatalogLoadError::Json(err) => write!(f, "invalid persona table JSON: {}", err),
            CatalogLoadError::InvalidRow { line, reason } => {
                write!(f, "character roster line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for CatalogLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogLoadError::Io(err) => Some(err),
            CatalogLoadError::Csv(err) => Some(err),
            CatalogLoadError::Json(err) => Some(err),
            CatalogLoadError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogLoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogLoadError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for CatalogLoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl CharacterRoster {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads `id,persona_id,name,work,tagline,voice_profile,energy,style,sort_order` rows.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut entries = Vec::new();

        // Line 1 is the header row.
        for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
            let row = record?;
            entries.push(row.into_entry(index as u64 + 2)?);
        }

        Ok(Self::new(entries))
    }
}

impl PersonaCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads a JSON array of personas.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogLoadError> {
        let personas: Vec<TeachingPersona> = serde_json::from_reader(reader)?;
        Ok(Self::new(personas))
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    persona_id: String,
    name: String,
    #[serde(default)]
    work: String,
    #[serde(default)]
    tagline: String,
    #[serde(default)]
    voice_profile: String,
    energy: String,
    style: String,
    sort_order: u32,
}

impl RosterRow {
    fn into_entry(self, line: u64) -> Result<CharacterStyleEntry, CatalogLoadError> {
        let energy = Energy::parse(&self.energy).ok_or_else(|| CatalogLoadError::InvalidRow {
            line,
            reason: format!("unknown energy '{}' for {}", self.energy, self.id),
        })?;
        let style = Style::parse(&self.style).ok_or_else(|| CatalogLoadError::InvalidRow {
            line,
            reason: format!("unknown style '{}' for {}", self.style, self.id),
        })?;

        Ok(CharacterStyleEntry {
            id: self.id,
            persona_id: PersonaId::new(self.persona_id),
            name: self.name,
            work: self.work,
            tagline: self.tagline,
            voice_profile: self.voice_profile,
            energy,
            style,
            sort_order: self.sort_order,
        })
    }
}

/// Persona and character tables resolved for a running service.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub personas: PersonaCatalog,
    pub characters: CharacterRoster,
}

impl ReferenceTables {
    pub fn standard() -> Self {
        Self {
            personas: PersonaCatalog::standard(),
            characters: CharacterRoster::standard(),
        }
    }

    /// Loads configured files, falling back to the bundled tables for anything unset.
    pub fn load(config: &QuizConfig) -> Result<Self, CatalogLoadError> {
        let personas = match &config.persona_table {
            Some(path) => {
                let catalog = PersonaCatalog::from_path(path)?;
                info!(path = %path.display(), personas = catalog.len(), "loaded persona table");
                catalog
            }
            None => PersonaCatalog::standard(),
        };

        let characters = match &config.character_roster {
            Some(path) => {
                let roster = CharacterRoster::from_path(path)?;
                info!(path = %path.display(), characters = roster.len(), "loaded character roster");
                roster
            }
            None => CharacterRoster::standard(),
        };

        Ok(Self {
            personas,
            characters,
        })
    }
}
