use std::{
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use usvg::fontdb;

use crate::foundation::error::{BackdropError, BackdropResult};

/// Generic or named family requested from a [`FontResolver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontFamilyQuery {
    /// Any fixed-pitch family.
    Monospace,
    /// A specific family name.
    Named(String),
}

/// Family and weight lookup for a font face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontQuery {
    /// Requested family.
    pub family: FontFamilyQuery,
    /// CSS-style numeric weight (400 regular, 700 bold).
    pub weight: u16,
}

impl FontQuery {
    /// The query used for diagnostic labels.
    pub fn monospace_bold() -> Self {
        Self {
            family: FontFamilyQuery::Monospace,
            weight: fontdb::Weight::BOLD.0,
        }
    }
}

/// A font face resolved to concrete bytes.
#[derive(Clone)]
pub struct ResolvedFont {
    /// Primary family name reported by the face.
    pub family: String,
    /// Raw font file bytes (TTF/OTF/TTC).
    pub data: Arc<Vec<u8>>,
    /// Face index inside a collection file.
    pub face_index: u32,
    /// Numeric weight of the face.
    pub weight: u16,
    /// Where the bytes came from, if they were read from disk.
    pub source: Option<PathBuf>,
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedFont")
            .field("family", &self.family)
            .field("data_len", &self.data.len())
            .field("face_index", &self.face_index)
            .field("weight", &self.weight)
            .field("source", &self.source)
            .finish()
    }
}

/// Capability that turns a [`FontQuery`] into font bytes.
///
/// Host font discovery and bundled font files both sit behind this trait so label rendering
/// never depends on how the font was found.
pub trait FontResolver {
    /// Resolve `query` to a concrete face, or fail with [`BackdropError::FontResolution`].
    fn resolve(&self, query: &FontQuery) -> BackdropResult<ResolvedFont>;
}

/// Resolves fonts installed on the host through `fontdb`.
///
/// The host's font directories are scanned on the first [`FontResolver::resolve`] call, so runs
/// that never draw labels never pay for the scan.
#[derive(Clone, Default)]
pub struct SystemFontResolver {
    db: OnceLock<fontdb::Database>,
}

impl std::fmt::Debug for SystemFontResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemFontResolver")
            .field("faces", &self.db.get().map(fontdb::Database::len))
            .finish()
    }
}

impl SystemFontResolver {
    /// Resolver backed by the host's installed fonts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve against an already populated database instead of scanning the host.
    pub fn from_database(db: fontdb::Database) -> Self {
        Self {
            db: OnceLock::from(db),
        }
    }

    fn database(&self) -> &fontdb::Database {
        self.db.get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!("system font database holds {} faces", db.len());
            db
        })
    }

    fn select(&self, db: &fontdb::Database, query: &FontQuery) -> Option<fontdb::ID> {
        let family = match &query.family {
            FontFamilyQuery::Monospace => fontdb::Family::Monospace,
            FontFamilyQuery::Named(name) => fontdb::Family::Name(name),
        };
        let families = [family];
        let q = fontdb::Query {
            families: &families,
            weight: fontdb::Weight(query.weight),
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        if let Some(id) = db.query(&q) {
            return Some(id);
        }

        // The generic monospace alias only names one family; fall back to any face that
        // declares itself fixed-pitch, closest weight first.
        if query.family == FontFamilyQuery::Monospace {
            return db
                .faces()
                .filter(|f| f.monospaced)
                .min_by_key(|f| {
                    (
                        f.style != fontdb::Style::Normal,
                        f.weight.0.abs_diff(query.weight),
                    )
                })
                .map(|f| f.id);
        }
        None
    }
}

impl FontResolver for SystemFontResolver {
    fn resolve(&self, query: &FontQuery) -> BackdropResult<ResolvedFont> {
        let db = self.database();
        let id = self.select(db, query).ok_or_else(|| {
            BackdropError::font_resolution(format!(
                "no installed font matches {:?} weight {}",
                query.family, query.weight
            ))
        })?;
        resolved_from_db(db, id)
    }
}

/// Resolves every query to one bundled font file.
#[derive(Clone, Debug)]
pub struct FileFontResolver {
    path: PathBuf,
}

impl FileFontResolver {
    /// Use the font file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the bundled font.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FontResolver for FileFontResolver {
    fn resolve(&self, _query: &FontQuery) -> BackdropResult<ResolvedFont> {
        let bytes = std::fs::read(&self.path).map_err(|e| {
            BackdropError::font_resolution(format!(
                "read font file '{}': {e}",
                self.path.display()
            ))
        })?;

        let mut db = fontdb::Database::new();
        db.load_font_data(bytes);
        let id = db.faces().next().map(|f| f.id).ok_or_else(|| {
            BackdropError::font_resolution(format!(
                "'{}' contains no usable font faces",
                self.path.display()
            ))
        })?;

        let mut font = resolved_from_db(&db, id)?;
        font.source = Some(self.path.clone());
        Ok(font)
    }
}

fn resolved_from_db(db: &fontdb::Database, id: fontdb::ID) -> BackdropResult<ResolvedFont> {
    let face = db
        .face(id)
        .ok_or_else(|| BackdropError::font_resolution("font face vanished from database"))?;
    let family = face
        .families
        .first()
        .map(|(name, _)| name.clone())
        .ok_or_else(|| BackdropError::font_resolution("font face has no family name"))?;
    let weight = face.weight.0;
    let source = match &face.source {
        fontdb::Source::File(path) => Some(path.clone()),
        _ => None,
    };

    let (data, face_index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| {
            BackdropError::font_resolution(format!("font data for '{family}' is unreadable"))
        })?;

    tracing::debug!("resolved font family '{family}'");
    Ok(ResolvedFont {
        family,
        data: Arc::new(data),
        face_index,
        weight,
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
