use std::path::PathBuf;
use std::sync::Arc;

use usvg::fontdb;

use crate::foundation::error::{TminusError, TminusResult};

/// DejaVu Sans, compiled into the binary so every host renders identical frames.
pub const EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Family name of [`EMBEDDED_FONT`].
pub const EMBEDDED_FAMILY: &str = "DejaVu Sans";

/// Where the countdown font comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FontSource {
    /// The bundled [`EMBEDDED_FONT`].
    #[default]
    Embedded,
    /// A TrueType/OpenType file on disk. Face 0 is used.
    Path(PathBuf),
    /// An installed system font, looked up by exact family name. Output then depends on the
    /// host's copy of that family.
    System {
        /// Family name.
        family: String,
    },
}

/// Raw font bytes plus the face index inside them.
#[derive(Clone, Debug)]
pub struct LoadedFont {
    /// Complete font file contents.
    pub bytes: Arc<Vec<u8>>,
    /// Face index within a collection file.
    pub index: u32,
    /// Family name reported by the system font database, when known.
    pub family_hint: Option<String>,
}

impl LoadedFont {
    /// Load a font from `source`.
    #[tracing::instrument]
    pub fn load(source: &FontSource) -> TminusResult<Self> {
        match source {
            FontSource::Embedded => Ok(Self {
                bytes: Arc::new(EMBEDDED_FONT.to_vec()),
                index: 0,
                family_hint: Some(EMBEDDED_FAMILY.to_string()),
            }),
            FontSource::Path(path) => {
                let bytes = std::fs::read(path).map_err(|e| {
                    TminusError::font(format!("read font '{}': {e}", path.display()))
                })?;
                if bytes.is_empty() {
                    return Err(TminusError::font(format!(
                        "font file '{}' is empty",
                        path.display()
                    )));
                }
                Ok(Self {
                    bytes: Arc::new(bytes),
                    index: 0,
                    family_hint: None,
                })
            }
            FontSource::System { family } => load_system(family),
        }
    }
}

fn load_system(family: &str) -> TminusResult<LoadedFont> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "loaded system font database");

    let id = db
        .query(&fontdb::Query {
            families: &[fontdb::Family::Name(family)],
            ..fontdb::Query::default()
        })
        .ok_or_else(|| TminusError::font(format!("no installed font family named '{family}'")))?;

    let family_hint = db
        .face(id)
        .and_then(|f| f.families.first().map(|(name, _)| name.clone()));
    let (bytes, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| TminusError::font("system font data is unavailable"))?;

    Ok(LoadedFont {
        bytes: Arc::new(bytes),
        index,
        family_hint,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
