//! Glyph set loading.
//!
//! The terminal has no fonts to load, but it may not be able to draw the
//! Unicode glyphs we prefer. Resolving the glyph set is the one asset step
//! of startup; any problem degrades to plain ASCII with a warning.

use crate::error::VizError;

/// Available glyph styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphStyle {
    Unicode,
    Ascii,
}

/// Characters used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub style: GlyphStyle,
    /// One mark per block in a histogram bucket
    pub bar: &'static str,
    /// Fill for allocated blocks
    pub fill: &'static str,
    /// Marker in front of the armed toolbar button label
    pub marker: &'static str,
}

impl GlyphSet {
    pub const UNICODE: GlyphSet = GlyphSet {
        style: GlyphStyle::Unicode,
        bar: "▮",
        fill: "█",
        marker: "▸",
    };

    pub const ASCII: GlyphSet = GlyphSet {
        style: GlyphStyle::Ascii,
        bar: "|",
        fill: "#",
        marker: ">",
    };

    /// Look up a glyph set by name.
    pub fn by_name(name: &str) -> Result<Self, VizError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "unicode" | "utf8" | "utf-8" => Ok(Self::UNICODE),
            "ascii" => Ok(Self::ASCII),
            other => Err(VizError::Asset {
                name: "glyphs".to_string(),
                message: format!("unknown glyph style `{}`", other),
            }),
        }
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::ASCII
    }
}

/// Resolve the glyph set for this session. Never fails.
///
/// With no explicit request, the locale decides: UTF-8 locales get the
/// Unicode set, everything else falls back to ASCII.
pub fn load_glyphs(requested: Option<&str>) -> GlyphSet {
    match requested {
        Some(name) => match GlyphSet::by_name(name) {
            Ok(glyphs) => {
                tracing::debug!("Using requested glyph set {:?}", glyphs.style);
                glyphs
            }
            Err(err) => {
                tracing::warn!("{} ({}); falling back to ASCII glyphs", err, err.error_code());
                GlyphSet::ASCII
            }
        },
        None => {
            let locale = current_locale();
            if locale_supports_utf8(locale.as_deref()) {
                GlyphSet::UNICODE
            } else {
                tracing::warn!(
                    "Locale {:?} does not advertise UTF-8; falling back to ASCII glyphs",
                    locale
                );
                GlyphSet::ASCII
            }
        }
    }
}

/// First non-empty of `LC_ALL`, `LC_CTYPE`, `LANG`.
fn current_locale() -> Option<String> {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.is_empty())
}

fn locale_supports_utf8(locale: Option<&str>) -> bool {
    locale.is_some_and(|l| {
        let l = l.to_ascii_lowercase();
        l.contains("utf-8") || l.contains("utf8")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(GlyphSet::by_name("unicode").unwrap(), GlyphSet::UNICODE);
        assert_eq!(GlyphSet::by_name(" ASCII ").unwrap(), GlyphSet::ASCII);
        assert!(GlyphSet::by_name("wingdings").is_err());
    }

    #[test]
    fn test_requested_glyphs() {
        assert_eq!(load_glyphs(Some("ascii")), GlyphSet::ASCII);
        assert_eq!(load_glyphs(Some("utf8")), GlyphSet::UNICODE);
    }

    #[test]
    fn test_unknown_style_falls_back_to_ascii() {
        assert_eq!(load_glyphs(Some("comic-sans")), GlyphSet::ASCII);
    }

    #[test]
    fn test_locale_detection() {
        assert!(locale_supports_utf8(Some("en_US.UTF-8")));
        assert!(locale_supports_utf8(Some("C.utf8")));
        assert!(!locale_supports_utf8(Some("C")));
        assert!(!locale_supports_utf8(Some("POSIX")));
        assert!(!locale_supports_utf8(None));
    }
}
