//! Format renderers.
//!
//! Each configured output type maps to one renderer for singular strings and,
//! where the format keeps plural strings in a separate artifact, one for
//! plural strings. Rendering is pure text generation; path resolution and
//! writing happen in the pipeline.

mod android;
mod apple;
mod source_table;

use std::borrow::Cow;
use std::sync::LazyLock;

use enum_dispatch::enum_dispatch;
use regex::Regex;
use serde::Deserialize;

pub use android::AndroidStringsRenderer;
pub use apple::{AppleStringsDictRenderer, AppleStringsRenderer};
pub use source_table::SourceTableRenderer;

use crate::catalog::TranslationRecord;

/// Renders one placeholder-resolved context group into format-specific text.
///
/// Records without a definition are skipped; records whose plurality does not
/// match the renderer (for example a plural record in the `.strings` pass)
/// are skipped as well.
#[enum_dispatch]
pub trait Render {
    fn render(&self, records: &[TranslationRecord]) -> String;
}

/// Closed set of renderers. New output formats are added here as variants,
/// not as branches inside the pipeline.
#[enum_dispatch(Render)]
#[derive(Debug)]
pub enum Renderer {
    AppleStrings(AppleStringsRenderer),
    AppleStringsDict(AppleStringsDictRenderer),
    AndroidStrings(AndroidStringsRenderer),
    SourceTable(SourceTableRenderer),
}

/// Configured output type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    AppleStrings,
    AndroidStrings,
    SourceTable,
}

/// `%s` / `%1$s` style tokens.
static PRINTF_STRING_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(%(\d+\$)?)s").unwrap());
/// `%@` / `%1$@` style tokens.
static PRINTF_OBJECT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(%(\d+\$)?)@").unwrap());

impl Format {
    /// Renderer for the singular artifact of this format.
    ///
    /// `header` is the optional generated-file header; only the source table
    /// emits it.
    pub fn singular_renderer(self, header: Option<&str>) -> Renderer {
        match self {
            Format::AppleStrings => AppleStringsRenderer.into(),
            Format::AndroidStrings => AndroidStringsRenderer.into(),
            Format::SourceTable => SourceTableRenderer {
                header: header.map(str::to_owned),
            }
            .into(),
        }
    }

    /// Renderer for the plural artifact, if this format keeps plural strings
    /// in a separate file. Android inlines `<plurals>` into the singular
    /// document and the source table ignores plurality.
    pub fn plural_renderer(self) -> Option<Renderer> {
        match self {
            Format::AppleStrings => Some(AppleStringsDictRenderer.into()),
            Format::AndroidStrings | Format::SourceTable => None,
        }
    }

    /// Rewrite printf-style placeholders in a raw exported payload.
    ///
    /// Applied once to the whole language payload before JSON parsing:
    /// `%s`-style tokens become `%@` for Apple output, and `%@`-style tokens
    /// become `%s` for Android and source-table output.
    pub fn rewrite_printf_tokens<'a>(self, raw: &'a str) -> Cow<'a, str> {
        match self {
            Format::AppleStrings => PRINTF_STRING_TOKEN.replace_all(raw, "${1}@"),
            Format::AndroidStrings | Format::SourceTable => {
                PRINTF_OBJECT_TOKEN.replace_all(raw, "${1}s")
            }
        }
    }
}

/// Minimal XML text escaping for plist output.
pub(crate) fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rewrite_for_apple() {
        let raw = r#"[{"term": "greeting", "definition": "Hi, %s! You are %1$s."}]"#;
        assert_eq!(
            Format::AppleStrings.rewrite_printf_tokens(raw),
            r#"[{"term": "greeting", "definition": "Hi, %@! You are %1$@."}]"#
        );
    }

    #[test]
    fn test_rewrite_for_android() {
        let raw = r#"Hi, %@! You are %1$@."#;
        assert_eq!(
            Format::AndroidStrings.rewrite_printf_tokens(raw),
            "Hi, %s! You are %1$s."
        );
    }

    #[test]
    fn test_rewrites_are_inverses_on_printf_tokens() {
        let original = "a %s b %1$s c %12$s";
        let apple = Format::AppleStrings.rewrite_printf_tokens(original);
        let back = Format::AndroidStrings.rewrite_printf_tokens(&apple);
        assert_eq!(back, original);
    }

    #[test]
    fn test_rewrite_leaves_other_tokens_alone() {
        let raw = "%d items, 100%s off";
        assert_eq!(
            Format::AppleStrings.rewrite_printf_tokens(raw),
            "%d items, 100%@ off"
        );
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("a & b < c > d"), "a &amp; b &lt; c &gt; d");
    }
}
