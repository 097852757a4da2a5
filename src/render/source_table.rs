//! Generated source-code string table rendering.
//!
//! Emits a Kotlin object with one accessor per record: the snake_case term
//! becomes a camelCase property bound to a runtime lookup of the literal term,
//! with the definition as the compile-time fallback. Plurality is ignored;
//! plural records fall back to their `other` form.

use crate::catalog::{Definition, PluralForm, TranslationRecord};

use super::Render;

#[derive(Debug, Default)]
pub struct SourceTableRenderer {
    /// Literal first line of the generated file, if configured.
    pub header: Option<String>,
}

impl Render for SourceTableRenderer {
    fn render(&self, records: &[TranslationRecord]) -> String {
        let mut content = String::new();
        if let Some(header) = &self.header {
            content.push_str(header);
            content.push('\n');
        }
        content.push_str("object L10n {\n");
        for record in records {
            let fallback = match &record.definition {
                Some(Definition::Plain(text)) => text.as_str(),
                Some(Definition::Plural(forms)) => forms.get(PluralForm::Other).unwrap_or(""),
                None => continue,
            };
            content.push_str(&format!(
                "    val {}: String\n        get() = localized(\"{}\", \"{}\")\n",
                camel_case(&record.term),
                record.term,
                escape_literal(fallback)
            ));
        }
        content.push_str("}\n");
        content
    }
}

/// snake_case to camelCase: first segment lowercased, later segments
/// capitalized, all concatenated. Empty segments (doubled or leading
/// underscores) are dropped.
fn camel_case(term: &str) -> String {
    let mut out = String::new();
    for segment in term.split('_').filter(|s| !s.is_empty()) {
        let lower = segment.to_lowercase();
        if out.is_empty() {
            out.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
