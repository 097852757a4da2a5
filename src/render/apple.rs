//! Apple `.strings` and `.stringsdict` rendering.

use crate::catalog::{Definition, PluralForm, TranslationRecord};

use super::{Render, xml_escape};

/// Renders plain records as `"term" = "definition";` lines. Plural records
/// belong to the `.stringsdict` pass and are skipped here.
#[derive(Debug, Default)]
pub struct AppleStringsRenderer;

impl Render for AppleStringsRenderer {
    fn render(&self, records: &[TranslationRecord]) -> String {
        let mut content = String::new();
        for record in records {
            let Some(text) = record.plain_text() else {
                continue;
            };
            content.push_str(&format!(
                "\"{}\" = \"{}\";\n",
                record.term,
                escape_quotes(text)
            ));
        }
        content
    }
}

/// Renders plural records as a `.stringsdict` property list keyed by term.
/// Every plural category is emitted; absent forms become empty strings.
#[derive(Debug, Default)]
pub struct AppleStringsDictRenderer;

impl Render for AppleStringsDictRenderer {
    fn render(&self, records: &[TranslationRecord]) -> String {
        let mut content = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \
             \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n\
             <plist version=\"1.0\">\n\
             <dict>\n",
        );
        for record in records {
            let Some(Definition::Plural(forms)) = &record.definition else {
                continue;
            };
            content.push_str(&format!("  <key>{}</key>\n", xml_escape(&record.term)));
            content.push_str("  <dict>\n");
            content.push_str("    <key>NSStringLocalizedFormatKey</key>\n");
            content.push_str("    <string>%#@value@</string>\n");
            content.push_str("    <key>value</key>\n");
            content.push_str("    <dict>\n");
            content.push_str("      <key>NSStringFormatSpecTypeKey</key>\n");
            content.push_str("      <string>NSStringPluralRuleType</string>\n");
            content.push_str("      <key>NSStringFormatValueTypeKey</key>\n");
            content.push_str("      <string>d</string>\n");
            for form in PluralForm::ALL {
                let text = forms.get(form).unwrap_or("");
                content.push_str(&format!(
                    "      <key>{}</key>\n      <string>{}</string>\n",
                    form.name(),
                    xml_escape(text)
                ));
            }
            content.push_str("    </dict>\n");
            content.push_str("  </dict>\n");
        }
        content.push_str("</dict>\n</plist>\n");
        content
    }
}

fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}
