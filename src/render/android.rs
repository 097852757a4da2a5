//! Android `strings.xml` rendering.

use crate::catalog::{Definition, PluralForm, TranslationRecord};

use super::Render;

/// Renders a context group as a `<resources>` document. Plain records become
/// `<string>` elements, plural records become `<plurals>` with one `<item>`
/// per present form; absent forms are omitted entirely.
#[derive(Debug, Default)]
pub struct AndroidStringsRenderer;

impl Render for AndroidStringsRenderer {
    fn render(&self, records: &[TranslationRecord]) -> String {
        let mut content =
            String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n");
        for record in records {
            match &record.definition {
                Some(Definition::Plain(text)) => {
                    content.push_str(&format!(
                        "  <string name=\"{}\">\"{}\"</string>\n",
                        record.term,
                        escape(text)
                    ));
                }
                Some(Definition::Plural(forms)) => {
                    content.push_str(&format!("  <plurals name=\"{}\">\n", record.term));
                    for form in PluralForm::ALL {
                        if let Some(text) = forms.get(form) {
                            content.push_str(&format!(
                                "    <item quantity=\"{}\">\"{}\"</item>\n",
                                form.name(),
                                escape(text)
                            ));
                        }
                    }
                    content.push_str("  </plurals>\n");
                }
                None => {}
            }
        }
        content.push_str("</resources>\n");
        content
    }
}

/// Android resource escaping: ampersands are XML entities, double quotes get
/// a backslash so the surrounding literal quotes survive.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PluralForms;
    use pretty_assertions::assert_eq;

    fn plain(term: &str, text: &str) -> TranslationRecord {
        TranslationRecord {
            term: term.to_owned(),
            context: String::new(),
            definition: Some(Definition::Plain(text.to_owned())),
        }
    }

    #[test]
    fn test_plain_string_element() {
        let records = vec![plain("greeting", "Hi, %s!")];
        assert_eq!(
            AndroidStringsRenderer.render(&records),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <resources>\n  <string name=\"greeting\">\"Hi, %s!\"</string>\n</resources>\n"
        );
    }

    #[test]
    fn test_escapes_quotes_and_ampersands() {
        let records = vec![plain("mixed", r#"Tom & "Jerry""#)];
        let content = AndroidStringsRenderer.render(&records);
        assert!(content.contains(r#"<string name="mixed">"Tom &amp; \"Jerry\""</string>"#));
        // No bare ampersand may survive in the document body.
        assert!(!content.replace("&amp;", "").contains('&'));
    }

    #[test]
    fn test_plurals_omit_absent_forms() {
        let records = vec![TranslationRecord {
            term: "apples".to_owned(),
            context: String::new(),
            definition: Some(Definition::Plural(PluralForms {
                one: Some("an apple".to_owned()),
                other: Some("%d apples".to_owned()),
                ..Default::default()
            })),
        }];

        let content = AndroidStringsRenderer.render(&records);
        assert!(content.contains("<plurals name=\"apples\">"));
        assert!(content.contains("<item quantity=\"one\">\"an apple\"</item>"));
        assert!(content.contains("<item quantity=\"other\">\"%d apples\"</item>"));
        assert!(!content.contains("quantity=\"zero\""));
        assert!(!content.contains("quantity=\"few\""));
    }

    #[test]
    fn test_skips_null_definitions() {
        let records = vec![TranslationRecord {
            term: "ghost".to_owned(),
            context: String::new(),
            definition: None,
        }];
        assert_eq!(
            AndroidStringsRenderer.render(&records),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n</resources>\n"
        );
    }
}
