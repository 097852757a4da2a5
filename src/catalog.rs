//! Translation catalog data model and payload parsing.
//!
//! The remote service exports a flat JSON array of records. Each record
//! carries a term, an optional context (the empty string is the default,
//! global namespace) and a definition that is either plain text or a set of
//! CLDR plural forms. Records are partitioned into context groups in payload
//! encounter order before rendering.

use serde::{Deserialize, Deserializer};

/// CLDR plural categories, in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralForm {
    pub const ALL: [PluralForm; 6] = [
        PluralForm::Zero,
        PluralForm::One,
        PluralForm::Two,
        PluralForm::Few,
        PluralForm::Many,
        PluralForm::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PluralForm::Zero => "zero",
            PluralForm::One => "one",
            PluralForm::Two => "two",
            PluralForm::Few => "few",
            PluralForm::Many => "many",
            PluralForm::Other => "other",
        }
    }
}

/// Plural definition with possibly missing forms.
///
/// Whether an absent form renders as an empty entry or is omitted entirely
/// is up to each renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PluralForms {
    #[serde(default)]
    pub zero: Option<String>,
    #[serde(default)]
    pub one: Option<String>,
    #[serde(default)]
    pub two: Option<String>,
    #[serde(default)]
    pub few: Option<String>,
    #[serde(default)]
    pub many: Option<String>,
    #[serde(default)]
    pub other: Option<String>,
}

impl PluralForms {
    pub fn get(&self, form: PluralForm) -> Option<&str> {
        match form {
            PluralForm::Zero => self.zero.as_deref(),
            PluralForm::One => self.one.as_deref(),
            PluralForm::Two => self.two.as_deref(),
            PluralForm::Few => self.few.as_deref(),
            PluralForm::Many => self.many.as_deref(),
            PluralForm::Other => self.other.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Definition {
    Plain(String),
    Plural(PluralForms),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslationRecord {
    pub term: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub context: String,
    /// `None` for records the service exported with a null definition;
    /// renderers skip these.
    #[serde(default)]
    pub definition: Option<Definition>,
}

impl TranslationRecord {
    /// Plain definition text, if this record has one.
    pub fn plain_text(&self) -> Option<&str> {
        match &self.definition {
            Some(Definition::Plain(text)) => Some(text),
            _ => None,
        }
    }

    pub fn is_plural(&self) -> bool {
        matches!(self.definition, Some(Definition::Plural(_)))
    }
}

/// The service encodes "no context" as either null or "".
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Parse a raw exported payload into catalog order records.
///
/// The printf-token rewrite (see [`crate::render::Format`]) must already have
/// been applied to `raw`.
pub fn parse_records(raw: &str) -> Result<Vec<TranslationRecord>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Context groups in payload encounter order.
///
/// The grouping is order-preserving on purpose: the payload defines both the
/// group order and the record order within each group.
#[derive(Debug, Default)]
pub struct ContextGroups {
    groups: Vec<(String, Vec<TranslationRecord>)>,
}

impl ContextGroups {
    pub fn partition(records: Vec<TranslationRecord>) -> Self {
        let mut groups: Vec<(String, Vec<TranslationRecord>)> = Vec::new();
        for record in records {
            match groups.iter_mut().find(|(context, _)| *context == record.context) {
                Some((_, items)) => items.push(record),
                None => groups.push((record.context.clone(), vec![record])),
            }
        }
        ContextGroups { groups }
    }

    /// Records of the default ("") context, or an empty slice.
    pub fn default_group(&self) -> &[TranslationRecord] {
        self.groups
            .iter()
            .find(|(context, _)| context.is_empty())
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    /// True if at least one non-default context group exists.
    pub fn has_contexts(&self) -> bool {
        self.groups.iter().any(|(context, _)| !context.is_empty())
    }

    /// Drop every non-default group.
    pub fn retain_default(&mut self) {
        self.groups.retain(|(context, _)| context.is_empty());
    }

    /// Mutable view of the non-default groups, in encounter order.
    pub fn contexts_mut(&mut self) -> impl Iterator<Item = (&str, &mut Vec<TranslationRecord>)> {
        self.groups
            .iter_mut()
            .filter(|(context, _)| !context.is_empty())
            .map(|(context, items)| (context.as_str(), items))
    }

    /// All groups for rendering: default first, then the rest in encounter
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TranslationRecord])> {
        let default = self
            .groups
            .iter()
            .filter(|(context, _)| context.is_empty());
        let contexts = self
            .groups
            .iter()
            .filter(|(context, _)| !context.is_empty());
        default
            .chain(contexts)
            .map(|(context, items)| (context.as_str(), items.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_plain_records() {
        let records = parse_records(
            r#"[
                {"term": "greeting", "definition": "Hi, %s!", "context": ""},
                {"term": "welcome", "definition": "Welcome!", "context": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].term, "greeting");
        assert_eq!(records[0].plain_text(), Some("Hi, %s!"));
        assert_eq!(records[1].context, "");
    }

    #[test]
    fn test_parse_plural_record() {
        let records = parse_records(
            r#"[{"term": "apples", "context": "", "definition": {"one": "an apple", "other": "%d apples"}}]"#,
        )
        .unwrap();

        assert!(records[0].is_plural());
        let Some(Definition::Plural(forms)) = &records[0].definition else {
            panic!("expected plural definition");
        };
        assert_eq!(forms.get(PluralForm::One), Some("an apple"));
        assert_eq!(forms.get(PluralForm::Other), Some("%d apples"));
        assert_eq!(forms.get(PluralForm::Zero), None);
    }

    #[test]
    fn test_parse_null_definition() {
        let records =
            parse_records(r#"[{"term": "ghost", "context": "", "definition": null}]"#).unwrap();
        assert_eq!(records[0].definition, None);
    }

    #[test]
    fn test_partition_preserves_encounter_order() {
        let records = parse_records(
            r#"[
                {"term": "a", "definition": "A", "context": "ctx2"},
                {"term": "b", "definition": "B", "context": ""},
                {"term": "c", "definition": "C", "context": "ctx1"},
                {"term": "d", "definition": "D", "context": "ctx2"}
            ]"#,
        )
        .unwrap();

        let groups = ContextGroups::partition(records);
        let order: Vec<&str> = groups.iter().map(|(context, _)| context).collect();
        // Default always renders first, then contexts as encountered.
        assert_eq!(order, vec!["", "ctx2", "ctx1"]);

        let ctx2: Vec<&str> = groups
            .iter()
            .find(|(context, _)| *context == "ctx2")
            .map(|(_, items)| items.iter().map(|r| r.term.as_str()).collect())
            .unwrap();
        assert_eq!(ctx2, vec!["a", "d"]);
    }

    #[test]
    fn test_retain_default() {
        let records = parse_records(
            r#"[
                {"term": "a", "definition": "A", "context": ""},
                {"term": "b", "definition": "B", "context": "ctx"}
            ]"#,
        )
        .unwrap();

        let mut groups = ContextGroups::partition(records);
        assert!(groups.has_contexts());
        groups.retain_default();
        assert!(!groups.has_contexts());
        assert_eq!(groups.default_group().len(), 1);
    }

    #[test]
    fn test_default_group_missing() {
        let records =
            parse_records(r#"[{"term": "a", "definition": "A", "context": "ctx"}]"#).unwrap();
        let groups = ContextGroups::partition(records);
        assert!(groups.default_group().is_empty());
    }
}
