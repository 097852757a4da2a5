//! Cross-context placeholder substitution.
//!
//! Definitions in the default context may reference other terms with `$name`
//! tokens. Before rendering, every default item that contains at least one
//! token is copied into each non-default context group (unless the group
//! already defines the term), with each token replaced by the referenced
//! term's plain definition. The destination group is consulted first so a
//! context can supply its own value for a shared template; the default group
//! is the fallback pool. Resolution is a single pass over the original
//! groups: copied items are never re-resolved and an unknown reference stays
//! literal.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::catalog::{Definition, TranslationRecord};

/// `$` followed by 3+ lowercase letters or underscores. Shorter or
/// non-lowercase sequences are not tokens.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$[a-z_]{3,}").unwrap());

/// Augment `group` (the records of context `context`) with resolved copies of
/// the placeholder-bearing items from `defaults`.
pub fn resolve_into(defaults: &[TranslationRecord], context: &str, group: &mut Vec<TranslationRecord>) {
    let mut resolved = Vec::new();

    for item in defaults {
        let Some(text) = item.plain_text() else {
            continue;
        };
        if !PLACEHOLDER.is_match(text) {
            continue;
        }
        // The destination's own definition wins over the default copy.
        if group.iter().any(|record| record.term == item.term) {
            continue;
        }

        let replaced = PLACEHOLDER.replace_all(text, |caps: &Captures<'_>| {
            let token = &caps[0];
            let name = &token[1..];
            lookup(group, defaults, name)
                .map(str::to_owned)
                .unwrap_or_else(|| token.to_owned())
        });

        resolved.push(TranslationRecord {
            term: item.term.clone(),
            context: context.to_owned(),
            definition: Some(Definition::Plain(replaced.into_owned())),
        });
    }

    group.extend(resolved);
}

fn lookup<'a>(
    group: &'a [TranslationRecord],
    defaults: &'a [TranslationRecord],
    name: &str,
) -> Option<&'a str> {
    group
        .iter()
        .chain(defaults)
        .find(|record| record.term == name)
        .and_then(TranslationRecord::plain_text)
}
