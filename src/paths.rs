//! Destination path resolution.
//!
//! Templates contain `{LANGUAGE}` and, for context-scoped templates,
//! `{CONTEXT}` tokens that are replaced by literal substring substitution.
//! Per-language override maps fully replace the generic template for that
//! language. Resolution is pure: it returns `None` when no destination is
//! configured and never touches the filesystem.

use crate::config::Config;

/// Whether an artifact targets singular-form or plural-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plurality {
    Singular,
    Plural,
}

#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    config: &'a Config,
}

impl<'a> PathResolver<'a> {
    pub fn new(config: &'a Config) -> Self {
        PathResolver { config }
    }

    /// Resolve the destination for a (context, language, plurality) triple.
    pub fn resolve(&self, context: &str, language: &str, plurality: Plurality) -> Option<String> {
        match (context.is_empty(), plurality) {
            (true, Plurality::Singular) => self
                .config
                .path_replace
                .get(language)
                .cloned()
                .or_else(|| {
                    self.config
                        .path
                        .as_deref()
                        .map(|template| fill_language(template, language))
                }),
            // The plural template has no per-language override map.
            (true, Plurality::Plural) => self
                .config
                .path_plural
                .as_deref()
                .map(|template| fill_language(template, language)),
            (false, Plurality::Singular) => self
                .config
                .context_path_replace
                .get(language)
                .map(|template| fill_context(template, context))
                .or_else(|| {
                    self.config
                        .context_path
                        .as_deref()
                        .map(|template| fill_context(&fill_language(template, language), context))
                }),
            (false, Plurality::Plural) => self
                .config
                .context_path_plural
                .as_deref()
                .map(|template| fill_context(&fill_language(template, language), context)),
        }
    }
}

fn fill_language(template: &str, language: &str) -> String {
    template.replace("{LANGUAGE}", language)
}

fn fill_context(template: &str, context: &str) -> String {
    template.replace("{CONTEXT}", context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Format;
    use pretty_assertions::assert_eq;

    fn base_config() -> Config {
        Config {
            api_token: "TEST".to_owned(),
            project_id: "12345".to_owned(),
            format: Format::AppleStrings,
            tags: Vec::new(),
            filters: Vec::new(),
            languages: vec!["en".to_owned()],
            language_alias: Default::default(),
            path: Some("out/{LANGUAGE}/s.txt".to_owned()),
            path_replace: Default::default(),
            path_plural: None,
            context_path: None,
            context_path_replace: Default::default(),
            context_path_plural: None,
            header: None,
        }
    }

    #[test]
    fn test_default_context_template_substitution() {
        let config = base_config();
        let resolver = PathResolver::new(&config);
        assert_eq!(
            resolver.resolve("", "fr", Plurality::Singular),
            Some("out/fr/s.txt".to_owned())
        );
    }

    #[test]
    fn test_default_context_override_wins() {
        let mut config = base_config();
        config
            .path_replace
            .insert("en".to_owned(), "out/en/special.txt".to_owned());
        let resolver = PathResolver::new(&config);

        assert_eq!(
            resolver.resolve("", "en", Plurality::Singular),
            Some("out/en/special.txt".to_owned())
        );
        assert_eq!(
            resolver.resolve("", "fr", Plurality::Singular),
            Some("out/fr/s.txt".to_owned())
        );
    }

    #[test]
    fn test_no_path_at_all_is_undefined() {
        let mut config = base_config();
        config.path = None;
        let resolver = PathResolver::new(&config);
        assert_eq!(resolver.resolve("", "en", Plurality::Singular), None);
    }

    #[test]
    fn test_plural_uses_plural_template_only() {
        let mut config = base_config();
        config.path_plural = Some("out/{LANGUAGE}/p.txt".to_owned());
        config
            .path_replace
            .insert("en".to_owned(), "out/en/special.txt".to_owned());
        let resolver = PathResolver::new(&config);

        // path_replace applies to singular only.
        assert_eq!(
            resolver.resolve("", "en", Plurality::Plural),
            Some("out/en/p.txt".to_owned())
        );
    }

    #[test]
    fn test_plural_unconfigured_is_undefined() {
        let config = base_config();
        let resolver = PathResolver::new(&config);
        assert_eq!(resolver.resolve("", "en", Plurality::Plural), None);
    }

    #[test]
    fn test_context_template_substitutes_both_tokens() {
        let mut config = base_config();
        config.context_path = Some("out/{CONTEXT}/{LANGUAGE}/s.txt".to_owned());
        let resolver = PathResolver::new(&config);
        assert_eq!(
            resolver.resolve("shared", "nl", Plurality::Singular),
            Some("out/shared/nl/s.txt".to_owned())
        );
    }

    #[test]
    fn test_context_override_substitutes_context_only() {
        let mut config = base_config();
        config.context_path = Some("out/{CONTEXT}/{LANGUAGE}/s.txt".to_owned());
        config
            .context_path_replace
            .insert("en".to_owned(), "out/{CONTEXT}/base/s.txt".to_owned());
        let resolver = PathResolver::new(&config);
        assert_eq!(
            resolver.resolve("shared", "en", Plurality::Singular),
            Some("out/shared/base/s.txt".to_owned())
        );
    }

    #[test]
    fn test_context_without_template_or_override_is_undefined() {
        let config = base_config();
        let resolver = PathResolver::new(&config);
        assert_eq!(resolver.resolve("shared", "en", Plurality::Singular), None);
        assert_eq!(resolver.resolve("shared", "en", Plurality::Plural), None);
    }

    #[test]
    fn test_context_plural_has_no_override_map() {
        let mut config = base_config();
        config
            .context_path_replace
            .insert("en".to_owned(), "out/{CONTEXT}/base/s.txt".to_owned());
        config.context_path_plural = Some("out/{CONTEXT}/{LANGUAGE}/p.txt".to_owned());
        let resolver = PathResolver::new(&config);
        assert_eq!(
            resolver.resolve("shared", "en", Plurality::Plural),
            Some("out/shared/en/p.txt".to_owned())
        );
    }

    #[test]
    fn test_token_replacement_is_literal_and_global() {
        let mut config = base_config();
        config.path = Some("{LANGUAGE}/{LANGUAGE}.strings".to_owned());
        let resolver = PathResolver::new(&config);
        assert_eq!(
            resolver.resolve("", "ko", Plurality::Singular),
            Some("ko/ko.strings".to_owned())
        );
    }
}
