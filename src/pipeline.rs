//! The export pipeline.
//!
//! Languages are processed strictly in configured order; within a language,
//! contexts in payload encounter order (default first); within a context,
//! records in catalog order. One flow per language:
//!
//! fetch -> printf-token rewrite -> parse -> group by context ->
//! placeholder pass -> render -> resolve path -> write -> alias fan-out.
//!
//! Write policy: a write never creates a file. An existing destination is
//! overwritten and reported; a missing one is a reported, non-fatal skip. An
//! unresolvable destination is fatal only for the default-context singular
//! artifact; optional artifacts (contexts, plurals) skip instead.

use crate::catalog::{self, ContextGroups, TranslationRecord};
use crate::config::Config;
use crate::error::PullError;
use crate::paths::{PathResolver, Plurality};
use crate::placeholder;
use crate::remote::TranslationSource;
use crate::render::{Render, Renderer};
use crate::reporter::Reporter;
use crate::sink::FileSink;

pub struct ExportPipeline<'a> {
    config: &'a Config,
    source: &'a dyn TranslationSource,
    sink: &'a mut dyn FileSink,
    reporter: &'a mut dyn Reporter,
}

impl<'a> ExportPipeline<'a> {
    pub fn new(
        config: &'a Config,
        source: &'a dyn TranslationSource,
        sink: &'a mut dyn FileSink,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        ExportPipeline {
            config,
            source,
            sink,
            reporter,
        }
    }

    /// Pull every configured language. The first fatal error unwinds the
    /// whole run; skips do not.
    pub fn pull(&mut self) -> Result<(), PullError> {
        self.reporter.pull_started();
        let config = self.config;
        for language in &config.languages {
            self.reporter.exporting(language);
            self.pull_language(language)?;
        }
        Ok(())
    }

    fn pull_language(&mut self, language: &str) -> Result<(), PullError> {
        let config = self.config;
        let raw = self
            .source
            .fetch(language, &config.tags, &config.filters)?;
        let raw = config.format.rewrite_printf_tokens(&raw);
        let records = catalog::parse_records(&raw).map_err(|source| PullError::Payload {
            language: language.to_owned(),
            source,
        })?;
        let mut groups = ContextGroups::partition(records);

        if groups.has_contexts() {
            if config.has_context_path() {
                let defaults = groups.default_group().to_vec();
                for (context, records) in groups.contexts_mut() {
                    placeholder::resolve_into(&defaults, context, records);
                }
            } else {
                // No context destination of any kind: only the default
                // context is exported.
                groups.retain_default();
            }
        }

        let singular = config.format.singular_renderer(config.header.as_deref());
        let plural = self.plural_renderer();

        for (context, records) in groups.iter() {
            let content = singular.render(records);
            self.place(context, language, Plurality::Singular, &content)?;

            if let Some(plural_renderer) = &plural {
                // Plain-only groups produce no plural artifact.
                if records.iter().any(TranslationRecord::is_plural) {
                    let content = plural_renderer.render(records);
                    self.place(context, language, Plurality::Plural, &content)?;
                }
            }
        }
        Ok(())
    }

    /// Plural rendering runs only when the format keeps plurals in a
    /// separate artifact and a plural path template is configured.
    fn plural_renderer(&self) -> Option<Renderer> {
        let config = self.config;
        if config.path_plural.is_none() && config.context_path_plural.is_none() {
            return None;
        }
        config.format.plural_renderer()
    }

    /// Resolve the destination, write, and replicate to alias languages.
    fn place(
        &mut self,
        context: &str,
        language: &str,
        plurality: Plurality,
        content: &str,
    ) -> Result<(), PullError> {
        let config = self.config;
        let resolver = PathResolver::new(config);

        match resolver.resolve(context, language, plurality) {
            Some(path) => self.write(&path, content)?,
            None => {
                if context.is_empty() && plurality == Plurality::Singular {
                    return Err(PullError::UndefinedPath {
                        language: language.to_owned(),
                    });
                }
                self.reporter.no_destination(context, language);
                return Ok(());
            }
        }

        for (alias, alias_source) in &config.language_alias {
            if alias_source != language {
                continue;
            }
            match resolver.resolve(context, alias, plurality) {
                Some(path) => self.write(&path, content)?,
                None => self.reporter.no_destination(context, alias),
            }
        }
        Ok(())
    }

    fn write(&mut self, path: &str, content: &str) -> Result<(), PullError> {
        if !self.sink.exists(path) {
            self.reporter.file_missing(path);
            return Ok(());
        }
        self.sink.write(path, content)?;
        self.reporter.saved(path);
        Ok(())
    }
}
