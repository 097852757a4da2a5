//! Remote localization service client.
//!
//! The service exports in two steps: a form POST to `projects/export` that
//! answers with a download URL, then a GET of that URL for the payload. The
//! pipeline only sees the [`TranslationSource`] trait so tests can feed it
//! canned payloads.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::PullError;

pub const DEFAULT_BASE_URL: &str = "https://api.poeditor.com/v2";

/// Fetches the raw exported catalog for one language.
pub trait TranslationSource {
    fn fetch(&self, language: &str, tags: &[String], filters: &[String])
    -> Result<String, PullError>;
}

#[derive(Debug)]
pub struct RemoteClient {
    api_token: String,
    project_id: String,
    base_url: String,
    http: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(api_token: &str, project_id: &str) -> Self {
        Self::with_base_url(api_token, project_id, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_token: &str, project_id: &str, base_url: &str) -> Self {
        RemoteClient {
            api_token: api_token.to_owned(),
            project_id: project_id.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: reqwest::blocking::Client::new(),
        }
    }
}

impl TranslationSource for RemoteClient {
    fn fetch(
        &self,
        language: &str,
        tags: &[String],
        filters: &[String],
    ) -> Result<String, PullError> {
        let service_language = service_language(language);
        let tags = tags.join(",");
        let filters = filters.join(",");
        let form = [
            ("api_token", self.api_token.as_str()),
            ("id", self.project_id.as_str()),
            ("language", service_language.as_str()),
            ("type", "json"),
            ("tags", tags.as_str()),
            ("filters", filters.as_str()),
        ];

        let export: ExportResponse = self
            .http
            .post(format!("{}/projects/export", self.base_url))
            .form(&form)
            .send()?
            .json()?;

        if export.response.status != "success" {
            return Err(PullError::Remote {
                message: export.response.message,
                code: export.response.code,
            });
        }
        let url = match export.result {
            Some(result) => result.url,
            None => {
                return Err(PullError::Remote {
                    message: "export succeeded but no download url was returned".to_owned(),
                    code: export.response.code,
                });
            }
        };

        Ok(self.http.get(url).send()?.text()?)
    }
}

#[derive(Debug, Deserialize)]
struct ExportResponse {
    response: ResponseStatus,
    result: Option<ExportResult>,
}

#[derive(Debug, Deserialize)]
struct ResponseStatus {
    #[serde(default)]
    status: String,
    #[serde(default, deserialize_with = "crate::config::string_or_number")]
    code: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct ExportResult {
    url: String,
}

static ZH_SIMPLIFIED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"zh.+(hans|cn)").unwrap());
static ZH_TRADITIONAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"zh.+(hant|tw)").unwrap());

/// Map a configured language code to the code the service expects.
///
/// The configured code is still the one used for path resolution; only the
/// export request uses the mapped code.
pub fn service_language(language: &str) -> String {
    let lower = language.to_lowercase();
    if ZH_SIMPLIFIED.is_match(&lower) {
        "zh-CN".to_owned()
    } else if ZH_TRADITIONAL.is_match(&lower) {
        "zh-TW".to_owned()
    } else {
        language.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_service_language_chinese_variants() {
        assert_eq!(service_language("zh-Hans"), "zh-CN");
        assert_eq!(service_language("zh-rCN"), "zh-CN");
        assert_eq!(service_language("zh-Hant"), "zh-TW");
        assert_eq!(service_language("zh-rTW"), "zh-TW");
    }

    #[test]
    fn test_service_language_passthrough() {
        // A bare "zh" has no script suffix and is forwarded untouched.
        assert_eq!(service_language("zh"), "zh");
        assert_eq!(service_language("en"), "en");
        assert_eq!(service_language("ko"), "ko");
    }

    #[test]
    fn test_parse_failure_response() {
        let body = r#"{"response": {"status": "fail", "code": "4011", "message": "Invalid API Token"}}"#;
        let export: ExportResponse = serde_json::from_str(body).unwrap();
        assert_eq!(export.response.status, "fail");
        assert_eq!(export.response.code, "4011");
        assert!(export.result.is_none());
    }

    #[test]
    fn test_parse_numeric_code() {
        let body = r#"{"response": {"status": "fail", "code": 4011, "message": "nope"}}"#;
        let export: ExportResponse = serde_json::from_str(body).unwrap();
        assert_eq!(export.response.code, "4011");
    }
}
