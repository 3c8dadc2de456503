//! Saved assessment sessions.
//!
//! A session file is the JSON record a workshop exports and later
//! re-imports:
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "clientInfo": { "name": "Town hall", "type": "Collectivité territoriale" },
//!   "answers": { "gov-1": 2, "net-2": 0 },
//!   "step": 3,
//!   "timestamp": "2026-03-02T09:30:00Z"
//! }
//! ```
//!
//! Import is the boundary where answer indices are validated; see
//! [`AnswerValidation`].

use crate::error::{AuditError, ErrorContext, Result, SessionErrorKind};
use crate::model::{Answers, ClientInfo, QuestionCatalog};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::OnceLock;

/// Format version written on export.
pub const SESSION_VERSION: &str = "1.0";

/// Major version accepted on import.
const SUPPORTED_MAJOR: &str = "1";

/// How old a session may be and still be offered for resumption.
const RESUME_WINDOW_HOURS: i64 = 24;

/// Policy for answer indices outside a question's options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerValidation {
    /// Reject the whole import
    #[default]
    Strict,
    /// Drop the entry with a warning; the question becomes unanswered
    Lenient,
}

impl AnswerValidation {
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// A persisted questionnaire session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub version: String,
    pub client_info: ClientInfo,
    pub answers: Answers,
    /// Questionnaire step the user was on
    #[serde(default)]
    pub step: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl SessionRecord {
    /// A fresh record stamped with the current version.
    #[must_use]
    pub fn new(client_info: ClientInfo, answers: Answers) -> Self {
        Self {
            version: SESSION_VERSION.to_string(),
            client_info,
            answers,
            step: 0,
            timestamp: None,
        }
    }

    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Parse and validate a session against `catalog`.
    ///
    /// Non-integer answers always fail. Out-of-range indices fail under
    /// [`AnswerValidation::Strict`] and are dropped under
    /// [`AnswerValidation::Lenient`]. Answers for unknown questions are
    /// kept but play no part in scoring.
    pub fn from_json(json: &str, catalog: &QuestionCatalog, mode: AnswerValidation) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(mut root) = value else {
            return Err(AuditError::session(
                "top level",
                SessionErrorKind::InvalidJson("expected a JSON object".to_string()),
            ));
        };

        let version = match root.remove("version") {
            None => SESSION_VERSION.to_string(),
            Some(Value::String(v)) => v,
            Some(other) => other.to_string(),
        };
        check_version(&version)?;

        let client_info: ClientInfo = match root.remove("clientInfo") {
            Some(value) => serde_json::from_value(value).context("parsing clientInfo")?,
            None => return Err(AuditError::missing_field("clientInfo")),
        };

        let answers = match root.remove("answers") {
            Some(Value::Object(map)) => parse_answers(map, catalog, mode)?,
            Some(_) => {
                return Err(AuditError::session(
                    "answers",
                    SessionErrorKind::InvalidJson("expected an object of question ids".to_string()),
                ))
            }
            None => return Err(AuditError::missing_field("answers")),
        };

        let step = root
            .remove("step")
            .and_then(|v| v.as_u64())
            .and_then(|v| usize::try_from(v).ok())
            .unwrap_or(0);
        let timestamp = root
            .remove("timestamp")
            .and_then(|v| serde_json::from_value(v).ok());

        Ok(Self {
            version,
            client_info,
            answers,
            step,
            timestamp,
        })
    }

    /// Read and import a session file.
    pub fn load(path: &Path, catalog: &QuestionCatalog, mode: AnswerValidation) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AuditError::io(path, e))?;
        Self::from_json(&content, catalog, mode).with_context(|| format!("loading {}", path.display()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AuditError::session("serializing session", SessionErrorKind::InvalidJson(e.to_string()))
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|e| AuditError::io(path, e))?;
        tracing::info!("Session written to {}", path.display());
        Ok(())
    }

    /// Whether the session is recent enough to offer resuming it.
    #[must_use]
    pub fn is_resumable(&self, now: DateTime<Utc>) -> bool {
        let Some(saved) = self.timestamp else {
            return false;
        };
        self.client_info.has_name() && now - saved < Duration::hours(RESUME_WINDOW_HOURS)
    }

    /// Suggested file name for exporting this session on `date`.
    #[must_use]
    pub fn export_file_name(&self, date: NaiveDate) -> String {
        export_file_name(&self.client_info.name, date)
    }
}

/// `audit_<slug>_<YYYY-MM-DD>.json`, where the slug is the lowercased
/// client name with every character outside `[A-Za-z0-9]` replaced by `_`.
///
/// A replaced character yields one `_` per UTF-16 code unit, so names
/// outside the Basic Multilingual Plane give `__`.
#[must_use]
pub fn export_file_name(client_name: &str, date: NaiveDate) -> String {
    static NON_ALNUM: OnceLock<Option<Regex>> = OnceLock::new();
    let slug = match NON_ALNUM.get_or_init(|| Regex::new("[^a-zA-Z0-9]").ok()) {
        Some(re) => re
            .replace_all(client_name, |caps: &Captures<'_>| {
                "_".repeat(caps[0].chars().map(char::len_utf16).sum())
            })
            .to_lowercase(),
        None => client_name.to_lowercase(),
    };
    format!("audit_{slug}_{}.json", date.format("%Y-%m-%d"))
}

fn check_version(version: &str) -> Result<()> {
    let major = version.split('.').next().unwrap_or_default();
    if major == SUPPORTED_MAJOR {
        Ok(())
    } else {
        Err(AuditError::session(
            "version",
            SessionErrorKind::UnsupportedVersion {
                version: version.to_string(),
                supported: SESSION_VERSION.to_string(),
            },
        ))
    }
}

fn parse_answers(
    map: Map<String, Value>,
    catalog: &QuestionCatalog,
    mode: AnswerValidation,
) -> Result<Answers> {
    let mut answers = Answers::new();

    for (id, value) in map {
        let Some(index) = value.as_i64().or_else(|| {
            value
                .as_u64()
                .map(|v| i64::try_from(v).unwrap_or(i64::MAX))
        }) else {
            return Err(AuditError::session(
                "parsing answers",
                SessionErrorKind::NonIntegerAnswer {
                    id,
                    value: value.to_string(),
                },
            ));
        };

        let Some(question) = catalog.question(&id) else {
            tracing::debug!("Keeping answer for unknown question '{id}'");
            match usize::try_from(index) {
                Ok(index) => {
                    answers.set(id, index);
                }
                Err(_) => tracing::debug!("Dropping negative answer for unknown question '{id}'"),
            }
            continue;
        };

        match usize::try_from(index).ok().filter(|i| question.accepts(*i)) {
            Some(index) => {
                answers.set(id, index);
            }
            None => {
                let options = question.options.len();
                match mode {
                    AnswerValidation::Strict => {
                        return Err(AuditError::session(
                            "parsing answers",
                            SessionErrorKind::AnswerOutOfRange { id, index, options },
                        ))
                    }
                    AnswerValidation::Lenient => {
                        tracing::warn!(
                            "Dropping out-of-range answer {index} for '{id}' ({options} options)"
                        );
                    }
                }
            }
        }
    }

    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Question};

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::new(vec![Category::new("C", "", "").with_questions(vec![
            Question::new("q1", "?", ["a", "b", "c", "d"], 2),
            Question::new("q2", "?", ["a", "b"], 1),
        ])])
    }

    fn import(json: &str) -> Result<SessionRecord> {
        SessionRecord::from_json(json, &catalog(), AnswerValidation::Strict)
    }

    #[test]
    fn test_import_valid_session() {
        let record = import(
            r#"{"version":"1.0","clientInfo":{"name":"Town","type":"Ministère"},"answers":{"q1":3,"q2":0,"legacy":5},"step":2,"timestamp":"2026-01-05T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(record.client_info.org_type, "Ministère");
        assert_eq!(record.answers.get("q1"), Some(3));
        assert_eq!(record.answers.get("legacy"), Some(5));
        assert_eq!(record.step, 2);
        assert!(record.timestamp.is_some());
    }

    #[test]
    fn test_missing_version_defaults() {
        let record = import(r#"{"clientInfo":{},"answers":{}}"#).unwrap();
        assert_eq!(record.version, SESSION_VERSION);
    }

    #[test]
    fn test_rejects_other_major_version() {
        let err = import(r#"{"version":"2.0","clientInfo":{},"answers":{}}"#).unwrap_err();
        assert!(matches!(
            err,
            AuditError::Session {
                source: SessionErrorKind::UnsupportedVersion { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_missing_fields() {
        let err = import(r#"{"answers":{}}"#).unwrap_err();
        assert!(matches!(
            err,
            AuditError::Session {
                source: SessionErrorKind::MissingField(ref f),
                ..
            } if f == "clientInfo"
        ));
        let err = import(r#"{"clientInfo":{}}"#).unwrap_err();
        assert!(err.to_string().contains("missing required field"));
    }

    #[test]
    fn test_non_integer_fails_in_both_modes() {
        for json in [
            r#"{"clientInfo":{},"answers":{"q1":"2"}}"#,
            r#"{"clientInfo":{},"answers":{"q1":1.5}}"#,
            r#"{"clientInfo":{},"answers":{"q1":null}}"#,
        ] {
            for mode in [AnswerValidation::Strict, AnswerValidation::Lenient] {
                let err = SessionRecord::from_json(json, &catalog(), mode).unwrap_err();
                assert!(
                    matches!(
                        err,
                        AuditError::Session {
                            source: SessionErrorKind::NonIntegerAnswer { .. },
                            ..
                        }
                    ),
                    "{json}: {err}"
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_strict_vs_lenient() {
        let json = r#"{"clientInfo":{},"answers":{"q1":4,"q2":-1}}"#;
        let err = SessionRecord::from_json(json, &catalog(), AnswerValidation::Strict).unwrap_err();
        assert!(matches!(
            err,
            AuditError::Session {
                source: SessionErrorKind::AnswerOutOfRange { .. },
                ..
            }
        ));

        let lenient = SessionRecord::from_json(json, &catalog(), AnswerValidation::Lenient).unwrap();
        assert!(lenient.answers.is_empty());
    }

    #[test]
    fn test_roundtrip_preserves_record() {
        let record = SessionRecord::new(
            ClientInfo::named("Agence"),
            [("q1", 1), ("q2", 1)].into_iter().collect(),
        );
        let json = record.to_json_pretty().unwrap();
        assert!(json.contains("\"clientInfo\""));
        let back = import(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert_eq!(
            export_file_name("Mairie de Saint-Étienne", date),
            "audit_mairie_de_saint__tienne_2026-03-02.json"
        );
        assert_eq!(export_file_name("", date), "audit__2026-03-02.json");
    }

    #[test]
    fn test_is_resumable() {
        let saved = DateTime::parse_from_rfc3339("2026-03-02T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let record = SessionRecord::new(ClientInfo::named("Town"), Answers::new()).with_timestamp(saved);
        assert!(record.is_resumable(saved + Duration::hours(23)));
        assert!(!record.is_resumable(saved + Duration::hours(24)));

        let anonymous = SessionRecord::new(ClientInfo::default(), Answers::new()).with_timestamp(saved);
        assert!(!anonymous.is_resumable(saved));
        let undated = SessionRecord::new(ClientInfo::named("Town"), Answers::new());
        assert!(!undated.is_resumable(saved));
    }
}
