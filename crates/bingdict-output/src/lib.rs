use serde::{Serialize, Serializer};

/// Shared error taxonomy for lookup plugins.
///
/// Serialized as its integer code so downstream consumers can branch on a
/// stable number instead of a variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NetworkError = 1,
    ParseError = 2,
    Other = 3,
}

impl ErrorCode {
    pub fn code(self) -> u32 {
        self as u32
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

/// Failure detail embedded in an otherwise-normal [`LookupResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorInfo {
    pub fn new(code: ErrorCode, message: Option<String>) -> Self {
        Self { code, message }
    }
}

/// One pronunciation variant. `script` is the script/locale label and is
/// empty for single non-Latin readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phonetic {
    pub script: String,
    pub value: String,
}

impl Phonetic {
    pub fn new(script: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            value: value.into(),
        }
    }
}

/// One definition line. `part_of_speech` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translate {
    pub part_of_speech: String,
    pub definition: String,
}

impl Translate {
    pub fn new(part_of_speech: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            definition: definition.into(),
        }
    }
}

/// One example sentence pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub source: String,
    pub target: String,
}

impl Example {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// One suggested alternative term when the primary lookup found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggest {
    pub term: String,
    pub gloss: String,
}

impl Suggest {
    pub fn new(term: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            gloss: gloss.into(),
        }
    }
}

/// Normalized output of a single dictionary lookup.
///
/// Sequence fields are always present and default to empty; `plugin_name`
/// and `url` are filled in by the orchestrator on every path, success or
/// failure. Constructed fresh per query, never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LookupResult {
    pub phonetics: Vec<Phonetic>,
    pub translates: Vec<Translate>,
    pub examples: Vec<Example>,
    pub suggests: Vec<Suggest>,
    pub plugin_name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl LookupResult {
    /// Empty result, no error. Represents "nothing found", a normal outcome.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Empty result carrying an error.
    pub fn from_error(code: ErrorCode, message: Option<String>) -> Self {
        Self {
            error: Some(ErrorInfo::new(code, message)),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_has_all_sequences_present() {
        let result = LookupResult::empty();
        assert!(result.phonetics.is_empty());
        assert!(result.translates.is_empty());
        assert!(result.examples.is_empty());
        assert!(result.suggests.is_empty());
        assert!(result.error.is_none());
    }

    #[test]
    fn error_result_keeps_sequences_empty() {
        let result = LookupResult::from_error(ErrorCode::NetworkError, None);
        assert!(result.is_error());
        assert_eq!(result.error.as_ref().unwrap().code, ErrorCode::NetworkError);
        assert!(result.phonetics.is_empty());
        assert!(result.translates.is_empty());
    }

    #[test]
    fn error_codes_are_stable_integers() {
        assert_eq!(ErrorCode::NetworkError.code(), 1);
        assert_eq!(ErrorCode::ParseError.code(), 2);
        assert_eq!(ErrorCode::Other.code(), 3);
    }

    #[test]
    fn error_code_serializes_as_integer() {
        let info = ErrorInfo::new(ErrorCode::ParseError, Some("bad markup".into()));
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["code"], 2);
        assert_eq!(json["message"], "bad markup");
    }

    #[test]
    fn absent_error_is_omitted_from_json() {
        let json = serde_json::to_value(LookupResult::empty()).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["phonetics"].as_array().unwrap().len(), 0);
    }
}
