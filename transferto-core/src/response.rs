use std::collections::{btree_map, BTreeMap};

use serde::Serialize;

use crate::constants::{ERROR_CODE_FIELD, ERROR_TXT_FIELD, SUCCESS_CODE, UNSPLIT_KEYS};
use crate::error::{ParseError, ProviderError};

/// A single response field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    /// Comma separated field, split in order.
    List(Vec<String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::Scalar(_) => None,
            Value::List(items) => Some(items),
        }
    }

    /// The value as it appeared on the wire, list items joined back with `,`.
    pub fn to_raw(&self) -> String {
        match self {
            Value::Scalar(s) => s.clone(),
            Value::List(items) => items.join(","),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Whitespace trim that also drops byte-order marks.
fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Decoded response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResponseDocument(BTreeMap<String, Value>);

impl ResponseDocument {
    /// Parses the provider's `key=value` line format.
    ///
    /// Lines are separated by `\n` or `\r\n`, and one trailing comma per line is
    /// dropped. Only the first `=` separates key from value. A value holding a
    /// comma becomes a [`Value::List`] unless its key is one of
    /// `promotion`, `sms` or `info_txt`. A repeated key keeps its last value.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        let mut fields = BTreeMap::new();

        // `lines()` splits on `\n` and drops a trailing `\r`.
        for (idx, line) in trim_text(body).lines().enumerate() {
            let line = trim_text(line);
            if line.is_empty() {
                continue;
            }
            let line = line.strip_suffix(',').unwrap_or(line);

            let Some((key, raw)) = line.split_once('=') else {
                log::debug!("response line {} has no separator", idx + 1);
                return Err(ParseError::MissingSeparator {
                    line: idx + 1,
                    content: line.to_string(),
                });
            };

            let value = if raw.contains(',') && !UNSPLIT_KEYS.contains(&key) {
                Value::List(raw.split(',').map(str::to_string).collect())
            } else {
                Value::Scalar(raw.to_string())
            };
            fields.insert(key.to_string(), value);
        }

        Ok(Self(fields))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Scalar field; `None` when missing or list-valued.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// List field; `None` when missing or scalar.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(Value::as_list)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn error_code(&self) -> Option<&str> {
        self.get_str(ERROR_CODE_FIELD)
    }

    pub fn error_txt(&self) -> Option<&str> {
        self.get_str(ERROR_TXT_FIELD)
    }

    /// Succeeds only when `error_code` is exactly `"0"`.
    ///
    /// Otherwise the provider's `error_txt` and `error_code` are returned
    /// verbatim, with empty strings standing in for missing fields.
    pub fn check(self) -> Result<Self, ProviderError> {
        if self.error_code() == Some(SUCCESS_CODE) {
            return Ok(self);
        }
        let field = |key: &str| self.get(key).map(Value::to_raw).unwrap_or_default();
        Err(ProviderError::new(field(ERROR_TXT_FIELD), field(ERROR_CODE_FIELD)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}

impl IntoIterator for ResponseDocument {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ResponseDocument {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
