// SPDX-License-Identifier: Apache-2.0

use crate::errors::PrefsError;

/// Storage for small named values that must survive restarts.
///
/// Backends implement the four byte-level primitives. Text and integer
/// accessors are layered on top here, so every backend encodes them the
/// same way: strings as UTF-8, integers as decimal text.
pub trait PrefsInterface {
    fn get(&self, key: &str) -> Result<Vec<u8>, PrefsError>;
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), PrefsError>;
    fn exists(&self, key: &str) -> Result<bool, PrefsError>;
    // removing a key that is not there is not an error
    fn delete(&mut self, key: &str) -> Result<(), PrefsError>;

    fn get_string(&self, key: &str) -> Result<String, PrefsError> {
        let raw = self.get(key)?;
        String::from_utf8(raw).map_err(|err| PrefsError::Parse {
            key: key.to_string(),
            value: String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.set(key, value.as_bytes())
    }

    fn get_int64(&self, key: &str) -> Result<i64, PrefsError> {
        let text = self.get_string(key)?;
        parse_int64(key, &text)
    }

    fn set_int64(&mut self, key: &str, value: i64) -> Result<(), PrefsError> {
        self.set_string(key, &value.to_string())
    }
}

/// Parse a stored integer, tolerating surrounding ASCII whitespace
/// such as the trailing newline left by `echo 42 > key`. Vertical tab
/// counts as whitespace here, unlike `char::is_ascii_whitespace`.
pub fn parse_int64(key: &str, text: &str) -> Result<i64, PrefsError> {
    text.trim_matches(|c: char| matches!(c, ' ' | '\t'..='\r'))
        .parse::<i64>()
        .map_err(|_| PrefsError::Parse {
            key: key.to_string(),
            value: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_int64("k", "42").unwrap(), 42);
        assert_eq!(parse_int64("k", "-7").unwrap(), -7);
        assert_eq!(parse_int64("k", "+7").unwrap(), 7);
        assert_eq!(parse_int64("k", "0").unwrap(), 0);
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse_int64("k", "  42\n").unwrap(), 42);
        assert_eq!(parse_int64("k", "\t-1\r\n").unwrap(), -1);
        assert_eq!(parse_int64("k", "42\x0b").unwrap(), 42);
        assert_eq!(parse_int64("k", "\x0b\x0c 9 \x0c\x0b").unwrap(), 9);
    }

    #[test]
    fn test_parse_bounds() {
        assert_eq!(parse_int64("k", &i64::MAX.to_string()).unwrap(), i64::MAX);
        assert_eq!(parse_int64("k", &i64::MIN.to_string()).unwrap(), i64::MIN);
    }

    #[test]
    fn test_parse_rejects() {
        for text in ["", "   ", "abc", "4 2", "0x10", "1.5", "9223372036854775808", "-9223372036854775809"] {
            match parse_int64("counter", text) {
                Err(PrefsError::Parse { key, value }) => {
                    assert_eq!(key, "counter");
                    assert_eq!(value, text);
                }
                other => panic!("{:?} should not parse: {:?}", text, other),
            }
        }
    }
}
