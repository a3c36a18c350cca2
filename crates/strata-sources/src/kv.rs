//! Line-delimited key/value parsing shared by the file and HTTP sources.

use strata_core::{SourceMap, Value};

/// The separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = ":";

/// Parse `key<sep>value` lines into a map.
///
/// Lines without the separator or with an empty key are skipped. Keys and
/// values are trimmed; everything after the first separator belongs to the
/// value.
pub fn parse_lines(input: &str, separator: &str) -> SourceMap {
    let mut values = SourceMap::new();

    for line in input.lines() {
        let Some((key, value)) = line.split_once(separator) else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        values.insert(key.trim().to_string(), Value::from(value.trim()));
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_lines() {
        let map = parse_lines("host: example.com\nport: 8080\n", ":");
        assert_eq!(map["host"], Value::from("example.com"));
        assert_eq!(map["port"], Value::from("8080"));
    }

    #[test]
    fn skips_lines_without_separator_or_key() {
        let map = parse_lines("no separator here\n: empty key\nok=1\n", "=");
        assert_eq!(map.len(), 1);
        assert_eq!(map["ok"], Value::from("1"));
    }

    #[test]
    fn value_keeps_everything_after_first_separator() {
        let map = parse_lines("url: http://example.com:8080/path", ":");
        assert_eq!(map["url"], Value::from("http://example.com:8080/path"));
    }

    #[test]
    fn trims_keys_and_values() {
        let map = parse_lines("  spaced  =  padded value  ", "=");
        assert_eq!(map["spaced"], Value::from("padded value"));
    }
}
