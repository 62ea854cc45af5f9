//! Recursive `${VAR}` / `${VAR:-default}` expansion over YAML values.
//!
//! Expansion is a pure transform: mappings keep their keys and insertion
//! order, sequences keep their order, non-string scalars pass through
//! untouched. Unset variables without a default resolve to the empty
//! string; this step never fails.
//!
//! Each string is scanned exactly once, so text substituted in from the
//! environment is never re-interpreted even when it contains a literal
//! `${...}`. Expansion under a fixed environment is therefore idempotent.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde_yaml::{Mapping, Value};

use crate::domain::ports::EnvLookup;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"))
}

/// Expand every string leaf of a variables mapping.
pub fn expand_mapping<E: EnvLookup>(vars: Mapping, env: &E) -> Mapping {
    vars.into_iter()
        .map(|(key, value)| (key, expand_value(value, env)))
        .collect()
}

/// Expand a single YAML value, recursing into containers.
pub fn expand_value<E: EnvLookup>(value: Value, env: &E) -> Value {
    match value {
        Value::Mapping(mapping) => Value::Mapping(expand_mapping(mapping, env)),
        Value::Sequence(seq) => {
            Value::Sequence(seq.into_iter().map(|item| expand_value(item, env)).collect())
        }
        Value::String(s) => Value::String(expand_str(&s, env)),
        other => other,
    }
}

/// Replace every non-overlapping `${...}` occurrence in a string.
///
/// The expression inside the braces is split once on `:-`; the part before
/// is the variable name and the part after is the fallback used when the
/// variable is unset.
pub fn expand_str<E: EnvLookup>(input: &str, env: &E) -> String {
    placeholder_re()
        .replace_all(input, |caps: &Captures<'_>| {
            let expr = &caps[1];
            match expr.split_once(":-") {
                Some((name, default)) => env.var(name).unwrap_or_else(|| default.to_string()),
                None => env.var(expr).unwrap_or_default(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_unset_variable_resolves_to_empty_string() {
        assert_eq!(expand_str("${FOO}", &env(&[])), "");
    }

    #[test]
    fn test_default_used_when_unset() {
        assert_eq!(expand_str("${FOO:-bar}", &env(&[])), "bar");
    }

    #[test]
    fn test_environment_wins_over_default() {
        assert_eq!(expand_str("${FOO:-bar}", &env(&[("FOO", "baz")])), "baz");
    }

    #[test]
    fn test_surrounding_text_preserved() {
        let e = env(&[("HOST", "example.com"), ("PORT", "8181")]);
        assert_eq!(
            expand_str("http://${HOST}:${PORT}/api", &e),
            "http://example.com:8181/api"
        );
    }

    #[test]
    fn test_empty_braces_left_verbatim() {
        assert_eq!(expand_str("${}", &env(&[])), "${}");
    }

    #[test]
    fn test_substituted_dollar_is_not_reinterpreted() {
        // BAR is set, but the text substituted in from FOO is never
        // rescanned within the same pass.
        let e = env(&[("FOO", "${BAR}"), ("BAR", "leaked")]);
        assert_eq!(expand_str("${FOO}", &e), "${BAR}");
    }

    #[test]
    fn test_expansion_is_idempotent() {
        let e = env(&[("WORK_DIR", "/srv/data")]);
        let once = expand_str("dir=${WORK_DIR} missing=${NOPE:-x}", &e);
        let twice = expand_str(&once, &e);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_string_scalars_pass_through() {
        let e = env(&[]);
        assert_eq!(expand_value(Value::from(42_i64), &e), Value::from(42_i64));
        assert_eq!(expand_value(Value::Bool(true), &e), Value::Bool(true));
        assert_eq!(expand_value(Value::Null, &e), Value::Null);
    }

    #[test]
    fn test_mapping_key_order_preserved() {
        let yaml = "zebra: ${A:-1}\nalpha: plain\nmike: ${B}\n";
        let Value::Mapping(mapping) = serde_yaml::from_str(yaml).unwrap() else {
            panic!("expected mapping");
        };

        let expanded = expand_mapping(mapping, &env(&[]));
        let keys: Vec<_> = expanded
            .keys()
            .map(|k| k.as_str().unwrap().to_string())
            .collect();
        assert_eq!(keys, ["zebra", "alpha", "mike"]);
        assert_eq!(
            expanded.get(Value::String("zebra".to_string())),
            Some(&Value::String("1".to_string()))
        );
        assert_eq!(
            expanded.get(Value::String("mike".to_string())),
            Some(&Value::String(String::new()))
        );
    }

    #[test]
    fn test_sequences_expand_elementwise_in_order() {
        let e = env(&[("X", "two")]);
        let seq = Value::Sequence(vec![
            Value::String("one".to_string()),
            Value::String("${X}".to_string()),
            Value::from(3_i64),
        ]);

        let expanded = expand_value(seq, &e);
        assert_eq!(
            expanded,
            Value::Sequence(vec![
                Value::String("one".to_string()),
                Value::String("two".to_string()),
                Value::from(3_i64),
            ])
        );
    }

    #[test]
    fn test_nested_mappings_expand_recursively() {
        let yaml = "outer:\n  inner: ${DEEP:-found}\n";
        let Value::Mapping(mapping) = serde_yaml::from_str(yaml).unwrap() else {
            panic!("expected mapping");
        };

        let expanded = expand_mapping(mapping, &env(&[]));
        let outer = expanded
            .get(Value::String("outer".to_string()))
            .and_then(Value::as_mapping)
            .unwrap();
        assert_eq!(
            outer.get(Value::String("inner".to_string())),
            Some(&Value::String("found".to_string()))
        );
    }

    #[test]
    fn test_default_may_contain_colon() {
        // Only the first ":-" separates name and default.
        let out = expand_str("${URL:-http://localhost:8181}", &env(&[]));
        assert_eq!(out, "http://localhost:8181");
    }
}
