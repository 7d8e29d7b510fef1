//! Fallback-aware resolvers.
//!
//! Neither resolver can fail: an unset, empty, or (for integers) unparseable
//! variable resolves to the caller's fallback.

use super::env::EnvSource;

/// Resolve `name` as a string.
///
/// A set, non-empty value is returned verbatim. Unset and empty both yield
/// `fallback`.
pub fn resolve_string(env: &impl EnvSource, name: &str, fallback: &str) -> String {
    match env.var(name) {
        Some(value) if !value.is_empty() => value,
        _ => fallback.to_string(),
    }
}

/// Resolve `name` as a base-10 integer.
///
/// Unset, empty, and unparseable values yield `fallback`. Parsed values are
/// returned as-is, sign and range unchecked.
pub fn resolve_int(env: &impl EnvSource, name: &str, fallback: i64) -> i64 {
    env.var(name)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::MapEnv;

    #[test]
    fn string_prefers_non_empty_value() {
        let env = MapEnv::new().with("NAME", " Billing ");
        assert_eq!(resolve_string(&env, "NAME", "qrun"), " Billing ");
    }

    #[test]
    fn string_falls_back_when_unset_or_empty() {
        let env = MapEnv::new().with("EMPTY", "");
        assert_eq!(resolve_string(&env, "MISSING", "qrun"), "qrun");
        assert_eq!(resolve_string(&env, "EMPTY", "qrun"), "qrun");
    }

    #[test]
    fn int_parses_signed_base10() {
        let env = MapEnv::new()
            .with("POS", "42")
            .with("NEG", "-7")
            .with("PLUS", "+9")
            .with("ZERO", "0");
        assert_eq!(resolve_int(&env, "POS", 1), 42);
        assert_eq!(resolve_int(&env, "NEG", 1), -7);
        assert_eq!(resolve_int(&env, "PLUS", 1), 9);
        assert_eq!(resolve_int(&env, "ZERO", 1), 0);
    }

    #[test]
    fn int_swallows_parse_failures() {
        let env = MapEnv::new()
            .with("WORD", "abc")
            .with("TRAILING", "12ms")
            .with("PADDED", " 12")
            .with("FLOAT", "1.5")
            .with("HEX", "0x10")
            .with("HUGE", "99999999999999999999")
            .with("EMPTY", "");
        for name in ["WORD", "TRAILING", "PADDED", "FLOAT", "HEX", "HUGE", "EMPTY", "UNSET"] {
            assert_eq!(resolve_int(&env, name, 5000), 5000, "{name}");
        }
    }

    #[test]
    fn int_accepts_extremes() {
        let env = MapEnv::new()
            .with("MAX", i64::MAX.to_string())
            .with("MIN", i64::MIN.to_string());
        assert_eq!(resolve_int(&env, "MAX", 0), i64::MAX);
        assert_eq!(resolve_int(&env, "MIN", 0), i64::MIN);
    }
}
