//! cname.rs — Noms et littéraux C dérivés des sections.
//!
//! - `sanitize`      : tout caractère hors `[A-Za-z0-9_]` devient `_`
//! - `c_identifier`  : préfixe + nom assaini, tronqué à `MAX_IDENT_LEN`
//! - `c_string_body` : corps d’un littéral `"..."` (`\n` puis `"` échappés)
//! - `guard_macro`   : garde d’inclusion dérivée du nom de base
//!
//! Deux sections peuvent produire le même identifiant : rien n’est détecté ici.

use crate::config::MAX_IDENT_LEN;

pub fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Identifiant C d’une section (compte en caractères, pas en octets).
pub fn c_identifier(section: &str, prefix: &str) -> String {
    prefix
        .chars()
        .chain(sanitize(section).chars())
        .take(MAX_IDENT_LEN)
        .collect()
}

/// Les antislashs ne sont pas échappés.
pub fn c_string_body(content: &str) -> String {
    content.replace('\n', "\\n").replace('"', "\\\"")
}

pub fn guard_macro(base: &str) -> String {
    sanitize(&base.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_each_char() {
        assert_eq!(sanitize("Section One"), "Section_One");
        assert_eq!(sanitize("a-b.c/d"), "a_b_c_d");
        assert_eq!(sanitize("déjà"), "d_j_");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn identifier_is_prefixed_and_truncated() {
        assert_eq!(c_identifier("Section One", "app_"), "app_Section_One");
        let long = "x".repeat(100);
        let id = c_identifier(&long, "app_");
        assert_eq!(id.chars().count(), MAX_IDENT_LEN);
        assert!(id.starts_with("app_xxx"));
    }

    #[test]
    fn overlong_prefix_alone_is_truncated() {
        let prefix = "p".repeat(70);
        assert_eq!(c_identifier("name", &prefix), "p".repeat(MAX_IDENT_LEN));
    }

    #[test]
    fn string_body_escapes_newlines_and_quotes_only() {
        assert_eq!(
            c_string_body("hello \"world\"\nline two\n"),
            "hello \\\"world\\\"\\nline two\\n"
        );
        assert_eq!(c_string_body("C:\\tmp"), "C:\\tmp");
        assert_eq!(c_string_body(""), "");
    }

    #[test]
    fn guard_is_uppercased_then_sanitized() {
        assert_eq!(guard_macro("gen/help-text"), "GEN_HELP_TEXT");
        assert_eq!(guard_macro("straße"), "STRASSE");
    }
}
