use std::fmt::Write;

use indexmap::IndexMap;

use crate::{ThemeMode, Token, TokenError, TokenValue, custom_property};

/// Every registered token, in registration order.
///
/// The root scope holds each token's root value, the dark scope holds only
/// the explicit dark overrides. Reading a token in dark mode falls back to
/// the root scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenTable {
    tokens: IndexMap<String, Token>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Result<Self, TokenError> {
        let mut table = Self::new();
        table.register(tokens)?;
        Ok(table)
    }

    /// Registers a batch of tokens.
    ///
    /// Re-registering an identical definition is a no-op. Registering a
    /// known name with a different definition fails with
    /// [`TokenError::DuplicateToken`]. The batch is checked as a whole first,
    /// so on error the table is left untouched.
    pub fn register(&mut self, tokens: impl IntoIterator<Item = Token>) -> Result<(), TokenError> {
        let mut staged: IndexMap<String, Token> = IndexMap::new();

        for token in tokens {
            token.validate_name()?;

            let previous = self
                .tokens
                .get(&token.name)
                .or_else(|| staged.get(&token.name));

            match previous {
                Some(existing) if existing != &token => {
                    return Err(TokenError::DuplicateToken { name: token.name });
                }
                Some(_) => {
                    tracing::trace!(token = %token.name, "identical token re-registered");
                }
                None => {
                    staged.insert(token.name.clone(), token);
                }
            }
        }

        tracing::debug!(
            added = staged.len(),
            total = self.tokens.len() + staged.len(),
            "registered tokens"
        );

        self.tokens.extend(staged);
        Ok(())
    }

    /// The value of `name` under `mode`.
    pub fn resolve(&self, name: &str, mode: ThemeMode) -> Result<&TokenValue, TokenError> {
        self.tokens
            .get(name)
            .map(|token| token.value(mode))
            .ok_or_else(|| TokenError::UnknownToken {
                name: name.to_owned(),
            })
    }

    pub fn get(&self, name: &str) -> Option<&Token> {
        self.tokens.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.values()
    }

    /// The values stored in one scope. The dark scope only yields tokens
    /// that override their root value.
    pub fn scope(&self, mode: ThemeMode) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.tokens.values().filter_map(move |token| {
            let value = match mode {
                ThemeMode::Light => Some(&token.root),
                ThemeMode::Dark => token.dark.as_ref(),
            };

            value.map(|value| (token.name.as_str(), value))
        })
    }

    /// Every token resolved under `mode`, keyed by custom property.
    pub fn custom_properties(&self, mode: ThemeMode) -> IndexMap<String, String> {
        self.tokens
            .values()
            .map(|token| (token.custom_property(), token.value(mode).to_string()))
            .collect()
    }

    /// The stylesheet declaring both scopes: a `:root` block with every
    /// root value followed by a `.dark` block with the overrides.
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        for mode in ThemeMode::ALL {
            let mut declarations = self.scope(mode).peekable();

            if declarations.peek().is_none() {
                continue;
            }

            if !css.is_empty() {
                css.push('\n');
            }

            let _ = writeln!(css, "{} {{", mode.selector());
            for (name, value) in declarations {
                let _ = writeln!(css, "  {}: {value};", custom_property(name));
            }
            css.push_str("}\n");
        }

        css
    }
}

impl<'a> IntoIterator for &'a TokenTable {
    type Item = &'a Token;
    type IntoIter = indexmap::map::Values<'a, String, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.values()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tracing_test::traced_test;

    use super::*;

    fn table() -> TokenTable {
        TokenTable::from_tokens([
            Token::parse("border", "220 14% 96%", Some("210 29% 20%")).unwrap(),
            Token::parse("highlight", "50 100% 50%", None).unwrap(),
            Token::parse("radius", "0.5rem", None).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn resolves_both_scopes() {
        let table = table();

        assert_eq!(
            table.resolve("border", ThemeMode::Light).unwrap().to_string(),
            "220 14% 96%"
        );
        assert_eq!(
            table.resolve("border", ThemeMode::Dark).unwrap().to_string(),
            "210 29% 20%"
        );
        assert_eq!(
            table.resolve("highlight", ThemeMode::Dark).unwrap().to_string(),
            "50 100% 50%"
        );
    }

    #[test]
    fn unknown_token() {
        assert_eq!(
            table().resolve("card", ThemeMode::Light),
            Err(TokenError::UnknownToken {
                name: "card".into()
            })
        );
    }

    #[test]
    fn identical_registration_is_a_no_op() {
        let mut table = table();
        let before = table.clone();

        table
            .register([Token::parse("border", "220 14% 96%", Some("210 29% 20%")).unwrap()])
            .unwrap();

        assert_eq!(table, before);
    }

    #[test]
    fn conflicting_registration_fails() {
        let mut table = table();

        let err = table
            .register([Token::parse("border", "0 0% 0%", None).unwrap()])
            .unwrap_err();

        assert_eq!(
            err,
            TokenError::DuplicateToken {
                name: "border".into()
            }
        );
    }

    #[test]
    fn dark_override_only_is_a_different_definition() {
        let mut table = table();

        let err = table
            .register([Token::parse("highlight", "50 100% 50%", Some("0 0% 0%")).unwrap()])
            .unwrap_err();

        assert!(matches!(err, TokenError::DuplicateToken { .. }));
    }

    #[test]
    fn failed_batch_leaves_table_untouched() {
        let mut table = table();
        let before = table.clone();

        let result = table.register([
            Token::parse("card", "0 0% 100%", None).unwrap(),
            Token::parse("card", "0 0% 50%", None).unwrap(),
        ]);

        assert!(result.is_err());
        assert_eq!(table, before);
        assert!(!table.contains("card"));
    }

    #[test]
    fn invalid_name_is_rejected() {
        let err =
            TokenTable::from_tokens([Token::parse("Card", "0 0% 0%", None).unwrap()]).unwrap_err();
        assert!(matches!(err, TokenError::InvalidName { .. }));
    }

    #[test]
    fn scopes() {
        let table = table();

        let root: Vec<_> = table.scope(ThemeMode::Light).map(|(name, _)| name).collect();
        assert_eq!(root, ["border", "highlight", "radius"]);

        let dark: Vec<_> = table.scope(ThemeMode::Dark).map(|(name, _)| name).collect();
        assert_eq!(dark, ["border"]);
    }

    #[test]
    fn custom_properties_follow_mode() {
        let properties = table().custom_properties(ThemeMode::Dark);

        assert_eq!(properties["--border"], "210 29% 20%");
        assert_eq!(properties["--radius"], "0.5rem");
        assert_eq!(properties.len(), 3);
    }

    #[test]
    fn css_has_both_blocks() {
        let css = table().to_css();

        assert_eq!(
            css,
            ":root {\n  --border: 220 14% 96%;\n  --highlight: 50 100% 50%;\n  --radius: 0.5rem;\n}\n\n.dark {\n  --border: 210 29% 20%;\n}\n"
        );
    }

    #[test]
    fn css_skips_empty_dark_block() {
        let table =
            TokenTable::from_tokens([Token::parse("ring", "220 14% 96%", None).unwrap()]).unwrap();

        assert!(!table.to_css().contains(".dark"));
    }

    #[test]
    #[traced_test]
    fn registration_is_logged() {
        let _ = table();
        assert!(logs_contain("registered tokens"));
    }

    fn arb_color() -> impl Strategy<Value = TokenValue> {
        (0u16..360, 0u8..=100, 0u8..=100).prop_map(|(h, s, l)| {
            TokenValue::Color(crate::HslColor::new(h as f32, s as f32, l as f32))
        })
    }

    fn arb_token() -> impl Strategy<Value = Token> {
        ("[a-z]{1,8}", arb_color(), proptest::option::of(arb_color())).prop_map(
            |(name, root, dark)| Token {
                name,
                root,
                dark,
            },
        )
    }

    proptest! {
        #[test]
        fn cascade_falls_back_to_root(tokens in proptest::collection::vec(arb_token(), 1..20)) {
            let mut table = TokenTable::new();

            for token in tokens {
                // Name collisions between generated tokens are fine to skip.
                if table.register([token.clone()]).is_err() {
                    continue;
                }

                let light = table.resolve(&token.name, ThemeMode::Light).unwrap();
                let dark = table.resolve(&token.name, ThemeMode::Dark).unwrap();

                prop_assert_eq!(light, &table.get(&token.name).unwrap().root);
                prop_assert_eq!(dark, token_dark_or_root(table.get(&token.name).unwrap()));
            }
        }

        #[test]
        fn identical_registration_is_idempotent(tokens in proptest::collection::vec(arb_token(), 1..20)) {
            let mut unique: IndexMap<String, Token> = IndexMap::new();
            for token in tokens {
                unique.entry(token.name.clone()).or_insert(token);
            }

            let mut table = TokenTable::from_tokens(unique.values().cloned()).unwrap();
            let before = table.clone();

            prop_assert!(table.register(unique.values().cloned()).is_ok());
            prop_assert_eq!(table, before);
        }
    }

    fn token_dark_or_root(token: &Token) -> &TokenValue {
        token.dark.as_ref().unwrap_or(&token.root)
    }
}
