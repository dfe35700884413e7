use std::sync::OnceLock;

use crate::{TokenError, TokenTable};

static INSTALLED: OnceLock<TokenTable> = OnceLock::new();

/// Makes `table` the process-wide token table.
///
/// Must happen once, before any rendering starts. The table can't be
/// replaced or mutated afterwards.
pub fn install(table: TokenTable) -> Result<&'static TokenTable, TokenError> {
    let mut installed_now = false;

    let installed = INSTALLED.get_or_init(|| {
        installed_now = true;
        table
    });

    if !installed_now {
        return Err(TokenError::AlreadyInstalled);
    }

    tracing::debug!(tokens = installed.len(), "installed token table");

    Ok(installed)
}

/// The process-wide token table, if one was installed.
pub fn installed() -> Option<&'static TokenTable> {
    INSTALLED.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ThemeMode, Token};

    // The only test in this crate touching the process-wide table.
    #[test]
    fn installs_once() {
        let table =
            TokenTable::from_tokens([Token::parse("ring", "220 14% 96%", None).unwrap()]).unwrap();

        let first = install(table.clone()).unwrap();
        assert_eq!(first, &table);
        assert!(
            installed()
                .unwrap()
                .resolve("ring", ThemeMode::Dark)
                .is_ok()
        );

        assert_eq!(install(TokenTable::new()), Err(TokenError::AlreadyInstalled));
        assert_eq!(installed().unwrap().len(), 1);
    }
}
