use std::collections::HashMap;

use crate::interpreter::lexer::Token;

/// The golden ratio, (1 + √5) / 2.
const PHI: f64 = 1.618_033_988_749_894_8;
/// The Euler-Mascheroni constant γ.
const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_9;

/// Maps variable names to real values.
///
/// A default-constructed table is pre-seeded with the mathematical constants
/// `pi`, `euler`, `phi` and `eulerMascheroni`. User assignments share the
/// same flat namespace, so a constant can be shadowed by assigning over it
/// and recovered with [`SymbolTable::reset`].
///
/// Lookups and stores are keyed by [`Token::Identifier`] tokens; handing any
/// other token kind to [`SymbolTable::get`] or [`SymbolTable::set`] is a
/// caller bug and panics.
///
/// # Example
/// ```
/// use cuentas::interpreter::{lexer::Token, symbol_table::SymbolTable};
///
/// let mut symbols = SymbolTable::default();
/// let x = Token::Identifier("x".to_string());
///
/// assert_eq!(symbols.get(&x), None);
/// symbols.set(&x, 1.5);
/// assert_eq!(symbols.get(&x), Some(1.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable {
    variables: HashMap<String, f64>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self { variables: HashMap::from([("pi".to_string(), std::f64::consts::PI),
                                         ("euler".to_string(), std::f64::consts::E),
                                         ("phi".to_string(), PHI),
                                         ("eulerMascheroni".to_string(), EULER_MASCHERONI)]), }
    }
}

impl SymbolTable {
    /// Builds a table from a caller-provided map, merged over the default
    /// constants.
    ///
    /// The caller's entries win on collision, so a map may redefine `pi` if
    /// it really wants to.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use cuentas::interpreter::{lexer::Token, symbol_table::SymbolTable};
    ///
    /// let symbols = SymbolTable::from_map(HashMap::from([("a".to_string(), 7.0)]));
    ///
    /// assert_eq!(symbols.get(&Token::Identifier("a".to_string())), Some(7.0));
    /// assert_eq!(symbols.get(&Token::Identifier("pi".to_string())),
    ///            Some(std::f64::consts::PI));
    /// ```
    #[must_use]
    pub fn from_map(map: HashMap<String, f64>) -> Self {
        let mut table = Self::default();
        table.variables.extend(map);
        table
    }

    /// Looks up the value bound to an identifier token.
    ///
    /// Returns `None` for names that are neither constants nor assigned
    /// variables.
    ///
    /// # Panics
    /// Panics when `ident` is not an `Identifier` token.
    #[must_use]
    pub fn get(&self, ident: &Token) -> Option<f64> {
        match ident {
            Token::Identifier(name) => self.variables.get(name).copied(),
            other => panic!("symbol table lookup requires an identifier token, got {other}"),
        }
    }

    /// Binds a value to an identifier token, creating the variable or
    /// overwriting its previous value.
    ///
    /// # Panics
    /// Panics when `ident` is not an `Identifier` token.
    pub fn set(&mut self, ident: &Token, value: f64) {
        match ident {
            Token::Identifier(name) => {
                self.variables.insert(name.clone(), value);
            },
            other => panic!("symbol table store requires an identifier token, got {other}"),
        }
    }

    /// Restores the table to its default-seeded state, dropping every
    /// user-defined variable.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns the number of bindings, constants included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` when the table holds no bindings at all.
    ///
    /// Every constructor seeds the constants, so this only returns `true`
    /// for a table whose seeded entries could somehow be removed; it exists
    /// to pair with [`SymbolTable::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
