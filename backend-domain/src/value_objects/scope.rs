// Counter accumulation scope value object

use serde::{Deserialize, Serialize};

/// Which accumulator a counter row belongs to: the never-reset lifetime
/// total, or the current wipe epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Lifetime,
    Wipe,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Lifetime => "lifetime",
            Scope::Wipe => "wipe",
        }
    }

    /// Parse a query-parameter value. Only the two literal scope names are
    /// accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lifetime" => Some(Scope::Lifetime),
            "wipe" => Some(Scope::Wipe),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_literal_scope_names() {
        assert_eq!(Scope::parse("wipe"), Some(Scope::Wipe));
        assert_eq!(Scope::parse("lifetime"), Some(Scope::Lifetime));
        assert_eq!(Scope::parse("Wipe"), None);
        assert_eq!(Scope::parse("all"), None);
        assert_eq!(Scope::parse(""), None);
    }

    #[test]
    fn as_str_round_trips() {
        for scope in [Scope::Lifetime, Scope::Wipe] {
            assert_eq!(Scope::parse(scope.as_str()), Some(scope));
        }
    }
}
