use backend_domain::Scope;

use crate::AppError;

/// Parse an optional `scope` query value. Absent means the wipe scope,
/// matching what the frontend expects between wipes.
pub fn parse_scope(value: Option<&str>) -> Result<Scope, AppError> {
    match value {
        None => Ok(Scope::Wipe),
        Some(raw) => Scope::parse(raw)
            .ok_or_else(|| AppError::BadRequest(format!("invalid scope '{raw}'"))),
    }
}

/// Clamp a client-supplied row limit into a sane window.
pub fn clamp_limit(requested: Option<u32>, default: u32, max: u32) -> u32 {
    requested.unwrap_or(default).clamp(1, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_defaults_to_wipe() {
        assert_eq!(parse_scope(None).expect("default"), Scope::Wipe);
        assert_eq!(parse_scope(Some("lifetime")).expect("parse"), Scope::Lifetime);
    }

    #[test]
    fn unknown_scope_is_a_bad_request() {
        match parse_scope(Some("season")) {
            Err(AppError::BadRequest(message)) => assert!(message.contains("season")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn limits_are_clamped_to_the_window() {
        assert_eq!(clamp_limit(None, 50, 500), 50);
        assert_eq!(clamp_limit(Some(0), 50, 500), 1);
        assert_eq!(clamp_limit(Some(10_000), 50, 500), 500);
        assert_eq!(clamp_limit(Some(7), 50, 500), 7);
    }
}
