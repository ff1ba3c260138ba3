//! Class-name construction for the external animation stylesheet.
//!
//! The stylesheet library namespaces every class it defines, including the
//! master toggle and the timing modifiers. All names produced here go
//! through [`prefixed`]; callers never hand a raw token to an element.

/// Namespace prefix applied to every emitted class.
pub const CLASS_PREFIX: &str = "animate__";

/// Master toggle token. The stylesheet keys all of its animations off the
/// prefixed form of this class being present.
pub const MASTER_TOKEN: &str = "animated";

/// Build the full class name for a stylesheet token.
pub fn prefixed(token: &str) -> String {
    format!("{CLASS_PREFIX}{token}")
}

/// Build the delay-modifier token for a whole-second delay.
///
/// The stylesheet only defines integral-second delay classes, so the delay
/// is carried as whole seconds end to end.
pub fn delay_token(seconds: u32) -> String {
    format!("delay-{seconds}s")
}

/// Whether `token` is safe to embed in a class name: non-empty, ASCII
/// alphanumeric plus `-` and `_`.
pub fn is_class_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
