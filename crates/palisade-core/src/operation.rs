//! The typed unit-of-work contract.
//!
//! An [`Operation`] is one typed unit of application work flowing through
//! the behavior chain: a request value paired with an expected output type.
//! Operations are created by the caller per request, consumed exactly once
//! by the chain, and discarded after the response is produced.

/// A typed unit of work processed by the behavior chain.
///
/// The capability requirement is attached to the operation *type* at
/// compile time via [`Operation::REQUIRES_AUTH`], checked by static dispatch
/// in the authorization gate. There is no runtime metadata inspection.
///
/// # Example
///
/// ```
/// use palisade_core::Operation;
///
/// struct DeleteUser {
///     user_id: String,
/// }
///
/// impl Operation for DeleteUser {
///     type Output = ();
///     const NAME: &'static str = "DeleteUser";
///     const REQUIRES_AUTH: bool = true;
/// }
///
/// assert!(DeleteUser::REQUIRES_AUTH);
/// ```
pub trait Operation: Send + Sync + 'static {
    /// The typed result produced by the terminal handler.
    type Output: Send + 'static;

    /// The operation's type name, used in logs and diagnostics.
    const NAME: &'static str;

    /// Whether this operation requires an authenticated principal.
    ///
    /// Defaults to `false`: untagged operations proceed regardless of
    /// authentication state.
    const REQUIRES_AUTH: bool = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    impl Operation for Ping {
        type Output = String;
        const NAME: &'static str = "Ping";
    }

    struct Restricted;

    impl Operation for Restricted {
        type Output = ();
        const NAME: &'static str = "Restricted";
        const REQUIRES_AUTH: bool = true;
    }

    #[test]
    fn test_default_requires_no_auth() {
        assert!(!Ping::REQUIRES_AUTH);
        assert_eq!(Ping::NAME, "Ping");
    }

    #[test]
    fn test_tagged_operation() {
        assert!(Restricted::REQUIRES_AUTH);
    }
}
