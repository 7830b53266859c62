//! The single-credential login gate.
//!
//! Exactly one username/password pair is accepted. It is not linked to the
//! `users` table and is not suitable for production use.

/// Default username accepted by the gate.
pub const DEFAULT_USERNAME: &str = "usuario";
/// Default password accepted by the gate.
pub const DEFAULT_PASSWORD: &str = "contraseña";

/// The credential pair accepted by `POST /auth/login`.
#[derive(Clone)]
pub struct GateCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for GateCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for GateCredentials {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl GateCredentials {
    /// Read `AUTH_USERNAME` / `AUTH_PASSWORD`, falling back to the defaults.
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            username: lookup("AUTH_USERNAME").unwrap_or(defaults.username),
            password: lookup("AUTH_PASSWORD").unwrap_or(defaults.password),
        }
    }

    /// Whether the submitted pair is the configured one.
    ///
    /// Compares every byte of both fields so the time taken does not reveal
    /// the position of the first mismatch.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        let user_ok = constant_time_eq(self.username.as_bytes(), username.as_bytes());
        let pass_ok = constant_time_eq(self.password.as_bytes(), password.as_bytes());
        user_ok & pass_ok
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
