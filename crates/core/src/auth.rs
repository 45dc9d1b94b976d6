use argon2::{Algorithm, Argon2, Params, Version};
use uuid::Uuid;

use crate::errors::CoreError;

/// Argon2id parameters for the admin password digest.
#[derive(Debug, Clone, Copy)]
pub struct DigestParams {
    /// Memory cost in KiB (default: 65536 = 64 MB)
    pub memory_cost: u32,
    /// Number of iterations (default: 3)
    pub time_cost: u32,
    /// Degree of parallelism (default: 4)
    pub parallelism: u32,
}

impl Default for DigestParams {
    fn default() -> Self {
        Self {
            memory_cost: 65_536, // 64 MB
            time_cost: 3,
            parallelism: 4,
        }
    }
}

/// Salted Argon2id digest of the admin password.
/// The password itself is never stored.
#[derive(Debug, Clone)]
pub struct PasswordDigest {
    salt: [u8; 16],
    digest: [u8; 32],
    params: DigestParams,
}

impl PasswordDigest {
    /// Digest a password with a fresh random salt.
    pub fn new(password: &str, params: DigestParams) -> Result<Self, CoreError> {
        let salt = generate_salt()?;
        let digest = derive_digest(password, &salt, &params)?;
        Ok(Self { salt, digest, params })
    }

    /// Check a password attempt against the stored digest.
    pub fn verify(&self, password: &str) -> Result<bool, CoreError> {
        let attempt = derive_digest(password, &self.salt, &self.params)?;
        // Compare without short-circuiting on the first mismatched byte
        let mut diff = 0u8;
        for (a, b) in attempt.iter().zip(self.digest.iter()) {
            diff |= a ^ b;
        }
        Ok(diff == 0)
    }
}

/// Derive a 256-bit digest from a password using Argon2id.
fn derive_digest(
    password: &str,
    salt: &[u8; 16],
    params: &DigestParams,
) -> Result<[u8; 32], CoreError> {
    let argon2_params = Params::new(
        params.memory_cost,
        params.time_cost,
        params.parallelism,
        Some(32),
    )
    .map_err(|e| CoreError::PasswordHash(format!("Invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut digest = [0u8; 32];
    argon2
        .hash_password_into(password.as_bytes(), salt, &mut digest)
        .map_err(|e| CoreError::PasswordHash(format!("Argon2 digest failed: {e}")))?;

    Ok(digest)
}

/// Generate cryptographically secure random bytes for a salt.
fn generate_salt() -> Result<[u8; 16], CoreError> {
    let mut salt = [0u8; 16];
    getrandom::getrandom(&mut salt)
        .map_err(|e| CoreError::PasswordHash(format!("Failed to generate random salt: {e}")))?;
    Ok(salt)
}

/// Boolean authorization check guarding admin mutation endpoints.
/// The endpoint glue asks the gate before touching stored state.
pub trait AccessGate {
    fn is_authorized(&self) -> bool;
}

/// Session-based gate: a correct password sets a random session token,
/// logout clears it. Single-user — at most one session at a time.
pub struct SessionGate {
    digest: PasswordDigest,
    session: Option<Uuid>,
}

impl SessionGate {
    /// Create a gate for the given admin password.
    pub fn new(password: &str) -> Result<Self, CoreError> {
        Self::with_params(password, DigestParams::default())
    }

    /// Create a gate with explicit digest parameters (lighter settings
    /// are useful in tests).
    pub fn with_params(password: &str, params: DigestParams) -> Result<Self, CoreError> {
        Ok(Self {
            digest: PasswordDigest::new(password, params)?,
            session: None,
        })
    }

    /// Submit a password. A correct password opens a session and
    /// returns its token; a wrong one is an `Unauthorized` error and
    /// leaves any existing session untouched.
    pub fn login(&mut self, password: &str) -> Result<Uuid, CoreError> {
        if self.digest.verify(password)? {
            let token = Uuid::new_v4();
            self.session = Some(token);
            Ok(token)
        } else {
            log::warn!("admin login rejected: invalid password");
            Err(CoreError::Unauthorized("Invalid password".into()))
        }
    }

    /// Close the session, if any.
    pub fn logout(&mut self) {
        self.session = None;
    }

    /// The current session token, if a session is open.
    #[must_use]
    pub fn session_token(&self) -> Option<Uuid> {
        self.session
    }
}

impl AccessGate for SessionGate {
    fn is_authorized(&self) -> bool {
        self.session.is_some()
    }
}

/// Reject gated operations without a session as an authorization error
/// rather than letting them silently succeed.
pub fn ensure_authorized(gate: &dyn AccessGate) -> Result<(), CoreError> {
    if gate.is_authorized() {
        Ok(())
    } else {
        Err(CoreError::Unauthorized("Admin session required".into()))
    }
}
