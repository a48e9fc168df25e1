//! One-shot admin bootstrap codes.
//!
//! When no admin user exists at startup, a single-use code is generated and
//! printed to the log. Logging in with that code attached grants the first
//! user admin privileges.

use std::sync::{Arc, Mutex};

use rand::{distr::Alphanumeric, Rng};

const ADMIN_CODE_LENGTH: usize = 32;

/// Service for managing the in-memory bootstrap admin code.
///
/// Cloning is cheap; the code cell is shared between clones.
#[derive(Clone, Default)]
pub struct AdminCodeService {
    code: Arc<Mutex<Option<String>>>,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates and stores a fresh code, replacing any previous one.
    pub fn generate(&self) -> String {
        let code: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(ADMIN_CODE_LENGTH)
            .map(char::from)
            .collect();

        *self.code.lock().unwrap_or_else(|e| e.into_inner()) = Some(code.clone());

        code
    }

    /// Validates and consumes the stored code. Each code is single-use.
    pub fn validate(&self, candidate: &str) -> bool {
        let mut slot = self.code.lock().unwrap_or_else(|e| e.into_inner());
        match slot.as_deref() {
            Some(code) if code == candidate => {
                *slot = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_code_validates_once() {
        let service = AdminCodeService::new();
        let code = service.generate();

        assert!(service.validate(&code));
        assert!(!service.validate(&code));
    }

    #[test]
    fn wrong_code_does_not_validate_or_consume() {
        let service = AdminCodeService::new();
        let code = service.generate();

        assert!(!service.validate("nope"));
        assert!(service.validate(&code));
    }

    #[test]
    fn regenerating_invalidates_the_old_code() {
        let service = AdminCodeService::new();
        let old = service.generate();
        let new = service.generate();

        assert!(!service.validate(&old));
        assert!(service.validate(&new));
    }
}
