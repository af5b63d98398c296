use appliance_testing_env as tf_env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SymbolsError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// Credentials and license material injected from the environment.
#[derive(Clone)]
pub struct Symbols {
    pub admin_password: String,
    pub root_password: String,
    pub license: String,
}

impl Symbols {
    pub fn from_env() -> Result<Self, SymbolsError> {
        Ok(Self {
            admin_password: tf_env::admin_password()
                .ok_or(SymbolsError::Missing("VE_TESTS_ADMIN_PASSWORD"))?,
            root_password: tf_env::root_password()
                .ok_or(SymbolsError::Missing("VE_TESTS_ROOT_PASSWORD"))?,
            license: tf_env::license_token().ok_or(SymbolsError::Missing("VE_TESTS_LICENSE"))?,
        })
    }
}
