use std::{env, path::PathBuf};

#[must_use]
pub fn slow_test_env() -> bool {
    env::var("SLOW_TEST_ENV").is_ok_and(|s| s == "true")
}

#[must_use]
pub fn orchestration_endpoint() -> Option<String> {
    env::var("VE_TESTS_ORCHESTRATION_ENDPOINT").ok()
}

#[must_use]
pub fn orchestration_token() -> Option<String> {
    env::var("VE_TESTS_ORCHESTRATION_TOKEN").ok()
}

#[must_use]
pub fn admin_password() -> Option<String> {
    env::var("VE_TESTS_ADMIN_PASSWORD").ok()
}

#[must_use]
pub fn root_password() -> Option<String> {
    env::var("VE_TESTS_ROOT_PASSWORD").ok()
}

#[must_use]
pub fn license_token() -> Option<String> {
    env::var("VE_TESTS_LICENSE").ok()
}

#[must_use]
pub fn ssh_key_name() -> Option<String> {
    env::var("VE_TESTS_SSH_KEY_NAME").ok()
}

#[must_use]
pub fn templates_dir() -> Option<PathBuf> {
    env::var("VE_TESTS_TEMPLATES_DIR").ok().map(PathBuf::from)
}

#[must_use]
pub fn keep_stacks() -> bool {
    env::var("VE_TESTS_KEEP_STACKS").is_ok()
}

#[must_use]
pub fn rust_log() -> Option<String> {
    env::var("RUST_LOG").ok()
}
