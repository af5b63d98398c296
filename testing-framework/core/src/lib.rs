pub mod appliance;
pub mod deployer;
pub mod orchestration;
pub mod readiness;
pub mod verify;

pub use appliance_testing_config::adjust_timeout;

/// Boxed error crossing the readiness probe boundary.
pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;
