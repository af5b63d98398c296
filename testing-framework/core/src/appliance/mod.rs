mod client;
mod model;
pub mod paths;

pub use client::{ApplianceClient, ApplianceError, Credentials};
pub use model::{LicenseRegistration, NamedObject, NetworkTopology};
