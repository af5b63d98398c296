use std::path::{Path, PathBuf};

use appliance_testing_env as tf_env;
use tracing::debug;

/// Image/version pair an appliance is provisioned and licensed with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ImageRef {
    pub image: &'static str,
    pub version: &'static str,
}

pub const VE_11_5_4: ImageRef = ImageRef {
    image: "VE-11.5.4.0.0.256",
    version: "11.5.4",
};

pub const VE_11_6: ImageRef = ImageRef {
    image: "VE-11.6.0.0.0.401",
    version: "11.6.0",
};

pub const VE_12_0: ImageRef = ImageRef {
    image: "VE-12.0.0.0.0.606",
    version: "12.0.0",
};

/// Name of the management-only interface every appliance carries.
pub const MGMT_INTERFACE: &str = "mgmt";

/// Stack output key holding the externally reachable appliance address.
pub const FLOATING_IP_OUTPUT_KEY: &str = "floating_ip";

/// Username for the appliance management API.
pub const ADMIN_USERNAME: &str = "admin";

/// Default templates directory relative to the workspace root.
pub const DEFAULT_TEMPLATES_DIR: &str = "testing-framework/assets/templates";

/// Resolve the templates root from `VE_TESTS_TEMPLATES_DIR`, falling back
/// to the workspace-relative default.
#[must_use]
pub fn templates_dir() -> PathBuf {
    let dir = tf_env::templates_dir().unwrap_or_else(|| {
        workspace_root()
            .map(|root| root.join(DEFAULT_TEMPLATES_DIR))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_DIR))
    });
    debug!(dir = %dir.display(), "templates root resolved");
    dir
}

fn workspace_root() -> Option<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
}
