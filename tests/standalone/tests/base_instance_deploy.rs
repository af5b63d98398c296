//! Standalone base-instance deployment scenarios: one driver per
//! (image version, interface count) combination. Each one provisions a
//! stack, waits for the appliance to license itself and bring up its
//! network plane, then asserts the live topology.

use anyhow::Result;
use appliance_testing_config::{
    constants::{ImageRef, VE_11_5_4, VE_11_6, VE_12_0},
    scenario::DeploymentScenario,
};
use serial_test::serial;
use tests_standalone::Harness;
use tracing_subscriber::fmt::try_init;

const TWO_NIC: usize = 2;
const THREE_NIC: usize = 3;
const XLARGE_FLAVOR: &str = "m1.xlarge";

#[tokio::test]
#[serial]
#[ignore = "requires a live orchestration endpoint and appliance images"]
async fn standalone_2_nic_11_5_4() -> Result<()> {
    run_standalone_case(VE_11_5_4, TWO_NIC, Some(XLARGE_FLAVOR)).await
}

#[tokio::test]
#[serial]
#[ignore = "requires a live orchestration endpoint and appliance images"]
async fn standalone_2_nic_11_6() -> Result<()> {
    run_standalone_case(VE_11_6, TWO_NIC, None).await
}

#[tokio::test]
#[serial]
#[ignore = "requires a live orchestration endpoint and appliance images"]
async fn standalone_2_nic_12_0() -> Result<()> {
    run_standalone_case(VE_12_0, TWO_NIC, None).await
}

#[tokio::test]
#[serial]
#[ignore = "requires a live orchestration endpoint and appliance images"]
async fn standalone_3_nic_11_5_4() -> Result<()> {
    run_standalone_case(VE_11_5_4, THREE_NIC, Some(XLARGE_FLAVOR)).await
}

#[tokio::test]
#[serial]
#[ignore = "requires a live orchestration endpoint and appliance images"]
async fn standalone_3_nic_11_6() -> Result<()> {
    run_standalone_case(VE_11_6, THREE_NIC, None).await
}

#[tokio::test]
#[serial]
#[ignore = "requires a live orchestration endpoint and appliance images"]
async fn standalone_3_nic_12_0() -> Result<()> {
    run_standalone_case(VE_12_0, THREE_NIC, None).await
}

async fn run_standalone_case(
    image: ImageRef,
    interface_count: usize,
    flavor: Option<&str>,
) -> Result<()> {
    let _ = try_init();

    let Some(harness) = Harness::from_env()? else {
        eprintln!("skipping standalone case: VE_TESTS_ORCHESTRATION_ENDPOINT is not set");
        return Ok(());
    };

    println!(
        "deploying standalone {interface_count}-nic appliance from {}",
        image.image
    );

    let mut scenario = DeploymentScenario::standalone(image, interface_count)?;
    if let Some(flavor) = flavor {
        scenario = scenario.with_flavor(flavor);
    }
    if let Some(key_name) = appliance_testing_env::ssh_key_name() {
        scenario = scenario.with_ssh_key(key_name);
    }

    let deployed = harness.deployer.deploy(&scenario).await?;
    deployed.verify_topology().await?;
    harness.deployer.cleanup(&deployed).await?;
    Ok(())
}
