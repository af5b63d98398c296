use appliance_testing_config::constants::FLOATING_IP_OUTPUT_KEY;
use serde::Deserialize;
use serde_json::Value;

/// Freshly created stack; only the id is guaranteed before the first
/// status fetch.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedStack {
    pub id: String,
}

/// Orchestration-side view of a provisioned stack.
#[derive(Clone, Debug, Deserialize)]
pub struct Stack {
    pub id: String,
    pub stack_name: String,
    pub stack_status: String,
    #[serde(default)]
    pub stack_status_reason: Option<String>,
    #[serde(default)]
    pub outputs: Vec<StackOutput>,
}

/// One named output of a stack.
#[derive(Clone, Debug, Deserialize)]
pub struct StackOutput {
    pub output_key: String,
    #[serde(default)]
    pub output_value: Value,
    #[serde(default)]
    pub description: Option<String>,
}

impl Stack {
    #[must_use]
    pub fn output(&self, key: &str) -> Option<&StackOutput> {
        self.outputs.iter().find(|output| output.output_key == key)
    }

    /// Externally reachable address assigned to the appliance, if present.
    #[must_use]
    pub fn floating_ip(&self) -> Option<String> {
        self.output(FLOATING_IP_OUTPUT_KEY)
            .and_then(|output| output.output_value.as_str())
            .map(str::to_owned)
    }

    #[must_use]
    pub fn is_create_complete(&self) -> bool {
        self.stack_status == "CREATE_COMPLETE"
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.stack_status.ends_with("_FAILED")
    }
}
