//! Project definition document as returned by the server
//!
//! These types mirror the `data.project` payload of
//! `GET api/cicd/projectDef/<projectName>`. They are read-only input: the
//! extractor borrows them and copies the items it selects.
//!
//! Item types keep any field they do not model in a flattened `extra` map,
//! so structured output shows everything the server sent.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Unmodelled fields of an item, kept verbatim.
pub type Extra = BTreeMap<String, serde_json::Value>;

/// Deserializes a collection that the server may send as `null`.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Root object for one project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDefinitionDocument {
    /// Basic project information.
    pub project_info: ProjectInfo,
    /// Project-level definitions.
    pub project_def: ProjectDef,
    /// Deployment targets with their own definitions.
    #[serde(deserialize_with = "nullable")]
    pub project_available_envs: Vec<AvailableEnvironment>,
    /// One pipeline per branch.
    #[serde(deserialize_with = "nullable")]
    pub project_pipelines: Vec<ProjectPipeline>,
    /// Build environment names.
    #[serde(deserialize_with = "nullable")]
    pub build_envs: Vec<String>,
    /// Build names.
    #[serde(deserialize_with = "nullable")]
    pub build_names: Vec<String>,
    /// Custom step configurations.
    #[serde(deserialize_with = "nullable")]
    pub custom_step_confs: Vec<CustomStepConf>,
    /// Package names.
    #[serde(deserialize_with = "nullable")]
    pub package_names: Vec<String>,
    /// Node ports allocated to the project.
    #[serde(deserialize_with = "nullable")]
    pub node_ports: Vec<i64>,
}

/// Basic project information.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInfo {
    /// Project name.
    pub project_name: String,
    /// Other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Project-level definitions and their server-side validation errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDef {
    /// Build definitions.
    #[serde(deserialize_with = "nullable")]
    pub build_defs: Vec<BuildDef>,
    /// Package definitions.
    #[serde(deserialize_with = "nullable")]
    pub package_defs: Vec<PackageDef>,
    /// Project-level custom step definitions, keyed by step name.
    #[serde(deserialize_with = "nullable")]
    pub custom_step_defs: BTreeMap<String, CustomStepDef>,
    /// Docker ignore rules.
    #[serde(deserialize_with = "nullable")]
    pub docker_ignore_defs: Vec<String>,
    /// Custom operations.
    #[serde(deserialize_with = "nullable")]
    pub custom_ops_defs: Vec<CustomOpsDef>,
    /// Package definitions error.
    pub err_msg_package_defs: String,
    /// Custom step definition errors, keyed by step name.
    #[serde(deserialize_with = "nullable")]
    pub err_msg_custom_step_defs: BTreeMap<String, String>,
    /// Custom operations error.
    pub err_msg_custom_ops_defs: String,
}

/// A named deployment target.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailableEnvironment {
    /// Environment name, e.g. `test`.
    pub env_name: String,
    /// Deploy container definitions.
    #[serde(deserialize_with = "nullable")]
    pub deploy_container_defs: Vec<DeployContainerDef>,
    /// Environment-scoped custom step definitions, keyed by step name.
    #[serde(deserialize_with = "nullable")]
    pub custom_step_defs: BTreeMap<String, CustomStepDef>,
    /// Deploy container definitions error.
    pub err_msg_deploy_container_defs: String,
    /// Custom step definition errors, keyed by step name.
    #[serde(deserialize_with = "nullable")]
    pub err_msg_custom_step_defs: BTreeMap<String, String>,
}

/// Pipeline attached to one branch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPipeline {
    /// Branch name.
    pub branch_name: String,
    /// Environments the pipeline deploys to.
    #[serde(deserialize_with = "nullable")]
    pub envs: Vec<String>,
    /// Production environments.
    #[serde(deserialize_with = "nullable")]
    pub env_productions: Vec<String>,
    /// Default pipeline flag.
    pub is_default: bool,
    /// Triggered by webhook push events.
    pub webhook_push_event: bool,
    /// Image tag suffix.
    pub tag_suffix: String,
    /// Pipeline body.
    pub pipeline_def: PipelineDef,
    /// Pipeline definition error.
    pub err_msg_pipeline_def: String,
}

/// Build definition item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildDef {
    /// Build name.
    pub build_name: String,
    /// Build phase.
    #[serde(rename = "buildPhaseID")]
    pub build_phase_id: i64,
    /// Source path.
    pub build_path: String,
    /// Build environment.
    pub build_env: String,
    /// Build commands.
    #[serde(deserialize_with = "nullable")]
    pub build_cmds: Vec<String>,
    /// Build checks.
    #[serde(deserialize_with = "nullable")]
    pub build_checks: Vec<String>,
    /// Other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Package definition item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageDef {
    /// Package name.
    pub package_name: String,
    /// Builds whose artifacts are packaged.
    #[serde(deserialize_with = "nullable")]
    pub related_builds: Vec<String>,
    /// Base image.
    pub package_from: String,
    /// Packages installed into the image.
    #[serde(deserialize_with = "nullable")]
    pub packages: Vec<String>,
    /// Other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Container port.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalPort {
    /// Container port.
    pub port: i64,
    /// Protocol, `TCP` when empty.
    pub protocol: String,
    /// Other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Container port exposed on a node port.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodePort {
    /// Container port.
    pub port: i64,
    /// Node port.
    pub node_port: i64,
    /// Protocol, `TCP` when empty.
    pub protocol: String,
    /// Other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Service a deployment depends on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DependService {
    /// Service name.
    pub depend_name: String,
    /// Service port.
    pub depend_port: i64,
    /// Other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Deploy container definition item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeployContainerDef {
    /// Deployment name.
    pub deploy_name: String,
    /// Package deployed.
    pub related_package: String,
    /// Replica count.
    pub deploy_replicas: i64,
    /// Container ports.
    #[serde(deserialize_with = "nullable")]
    pub deploy_local_ports: Vec<LocalPort>,
    /// Node ports.
    #[serde(deserialize_with = "nullable")]
    pub deploy_node_ports: Vec<NodePort>,
    /// Dependencies.
    #[serde(deserialize_with = "nullable")]
    pub depend_services: Vec<DependService>,
    /// Other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Custom step definition, scoped to the project or to one environment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomStepDef {
    /// How the step is enabled for modules.
    pub enable_mode: String,
    /// Per-module configuration.
    #[serde(deserialize_with = "nullable")]
    pub custom_step_module_defs: Vec<CustomStepModuleDef>,
}

/// Per-module custom step configuration item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomStepModuleDef {
    /// Module name.
    pub module_name: String,
    /// Related modules.
    #[serde(deserialize_with = "nullable")]
    pub related_step_modules: Vec<String>,
    /// Step must be enabled manually.
    pub manual_enable: bool,
    /// Step parameters as a YAML document.
    pub param_input_yaml: String,
    /// Other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Build toggle inside a pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineBuild {
    /// Build name.
    pub name: String,
    /// Whether the build runs.
    pub run: bool,
}

/// Pipeline body item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineDef {
    /// Detect builds from changed files.
    pub is_auto_detect_build: bool,
    /// Queue runs instead of running concurrently.
    pub is_queue: bool,
    /// Builds toggled by the pipeline.
    #[serde(deserialize_with = "nullable")]
    pub builds: Vec<PipelineBuild>,
    /// Other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Custom operation item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomOpsDef {
    /// Operation name.
    pub custom_ops_name: String,
    /// Description.
    pub custom_ops_desc: String,
    /// Steps run by the operation.
    #[serde(deserialize_with = "nullable")]
    pub custom_ops_steps: Vec<String>,
    /// Other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Custom step configuration listed in the project summary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomStepConf {
    /// Step name.
    pub custom_step_name: String,
    /// Step configuration differs per environment.
    pub is_env_diff: bool,
    /// Other fields.
    #[serde(flatten)]
    pub extra: Extra,
}
