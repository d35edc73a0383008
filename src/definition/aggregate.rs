//! Definition error aggregation
//!
//! Collects the server-side validation errors embedded in a project
//! definition into one ordered list. The walk follows the document rather
//! than the filtered kinds, so a section hidden by `--env` or `--branch`
//! still reports its error. Duplicates are kept.

use super::kind::KindTag;
use super::project::ProjectDefinitionDocument;

/// Flattens every non-empty definition error, in document order
#[must_use]
pub fn collect_errors(doc: &ProjectDefinitionDocument) -> Vec<String> {
    let project_def = &doc.project_def;
    let mut errors = Vec::new();

    if !project_def.err_msg_package_defs.is_empty() {
        errors.push(format!(
            "{} error: {}",
            KindTag::PackageDefs,
            project_def.err_msg_package_defs
        ));
    }

    for env in &doc.project_available_envs {
        if !env.err_msg_deploy_container_defs.is_empty() {
            errors.push(format!(
                "{} envName={} error: {}",
                KindTag::DeployContainerDefs,
                env.env_name,
                env.err_msg_deploy_container_defs
            ));
        }
    }

    for env in &doc.project_available_envs {
        for (step_name, msg) in &env.err_msg_custom_step_defs {
            if msg.is_empty() {
                continue;
            }
            errors.push(format!(
                "{} stepName={} envName={} error: {}",
                KindTag::CustomStepDef,
                step_name,
                env.env_name,
                msg
            ));
        }
    }

    for (step_name, msg) in &project_def.err_msg_custom_step_defs {
        if msg.is_empty() {
            continue;
        }
        errors.push(format!(
            "{} stepName={} error: {}",
            KindTag::CustomStepDef,
            step_name,
            msg
        ));
    }

    for pipeline in &doc.project_pipelines {
        if !pipeline.err_msg_pipeline_def.is_empty() {
            errors.push(format!(
                "{} branchName={} error: {}",
                KindTag::PipelineDef,
                pipeline.branch_name,
                pipeline.err_msg_pipeline_def
            ));
        }
    }

    if !project_def.err_msg_custom_ops_defs.is_empty() {
        errors.push(format!(
            "{} error: {}",
            KindTag::CustomOpsDefs,
            project_def.err_msg_custom_ops_defs
        ));
    }

    errors
}
