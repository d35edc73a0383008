//! Kind extraction
//!
//! Walks a [`ProjectDefinitionDocument`] in a fixed section order and turns
//! it into a flat list of [`DefinitionKind`]s, applying the name filters of a
//! [`FilterSpec`] on the way:
//!
//! 1. build definitions
//! 2. package definitions
//! 3. deploy container definitions, once per selected environment
//! 4. custom step definitions, once per selected environment and step
//! 5. project-level custom step definitions, once per selected step
//! 6. pipeline definitions, once per selected branch
//! 7. docker ignore rules
//! 8. custom operations
//!
//! A section yields a kind only when it still has items after the module
//! filter. With no kinds requested a single `projectSummary` kind is produced
//! instead.

use std::collections::BTreeMap;

use super::filter::FilterSpec;
use super::kind::{
    ANNOTATION_ENV_PRODUCTIONS, ANNOTATION_ENVS, ANNOTATION_IS_DEFAULT, ANNOTATION_TAG_SUFFIX,
    ANNOTATION_WEBHOOK_PUSH_EVENT, DefinitionItems, DefinitionKind, LABEL_BRANCH_NAME,
    LABEL_ENABLE_MODE, LABEL_ENV_NAME, LABEL_STEP_NAME, Metadata, ProjectSummary,
};
use super::project::{AvailableEnvironment, CustomStepDef, ProjectDefinitionDocument};

/// Extracts the kinds selected by `filter`, in section order
#[must_use]
pub fn extract_kinds(doc: &ProjectDefinitionDocument, filter: &FilterSpec) -> Vec<DefinitionKind> {
    let kinds = if filter.is_summary() {
        vec![summarize(doc)]
    } else {
        Extractor::new(doc, filter).run()
    };
    filter.retain_kinds(kinds)
}

/// Builds the `projectSummary` kind
#[must_use]
pub fn summarize(doc: &ProjectDefinitionDocument) -> DefinitionKind {
    let summary = ProjectSummary {
        build_envs: doc.build_envs.clone(),
        build_names: doc.build_names.clone(),
        custom_step_confs: doc.custom_step_confs.clone(),
        package_names: doc.package_names.clone(),
        branch_names: doc
            .project_pipelines
            .iter()
            .map(|pipeline| pipeline.branch_name.clone())
            .collect(),
        env_names: doc
            .project_available_envs
            .iter()
            .map(|env| env.env_name.clone())
            .collect(),
        node_ports: doc.node_ports.clone(),
    };

    DefinitionKind::new(
        DefinitionItems::ProjectSummary(vec![summary]),
        Metadata::new(&doc.project_info.project_name),
    )
}

fn select<T: Clone>(items: &[T], keep: impl Fn(&T) -> bool) -> Vec<T> {
    items.iter().filter(|item| keep(item)).cloned().collect()
}

struct Extractor<'a> {
    doc: &'a ProjectDefinitionDocument,
    filter: &'a FilterSpec,
    kinds: Vec<DefinitionKind>,
}

impl<'a> Extractor<'a> {
    fn new(doc: &'a ProjectDefinitionDocument, filter: &'a FilterSpec) -> Self {
        Self {
            doc,
            filter,
            kinds: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<DefinitionKind> {
        let doc = self.doc;
        let filter = self.filter;
        let envs: Vec<&AvailableEnvironment> = doc
            .project_available_envs
            .iter()
            .filter(|env| filter.includes_env(&env.env_name))
            .collect();

        self.build_defs();
        self.package_defs();
        for env in &envs {
            self.deploy_container_defs(env);
        }
        for env in &envs {
            self.custom_step_defs(
                &env.custom_step_defs,
                &env.err_msg_custom_step_defs,
                Some(env.env_name.as_str()),
            );
        }
        let project_def = &doc.project_def;
        self.custom_step_defs(
            &project_def.custom_step_defs,
            &project_def.err_msg_custom_step_defs,
            None,
        );
        self.pipeline_defs();
        self.docker_ignore_defs();
        self.custom_ops_defs();

        self.kinds
    }

    fn metadata(&self) -> Metadata {
        Metadata::new(&self.doc.project_info.project_name)
    }

    fn push(&mut self, items: DefinitionItems, metadata: Metadata, error_message: &str) {
        if items.is_empty() {
            return;
        }
        self.kinds
            .push(DefinitionKind::new(items, metadata).with_error(error_message));
    }

    fn build_defs(&mut self) {
        let filter = self.filter;
        let items = select(&self.doc.project_def.build_defs, |def| {
            filter.includes_module(&def.build_name)
        });
        self.push(DefinitionItems::BuildDefs(items), self.metadata(), "");
    }

    fn package_defs(&mut self) {
        let (doc, filter) = (self.doc, self.filter);
        let project_def = &doc.project_def;
        let items = select(&project_def.package_defs, |def| {
            filter.includes_module(&def.package_name)
        });
        self.push(
            DefinitionItems::PackageDefs(items),
            self.metadata(),
            &project_def.err_msg_package_defs,
        );
    }

    fn deploy_container_defs(&mut self, env: &AvailableEnvironment) {
        let filter = self.filter;
        let items = select(&env.deploy_container_defs, |def| {
            filter.includes_module(&def.deploy_name)
        });
        let metadata = self.metadata().label(LABEL_ENV_NAME, &env.env_name);
        self.push(
            DefinitionItems::DeployContainerDefs(items),
            metadata,
            &env.err_msg_deploy_container_defs,
        );
    }

    fn custom_step_defs(
        &mut self,
        defs: &BTreeMap<String, CustomStepDef>,
        errors: &BTreeMap<String, String>,
        env_name: Option<&str>,
    ) {
        let filter = self.filter;
        for (step_name, def) in defs {
            if !filter.includes_step(step_name) {
                continue;
            }
            let items = select(&def.custom_step_module_defs, |module| {
                filter.includes_module(&module.module_name)
            });

            let mut metadata = self.metadata();
            if let Some(env_name) = env_name {
                metadata = metadata.label(LABEL_ENV_NAME, env_name);
            }
            let metadata = metadata
                .label(LABEL_STEP_NAME, step_name)
                .label(LABEL_ENABLE_MODE, &def.enable_mode);

            let error_message = errors.get(step_name).map_or("", String::as_str);
            self.push(DefinitionItems::CustomStepDef(items), metadata, error_message);
        }
    }

    fn pipeline_defs(&mut self) {
        let (doc, filter) = (self.doc, self.filter);
        for pipeline in &doc.project_pipelines {
            if !filter.includes_branch(&pipeline.branch_name) {
                continue;
            }
            let metadata = self
                .metadata()
                .label(LABEL_BRANCH_NAME, &pipeline.branch_name)
                .annotation(ANNOTATION_ENVS, pipeline.envs.join(","))
                .annotation(ANNOTATION_ENV_PRODUCTIONS, pipeline.env_productions.join(","))
                .annotation(ANNOTATION_IS_DEFAULT, pipeline.is_default.to_string())
                .annotation(
                    ANNOTATION_WEBHOOK_PUSH_EVENT,
                    pipeline.webhook_push_event.to_string(),
                )
                .annotation(ANNOTATION_TAG_SUFFIX, &pipeline.tag_suffix);
            self.push(
                DefinitionItems::PipelineDef(vec![pipeline.pipeline_def.clone()]),
                metadata,
                &pipeline.err_msg_pipeline_def,
            );
        }
    }

    fn docker_ignore_defs(&mut self) {
        let items = self.doc.project_def.docker_ignore_defs.clone();
        self.push(DefinitionItems::DockerIgnoreDefs(items), self.metadata(), "");
    }

    fn custom_ops_defs(&mut self) {
        let (doc, filter) = (self.doc, self.filter);
        let project_def = &doc.project_def;
        let items = select(&project_def.custom_ops_defs, |def| {
            filter.includes_module(&def.custom_ops_name)
        });
        self.push(
            DefinitionItems::CustomOpsDefs(items),
            self.metadata(),
            &project_def.err_msg_custom_ops_defs,
        );
    }
}
