//! Table output
//!
//! Each kind maps to a fixed column schema. Multi-valued cells are
//! newline-joined and name columns read `<kindTag>/<identifier>` so rows of
//! different kinds stay distinguishable when printed one after another.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::definition::kind::{
    ANNOTATION_ENV_PRODUCTIONS, ANNOTATION_ENVS, LABEL_BRANCH_NAME, LABEL_ENABLE_MODE,
    LABEL_ENV_NAME, LABEL_STEP_NAME,
};
use crate::definition::project::DeployContainerDef;
use crate::definition::{DefinitionItems, DefinitionKind, DefinitionKindList, KindTag, Metadata};

const DEFAULT_PROTOCOL: &str = "TCP";

/// Column headers and rows of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindTable {
    /// Column headers.
    pub headers: &'static [&'static str],
    /// One row per item.
    pub rows: Vec<Vec<String>>,
}

impl KindTable {
    /// Renders with a borderless, left-aligned layout
    #[must_use]
    pub fn render(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.headers.iter().copied());
        for row in &self.rows {
            builder.push_record(row.iter().cloned());
        }

        let mut table = builder.build();
        table.with(Style::blank());
        table.to_string()
    }
}

fn name(tag: KindTag, identifier: &str) -> String {
    format!("{tag}/{identifier}")
}

fn lines<S: AsRef<str>>(values: &[S]) -> String {
    values.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("\n")
}

fn protocol(protocol: &str) -> &str {
    if protocol.is_empty() {
        DEFAULT_PROTOCOL
    } else {
        protocol
    }
}

/// Formats container ports as `port/protocol` and node ports as
/// `port:nodePort/protocol`, comma-joined
#[must_use]
pub fn format_ports(def: &DeployContainerDef) -> String {
    let local = def
        .deploy_local_ports
        .iter()
        .map(|p| format!("{}/{}", p.port, protocol(&p.protocol)));
    let node = def
        .deploy_node_ports
        .iter()
        .map(|p| format!("{}:{}/{}", p.port, p.node_port, protocol(&p.protocol)));
    local.chain(node).collect::<Vec<_>>().join(",")
}

fn comma_list_as_lines(value: &str) -> String {
    value.split(',').collect::<Vec<_>>().join("\n")
}

/// Builds the table of one kind
#[must_use]
pub fn kind_table(kind: &DefinitionKind) -> KindTable {
    let tag = kind.tag();
    let metadata: &Metadata = &kind.metadata;

    match &kind.items {
        DefinitionItems::ProjectSummary(items) => KindTable {
            headers: &[
                "KIND",
                "BUILDS",
                "PACKAGES",
                "CUSTOMSTEPS",
                "BRANCHES",
                "ENVS",
                "NODEPORTS",
            ],
            rows: items
                .iter()
                .map(|item| {
                    let custom_steps: Vec<String> = item
                        .custom_step_confs
                        .iter()
                        .map(|conf| {
                            let env_diff = if conf.is_env_diff { "[env]" } else { "" };
                            format!("{}{env_diff}", conf.custom_step_name)
                        })
                        .collect();
                    let node_ports: Vec<String> =
                        item.node_ports.iter().map(ToString::to_string).collect();
                    vec![
                        tag.to_string(),
                        lines(&item.build_names),
                        lines(&item.package_names),
                        lines(&custom_steps),
                        lines(&item.branch_names),
                        lines(&item.env_names),
                        lines(&node_ports),
                    ]
                })
                .collect(),
        },
        DefinitionItems::BuildDefs(items) => KindTable {
            headers: &["NAME", "ENV", "PATH", "PHASEID", "CMDS"],
            rows: items
                .iter()
                .map(|item| {
                    vec![
                        name(tag, &item.build_name),
                        item.build_env.clone(),
                        item.build_path.clone(),
                        item.build_phase_id.to_string(),
                        lines(&item.build_cmds),
                    ]
                })
                .collect(),
        },
        DefinitionItems::PackageDefs(items) => KindTable {
            headers: &["NAME", "BUILDS", "FROM", "DOCKERFILE"],
            rows: items
                .iter()
                .map(|item| {
                    vec![
                        name(tag, &item.package_name),
                        lines(&item.related_builds),
                        item.package_from.clone(),
                        lines(&item.packages),
                    ]
                })
                .collect(),
        },
        DefinitionItems::DeployContainerDefs(items) => KindTable {
            headers: &["NAME", "ENV", "PACKAGE", "REPLICAS", "PORTS", "DEPENDS"],
            rows: items
                .iter()
                .map(|item| {
                    let depends: Vec<String> = item
                        .depend_services
                        .iter()
                        .map(|d| format!("{}:{}", d.depend_name, d.depend_port))
                        .collect();
                    vec![
                        name(tag, &item.deploy_name),
                        metadata.label_value(LABEL_ENV_NAME).to_string(),
                        item.related_package.clone(),
                        item.deploy_replicas.to_string(),
                        format_ports(item),
                        lines(&depends),
                    ]
                })
                .collect(),
        },
        DefinitionItems::CustomStepDef(items) => KindTable {
            headers: &[
                "NAME",
                "STEPNAME",
                "ENV",
                "ENABLEMODE",
                "RELATEMODULES",
                "MANUALENABLE",
                "PARAMS",
            ],
            rows: items
                .iter()
                .map(|item| {
                    vec![
                        name(tag, &item.module_name),
                        metadata.label_value(LABEL_STEP_NAME).to_string(),
                        metadata.label_value(LABEL_ENV_NAME).to_string(),
                        metadata.label_value(LABEL_ENABLE_MODE).to_string(),
                        lines(&item.related_step_modules),
                        item.manual_enable.to_string(),
                        item.param_input_yaml.clone(),
                    ]
                })
                .collect(),
        },
        DefinitionItems::PipelineDef(items) => KindTable {
            headers: &["NAME", "ENVS", "ENVPRODS", "AUTODETECT", "QUEUE", "BUILDS"],
            rows: items
                .iter()
                .map(|item| {
                    let builds: Vec<String> = item
                        .builds
                        .iter()
                        .map(|b| format!("{}: {}", b.name, b.run))
                        .collect();
                    vec![
                        name(tag, metadata.label_value(LABEL_BRANCH_NAME)),
                        comma_list_as_lines(metadata.annotation_value(ANNOTATION_ENVS)),
                        comma_list_as_lines(metadata.annotation_value(ANNOTATION_ENV_PRODUCTIONS)),
                        item.is_auto_detect_build.to_string(),
                        item.is_queue.to_string(),
                        lines(&builds),
                    ]
                })
                .collect(),
        },
        DefinitionItems::DockerIgnoreDefs(items) => KindTable {
            headers: &["NAME", "VALUE"],
            rows: items
                .iter()
                .map(|item| vec![tag.to_string(), item.clone()])
                .collect(),
        },
        DefinitionItems::CustomOpsDefs(items) => KindTable {
            headers: &["NAME", "DESC", "STEPS"],
            rows: items
                .iter()
                .map(|item| {
                    vec![
                        name(tag, &item.custom_ops_name),
                        item.custom_ops_desc.clone(),
                        lines(&item.custom_ops_steps),
                    ]
                })
                .collect(),
        },
    }
}

/// Renders every kind as its own table, followed by the aggregated errors
#[must_use]
pub fn render_tables(list: &DefinitionKindList) -> String {
    let mut output = String::new();

    for kind in &list.defs {
        if !kind.error_message.is_empty() {
            output.push_str(&format!("ERROR: {}\n", kind.error_message));
        }
        output.push_str(&kind_table(kind).render());
        output.push_str("\n\n");
    }

    if !list.error_messages.is_empty() {
        output.push_str("ERRORS\n");
        for msg in &list.error_messages {
            output.push_str(&format!("ERROR: {msg}\n"));
        }
        output.push('\n');
    }

    output
}
