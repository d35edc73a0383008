//! Tests for project definition types
//!
//! Covers decoding of server payloads and the wire shape of kinds.

use super::fixtures::{SAMPLE_PROJECT_JSON, sample_document};
use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_decode_null_collections_as_empty() {
    let doc = sample_document();
    let gin = &doc.project_def.build_defs[1];
    assert!(gin.build_checks.is_empty());
    assert!(doc.project_def.err_msg_custom_step_defs.is_empty());

    let gin_deploy = &doc.project_available_envs[0].deploy_container_defs[1];
    assert!(gin_deploy.deploy_node_ports.is_empty());
    assert!(gin_deploy.depend_services.is_empty());
}

#[test]
fn test_decode_keeps_unmodelled_fields() {
    let doc = sample_document();
    assert_eq!(
        doc.project_def.build_defs[0].extra.get("buildCaches"),
        Some(&serde_json::json!(["/root/go"]))
    );
    assert_eq!(
        doc.project_info.extra.get("projectDesc"),
        Some(&serde_json::json!("demo project"))
    );
}

#[test]
fn test_decode_missing_sections_default() {
    let doc: ProjectDefinitionDocument =
        serde_json::from_str(r#"{"projectInfo": {"projectName": "empty-project"}}"#).unwrap();
    assert_eq!(doc.project_info.project_name, "empty-project");
    assert!(doc.project_def.build_defs.is_empty());
    assert!(doc.project_pipelines.is_empty());
}

#[test]
fn test_decode_is_lossless_for_sample() {
    let doc = sample_document();
    let reencoded = serde_json::to_value(&doc).unwrap();
    let original: serde_json::Value = serde_json::from_str(SAMPLE_PROJECT_JSON).unwrap();
    assert_eq!(
        reencoded["projectDef"]["buildDefs"][0],
        original["projectDef"]["buildDefs"][0]
    );
}

#[test]
fn test_kind_tag_display() {
    assert_eq!(KindTag::ProjectSummary.to_string(), "projectSummary");
    assert_eq!(KindTag::DeployContainerDefs.to_string(), "deployContainerDefs");
    assert_eq!(KindTag::CustomStepDef.to_string(), "customStepDef");
}

#[test]
fn test_kind_tag_serialize_matches_display() {
    for tag in KindTag::ALL {
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, format!("\"{tag}\""));
    }
}

#[test]
fn test_definition_kind_wire_shape() {
    let kind = DefinitionKind::new(
        DefinitionItems::DockerIgnoreDefs(vec![".git".to_string()]),
        Metadata::new("test-project1"),
    );
    let value = serde_json::to_value(&kind).unwrap();

    assert_eq!(value["kind"], "dockerIgnoreDefs");
    assert_eq!(value["items"], serde_json::json!([".git"]));
    assert_eq!(value["metadata"]["projectName"], "test-project1");
    assert_eq!(value["errorMessage"], "");
}

#[test]
fn test_kind_list_json_round_trip_preserves_order_and_counts() {
    let filter = FilterSpec::new().with_kinds("all").unwrap();
    let list = build_kind_list(&sample_document(), &filter);

    let json = serde_json::to_string_pretty(&list).unwrap();
    let decoded: DefinitionKindList = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded.kind, "list");
    let tags = |l: &DefinitionKindList| l.defs.iter().map(DefinitionKind::tag).collect::<Vec<_>>();
    let counts = |l: &DefinitionKindList| l.defs.iter().map(|d| d.items.len()).collect::<Vec<_>>();
    assert_eq!(tags(&decoded), tags(&list));
    assert_eq!(counts(&decoded), counts(&list));
    assert_eq!(decoded.error_messages, list.error_messages);
}

#[test]
fn test_metadata_lookups_default_to_empty() {
    let metadata = Metadata::new("p").label("envName", "test");
    assert_eq!(metadata.label_value("envName"), "test");
    assert_eq!(metadata.label_value("stepName"), "");
    assert_eq!(metadata.annotation_value("envs"), "");
}

#[test]
fn test_validation_error_messages() {
    assert_eq!(
        ValidationError::MissingProjectName.to_string(),
        "projectName required"
    );
    assert_eq!(
        ValidationError::InvalidOutput("xml".to_string()).to_string(),
        "--output must be yaml or json"
    );
}

#[test]
fn test_definition_error_from_validation() {
    let err = DefinitionError::from(ValidationError::MissingProjectName);
    assert!(matches!(err, DefinitionError::Validation(_)));
    assert_eq!(err.to_string(), "projectName required");
}
