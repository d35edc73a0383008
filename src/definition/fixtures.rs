//! Sample project definition shared by unit tests

use super::project::ProjectDefinitionDocument;

/// `data.project` payload of a two-environment, two-branch project.
pub(crate) const SAMPLE_PROJECT_JSON: &str = r#"{
  "projectInfo": {"projectName": "test-project1", "projectDesc": "demo project"},
  "projectDef": {
    "buildDefs": [
      {"buildName": "tp1-go-demo", "buildPhaseID": 1, "buildPath": "Codes/Backend/tp1-go-demo", "buildEnv": "go-1.18",
       "buildCmds": ["go mod tidy", "go build -o tp1-go-demo"], "buildChecks": ["ls -alh"], "buildCaches": ["/root/go"]},
      {"buildName": "tp1-gin-demo", "buildPhaseID": 2, "buildPath": "Codes/Backend/tp1-gin-demo", "buildEnv": "go-1.18",
       "buildCmds": ["go build"], "buildChecks": null}
    ],
    "packageDefs": [
      {"packageName": "tp1-go-demo", "relatedBuilds": ["tp1-go-demo"], "packageFrom": "alpine:3.15", "packages": ["RUN apk add curl"]},
      {"packageName": "tp1-gin-demo", "relatedBuilds": ["tp1-gin-demo"], "packageFrom": "alpine:3.15", "packages": []}
    ],
    "customStepDefs": {
      "scanCode": {"enableMode": "", "customStepModuleDefs": [
        {"moduleName": "tp1-go-demo", "relatedStepModules": [], "manualEnable": false, "paramInputYaml": "path: Codes/Backend/tp1-go-demo"}
      ]}
    },
    "dockerIgnoreDefs": [".git", "node_modules"],
    "customOpsDefs": [
      {"customOpsName": "restart-all", "customOpsDesc": "restart all deployments", "customOpsSteps": ["build", "deploy"]}
    ],
    "errMsgPackageDefs": "",
    "errMsgCustomStepDefs": null,
    "errMsgCustomOpsDefs": ""
  },
  "projectAvailableEnvs": [
    {
      "envName": "test",
      "deployContainerDefs": [
        {"deployName": "tp1-go-demo", "relatedPackage": "tp1-go-demo", "deployReplicas": 1,
         "deployLocalPorts": [{"port": 8000, "protocol": "HTTP"}],
         "deployNodePorts": [{"port": 9000, "nodePort": 30101, "protocol": ""}],
         "dependServices": [{"dependName": "mysql", "dependPort": 3306, "dependType": "TCP"}]},
        {"deployName": "tp1-gin-demo", "relatedPackage": "tp1-gin-demo", "deployReplicas": 2,
         "deployLocalPorts": [{"port": 8080}], "deployNodePorts": null, "dependServices": null}
      ],
      "customStepDefs": {
        "testApi": {"enableMode": "env", "customStepModuleDefs": [
          {"moduleName": "tp1-go-demo", "relatedStepModules": ["tp1-gin-demo"], "manualEnable": true, "paramInputYaml": "url: http://test"}
        ]}
      },
      "errMsgDeployContainerDefs": "",
      "errMsgCustomStepDefs": {}
    },
    {
      "envName": "prod",
      "deployContainerDefs": [
        {"deployName": "tp1-go-demo", "relatedPackage": "tp1-go-demo", "deployReplicas": 3}
      ],
      "customStepDefs": {},
      "errMsgDeployContainerDefs": "replicas too large",
      "errMsgCustomStepDefs": {"testApi": "testApi not enabled"}
    }
  ],
  "projectPipelines": [
    {"branchName": "develop", "envs": ["test"], "envProductions": [], "isDefault": true, "webhookPushEvent": true, "tagSuffix": "",
     "pipelineDef": {"isAutoDetectBuild": true, "isQueue": false, "builds": [{"name": "tp1-go-demo", "run": true}, {"name": "tp1-gin-demo", "run": false}]},
     "errMsgPipelineDef": "missing build step"},
    {"branchName": "master", "envs": ["test"], "envProductions": ["prod"], "isDefault": false, "webhookPushEvent": false, "tagSuffix": "release",
     "pipelineDef": {"isAutoDetectBuild": false, "isQueue": true, "builds": [{"name": "tp1-go-demo", "run": true}]},
     "errMsgPipelineDef": ""}
  ],
  "buildEnvs": ["go-1.18"],
  "buildNames": ["tp1-go-demo", "tp1-gin-demo"],
  "customStepConfs": [{"customStepName": "scanCode", "isEnvDiff": false}, {"customStepName": "testApi", "isEnvDiff": true}],
  "packageNames": ["tp1-go-demo", "tp1-gin-demo"],
  "nodePorts": [30101, 30102]
}"#;

pub(crate) fn sample_document() -> ProjectDefinitionDocument {
    serde_json::from_str(SAMPLE_PROJECT_JSON).unwrap()
}
