//! `doryctl def get` - Show project definitions
//!
//! Validates the command line, fetches the project definition, extracts the
//! selected kinds and prints them as tables, JSON or YAML.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use doryctl::definition::{
    DefinitionKindList, FilterSpec, ValidationError, build_kind_list, validate_module_name,
    validate_project_name,
};
use doryctl::infrastructure::{Config, FileSource, HttpSource, ProjectDefSource};
use doryctl::render::{OutputFormat, RenderOptions, render};

/// Arguments of `def get`
#[derive(clap::Args, Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefGetArgs {
    /// Project name, e.g. test-project1
    pub project_name: Option<String>,

    /// Comma-separated kinds: all, build, package, deploy, step, pipeline, ignore, ops
    pub kinds: Option<String>,

    /// Filter by module names
    #[arg(long = "module", alias = "modules", value_delimiter = ',', value_name = "NAME")]
    pub modules: Vec<String>,

    /// Filter by environment names
    #[arg(long = "env", alias = "envs", value_delimiter = ',', value_name = "NAME")]
    pub envs: Vec<String>,

    /// Filter by branch names
    #[arg(long = "branch", alias = "branches", value_delimiter = ',', value_name = "NAME")]
    pub branches: Vec<String>,

    /// Filter by custom step names
    #[arg(long = "step", alias = "steps", value_delimiter = ',', value_name = "NAME")]
    pub steps: Vec<String>,

    /// Output format: json or yaml, tables when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Keep empty fields in structured output
    #[arg(long)]
    pub full: bool,

    /// Read the project definition from a local JSON file instead of the server
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,
}

/// Validated form of [`DefGetArgs`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefGetRequest {
    /// Project to fetch.
    pub project_name: String,
    /// Kind and name selection.
    pub filter: FilterSpec,
    /// Rendering options.
    pub render: RenderOptions,
}

impl DefGetArgs {
    /// Checks names, kinds and output format.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<DefGetRequest, ValidationError> {
        let project_name = self
            .project_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingProjectName)?;
        validate_project_name(project_name)?;

        for module in &self.modules {
            validate_module_name(module)?;
        }

        let format = OutputFormat::parse(self.output.as_deref())?;
        let filter = FilterSpec::new()
            .with_kinds(self.kinds.as_deref().unwrap_or_default())?
            .with_modules(self.modules.clone())
            .with_envs(self.envs.clone())
            .with_branches(self.branches.clone())
            .with_steps(self.steps.clone());

        Ok(DefGetRequest {
            project_name: project_name.to_string(),
            filter,
            render: RenderOptions::new(format).with_full(self.full),
        })
    }

    /// Picks the definition source: the file given by `--from-file`, or the server.
    ///
    /// # Errors
    ///
    /// Fails when no server URL is configured or the HTTP client cannot be built.
    pub fn source(&self, config: &Config) -> Result<Box<dyn ProjectDefSource>> {
        if let Some(path) = &self.from_file {
            return Ok(Box::new(FileSource::new(path)));
        }

        let server_url = config.require_server_url()?;
        let source = HttpSource::new(
            server_url,
            &config.access_token,
            config.timeout(),
            config.insecure,
        )?;
        Ok(Box::new(source))
    }
}

impl DefGetRequest {
    /// Fetches the project and builds the kind list
    ///
    /// # Errors
    ///
    /// Fails when the fetch fails; no partial output is produced.
    pub fn fetch(&self, source: &dyn ProjectDefSource) -> Result<DefinitionKindList> {
        let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
        let doc = runtime
            .block_on(source.fetch_project(&self.project_name))
            .with_context(|| {
                format!(
                    "Failed to get project definition {} from {}",
                    self.project_name,
                    source.describe()
                )
            })?;

        let list = build_kind_list(&doc, &self.filter);
        for msg in &list.error_messages {
            tracing::warn!(project = %self.project_name, "{msg}");
        }
        Ok(list)
    }

    /// Fetches and renders
    ///
    /// # Errors
    ///
    /// Fails when the fetch or the encoding fails.
    pub fn execute(&self, source: &dyn ProjectDefSource) -> Result<String> {
        let list = self.fetch(source)?;
        render(&list, self.render).context("Failed to render project definition")
    }
}

/// Runs `def get`
pub fn run(args: &DefGetArgs, config: &Config) -> Result<()> {
    let request = args.validate()?;

    if tracing::enabled!(tracing::Level::DEBUG) {
        let dump = serde_yaml::to_string(args).unwrap_or_default();
        tracing::debug!("def get options:\n{dump}");
    }

    let source = args.source(config)?;
    let output = request.execute(source.as_ref())?;
    print!("{output}");
    Ok(())
}
