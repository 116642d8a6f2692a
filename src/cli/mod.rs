//! # cincinnati-names CLI
//!
//! Shows the child objects the operator derives for a `Cincinnati` resource,
//! without talking to a cluster.
//!
//! ## Usage
//!
//! ```bash
//! # All child names for a Cincinnati called "example"
//! cincinnati-names names example
//!
//! # Same, as JSON, rejecting names the API server would refuse
//! cincinnati-names --strict names example --output json
//!
//! # Supported roles and their naming rules
//! cincinnati-names roles
//!
//! # Metadata of the policy engine Service
//! cincinnati-names -n openshift-update-service meta example policy-engine-service
//! ```

use anyhow::{Context, Result};
use cincinnati_operator::config::OperatorConfig;
use cincinnati_operator::crd::{Cincinnati, CincinnatiSpec};
use cincinnati_operator::naming::ChildRole;
use cincinnati_operator::observability::init_logging;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

mod meta;
mod names;
mod roles;

/// Cincinnati operator child naming CLI
#[derive(Parser, Debug)]
#[command(name = "cincinnati-names")]
#[command(
    about = "Show the child objects the Cincinnati operator derives for a resource",
    version,
    long_version = concat!(
        env!("CARGO_PKG_VERSION"),
        " (git ",
        env!("BUILD_GIT_HASH"),
        ", built ",
        env!("BUILD_DATETIME"),
        ", timestamp ",
        env!("BUILD_TIMESTAMP"),
        ")"
    ),
    after_help = "\
Examples:
  cincinnati-names names example
  cincinnati-names names example --output yaml
  cincinnati-names meta example graph-builder-service --namespace openshift-update-service
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Namespace of the Cincinnati resource (defaults to POD_NAMESPACE)
    #[arg(short, long, global = true)]
    namespace: Option<String>,

    /// Reject names the API server would refuse (also enabled by CINCINNATI_STRICT_NAMES)
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the name of every child object
    Names {
        /// Name of the Cincinnati resource
        #[arg(value_name = "NAME")]
        name: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
    /// List child roles, their kinds and naming rules
    Roles,
    /// Print the metadata of one child object as YAML
    Meta {
        /// Name of the Cincinnati resource
        #[arg(value_name = "NAME")]
        name: String,

        /// Child role, e.g. deployment, config, policy-engine-service
        #[arg(value_name = "ROLE", value_parser = parse_role)]
        role: ChildRole,

        /// Parent uid; when given, the metadata includes the controller owner reference
        #[arg(long)]
        uid: Option<String>,
    },
}

/// Output format for `names`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn parse_role(value: &str) -> Result<ChildRole, String> {
    value.parse::<ChildRole>().map_err(|e| {
        let known: Vec<&str> = ChildRole::ALL.iter().map(ChildRole::as_str).collect();
        format!("{e} (expected one of: {})", known.join(", "))
    })
}

/// Build a `Cincinnati` carrying only the identity fields naming depends on
fn synthetic_instance(name: &str, namespace: Option<&str>, uid: Option<&str>) -> Cincinnati {
    let mut instance = Cincinnati::new(
        name,
        CincinnatiSpec {
            replicas: 1,
            registry: String::new(),
            repository: String::new(),
            graph_data_image: String::new(),
        },
    );
    instance.metadata.namespace = namespace.map(str::to_string);
    instance.metadata.uid = uid.map(str::to_string);
    instance
}

/// Namespace from the command line, falling back to the operator's own namespace
fn resolve_namespace<'a>(flag: Option<&'a str>, config: &'a OperatorConfig) -> &'a str {
    flag.unwrap_or(&config.operator_namespace)
}

fn main() -> Result<()> {
    let config = OperatorConfig::from_env();
    init_logging(&config, "cincinnati_names")?;

    let cli = Cli::parse();
    let strict = cli.strict || config.strict_names;
    let namespace = resolve_namespace(cli.namespace.as_deref(), &config);
    debug!(strict, namespace = %namespace, "Parsed command line");

    let output = match cli.command {
        Commands::Names { name, output } => {
            let instance = synthetic_instance(&name, Some(namespace), None);
            names::names_command(&instance, strict, output)
                .with_context(|| format!("Failed to derive child names for '{name}'"))?
        }
        Commands::Roles => roles::roles_command(),
        Commands::Meta { name, role, uid } => {
            let instance = synthetic_instance(&name, Some(namespace), uid.as_deref());
            meta::meta_command(&instance, role, strict, &config.operator_name)
                .with_context(|| format!("Failed to build {role} metadata for '{name}'"))?
        }
    };

    print!("{output}");
    Ok(())
}
