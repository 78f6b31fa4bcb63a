use dprint_cli_core::types::ErrBox;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::arg_parser::{CliArgs, CredentialCommand, NodeCommand, SubCommand};
use crate::configuration::{resolve_config, resolve_locale};
use crate::environment::Environment;
use crate::translations::{get_credential_translation_path, get_node_translation_path};

#[derive(Serialize)]
struct PathOutput<'a> {
    path: &'a Path,
}

pub async fn run<TEnvironment: Environment>(environment: &TEnvironment, args: CliArgs) -> Result<(), ErrBox> {
    let output_json = args.output_json;

    match args.sub_command {
        SubCommand::Help(text) => environment.log(&text),
        SubCommand::Version => environment.log(&format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))),
        SubCommand::Node(command) => {
            let path = handle_node_command(environment, command).await?;
            log_path(environment, &path, output_json)?;
        }
        SubCommand::Credential(command) => {
            let path = handle_credential_command(environment, command)?;
            log_path(environment, &path, output_json)?;
        }
    }

    Ok(())
}

async fn handle_node_command<TEnvironment: Environment>(
    environment: &TEnvironment,
    command: NodeCommand,
) -> Result<PathBuf, ErrBox> {
    let locale = resolve_locale(environment, command.locale.as_deref())?;
    let source_path = environment.cwd().join(&command.source_path);
    get_node_translation_path(environment, &source_path, &command.node_type, &locale).await
}

fn handle_credential_command<TEnvironment: Environment>(
    environment: &TEnvironment,
    command: CredentialCommand,
) -> Result<PathBuf, ErrBox> {
    let config = resolve_config(environment, &command.overrides)?;
    Ok(get_credential_translation_path(
        &config.packages_dir,
        &config.locale,
        &command.credential_type,
    ))
}

fn log_path<TEnvironment: Environment>(environment: &TEnvironment, path: &Path, output_json: bool) -> Result<(), ErrBox> {
    if output_json {
        environment.log(&serde_json::to_string(&PathOutput { path })?);
    } else {
        environment.log(&path.to_string_lossy());
    }
    Ok(())
}
