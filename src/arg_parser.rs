use dprint_cli_core::types::ErrBox;

use crate::configuration::ConfigOverrides;

pub struct CliArgs {
    pub sub_command: SubCommand,
    pub is_verbose: bool,
    pub output_json: bool,
}

#[derive(Debug, PartialEq)]
pub enum SubCommand {
    Node(NodeCommand),
    Credential(CredentialCommand),
    Version,
    Help(String),
}

#[derive(Debug, PartialEq)]
pub struct NodeCommand {
    pub source_path: String,
    pub node_type: String,
    pub locale: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct CredentialCommand {
    pub credential_type: String,
    pub overrides: ConfigOverrides,
}

pub fn parse_args(args: Vec<String>) -> Result<CliArgs, ErrBox> {
    let mut cli_parser = create_cli_parser();
    let matches = match cli_parser.get_matches_from_safe_borrow(args) {
        Ok(result) => result,
        Err(err) => return err!("{}", err.to_string()),
    };

    let sub_command = if matches.is_present("version") {
        SubCommand::Version
    } else if let Some(node_matches) = matches.subcommand_matches("node") {
        SubCommand::Node(NodeCommand {
            source_path: node_matches.value_of("source_path").map(String::from).unwrap(),
            node_type: node_matches.value_of("node_type").map(String::from).unwrap(),
            locale: node_matches.value_of("locale").map(String::from),
        })
    } else if let Some(credential_matches) = matches.subcommand_matches("credential") {
        SubCommand::Credential(CredentialCommand {
            credential_type: credential_matches
                .value_of("credential_type")
                .map(String::from)
                .unwrap(),
            overrides: ConfigOverrides {
                packages_dir: credential_matches.value_of("packages_dir").map(String::from),
                locale: credential_matches.value_of("locale").map(String::from),
            },
        })
    } else {
        SubCommand::Help({
            let mut text = Vec::new();
            cli_parser.write_help(&mut text).unwrap();
            String::from_utf8(text).unwrap()
        })
    };

    // global flags may be provided before or after the sub command
    let is_flag_present = |name: &str| {
        matches.is_present(name) || matches.subcommand().1.map(|m| m.is_present(name)).unwrap_or(false)
    };

    Ok(CliArgs {
        is_verbose: is_flag_present("verbose"),
        output_json: is_flag_present("json"),
        sub_command,
    })
}

fn create_cli_parser<'a, 'b>() -> clap::App<'a, 'b> {
    use clap::{App, AppSettings, Arg, SubCommand};
    App::new("translation-paths")
        .setting(AppSettings::UnifiedHelpMessage)
        .setting(AppSettings::DisableHelpFlags)
        .setting(AppSettings::DisableHelpSubcommand)
        .setting(AppSettings::DeriveDisplayOrder)
        .bin_name("translation-paths")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolves the translation file paths of node and credential plugins.")
        .usage("translation-paths <SUBCOMMAND> [OPTIONS]")
        .template(
            r#"{bin} {version}

{about}

USAGE:
    {usage}

SUBCOMMANDS:
{subcommands}

OPTIONS:
{unified}

{after-help}"#,
        )
        .after_help(
            r#"ENVIRONMENT VARIABLES:
  TRANSLATION_PATHS_PACKAGES_DIR  Directory the plugin packages are installed in.
  N8N_DEFAULT_LOCALE              Locale used when --locale is not provided."#,
        )
        .subcommand(
            SubCommand::with_name("node")
                .about("Outputs the translation file path of a node.")
                .arg(
                    Arg::with_name("source_path")
                        .help("Path to the node's installed source file.")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::with_name("node_type")
                        .help("The node type (ex. n8n-nodes-base.Slack).")
                        .takes_value(true)
                        .required(true),
                )
                .arg(locale_arg()),
        )
        .subcommand(
            SubCommand::with_name("credential")
                .about("Outputs the translation file path of a credential.")
                .arg(
                    Arg::with_name("credential_type")
                        .help("The credential type (ex. slackApi).")
                        .takes_value(true)
                        .required(true),
                )
                .arg(locale_arg())
                .arg(
                    Arg::with_name("packages_dir")
                        .long("packages-dir")
                        .help("Directory the plugin packages are installed in.")
                        .value_name("DIR")
                        .takes_value(true),
                ),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Outputs the path as a json object.")
                .global(true)
                .takes_value(false),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .help("Prints additional diagnostic information.")
                .global(true)
                .takes_value(false),
        )
        .arg(
            Arg::with_name("help")
                .long("help")
                .short("h")
                .hidden(true)
                .takes_value(false),
        )
        .arg(
            Arg::with_name("version")
                .short("v")
                .long("version")
                .help("Prints the version.")
                .takes_value(false),
        )
}

fn locale_arg<'a, 'b>() -> clap::Arg<'a, 'b> {
    clap::Arg::with_name("locale")
        .long("locale")
        .help("The locale of the translation file (ex. de).")
        .value_name("LOCALE")
        .takes_value(true)
}
