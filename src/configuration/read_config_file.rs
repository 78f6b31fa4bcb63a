use dprint_cli_core::types::ErrBox;
use jsonc_parser::parse_to_value;
use jsonc_parser::JsonValue;

#[derive(Debug, Default, PartialEq)]
pub struct ConfigFile {
    pub packages_dir: Option<String>,
    pub default_locale: Option<String>,
}

pub fn read_config_file(file_text: &str) -> Result<ConfigFile, ErrBox> {
    let value = parse_to_value(file_text)?;
    let mut root_object = match value {
        Some(JsonValue::Object(obj)) => obj,
        _ => return err!("Expected a root object in the json file."),
    };

    let packages_dir = root_object.take_string("packagesDir").map(|t| t.to_string());
    let default_locale = root_object.take_string("defaultLocale").map(|t| t.to_string());

    for (key, _) in root_object.into_iter() {
        return err!("Unknown key '{}'", key);
    }

    Ok(ConfigFile {
        packages_dir,
        default_locale,
    })
}
