use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml in the data directory.
/// Every section is optional; a missing file means all defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Mail recipient for the mailto link
    #[serde(default = "default_recipient")]
    pub recipient: String,
    /// First line of the exported report
    #[serde(default = "default_report_title")]
    pub report_title: String,
    /// Prefix of the mail subject line
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            recipient: default_recipient(),
            report_title: default_report_title(),
            subject_prefix: default_subject_prefix(),
        }
    }
}

fn default_recipient() -> String {
    "janis.weiskopf@outlook.com".to_string()
}

fn default_report_title() -> String {
    "Kantonspiel – Resultat".to_string()
}

fn default_subject_prefix() -> String {
    "Kantonspiel".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color overrides, hex strings keyed by theme slot (see tui::theme)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.export.subject_prefix, "Kantonspiel");
        assert_eq!(config.export.report_title, "Kantonspiel – Resultat");
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn partial_export_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
[export]
recipient = "someone@example.ch"
"#,
        )
        .unwrap();
        assert_eq!(config.export.recipient, "someone@example.ch");
        assert_eq!(config.export.subject_prefix, "Kantonspiel");
    }

    #[test]
    fn ui_colors_parse() {
        let config: AppConfig = toml::from_str(
            r##"
[ui.colors]
background = "#101010"
"##,
        )
        .unwrap();
        assert_eq!(config.ui.colors.get("background").unwrap(), "#101010");
    }
}
