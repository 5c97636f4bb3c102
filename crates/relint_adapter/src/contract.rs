//! The contract implemented by concrete tool integrations.

use crate::error::AdapterError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Parameter names every integration receives positionally; a declared
/// setting must not shadow them.
const RESERVED_NAMES: [&str; 3] = ["filename", "file", "config_file"];

/// A resolved settings bundle passed to an adapter invocation.
pub type Settings = BTreeMap<String, SettingValue>;

/// The type of a declared setting.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SettingKind {
    /// A free-form string.
    Str,
    /// A boolean flag.
    Bool,
    /// A signed integer.
    Int,
}

/// The value of one setting in a bundle.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SettingValue {
    /// A string value.
    Str(String),
    /// A boolean value.
    Bool(bool),
    /// An integer value.
    Int(i64),
}

impl SettingValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> SettingKind {
        match self {
            SettingValue::Str(_) => SettingKind::Str,
            SettingValue::Bool(_) => SettingKind::Bool,
            SettingValue::Int(_) => SettingKind::Int,
        }
    }

    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

/// Metadata for one named setting an integration consumes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SettingSpec {
    /// The setting name as the engine resolves it.
    pub name: String,
    /// The expected value kind.
    pub kind: SettingKind,
    /// The default value; `None` makes the setting required.
    pub default: Option<SettingValue>,
}

impl SettingSpec {
    /// Declares a required setting of the given kind.
    pub fn required(name: impl Into<String>, kind: SettingKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
        }
    }

    /// Declares an optional setting with a default value.
    pub fn optional(name: impl Into<String>, default: SettingValue) -> Self {
        Self {
            name: name.into(),
            kind: default.kind(),
            default: Some(default),
        }
    }

    /// Returns `true` if the engine must supply this setting.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// The declared settings an integration consumes, beyond the three fixed
/// positional inputs (filename, file content, config file path).
///
/// The engine introspects this once per adapter registration to know which
/// named settings it must resolve upstream. The contract is validated
/// structurally when the adapter is registered.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ArgumentContract {
    settings: Vec<SettingSpec>,
}

impl ArgumentContract {
    /// Creates a contract from the given setting declarations.
    pub fn new(settings: Vec<SettingSpec>) -> Self {
        Self { settings }
    }

    /// Returns the declared settings.
    pub fn settings(&self) -> &[SettingSpec] {
        &self.settings
    }

    /// Checks the declaration itself: no reserved or duplicate names, and
    /// defaults that agree with their declared kind.
    pub(crate) fn validate(&self) -> Result<(), AdapterError> {
        let mut seen = std::collections::BTreeSet::new();
        for spec in &self.settings {
            if RESERVED_NAMES.contains(&spec.name.as_str()) {
                return Err(AdapterError::Contract(format!(
                    "setting '{}' shadows a fixed positional parameter",
                    spec.name
                )));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(AdapterError::Contract(format!(
                    "setting '{}' is declared twice",
                    spec.name
                )));
            }
            if let Some(default) = &spec.default {
                if default.kind() != spec.kind {
                    return Err(AdapterError::Contract(format!(
                        "default for setting '{}' does not match its declared kind",
                        spec.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Checks a supplied bundle against this contract and fills defaults.
    ///
    /// Required settings must be present, supplied values must match their
    /// declared kind, and keys outside the contract are rejected.
    pub fn resolve(&self, supplied: &Settings) -> Result<Settings, AdapterError> {
        for key in supplied.keys() {
            if !self.settings.iter().any(|s| &s.name == key) {
                return Err(AdapterError::Contract(format!(
                    "setting '{key}' is not declared by this adapter"
                )));
            }
        }

        let mut resolved = Settings::new();
        for spec in &self.settings {
            match supplied.get(&spec.name) {
                Some(value) => {
                    if value.kind() != spec.kind {
                        return Err(AdapterError::Contract(format!(
                            "setting '{}' has the wrong kind",
                            spec.name
                        )));
                    }
                    resolved.insert(spec.name.clone(), value.clone());
                }
                None => match &spec.default {
                    Some(default) => {
                        resolved.insert(spec.name.clone(), default.clone());
                    }
                    None => {
                        return Err(AdapterError::Contract(format!(
                            "required setting '{}' was not supplied",
                            spec.name
                        )));
                    }
                },
            }
        }
        Ok(resolved)
    }
}

/// The interface a concrete tool integration implements.
///
/// `create_arguments` is the only required operation: it receives the file
/// under analysis, its content, the materialized config file path (when
/// [`generate_config`](Self::generate_config) produced one), and the
/// resolved settings, and returns the argument vector appended after the
/// executable. Integrations that need a config file override
/// `generate_config`; returning `None` (the default) skips config
/// materialization entirely.
pub trait ToolIntegration: Send + Sync {
    /// The display name of this integration, used as the diagnostic origin.
    fn name(&self) -> &str;

    /// Declares the named settings this integration consumes.
    fn settings_contract(&self) -> ArgumentContract {
        ArgumentContract::default()
    }

    /// Builds the command-line arguments for one invocation.
    fn create_arguments(
        &self,
        filename: &Path,
        file: &str,
        config_file: Option<&Path>,
        settings: &Settings,
    ) -> Vec<String>;

    /// Produces the contents of the tool's config file, or `None` when the
    /// tool needs no config file.
    fn generate_config(&self, _filename: &Path, _file: &str, _settings: &Settings) -> Option<String> {
        None
    }
}
