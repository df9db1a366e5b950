//! Tool parameter schemas.
//!
//! Each tool declares its parameters as a list of [`Param`]s. The list is rendered
//! as the JSON Schema advertised in `tools/list`, and is used to check and fill in
//! arguments before a handler sees them.

use serde_json::{Map, Value as JsonValue};

use crate::error::{McpError, Result};

/// JSON type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// JSON string
    String,
    /// JSON number (integer or float)
    Number,
    /// JSON boolean
    Boolean,
    /// JSON object with free-form fields
    Object,
}

impl ParamKind {
    fn schema_type(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Object => "object",
        }
    }

    fn accepts(self, value: &JsonValue) -> bool {
        match self {
            ParamKind::String => value.is_string(),
            ParamKind::Number => value.is_number(),
            ParamKind::Boolean => value.is_boolean(),
            ParamKind::Object => value.is_object(),
        }
    }
}

/// One declared tool parameter.
#[derive(Debug, Clone)]
pub struct Param {
    /// Parameter name as exposed to the caller.
    pub name: &'static str,
    /// JSON type.
    pub kind: ParamKind,
    /// Human-readable description.
    pub description: &'static str,
    /// Whether the caller must supply it.
    pub required: bool,
    /// Value used when an optional parameter is omitted.
    pub default: Option<JsonValue>,
    /// Allowed values for enumerated string parameters.
    pub choices: Option<&'static [&'static str]>,
}

impl Param {
    fn new(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
            default: None,
            choices: None,
        }
    }

    /// Optional string parameter.
    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::String, description)
    }

    /// Optional number parameter.
    pub fn number(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Number, description)
    }

    /// Optional boolean parameter.
    pub fn boolean(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Boolean, description)
    }

    /// Optional object parameter.
    pub fn object(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Object, description)
    }

    /// Mark the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default used when the parameter is omitted.
    pub fn default(mut self, value: impl Into<JsonValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Restrict a string parameter to a fixed set of values.
    pub fn choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = Some(choices);
        self
    }

    fn property_schema(&self) -> JsonValue {
        let mut prop = Map::new();
        prop.insert("type".to_string(), self.kind.schema_type().into());
        prop.insert("description".to_string(), self.description.into());
        if let Some(choices) = self.choices {
            prop.insert("enum".to_string(), choices.to_vec().into());
        }
        if let Some(default) = &self.default {
            prop.insert("default".to_string(), default.clone());
        }
        JsonValue::Object(prop)
    }

    fn check(&self, value: &JsonValue) -> Result<()> {
        if !self.kind.accepts(value) {
            return Err(McpError::InvalidArg {
                name: self.name.to_string(),
                reason: format!("expected {}", self.kind.schema_type()),
            });
        }
        if let (Some(choices), Some(s)) = (self.choices, value.as_str()) {
            if !choices.contains(&s) {
                return Err(McpError::InvalidArg {
                    name: self.name.to_string(),
                    reason: format!("expected one of: {}", choices.join(", ")),
                });
            }
        }
        Ok(())
    }
}

/// Render the JSON Schema object for a parameter list.
pub fn input_schema(params: &[Param]) -> JsonValue {
    let mut props = Map::new();
    let mut required = Vec::new();
    for param in params {
        props.insert(param.name.to_string(), param.property_schema());
        if param.required {
            required.push(param.name);
        }
    }

    serde_json::json!({
        "type": "object",
        "properties": props,
        "required": required
    })
}

/// Check arguments against the declared parameters and fill in defaults.
///
/// `null` values are treated as omitted. Keys that are not declared pass through.
pub fn prepare_args(
    params: &[Param],
    mut args: Map<String, JsonValue>,
) -> Result<Map<String, JsonValue>> {
    args.retain(|_, v| !v.is_null());

    for param in params {
        match args.get(param.name) {
            Some(value) => param.check(value)?,
            None if param.required => return Err(McpError::MissingArg(param.name.to_string())),
            None => {
                if let Some(default) = &param.default {
                    args.insert(param.name.to_string(), default.clone());
                }
            }
        }
    }

    Ok(args)
}
