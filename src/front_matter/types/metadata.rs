use liquid::model::Value as LiquidValue;
use liquid::Object;
use serde_yaml::{Mapping, Value as YamlValue};

/// Open key-value metadata attached to a content file.
///
/// Keys are whatever page authors write in frontmatter or `defaults.yml`;
/// only `layout` and `skip` mean anything to the builder itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata(Mapping);

impl Metadata {
    pub fn new() -> Self {
        Metadata(Mapping::new())
    }

    pub fn from_mapping(map: Mapping) -> Self {
        Metadata(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&YamlValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: &str, value: YamlValue) {
        self.0.insert(YamlValue::String(key.to_string()), value);
    }

    /// Name of the layout this page asks for.
    ///
    /// Scalars are stringified so `layout: 404` names the layout `404`.
    pub fn layout(&self) -> Option<String> {
        match self.get("layout")? {
            YamlValue::String(s) => Some(s.clone()),
            YamlValue::Number(n) => Some(n.to_string()),
            YamlValue::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// True only for a literal boolean `skip: true`
    pub fn skip(&self) -> bool {
        matches!(self.get("skip"), Some(YamlValue::Bool(true)))
    }

    /// Layer these values over `defaults`; keys present here win.
    ///
    /// The merge is shallow: a nested mapping in the page replaces the
    /// default's mapping as a whole.
    pub fn merged_over(&self, defaults: &Metadata) -> Metadata {
        let mut merged = defaults.0.clone();
        for (key, value) in &self.0 {
            merged.insert(key.clone(), value.clone());
        }
        Metadata(merged)
    }

    /// Convert to a Liquid object for template rendering
    pub fn to_liquid(&self) -> Object {
        let mut obj = Object::new();
        for (key, value) in &self.0 {
            obj.insert(key_to_string(key).into(), yaml_to_liquid(value));
        }
        obj
    }

}

fn key_to_string(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

/// Convert YAML value to Liquid value
fn yaml_to_liquid(yaml: &YamlValue) -> LiquidValue {
    match yaml {
        YamlValue::Null => LiquidValue::Nil,
        YamlValue::Bool(b) => LiquidValue::scalar(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                LiquidValue::scalar(i)
            } else if let Some(f) = n.as_f64() {
                LiquidValue::scalar(f)
            } else {
                LiquidValue::scalar(n.to_string())
            }
        }
        YamlValue::String(s) => LiquidValue::scalar(s.clone()),
        YamlValue::Sequence(seq) => LiquidValue::Array(seq.iter().map(yaml_to_liquid).collect()),
        YamlValue::Mapping(map) => {
            let mut obj = Object::new();
            for (k, v) in map {
                obj.insert(key_to_string(k).into(), yaml_to_liquid(v));
            }
            LiquidValue::Object(obj)
        }
        YamlValue::Tagged(tagged) => yaml_to_liquid(&tagged.value),
    }
}
