use std::collections::HashMap;

use super::managererror::{ManagerError, parse_json_value};
use super::namedobject::NamedJsonObject;

/// Registry of named objects built from JSON.
///
/// Each JSON object must carry a `name` field; the rest is handed to the
/// `get_obj_from_json` constructor. Inserting a name twice replaces the
/// earlier entry.
pub struct Manager<V> {
    map: HashMap<String, V>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}

impl<V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map: HashMap::new(), get_obj_from_json }
    }

    pub fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    pub fn insert(&mut self, name: String, v: V) {
        self.map.insert(name, v);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Parses `json_value` into its registered name and object without inserting it.
    pub fn parse_obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError> {
        let named_object: NamedJsonObject = parse_json_value(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        Ok((named_object.name().to_owned(), v))
    }

    pub fn parse_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<Vec<(String, V)>, ManagerError> {
        json_vec
            .iter()
            .map(|j| self.parse_obj_from_json(j.clone()))
            .collect()
    }
}
