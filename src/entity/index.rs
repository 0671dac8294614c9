use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::EntityKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRecord {
    pub name: String,
    pub url_path: String,
}

/// A class, interface or trait, with its methods in index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    pub name: String,
    pub url_path: String,
    #[serde(default)]
    pub methods: IndexMap<String, MethodRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRecord {
    pub name: String,
    pub url_path: String,
}

/// The pre-extracted API surface of one product.
///
/// An index is never mutated once loaded; builders only read from it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiIndex {
    #[serde(default, rename = "class")]
    classes: Vec<ClassRecord>,
    #[serde(default, rename = "interface")]
    interfaces: Vec<ClassRecord>,
    #[serde(default, rename = "trait")]
    traits: Vec<ClassRecord>,
    #[serde(default, rename = "function")]
    functions: Vec<FunctionRecord>,
}

impl ApiIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(payload: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(payload)
    }

    /// Appends a record of `kind`. Methods are dropped for `Function`.
    pub fn with_class(mut self, kind: EntityKind, record: ClassRecord) -> Self {
        match kind {
            EntityKind::Class => self.classes.push(record),
            EntityKind::Interface => self.interfaces.push(record),
            EntityKind::Trait => self.traits.push(record),
            EntityKind::Function => {
                self.functions.push(FunctionRecord {
                    name: record.name,
                    url_path: record.url_path,
                });
            }
        }
        self
    }

    pub fn with_function(mut self, record: FunctionRecord) -> Self {
        self.functions.push(record);
        self
    }

    /// Records of a class-like kind, in index order. Functions have no class
    /// records; use [`ApiIndex::function_index`] for those.
    pub fn class_index(&self, kind: EntityKind) -> &[ClassRecord] {
        match kind {
            EntityKind::Class => &self.classes,
            EntityKind::Interface => &self.interfaces,
            EntityKind::Trait => &self.traits,
            EntityKind::Function => &[],
        }
    }

    pub fn function_index(&self) -> &[FunctionRecord] {
        &self.functions
    }

    pub fn len(&self) -> usize {
        self.classes.len() + self.interfaces.len() + self.traits.len() + self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ClassRecord {
    pub fn new(name: impl Into<String>, url_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url_path: url_path.into(),
            methods: IndexMap::new(),
        }
    }

    pub fn with_method(mut self, name: impl Into<String>, url_path: impl Into<String>) -> Self {
        let name = name.into();
        self.methods.insert(
            name.clone(),
            MethodRecord {
                name,
                url_path: url_path.into(),
            },
        );
        self
    }
}

impl FunctionRecord {
    pub fn new(name: impl Into<String>, url_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url_path: url_path.into(),
        }
    }
}
