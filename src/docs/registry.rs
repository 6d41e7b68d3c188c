//! Descriptor registry and member lookup
//!
//! Holds a pre-resolved descriptor set (classes with their members, plus free
//! functions) and resolves name-based lookups against it. Descriptor
//! documents are JSON, produced ahead of time by the tool that inspected the
//! host runtime.
//!
//! Lookup failure is fatal by design: asking for a class or member that does
//! not exist is a caller bug, unlike the data-quality gaps the signature
//! builder absorbs silently.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{DocsError, DocsResult, IoContext, JsonContext};
use super::signature::build_signature;
use super::{ClassInfo, MemberInfo};

/// On-disk shape of a descriptor document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescriptorDocument {
    /// Classes with their member descriptors
    #[serde(default)]
    pub classes: Vec<ClassInfo>,
    /// Free function descriptors
    #[serde(default)]
    pub functions: Vec<MemberInfo>,
}

/// Registry of pre-resolved metadata descriptors
#[derive(Debug, Default)]
pub struct ClassRegistry {
    /// Classes by name
    classes: HashMap<String, ClassInfo>,
    /// Free functions, in document order
    functions: Vec<MemberInfo>,
}

impl ClassRegistry {
    /// Build a registry from an already-parsed descriptor document
    pub fn from_document(document: DescriptorDocument) -> Self {
        let mut classes = HashMap::new();
        for class in document.classes {
            classes.insert(class.name.clone(), class);
        }
        Self {
            classes,
            functions: document.functions,
        }
    }

    /// Load a registry from a JSON descriptor string
    pub fn from_json_str(content: &str) -> DocsResult<Self> {
        let document: DescriptorDocument = serde_json::from_str(content)
            .with_json_context("Failed to parse descriptor document")?;
        Ok(Self::from_document(document))
    }

    /// Load a registry from a JSON descriptor file
    pub fn from_json_file(path: &Path) -> DocsResult<Self> {
        let content = fs::read_to_string(path)
            .with_io_context("Failed to read descriptor file")?;
        let registry = Self::from_json_str(&content)?;
        log::info!(
            "Loaded {} classes and {} functions from {}",
            registry.classes.len(),
            registry.functions.len(),
            path.display()
        );
        Ok(registry)
    }

    /// All class names in the registry, sorted
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Free functions in document order
    pub fn functions(&self) -> &[MemberInfo] {
        &self.functions
    }

    /// Look up a class by name
    pub fn lookup_class(&self, class_name: &str) -> DocsResult<&ClassInfo> {
        self.classes
            .get(class_name)
            .ok_or_else(|| DocsError::ClassNotFound {
                name: class_name.to_string(),
            })
    }

    /// Look up a member on a class
    pub fn lookup_member(&self, class_name: &str, member_name: &str) -> DocsResult<&MemberInfo> {
        let class = self.lookup_class(class_name)?;
        class
            .members
            .iter()
            .find(|member| member.name == member_name)
            .ok_or_else(|| DocsError::MemberNotFound {
                member: member_name.to_string(),
                class: class_name.to_string(),
            })
    }

    /// Look up a free function by name
    pub fn lookup_function(&self, function_name: &str) -> DocsResult<&MemberInfo> {
        self.functions
            .iter()
            .find(|function| function.name == function_name)
            .ok_or_else(|| DocsError::FunctionNotFound {
                name: function_name.to_string(),
            })
    }

    /// Build signatures for every member of a class, in declaration order
    ///
    /// Members whose signature renders empty (private visibility) are skipped,
    /// which is how a class listing ends up showing only the public API.
    pub fn signatures_for_class(&self, class_name: &str) -> DocsResult<Vec<String>> {
        let class = self.lookup_class(class_name)?;
        let signatures = class
            .members
            .iter()
            .map(build_signature)
            .filter(|signature| !signature.is_empty())
            .collect();
        Ok(signatures)
    }
}
