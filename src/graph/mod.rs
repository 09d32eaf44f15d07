//! Compiled Node-Graph Description
//!
//! The graph compiler lives outside this crate; what arrives here is its
//! finished output: vertex / fragment sources plus the ordered list of
//! uniform declarations the generated code expects. The description is plain
//! data and deserializes from the JSON the node editor emits.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::material::binding::{SystemValue, UniformValue};

/// One uniform the generated shader declares.
///
/// A declaration is either driven by a system value, seeded with a static
/// payload, or neither (the graph declared the name but left it to the
/// caller to fill in later).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniformDeclaration {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_value: Option<SystemValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<UniformValue>,
}

impl UniformDeclaration {
    #[must_use]
    pub fn system(name: impl Into<String>, kind: SystemValue) -> Self {
        Self {
            name: name.into(),
            system_value: Some(kind),
            value: None,
        }
    }

    #[must_use]
    pub fn direct(name: impl Into<String>, value: UniformValue) -> Self {
        Self {
            name: name.into(),
            system_value: None,
            value: Some(value),
        }
    }

    #[must_use]
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            system_value: None,
            value: None,
        }
    }
}

/// The compiler's output for one graph: shader sources and the uniforms they
/// consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompiledGraph {
    pub name: String,
    pub vertex_source: String,
    pub fragment_source: String,

    #[serde(default)]
    pub uniforms: Vec<UniformDeclaration>,
}

impl CompiledGraph {
    /// Parses a graph description from its JSON form.
    ///
    /// # Errors
    ///
    /// [`crate::NornError::JsonError`] when the text is not a valid
    /// description.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The declared uniform names, in declaration order.
    #[must_use]
    pub fn uniform_names(&self) -> Vec<String> {
        self.uniforms.iter().map(|decl| decl.name.clone()).collect()
    }
}
