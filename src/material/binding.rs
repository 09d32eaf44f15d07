use glam::{Vec3, Vec4};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::errors::{NornError, Result};
use crate::graph::UniformDeclaration;

// ============================================================================
// Value Tags
// ============================================================================

/// A uniform whose value is derived from scene / camera / object state each
/// frame instead of being authored in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemValue {
    World,
    WorldView,
    WorldViewProjection,
    View,
    Projection,
    ViewProjection,
    CameraPosition,
    FogColor,
    DeltaTime,
    /// `(y-origin sign, near, far, 1/far)` of the active camera.
    CameraParameters,
}

/// A statically-supplied uniform payload, authored in the graph or replaced
/// by the caller between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniformValue {
    Vector3(Vec3),
    Vector4(Vec4),
    Color3(Vec3),
    Color4 { rgb: Vec3, alpha: f32 },
}

// ============================================================================
// Binding Entry
// ============================================================================

/// One record of the binding table.
///
/// The tag is fixed at construction: a system-value entry stays a
/// system-value entry for its whole life, and a static entry can never be
/// re-tagged as one. Callers may freely replace a static entry's payload
/// between frames ([`BindingEntry::set_value`]). An entry carrying neither a
/// system value nor a payload is valid and simply never pushes anything.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BindingEntry {
    system_value: Option<SystemValue>,
    value: Option<UniformValue>,
}

impl BindingEntry {
    /// An entry resolved from scene / object state every frame.
    #[must_use]
    pub fn system(kind: SystemValue) -> Self {
        Self {
            system_value: Some(kind),
            value: None,
        }
    }

    /// An entry carrying a static payload.
    #[must_use]
    pub fn direct(value: UniformValue) -> Self {
        Self {
            system_value: None,
            value: Some(value),
        }
    }

    /// An entry with nothing to push. Kept in the table so the name stays
    /// known; binding it is a no-op until a payload is supplied.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn system_value(&self) -> Option<SystemValue> {
        self.system_value
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&UniformValue> {
        self.value.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn is_system(&self) -> bool {
        self.system_value.is_some()
    }

    /// Replaces the payload. Returns `false` for system-value entries: the
    /// tag can never be reassigned.
    pub fn set_value(&mut self, value: UniformValue) -> bool {
        if self.system_value.is_some() {
            return false;
        }
        self.value = Some(value);
        true
    }

    /// Drops the payload; the entry stays in the table and binds nothing.
    pub fn clear_value(&mut self) {
        self.value = None;
    }
}

// ============================================================================
// Binding Table
// ============================================================================

/// The uniform-name → binding record map driving per-frame resolution.
///
/// Built exactly once per shader program, from the declaration list the
/// graph compiler emitted. After construction the table is open for direct
/// mutation: callers may replace payloads or whole entries between frames.
/// 构建后不再做任何校验, 写错了的条目只是永远不会被推送.
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    entries: FxHashMap<String, BindingEntry>,
}

impl BindingTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from the compiler's declaration list: one entry per
    /// declared name. A declaration tagged with a system value wins over any
    /// static payload it may also carry; one with neither yields an empty
    /// entry.
    #[must_use]
    pub fn from_declarations(declarations: &[UniformDeclaration]) -> Self {
        let mut entries = FxHashMap::default();
        for decl in declarations {
            let entry = if let Some(kind) = decl.system_value {
                BindingEntry::system(kind)
            } else if let Some(value) = decl.value {
                BindingEntry::direct(value)
            } else {
                BindingEntry::empty()
            };
            entries.insert(decl.name.clone(), entry);
        }
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BindingEntry> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut BindingEntry> {
        self.entries.get_mut(name)
    }

    /// Inserts or replaces an entry. No validation; the caller owns the
    /// consequences, exactly like writing the map directly.
    pub fn insert(&mut self, name: impl Into<String>, entry: BindingEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn remove(&mut self, name: &str) -> Option<BindingEntry> {
        self.entries.remove(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BindingEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Replaces the payload of the named static entry, with validation.
    ///
    /// # Errors
    ///
    /// [`NornError::UnknownUniform`] when the name is not in the table;
    /// [`NornError::SystemValueUniform`] when the entry is system-driven.
    pub fn set_value(&mut self, name: &str, value: UniformValue) -> Result<()> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| NornError::UnknownUniform(name.to_owned()))?;
        if entry.set_value(value) {
            Ok(())
        } else {
            Err(NornError::SystemValueUniform(name.to_owned()))
        }
    }
}
