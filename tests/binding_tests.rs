//! Binding Table Tests
//!
//! Tests for:
//! - BindingTable: construction from declaration lists, one entry per name
//! - BindingEntry: tag immutability, payload replacement, empty entries
//! - set_value: validated payload assignment and its error cases
//! - CompiledGraph: JSON loading of the compiler's declaration format

use glam::{Vec3, Vec4};

use norn::graph::{CompiledGraph, UniformDeclaration};
use norn::material::binding::{BindingEntry, BindingTable, SystemValue, UniformValue};
use norn::NornError;

fn declarations() -> Vec<UniformDeclaration> {
    vec![
        UniformDeclaration::system("u_wvp", SystemValue::WorldViewProjection),
        UniformDeclaration::direct("u_tint", UniformValue::Vector4(Vec4::ONE)),
        UniformDeclaration::plain("u_custom"),
    ]
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn table_has_one_entry_per_declared_name() {
    let table = BindingTable::from_declarations(&declarations());

    assert_eq!(table.len(), 3);
    assert!(table.contains("u_wvp"));
    assert!(table.contains("u_tint"));
    assert!(table.contains("u_custom"));
    assert!(!table.contains("u_missing"));
}

#[test]
fn table_tags_entries_per_declaration() {
    let table = BindingTable::from_declarations(&declarations());

    let wvp = table.get("u_wvp").unwrap();
    assert_eq!(wvp.system_value(), Some(SystemValue::WorldViewProjection));
    assert!(wvp.value().is_none());

    let tint = table.get("u_tint").unwrap();
    assert!(tint.system_value().is_none());
    assert_eq!(tint.value(), Some(&UniformValue::Vector4(Vec4::ONE)));
}

#[test]
fn plain_declaration_yields_empty_entry() {
    let table = BindingTable::from_declarations(&declarations());

    let custom = table.get("u_custom").unwrap();
    assert!(custom.system_value().is_none());
    assert!(custom.value().is_none());
}

#[test]
fn system_tag_wins_over_static_payload() {
    let decl = UniformDeclaration {
        name: "u_both".into(),
        system_value: Some(SystemValue::View),
        value: Some(UniformValue::Vector3(Vec3::ONE)),
    };
    let table = BindingTable::from_declarations(&[decl]);

    let entry = table.get("u_both").unwrap();
    assert_eq!(entry.system_value(), Some(SystemValue::View));
    assert!(entry.value().is_none());
}

#[test]
fn duplicate_names_keep_a_single_entry() {
    let decls = vec![
        UniformDeclaration::direct("u_dup", UniformValue::Vector3(Vec3::ZERO)),
        UniformDeclaration::direct("u_dup", UniformValue::Vector3(Vec3::ONE)),
    ];
    let table = BindingTable::from_declarations(&decls);

    assert_eq!(table.len(), 1);
    assert_eq!(
        table.get("u_dup").unwrap().value(),
        Some(&UniformValue::Vector3(Vec3::ONE))
    );
}

// ============================================================================
// Entry Mutation
// ============================================================================

#[test]
fn set_value_replaces_static_payload() {
    let mut table = BindingTable::from_declarations(&declarations());

    table
        .set_value("u_tint", UniformValue::Vector4(Vec4::new(0.0, 1.0, 0.0, 1.0)))
        .unwrap();

    assert_eq!(
        table.get("u_tint").unwrap().value(),
        Some(&UniformValue::Vector4(Vec4::new(0.0, 1.0, 0.0, 1.0)))
    );
}

#[test]
fn set_value_fills_empty_entry() {
    let mut table = BindingTable::from_declarations(&declarations());

    table
        .set_value("u_custom", UniformValue::Color3(Vec3::splat(0.5)))
        .unwrap();

    assert_eq!(
        table.get("u_custom").unwrap().value(),
        Some(&UniformValue::Color3(Vec3::splat(0.5)))
    );
}

#[test]
fn set_value_rejects_system_entries() {
    let mut table = BindingTable::from_declarations(&declarations());

    let err = table
        .set_value("u_wvp", UniformValue::Vector3(Vec3::ZERO))
        .unwrap_err();
    assert!(matches!(err, NornError::SystemValueUniform(name) if name == "u_wvp"));

    // The entry is untouched.
    let entry = table.get("u_wvp").unwrap();
    assert_eq!(entry.system_value(), Some(SystemValue::WorldViewProjection));
    assert!(entry.value().is_none());
}

#[test]
fn set_value_rejects_unknown_names() {
    let mut table = BindingTable::from_declarations(&declarations());

    let err = table
        .set_value("u_missing", UniformValue::Vector3(Vec3::ZERO))
        .unwrap_err();
    assert!(matches!(err, NornError::UnknownUniform(name) if name == "u_missing"));
}

#[test]
fn clear_value_leaves_entry_in_table() {
    let mut table = BindingTable::from_declarations(&declarations());

    table.get_mut("u_tint").unwrap().clear_value();

    let entry = table.get("u_tint").unwrap();
    assert!(entry.value().is_none());
    assert!(table.contains("u_tint"));
}

#[test]
fn insert_replaces_entries_without_validation() {
    let mut table = BindingTable::from_declarations(&declarations());

    // Direct table mutation is allowed, including replacing a system entry.
    table.insert("u_wvp", BindingEntry::direct(UniformValue::Vector3(Vec3::X)));

    let entry = table.get("u_wvp").unwrap();
    assert!(!entry.is_system());
    assert_eq!(entry.value(), Some(&UniformValue::Vector3(Vec3::X)));
}

// ============================================================================
// Graph Description Loading
// ============================================================================

#[test]
fn graph_from_json_parses_declarations() {
    let json = r#"{
        "name": "Glow",
        "vertex_source": "// vs",
        "fragment_source": "// fs",
        "uniforms": [
            { "name": "u_wvp", "system_value": "world_view_projection" },
            { "name": "u_tint", "value": { "color4": { "rgb": [1.0, 0.0, 0.0], "alpha": 0.5 } } },
            { "name": "u_custom" }
        ]
    }"#;

    let graph = CompiledGraph::from_json(json).unwrap();
    assert_eq!(graph.uniform_names(), vec!["u_wvp", "u_tint", "u_custom"]);

    let table = BindingTable::from_declarations(&graph.uniforms);
    assert_eq!(
        table.get("u_wvp").unwrap().system_value(),
        Some(SystemValue::WorldViewProjection)
    );
    assert_eq!(
        table.get("u_tint").unwrap().value(),
        Some(&UniformValue::Color4 {
            rgb: Vec3::new(1.0, 0.0, 0.0),
            alpha: 0.5
        })
    );
}

#[test]
fn graph_from_json_rejects_malformed_text() {
    let err = CompiledGraph::from_json("{ not json").unwrap_err();
    assert!(matches!(err, NornError::JsonError(_)));
}
