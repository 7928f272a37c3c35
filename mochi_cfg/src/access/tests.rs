//! Unit tests for the typed accessors.

use std::sync::Arc;

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use serde_json::{Map, Value, json};

use super::{ObjectAccess, ObjectAccessMut};
use crate::document::ValueKind;
use crate::{CfgError, CfgResult, Component, DocumentOrigin};

#[fixture]
fn component() -> Component {
    let members = match json!({
        "threads": 4,
        "name": "pool",
        "enabled": true,
        "ratio": 0.5,
        "list": [1, 2],
        "margo": {"progress": "auto", "rpc": {"threads": 1}},
    }) {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    Component::new(Some("abt-io".into()), members)
}

fn expect_err<T: std::fmt::Debug>(result: CfgResult<T>) -> Result<Arc<CfgError>> {
    match result {
        Ok(value) => Err(anyhow!("expected failure, got {value:?}")),
        Err(err) => Ok(err),
    }
}

fn to_anyhow<T>(result: CfgResult<T>) -> Result<T> {
    result.map_err(|err| anyhow!(err.to_string()))
}

#[rstest]
fn reads_typed_scalars(component: Component) -> Result<()> {
    ensure!(to_anyhow(component.get_int("threads"))? == 4, "threads");
    ensure!(to_anyhow(component.get_string("name"))? == "pool", "name");
    ensure!(to_anyhow(component.get_bool("enabled"))?, "enabled");
    ensure!(
        to_anyhow(component.get_array("list"))? == [json!(1), json!(2)],
        "list"
    );
    Ok(())
}

#[rstest]
fn absent_key_leaves_component_unchanged(component: Component) -> Result<()> {
    let before = component.clone();
    let err = expect_err(component.get_int("missing"))?;
    ensure!(err.is_key_not_found(), "unexpected error {err:?}");
    ensure!(component == before, "component changed");
    Ok(())
}

#[rstest]
#[case::int_from_string("name", ValueKind::Integer, ValueKind::String)]
#[case::int_from_float("ratio", ValueKind::Integer, ValueKind::Number)]
fn integer_reads_do_not_coerce(
    component: Component,
    #[case] key: &str,
    #[case] expected: ValueKind,
    #[case] found: ValueKind,
) -> Result<()> {
    let err = expect_err(component.get_int(key))?;
    ensure!(
        matches!(
            err.as_ref(),
            CfgError::WrongKind { key: k, expected: e, found: f }
                if k == key && *e == expected && *f == found
        ),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[rstest]
fn string_read_rejects_integer(component: Component) -> Result<()> {
    let err = expect_err(component.get_string("threads"))?;
    ensure!(
        matches!(err.as_ref(), CfgError::WrongKind { found: ValueKind::Integer, .. }),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[rstest]
fn setters_replace_existing_slots(mut component: Component) -> Result<()> {
    to_anyhow(component.set_int("threads", 16))?;
    to_anyhow(component.set_string("name", "shared"))?;
    to_anyhow(component.set_bool("enabled", false))?;
    ensure!(to_anyhow(component.get_int("threads"))? == 16, "threads");
    ensure!(to_anyhow(component.get_string("name"))? == "shared", "name");
    ensure!(!to_anyhow(component.get_bool("enabled"))?, "enabled");
    Ok(())
}

#[rstest]
fn setters_do_not_create_keys(mut component: Component) -> Result<()> {
    let before = component.clone();
    let int_err = expect_err(component.set_int("fresh", 1))?;
    let string_err = expect_err(component.set_string("fresh", "x"))?;
    ensure!(int_err.is_key_not_found(), "set_int: {int_err:?}");
    ensure!(string_err.is_key_not_found(), "set_string: {string_err:?}");
    ensure!(component == before, "component changed");
    Ok(())
}

#[rstest]
fn setters_keep_slot_kind(mut component: Component) -> Result<()> {
    let before = component.clone();
    let err = expect_err(component.set_int("name", 3))?;
    ensure!(
        matches!(err.as_ref(), CfgError::WrongKind { .. }),
        "unexpected error {err:?}"
    );
    ensure!(component == before, "component changed");
    Ok(())
}

#[rstest]
fn nested_views_alias_the_component(mut component: Component) -> Result<()> {
    {
        let mut margo = to_anyhow(component.get_object_mut("margo"))?;
        to_anyhow(margo.set_string("progress", "busy"))?;
        let mut rpc = to_anyhow(margo.get_object_mut("rpc"))?;
        to_anyhow(rpc.set_int("threads", 8))?;
    }
    let margo = to_anyhow(component.get_object("margo"))?;
    ensure!(to_anyhow(margo.get_string("progress"))? == "busy", "progress");
    let rpc = to_anyhow(margo.get_object("rpc"))?;
    ensure!(to_anyhow(rpc.get_int("threads"))? == 8, "rpc threads");
    Ok(())
}

#[rstest]
fn into_map_keeps_the_borrow_of_the_component(mut component: Component) -> Result<()> {
    {
        let members = to_anyhow(component.get_object_mut("margo"))?.into_map();
        members.insert("handler".into(), json!("dedicated"));
        members.remove("progress");
    }
    let margo = to_anyhow(component.get_object("margo"))?;
    ensure!(
        to_anyhow(margo.get_string("handler"))? == "dedicated",
        "insert through the map not visible"
    );
    ensure!(!margo.contains_key("progress"), "removal not visible");
    Ok(())
}

#[rstest]
fn get_object_rejects_scalars(component: Component) -> Result<()> {
    let err = expect_err(component.get_object("threads"))?;
    ensure!(
        matches!(err.as_ref(), CfgError::WrongKind { expected: ValueKind::Object, .. }),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[rstest]
fn append_adds_last_element(mut component: Component) -> Result<()> {
    to_anyhow(component.append_array_by_text("list", "7"))?;
    to_anyhow(component.append_array_by_text("list", r#"{"id": 3}"#))?;
    ensure!(
        to_anyhow(component.get_array("list"))? == [json!(1), json!(2), json!(7), json!({"id": 3})],
        "unexpected list"
    );
    Ok(())
}

#[rstest]
#[case::absent_key("missing", "7")]
#[case::malformed_fragment("list", "[7")]
#[case::not_an_array("threads", "7")]
fn append_failures_leave_component_unchanged(
    mut component: Component,
    #[case] key: &str,
    #[case] item: &str,
) -> Result<()> {
    let before = component.clone();
    let err = expect_err(component.append_array_by_text(key, item))?;
    let expected_variant = match key {
        "missing" => err.is_key_not_found(),
        "list" => matches!(
            err.as_ref(),
            CfgError::Parse { origin: DocumentOrigin::Fragment, .. }
        ),
        _ => matches!(err.as_ref(), CfgError::WrongKind { .. }),
    };
    ensure!(expected_variant, "unexpected error {err:?}");
    ensure!(component == before, "component changed");
    Ok(())
}

#[rstest]
fn set_object_replaces_wholesale(mut component: Component) -> Result<()> {
    to_anyhow(component.set_object_by_text("margo", r#"{"margo": {"handlers": []}}"#))?;
    ensure!(
        to_anyhow(component.get_value("margo"))? == &json!({"handlers": []}),
        "margo not replaced"
    );
    Ok(())
}

#[rstest]
fn set_object_inserts_absent_key(mut component: Component) -> Result<()> {
    to_anyhow(component.set_object_by_text("argobots", r#"{"argobots": {"pools": 1}}"#))?;
    let argobots = to_anyhow(component.get_object("argobots"))?;
    ensure!(to_anyhow(argobots.get_int("pools"))? == 1, "pools");
    Ok(())
}

#[rstest]
#[case::missing_member(r#"{"other": {}}"#)]
#[case::not_an_object("[1]")]
#[case::malformed("{\"margo\":")]
fn set_object_failures_leave_component_unchanged(
    mut component: Component,
    #[case] wrapped: &str,
) -> Result<()> {
    let before = component.clone();
    let err = expect_err(component.set_object_by_text("margo", wrapped))?;
    ensure!(
        matches!(
            err.as_ref(),
            CfgError::KeyNotFound { .. } | CfgError::NotAnObject { .. } | CfgError::Parse { .. }
        ),
        "unexpected error {err:?}"
    );
    ensure!(component == before, "component changed");
    Ok(())
}

#[rstest]
fn keys_follow_storage_order(component: Component) {
    let keys: Vec<&String> = component.keys().collect();
    assert_eq!(
        keys,
        ["threads", "name", "enabled", "ratio", "list", "margo"]
    );
}
