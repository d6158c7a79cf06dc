//! Reusable decode rules and the shape checks they are built from.
//!
//! Each `pub fn` taking a [`DecodeContext`] and a JSON value fits
//! [`DecodeFn`](crate::DecodeFn) and can be registered directly in a field
//! table. Generic rules are registered with a turbofish, e.g.
//! `rules::symbol::<SyncState>`.

use crate::decoder::DecodeContext;
use crate::entity::Entity;
use crate::error::{FieldErrorKind, json_type_name};
use crate::symbol::EnumSymbol;
use crate::value::{EntityCollection, FieldValue, RawPermissions};
use boxkit_types::EntityId;
use serde_json::{Map, Value};
use tracing::debug;

/// Decodes one element of an entity list.
pub type EntryFn = fn(&mut DecodeContext<'_>, &Value) -> Result<Entity, FieldErrorKind>;

fn unexpected(expected: &'static str, found: &Value) -> FieldErrorKind {
    FieldErrorKind::UnexpectedType {
        expected,
        found: json_type_name(found),
    }
}

pub fn expect_str(value: &Value) -> Result<&str, FieldErrorKind> {
    value.as_str().ok_or_else(|| unexpected("string", value))
}

pub fn expect_bool(value: &Value) -> Result<bool, FieldErrorKind> {
    value.as_bool().ok_or_else(|| unexpected("boolean", value))
}

/// Whole numbers only; fractional or out-of-range numbers are rejected.
pub fn expect_integer(value: &Value) -> Result<i64, FieldErrorKind> {
    value.as_i64().ok_or_else(|| unexpected("integer", value))
}

pub fn expect_object(value: &Value) -> Result<&Map<String, Value>, FieldErrorKind> {
    value.as_object().ok_or_else(|| unexpected("object", value))
}

pub fn expect_array(value: &Value) -> Result<&[Value], FieldErrorKind> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| unexpected("array", value))
}

/// Maps every element, failing on the first bad one with its index.
pub fn elements<T>(
    items: &[Value],
    mut f: impl FnMut(&Value) -> Result<T, FieldErrorKind>,
) -> Result<Vec<T>, FieldErrorKind> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            f(item).map_err(|source| FieldErrorKind::InElement {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}

pub fn text(_: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    expect_str(value).map(|s| FieldValue::Text(s.to_owned()))
}

/// Ids are strings on the wire, but some older payloads send bare numbers.
/// Empty ids are rejected.
pub fn id(_: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_u64() || n.is_i64() => n.to_string(),
        other => return Err(unexpected("string", other)),
    };
    let id = EntityId::parse(&text).map_err(|_| FieldErrorKind::InvalidId(text))?;
    Ok(FieldValue::Text(id.into_string()))
}

pub fn boolean(_: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    expect_bool(value).map(FieldValue::Bool)
}

pub fn integer(_: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    expect_integer(value).map(FieldValue::Integer)
}

pub fn timestamp(ctx: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    ctx.parse_timestamp(expect_str(value)?).map(FieldValue::Timestamp)
}

/// An ordered list of strings. Duplicates are kept.
pub fn texts(_: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    let items = expect_array(value)?;
    elements(items, |item| expect_str(item).map(str::to_owned)).map(FieldValue::Texts)
}

pub fn symbol<E: EnumSymbol>(_: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    let parsed = E::parse(expect_str(value)?)?;
    Ok(FieldValue::Symbol(parsed.into_symbol()))
}

/// An ordered list of enum values; one unknown value fails the whole field.
pub fn symbols<E: EnumSymbol>(_: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    let items = expect_array(value)?;
    elements(items, |item| Ok(E::parse(expect_str(item)?)?.into_symbol())).map(FieldValue::Symbols)
}

/// The `type` member. Inside a concrete table it must name that table's kind.
pub fn discriminator(ctx: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    let kind = expect_str(value)?;
    if let Some(schema) = ctx.schema().filter(|s| s.is_concrete()) {
        if schema.kind() != kind {
            return Err(FieldErrorKind::KindMismatch {
                expected: schema.kind(),
                found: kind.to_owned(),
            });
        }
    }
    Ok(FieldValue::Text(kind.to_owned()))
}

/// Keeps a nested object of flags verbatim, member order included.
pub fn permissions(_: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    Ok(FieldValue::Permissions(raw_permissions(value)?))
}

pub(crate) fn raw_permissions(value: &Value) -> Result<RawPermissions, FieldErrorKind> {
    let object = expect_object(value)?;
    Ok(object.iter().map(|(k, v)| (k.as_str(), v.clone())).collect())
}

/// Decodes an array of objects with `entry`.
///
/// Elements that fail are reported at their index and dropped; the rest are
/// kept in order.
pub fn entity_list(
    ctx: &mut DecodeContext<'_>,
    value: &Value,
    entry: EntryFn,
) -> Result<Vec<Entity>, FieldErrorKind> {
    let items = expect_array(value)?;
    let mut entities = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        ctx.in_index(index, |ctx| match entry(ctx, item) {
            Ok(entity) => entities.push(entity),
            Err(kind) => ctx.report(kind),
        });
    }
    Ok(entities)
}

/// Decodes a `{ total_count, offset, limit, entries }` collection object.
pub fn collection(
    ctx: &mut DecodeContext<'_>,
    value: &Value,
    entry: EntryFn,
) -> Result<EntityCollection, FieldErrorKind> {
    let object = expect_object(value)?;
    let mut collection = EntityCollection::default();

    for (name, member) in object {
        let known = matches!(name.as_str(), "total_count" | "offset" | "limit" | "entries");
        if !known {
            debug!(field = %name, "Keeping unrecognized collection field");
            collection.extra.put(name.as_str(), member.clone());
            continue;
        }
        if member.is_null() {
            continue;
        }
        ctx.in_field(name, |ctx| {
            let outcome = match name.as_str() {
                "total_count" => expect_integer(member).map(|n| collection.total_count = Some(n)),
                "offset" => expect_integer(member).map(|n| collection.offset = Some(n)),
                "limit" => expect_integer(member).map(|n| collection.limit = Some(n)),
                _ => entity_list(ctx, member, entry).map(|e| collection.entries = e),
            };
            if let Err(kind) = outcome {
                ctx.report(kind);
            }
        });
    }

    Ok(collection)
}

/// Decodes one member of a purpose-built record, reporting failures at the
/// member's path. `null` and failures both yield `None`.
pub fn record_member<T>(
    ctx: &mut DecodeContext<'_>,
    name: &str,
    value: &Value,
    f: impl FnOnce(&mut DecodeContext<'_>, &Value) -> Result<T, FieldErrorKind>,
) -> Option<T> {
    if value.is_null() {
        return None;
    }
    ctx.in_field(name, |ctx| match f(ctx, value) {
        Ok(out) => Some(out),
        Err(kind) => {
            ctx.report(kind);
            None
        }
    })
}
