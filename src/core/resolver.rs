use serde_json::{Map, Value};

use crate::ProjectionError;

use super::model::{Member, Projectable};
use super::node::Rules;

/// Trailing token suffix that selects accessor invocation over field lookup.
const CALL_MARKER: &str = "()";

/// Derives the output key for a token: call-marker stripped, lowercased.
/// Applied to member tokens and to the output side of aliases alike, and
/// recomputed on every resolution.
pub(crate) fn output_key(token: &str) -> String {
    token.strip_suffix(CALL_MARKER).unwrap_or(token).to_lowercase()
}

/// Resolves a token against a model: `Name()` invokes the accessor `Name`,
/// anything else reads the field `Name`. A miss in the selected namespace is
/// a hard error, the projection names a member the type does not have.
fn fetch<'m>(model: &'m dyn Projectable, token: &str) -> Result<Member<'m>, ProjectionError> {
    let member = match token.strip_suffix(CALL_MARKER) {
        Some(name) => model.call(name),
        None => model.field(token),
    };

    member.ok_or_else(|| ProjectionError::MemberNotFound(token.to_string()))
}

/// Fetches a token that must land in value position. Absent members project
/// as JSON null; nested shapes cannot be projected without rules of their
/// own.
fn fetch_value(model: &dyn Projectable, token: &str) -> Result<Value, ProjectionError> {
    match fetch(model, token)? {
        Member::Value(value) => Ok(value),
        Member::Absent => Ok(Value::Null),
        Member::Model(_) | Member::Collection(_) => {
            Err(ProjectionError::NotAValue(token.to_string()))
        }
    }
}

/// Applies a rule set to one model, producing the output mapping.
///
/// Members and aliases resolve to values. A nested-hash spec whose source
/// member is absent emits no key at all; a present one recurses. A
/// nested-array spec resolves every element with the child rules, in source
/// order; an absent collection projects as an empty array.
pub(crate) fn resolve_hash(
    rules: &Rules,
    model: &dyn Projectable,
    depth: usize,
    limit: Option<usize>,
) -> Result<Map<String, Value>, ProjectionError> {
    if let Some(limit) = limit {
        if depth > limit {
            return Err(ProjectionError::DepthExceeded(limit));
        }
    }

    let mut hash = Map::new();

    for token in &rules.members {
        hash.insert(output_key(token), fetch_value(model, token)?);
    }

    for (alias, token) in &rules.aliases {
        hash.insert(output_key(alias), fetch_value(model, token)?);
    }

    for nested in &rules.hashes {
        match fetch(model, &nested.source)? {
            Member::Model(child) => {
                let resolved = resolve_hash(&nested.rules, child, depth + 1, limit)?;
                hash.insert(output_key(&nested.key), Value::Object(resolved));
            }
            Member::Absent | Member::Value(Value::Null) => {}
            Member::Value(_) | Member::Collection(_) => {
                return Err(ProjectionError::NotAnObject(nested.source.clone()));
            }
        }
    }

    for nested in &rules.arrays {
        let items = match fetch(model, &nested.source)? {
            Member::Collection(items) => items,
            Member::Absent => Vec::new(),
            Member::Value(_) | Member::Model(_) => {
                return Err(ProjectionError::NotIterable(nested.source.clone()));
            }
        };

        let mut array = Vec::with_capacity(items.len());
        for item in items {
            let resolved = resolve_hash(&nested.rules, item, depth + 1, limit)?;
            array.push(Value::Object(resolved));
        }
        hash.insert(output_key(&nested.key), Value::Array(array));
    }

    Ok(hash)
}

/// Applies one rule set to every element of a collection, order preserving.
/// The output always has exactly one mapping per input element.
pub(crate) fn resolve_array(
    rules: &Rules,
    items: &[&dyn Projectable],
    limit: Option<usize>,
) -> Result<Vec<Value>, ProjectionError> {
    let mut array = Vec::with_capacity(items.len());

    for item in items {
        let resolved = resolve_hash(rules, *item, 0, limit)?;
        array.push(Value::Object(resolved));
    }

    Ok(array)
}
