use std::collections::HashMap;

use log::debug;
use serde_json::Value;

use crate::ProjectionError;

use super::model::Projectable;
use super::resolver::{resolve_array, resolve_hash};

/// The rule set every projection node carries: which members to project
/// under their own name, which under an alias, and which nested hash and
/// array projections to descend into.
#[derive(Default)]
pub struct Rules {
    pub(crate) members: Vec<String>,
    // Unordered on purpose, like the keys of the final mapping. The encoder
    // orders output keys lexicographically; alias insertion order carries no
    // meaning, and reusing an alias key is last-write-wins.
    pub(crate) aliases: HashMap<String, String>,
    pub(crate) hashes: Vec<NestedProjection>,
    pub(crate) arrays: Vec<NestedProjection>,
}

impl Rules {
    fn seeded(members: &[&str]) -> Rules {
        for member in members {
            assert!(!member.is_empty(), "member token must not be empty");
        }

        Rules {
            members: members.iter().map(|member| member.to_string()).collect(),
            ..Rules::default()
        }
    }
}

/// A nested projection attached to a parent node: how to fetch the source
/// member from the parent's model, the output key to emit it under, and the
/// rules to apply to it. The same type serves nested-hash and nested-array
/// specs; which list of the parent's [`Rules`] it sits in decides how the
/// fetched member is interpreted.
pub struct NestedProjection {
    pub(crate) source: String,
    pub(crate) key: String,
    pub(crate) rules: Rules,
}

impl NestedProjection {
    fn new(source: &str, key: &str, members: &[&str]) -> NestedProjection {
        assert!(!source.is_empty(), "source member token must not be empty");
        assert!(!key.is_empty(), "output key must not be empty");

        NestedProjection {
            source: source.to_string(),
            key: key.to_string(),
            rules: Rules::seeded(members),
        }
    }
}

/// The builder surface shared by every projection node.
///
/// [`method`](Node::method) and [`alias`](Node::alias) return the node they
/// were called on, so direct members chain. [`hash`](Node::hash),
/// [`hash_as`](Node::hash_as), [`array`](Node::array) and
/// [`array_as`](Node::array_as) return the **new child node**, so a chain
/// descends into the nested projection it just declared:
///
/// ```rust
/// # use json_projection::{HashProjection, Node, Member, Projectable};
/// # struct User { id: i64, name: String, supervisor: Option<Box<User>> }
/// # impl Projectable for User {
/// #     fn field(&self, name: &str) -> Option<Member<'_>> {
/// #         match name {
/// #             "Id" => Some(Member::value(self.id)),
/// #             "Name" => Some(Member::value(self.name.clone())),
/// #             "Supervisor" => Some(Member::optional(self.supervisor.as_deref())),
/// #             _ => None,
/// #         }
/// #     }
/// # }
/// # let boss = User { id: 2, name: "Bar".to_string(), supervisor: None };
/// # let user = User { id: 1, name: "Foo".to_string(), supervisor: Some(Box::new(boss)) };
/// let mut g = HashProjection::new(&user, &["Id"]);
/// g.hash("Supervisor", &["Id"]).method("Name");
///
/// assert_eq!(
///     g.serialize().unwrap(),
///     br#"{"id":1,"supervisor":{"id":2,"name":"Bar"}}"#
/// );
/// ```
///
/// Rule sets are meant to be built once and then resolved; mutating a node
/// after a serialization and serializing again applies the new rules to the
/// same bound data.
pub trait Node {
    /// The mutable rule set of this node. Builder methods are implemented on
    /// top of this; it is not meant to be called directly.
    fn rules_mut(&mut self) -> &mut Rules;

    /// Projects a member under its own normalized name. `"Name"` reads the
    /// field `Name` and emits `name`; `"Upper()"` invokes the accessor
    /// `Upper` and emits `upper`.
    fn method(&mut self, name: &str) -> &mut Self {
        assert!(!name.is_empty(), "member token must not be empty");
        self.rules_mut().members.push(name.to_string());
        self
    }

    /// Projects the member `name` under the caller-chosen `key` (itself
    /// normalized the same way member tokens are). Reusing a key replaces
    /// the earlier alias.
    fn alias(&mut self, key: &str, name: &str) -> &mut Self {
        assert!(!key.is_empty(), "alias key must not be empty");
        assert!(!name.is_empty(), "member token must not be empty");
        self.rules_mut()
            .aliases
            .insert(key.to_string(), name.to_string());
        self
    }

    /// Declares a nested object projection: the member `name` is fetched
    /// from this node's model and projected with the returned child's rules,
    /// under the key derived from `name`. An absent member omits the key
    /// entirely.
    fn hash(&mut self, name: &str, members: &[&str]) -> &mut NestedProjection {
        self.hash_as(name, name, members)
    }

    /// Like [`hash`](Node::hash), with an explicit output key.
    fn hash_as(&mut self, name: &str, key: &str, members: &[&str]) -> &mut NestedProjection {
        let rules = self.rules_mut();
        rules.hashes.push(NestedProjection::new(name, key, members));
        rules.hashes.last_mut().unwrap()
    }

    /// Declares a nested collection projection: the member `name` must
    /// resolve to a collection, and every element is projected with the
    /// returned child's rules, in source order. An empty collection projects
    /// as an empty JSON array, never as an omitted key.
    fn array(&mut self, name: &str, members: &[&str]) -> &mut NestedProjection {
        self.array_as(name, name, members)
    }

    /// Like [`array`](Node::array), with an explicit output key.
    fn array_as(&mut self, name: &str, key: &str, members: &[&str]) -> &mut NestedProjection {
        let rules = self.rules_mut();
        rules.arrays.push(NestedProjection::new(name, key, members));
        rules.arrays.last_mut().unwrap()
    }
}

impl Node for NestedProjection {
    fn rules_mut(&mut self) -> &mut Rules {
        &mut self.rules
    }
}

/// A root projection bound to a single model object. Resolves to a JSON
/// object.
pub struct HashProjection<'a> {
    model: &'a dyn Projectable,
    rules: Rules,
    max_depth: Option<usize>,
}

impl<'a> HashProjection<'a> {
    /// Binds a projection to `model`, seeded with direct member tokens.
    pub fn new<M: Projectable>(model: &'a M, members: &[&str]) -> HashProjection<'a> {
        HashProjection {
            model,
            rules: Rules::seeded(members),
            max_depth: None,
        }
    }

    /// Caps the nesting depth of the resolution; the root is depth zero.
    /// Unlimited by default. Exceeding the cap fails the serialization with
    /// [`ProjectionError::DepthExceeded`], the guard to reach for when the
    /// bound object graph may contain cycles.
    pub fn max_depth(&mut self, limit: usize) -> &mut Self {
        self.max_depth = Some(limit);
        self
    }

    /// Resolves the projection into a JSON value tree.
    pub fn resolve(&self) -> Result<Value, ProjectionError> {
        let hash = resolve_hash(&self.rules, self.model, 0, self.max_depth)?;
        Ok(Value::Object(hash))
    }

    /// Resolves the projection and encodes it as compact JSON text. Object
    /// keys are emitted in lexicographic order.
    pub fn serialize(&self) -> Result<Vec<u8>, ProjectionError> {
        debug!("serializing hash projection");
        let tree = self.resolve()?;
        Ok(serde_json::to_vec(&tree)?)
    }
}

impl Node for HashProjection<'_> {
    fn rules_mut(&mut self) -> &mut Rules {
        &mut self.rules
    }
}

/// A root projection bound to a collection of models. The rule set applies
/// to every element; resolves to a JSON array of objects, one per element,
/// in source order.
pub struct ArrayProjection<'a> {
    items: Vec<&'a dyn Projectable>,
    rules: Rules,
    max_depth: Option<usize>,
}

impl<'a> ArrayProjection<'a> {
    /// Binds a projection to a slice of models, seeded with direct member
    /// tokens.
    pub fn new<M: Projectable>(items: &'a [M], members: &[&str]) -> ArrayProjection<'a> {
        Self::from_models(
            items.iter().map(|item| item as &dyn Projectable),
            members,
        )
    }

    /// Binds a projection to an arbitrary sequence of models, for
    /// collections that are not slices of one concrete type.
    pub fn from_models(
        items: impl IntoIterator<Item = &'a dyn Projectable>,
        members: &[&str],
    ) -> ArrayProjection<'a> {
        ArrayProjection {
            items: items.into_iter().collect(),
            rules: Rules::seeded(members),
            max_depth: None,
        }
    }

    /// Caps the nesting depth of the resolution; elements sit at depth zero.
    /// Unlimited by default.
    pub fn max_depth(&mut self, limit: usize) -> &mut Self {
        self.max_depth = Some(limit);
        self
    }

    /// Resolves the projection into a JSON value tree.
    pub fn resolve(&self) -> Result<Value, ProjectionError> {
        let array = resolve_array(&self.rules, &self.items, self.max_depth)?;
        Ok(Value::Array(array))
    }

    /// Resolves the projection and encodes it as compact JSON text.
    pub fn serialize(&self) -> Result<Vec<u8>, ProjectionError> {
        debug!("serializing array projection of {} elements", self.items.len());
        let tree = self.resolve()?;
        Ok(serde_json::to_vec(&tree)?)
    }
}

impl Node for ArrayProjection<'_> {
    fn rules_mut(&mut self) -> &mut Rules {
        &mut self.rules
    }
}
