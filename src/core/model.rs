use serde_json::Value;

/// A member looked up on a [`Projectable`] value.
///
/// The projector never inspects the concrete type behind a member: a lookup
/// answers with one of these shapes and the resolver decides what is legal at
/// the position the token appeared in. A plain member or alias must resolve
/// to [`Member::Value`]; a nested-hash spec expects [`Member::Model`] (or
/// [`Member::Absent`], which omits the key); a nested-array spec expects
/// [`Member::Collection`].
pub enum Member<'m> {
    /// A scalar or already-built JSON value, projected as-is.
    Value(Value),
    /// A nested object with projectable members of its own.
    Model(&'m dyn Projectable),
    /// A member that holds nothing. In a nested-hash position the output key
    /// is omitted entirely; in a value position it projects as JSON null; in
    /// a nested-array position it projects as an empty array.
    Absent,
    /// An ordered collection of nested objects.
    Collection(Vec<&'m dyn Projectable>),
}

impl<'m> Member<'m> {
    /// Wraps anything convertible to a JSON value, including `Option`s of
    /// such types (`None` becomes JSON null).
    pub fn value(value: impl Into<Value>) -> Member<'m> {
        Member::Value(value.into())
    }

    /// Wraps a nested object.
    pub fn model<M: Projectable>(model: &'m M) -> Member<'m> {
        Member::Model(model)
    }

    /// Wraps an optional nested object, mapping `None` to [`Member::Absent`].
    pub fn optional<M: Projectable>(model: Option<&'m M>) -> Member<'m> {
        match model {
            Some(model) => Member::Model(model),
            None => Member::Absent,
        }
    }

    /// Wraps a slice of nested objects, preserving order.
    pub fn collection<M: Projectable>(items: &'m [M]) -> Member<'m> {
        Member::Collection(items.iter().map(|item| item as &dyn Projectable).collect())
    }
}

/// A type whose members can be projected by name.
///
/// This is the registry the projector consults instead of runtime
/// reflection: each type declares which tokens it answers to and hands back
/// the member's current value. Fields and zero-argument accessors live in
/// separate namespaces; a token written `"Name"` in a projection is looked
/// up with [`field`](Projectable::field), a token written `"Name()"` with
/// [`call`](Projectable::call) (the marker is stripped before the lookup).
///
/// Returning `None` from either lookup makes the whole serialization fail
/// with [`ProjectionError::MemberNotFound`](crate::ProjectionError::MemberNotFound),
/// since an unknown token is a mismatch between the projection and the type,
/// not an absence of data. A member that is legitimately empty should answer
/// `Some(Member::Absent)` instead.
///
/// # Example
///
/// ```rust
/// use json_projection::core::model::{Member, Projectable};
///
/// struct User {
///     name: String,
///     id: i64,
///     supervisor: Option<Box<User>>,
/// }
///
/// impl Projectable for User {
///     fn field(&self, name: &str) -> Option<Member<'_>> {
///         match name {
///             "Name" => Some(Member::value(self.name.clone())),
///             "Id" => Some(Member::value(self.id)),
///             "Supervisor" => Some(Member::optional(self.supervisor.as_deref())),
///             _ => None,
///         }
///     }
///
///     fn call(&self, name: &str) -> Option<Member<'_>> {
///         match name {
///             "Upper" => Some(Member::value(self.name.to_uppercase())),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Projectable {
    /// Looks up a field by name.
    fn field(&self, name: &str) -> Option<Member<'_>>;

    /// Invokes a zero-argument accessor by name. The default answers no
    /// accessor at all, so types without computed members only implement
    /// [`field`](Projectable::field).
    fn call(&self, name: &str) -> Option<Member<'_>> {
        let _ = name;
        None
    }
}
