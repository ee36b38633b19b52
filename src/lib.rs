#![cfg_attr(docsrs, feature(doc_cfg))]
//#![warn(missing_docs)]

/*!
 <div align="center">
   <h1>JSON Projection</h1>
   <h3>Declarative JSON views over arbitrary object graphs</h3>

   [![crate](https://img.shields.io/crates/v/json-projection.svg)](https://crates.io/crates/json-projection)
   [![docs](https://docs.rs/json-projection/badge.svg)](https://docs.rs/json-projection)
   ![license](https://shields.io/badge/license-MIT%2FApache--2.0-blue)

  </div>

 # JSON Projection

 **json-projection** builds JSON documents from your own types without
 `Serialize` derives on them and without intermediate DTOs. You describe a
 *projection*: which fields or zero-argument accessor results of an object
 should appear in the output, under which key names, and how nested objects
 and collections are projected in turn. The projection is then resolved
 against a concrete object graph and encoded to compact JSON text with
 [`serde_json`]. The same type can carry as many different projections as
 there are views of it, with none of them baked into the type.

 ## Core Concepts

 Understanding these components will help you get started:

 - **[`Projectable`]:** the registry trait a type implements to expose its
   members by name. A token such as `"Name"` is answered by
   [`field`](crate::core::model::Projectable::field); a token such as
   `"Upper()"` (the trailing `()` is the call marker) is answered by
   [`call`](crate::core::model::Projectable::call).
 - **[`Member`]:** the shape of one looked-up member: a plain JSON value, a
   nested object, an explicit absence, or a collection of nested objects.
 - **[`Node`]:** the builder surface shared by all projection nodes.
   `method` and `alias` add direct members and chain on the same node;
   `hash`, `hash_as`, `array` and `array_as` declare nested projections and
   return the new child node, so chains descend.
 - **[`HashProjection`] / [`ArrayProjection`]:** the roots, bound to one
   model object or to a collection of them, with the `resolve` and
   `serialize` entry points.

 Output keys are the lowercased, marker-stripped form of the token that
 produced them, and objects are encoded with lexicographically ordered keys,
 so the produced bytes are deterministic.

 ## Getting Started

```rust
use json_projection::{HashProjection, Member, Node, Projectable, ProjectionError};

struct User {
    name: String,
    id: i64,
    supervisor: Option<Box<User>>,
}

impl Projectable for User {
    fn field(&self, name: &str) -> Option<Member<'_>> {
        match name {
            "Name" => Some(Member::value(self.name.clone())),
            "Id" => Some(Member::value(self.id)),
            "Supervisor" => Some(Member::optional(self.supervisor.as_deref())),
            _ => None,
        }
    }

    fn call(&self, name: &str) -> Option<Member<'_>> {
        match name {
            "Over" => Some(Member::value(self.id > 100)),
            "Upper" => Some(Member::value(self.name.to_uppercase())),
            _ => None,
        }
    }
}

fn main() -> Result<(), ProjectionError> {
    let boss = User {
        name: "Bar".to_string(),
        id: 200,
        supervisor: None,
    };
    let user = User {
        name: "Foo".to_string(),
        id: 11,
        supervisor: Some(Box::new(boss)),
    };

    let mut g = HashProjection::new(&user, &["Id", "Name", "Over()"]);
    g.alias("Uppercase()", "Upper()");
    g.hash("Supervisor", &["Id"]).method("Name");

    let data = g.serialize()?;

    assert_eq!(
        String::from_utf8_lossy(&data),
        r#"{"id":11,"name":"Foo","over":false,"supervisor":{"id":200,"name":"Bar"},"uppercase":"FOO"}"#
    );

    Ok(())
}
```

 ## Absence and errors

 A nested object that is absent ([`Member::Absent`]) is omitted from the
 output entirely, key included; absence is data, not a failure. An unknown
 token, on the other hand, aborts the whole serialization with
 [`ProjectionError::MemberNotFound`], since it means the projection and the
 type disagree. See [`ProjectionError`] for the full set of failure kinds,
 and [`HashProjection::max_depth`] for the optional recursion guard.

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.

 ## Contribution
 Unless you explicitly state otherwise, any contribution intentionally submitted
 for inclusion in the work by you, as defined in the Apache-2.0 license, shall be
 dual licensed as above, without any additional terms or conditions

 */

/// Core module for projection building and resolution
pub mod core;

/// Error types for projection resolution and encoding
pub mod error;

#[doc(inline)]
pub use error::*;

#[doc(inline)]
pub use crate::core::model::{Member, Projectable};

#[doc(inline)]
pub use crate::core::node::{ArrayProjection, HashProjection, NestedProjection, Node};
