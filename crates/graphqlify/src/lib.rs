//! Build GraphQL operation documents from typed selection descriptors.
//!
//! A descriptor tree names the fields, nested objects, arrays, arguments,
//! aliases, and reusable fragments of a request; rendering the tree
//! produces the document text to send to a GraphQL endpoint. The response
//! is expected to mirror the shape of the descriptor.
//!
//! ```rust
//! use graphqlify::operation::OperationBuilder;
//! use graphqlify::operation::Selection;
//! use graphqlify::operation::SelectionSetBuilder;
//!
//! let user = SelectionSetBuilder::new()
//!     .add_field("id", Selection::number())?
//!     .add_field("name", Selection::string())?
//!     .build()?;
//!
//! let root = SelectionSetBuilder::new()
//!     .add_field("user", Selection::object(user))?
//!     .build()?;
//!
//! let operation = OperationBuilder::query()
//!     .set_name("getUser")?
//!     .set_selection_set(root)?
//!     .build()?;
//!
//! assert_eq!(
//!     operation.to_document(),
//!     "query getUser {\n  user {\n    id\n    name\n  }\n}",
//! );
//! # Ok::<(), graphqlify::operation::DescriptorError>(())
//! ```

mod name;
pub mod operation;
mod value;

pub use value::Value;
