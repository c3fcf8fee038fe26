//! XML object layouts for marquee themes.
//!
//! A layout document declares a tree of objects, each with a type name,
//! an optional id, string properties and child objects:
//!
//! ```xml
//! <interface>
//!   <object class="Stage" id="stage">
//!     <property name="title">Main</property>
//!     <child>
//!       <object class="Label" id="clock"/>
//!     </child>
//!   </object>
//! </interface>
//! ```
//!
//! Objects may nest up to [`MAX_NESTING`] levels deep.
//!
//! [`Layout`] accumulates the objects of any number of documents and looks
//! them up by id. Constructing live objects from the definitions is up to
//! the caller.

mod error;
mod layout;
mod object;
mod parser;

pub use error::LayoutError;
pub use layout::Layout;
pub use object::{ObjectDefinition, Property};
pub use parser::MAX_NESTING;
