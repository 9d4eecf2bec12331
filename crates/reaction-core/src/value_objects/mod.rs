//! Value objects - immutable types that represent domain concepts

mod entity_id;
mod object_kind;
mod type_name;
mod weight;

pub use entity_id::{EntityId, IdParseError, ReactionId};
pub use object_kind::ObjectKind;
pub use type_name::TypeName;
pub use weight::{WeightOptions, WeightScheme};
