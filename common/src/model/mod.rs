pub mod document;
pub mod object_id;
pub mod rule;
pub mod rule_map;

pub use document::{Document, TangibleCategory};
pub use object_id::ObjectId;
pub use rule::{CalculationType, RegionRule};
pub use rule_map::RuleMap;
