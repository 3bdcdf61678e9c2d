pub mod disruption;
pub mod effect;
pub mod element;
pub mod hits;
pub mod overlap;
pub mod svtype;

// re-export for cleaner imports
pub use self::disruption::DisruptionRecord;
pub use self::effect::Effect;
pub use self::element::ElementType;
pub use self::hits::{GeneEffect, OverlapRecord};
pub use self::overlap::OverlapKind;
pub use self::svtype::SvType;
