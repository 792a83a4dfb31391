//! Portrait Module - the four-quadrant like/talent portrait.

mod classifier;
mod quadrant;

pub use classifier::{PortraitClassifier, QuadrantGroup, QuadrantGroups};
pub use quadrant::Quadrant;
