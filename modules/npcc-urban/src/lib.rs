pub mod generator;
pub mod prompts;
pub mod scenario;

pub use generator::{UrbanComparison, UrbanImpactGenerator};
pub use prompts::ImageStyle;
pub use scenario::Scenario;
