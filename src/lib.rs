pub mod badge;
pub mod config;
pub mod country;
pub mod engine;
pub mod extract;
pub mod geography;
pub mod normalize;
pub mod schema;
pub mod scorer;

pub use badge::Badge;
pub use engine::{Analysis, OriginDetector};
pub use geography::{GeographyKb, GeographyMatch, MatchType, classify_location};
pub use schema::{DetectionReport, DetectionResult, ExtractedFields, Signal};
pub use scorer::score;
