pub mod association;
pub mod gene;
pub mod variant;

// re-export for cleaner imports
pub use self::association::{GeneCentricRecord, PositionCategory, VariantGeneAssociation};
pub use self::gene::{Gene, Strand};
pub use self::variant::Variant;
