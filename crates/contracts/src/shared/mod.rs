pub mod metadata;
pub mod wizard;
