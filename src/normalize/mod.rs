pub mod error;
pub mod normalizer;
pub mod radiation;
