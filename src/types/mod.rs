pub mod coordinate;
pub mod parameter;
pub mod payload;
pub mod preset;
pub mod snapshot;
