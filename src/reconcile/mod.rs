pub mod index;
pub mod normalize;
pub mod paths;
pub mod relocate;
