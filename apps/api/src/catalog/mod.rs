// Static reference catalog: bundled bilingual tables plus the generic
// filter-and-cap search they are all served through.
// Tables are parsed once at startup and never mutated afterwards.

pub mod handlers;
pub mod search;
pub mod tables;

pub use tables::Catalog;
