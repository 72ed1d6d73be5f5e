//! Dimensions module - canonical platforms, regions, and geo lookup.

mod dimensions_model;
mod geo_map;


pub use dimensions_model::{Platform, Region};
pub use geo_map::{region_for_country, GeoMap};
