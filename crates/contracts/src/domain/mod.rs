pub mod a001_building;
pub mod a002_unit;
pub mod common;
