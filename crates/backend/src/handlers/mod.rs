pub mod a001_building;
