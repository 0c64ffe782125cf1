pub mod aggregate;
pub mod inventory;
