pub mod u501_create_building;
pub mod u502_edit_inventory_draft;
