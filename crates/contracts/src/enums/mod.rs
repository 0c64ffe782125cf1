pub mod ac_type;
pub mod floor_plan;
pub mod unit_facing;
pub mod unit_status;
pub mod unit_type;

pub use ac_type::AcType;
pub use floor_plan::FloorPlan;
pub use unit_facing::UnitFacing;
pub use unit_status::UnitStatus;
pub use unit_type::UnitType;
