pub mod request;
pub mod response;

pub use request::CreateBuildingRequest;
pub use response::CreateBuildingResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct CreateBuilding;

impl UseCaseMetadata for CreateBuilding {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "create_building"
    }

    fn display_name() -> &'static str {
        "إضافة عمارة جديدة"
    }

    fn description() -> &'static str {
        "Проверка черновика и единая запись здания со всеми единицами"
    }
}
