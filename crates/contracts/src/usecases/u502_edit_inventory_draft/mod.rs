pub mod command;
pub mod request;
pub mod response;

pub use command::{CommandOutcome, DraftCommand, DraftCommandError};
pub use request::DraftCommandRequest;
pub use response::DraftCommandResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct EditInventoryDraft;

impl UseCaseMetadata for EditInventoryDraft {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "edit_inventory_draft"
    }

    fn display_name() -> &'static str {
        "تعديل الطوابق والوحدات"
    }

    fn description() -> &'static str {
        "Применение одной команды конструктора этажей к черновику"
    }
}
