pub(crate) mod empty_state;
pub(crate) mod export_menu;
pub(crate) mod search_input;
pub(crate) mod stat_card;

pub(crate) use empty_state::EmptyState;
pub(crate) use export_menu::ExportMenu;
pub(crate) use search_input::SearchInput;
pub(crate) use stat_card::StatCard;
