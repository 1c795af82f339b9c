pub mod destination_explorer;
pub mod event_calendar;
pub mod local_marketplace;
pub mod navigation;
pub mod section;

pub use destination_explorer::DestinationExplorer;
pub use event_calendar::EventCalendar;
pub use local_marketplace::LocalMarketplace;
pub use navigation::Navigation;
