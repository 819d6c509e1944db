pub mod notice_modal;
pub mod search_bar;
pub mod weather_body;
pub mod weather_panel;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use notice_modal::{NoticeModal, NoticeModalProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_panel::{WeatherPanel, WeatherPanelProps};
