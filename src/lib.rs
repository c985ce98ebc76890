pub mod config;
pub mod events;
pub mod geom;
pub mod layout;
pub mod rows;
pub mod widget;

pub use config::Options;
pub use widget::ButtonFly;
