//! Application services orchestrating domain logic.

pub mod event_log;
pub mod link_service;
pub mod redirect_service;

pub use event_log::EventLog;
pub use link_service::LinkService;
pub use redirect_service::RedirectService;
