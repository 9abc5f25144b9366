pub mod error_notification;
pub mod pagination_controls;
pub mod table;
