pub mod albums;
pub mod event_detail;
pub mod events;
pub mod home;
pub mod members;
