pub mod error;
pub mod event_service;
pub mod home_service;
pub mod labels;
pub mod member_service;
pub mod photo_service;
pub mod upload_store;

pub use error::{ServiceError, ServiceResult};
