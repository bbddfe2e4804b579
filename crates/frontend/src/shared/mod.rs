pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod icons;
pub mod message_service;
pub mod number_format;
