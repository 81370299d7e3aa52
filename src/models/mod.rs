// Data models for the day calendar

pub mod event;
pub mod layout;
pub mod settings;
