// Services for the day calendar

pub mod layout;
pub mod render;
pub mod settings;
