pub mod favorite_service;
pub mod recent_color_service;
