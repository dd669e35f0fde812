// Services module - external metadata providers

pub mod tmdb;
