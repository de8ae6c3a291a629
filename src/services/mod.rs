pub mod comic_service;
pub mod pages;
