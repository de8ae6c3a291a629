#[macro_use]
extern crate rocket;

pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

use crate::config::AppConfig;
use crate::models::error::ComicError;
use crate::services::comic_service::ComicService;
use crate::utils::request_log::RequestLog;

/// Assembles the application around an explicitly built [`ComicService`].
pub fn build_rocket(config: AppConfig) -> Result<Rocket<Build>, ComicError> {
    let comic_service = ComicService::new(&config)?;

    Ok(rocket::build()
        .attach(Template::fairing())
        .attach(RequestLog)
        .manage(comic_service)
        .mount("/", routes![
            routes::comics::latest,
            routes::comics::show_comic,
            routes::comics::random_comic,
            routes::comics::previous_comic,
            routes::comics::next_comic,
            routes::comics::search_comic,
            routes::comics::recent_default,
            routes::comics::recent_comics,
        ])
        .register("/", catchers![
            routes::comics::not_found,
            routes::comics::unprocessable,
        ]))
}
