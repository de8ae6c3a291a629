use rand::rngs::StdRng;
use rand::SeedableRng;
use rocket::form::Form;
use rocket::State;
use rocket_dyn_templates::Template;

use crate::models::comic::ComicPage;
use crate::services::comic_service::ComicService;
use crate::services::pages;

pub const TEMPLATE: &str = "index";

fn render(page: ComicPage) -> Template {
    Template::render(TEMPLATE, page)
}

#[derive(Debug, FromForm)]
pub struct SearchForm {
    pub comic_num: Option<String>,
}

#[get("/")]
pub async fn latest(comic_service: &State<ComicService>) -> Template {
    render(pages::latest_page(comic_service).await)
}

#[get("/comic/<num>")]
pub async fn show_comic(comic_service: &State<ComicService>, num: i64) -> Template {
    render(pages::comic_page(comic_service, num).await)
}

#[get("/random")]
pub async fn random_comic(comic_service: &State<ComicService>) -> Template {
    let mut rng = StdRng::from_entropy();
    render(pages::random_page(comic_service, &mut rng).await)
}

#[get("/comic/<num>/prev")]
pub async fn previous_comic(comic_service: &State<ComicService>, num: i64) -> Template {
    render(pages::previous_page(comic_service, num).await)
}

#[get("/comic/<num>/next")]
pub async fn next_comic(comic_service: &State<ComicService>, num: i64) -> Template {
    render(pages::next_page(comic_service, num).await)
}

#[post("/search", data = "<form>")]
pub async fn search_comic(comic_service: &State<ComicService>, form: Form<SearchForm>) -> Template {
    let raw = form.comic_num.as_deref().unwrap_or_default();
    render(pages::search_page(comic_service, raw).await)
}

#[get("/recent")]
pub async fn recent_default(comic_service: &State<ComicService>) -> Template {
    render(pages::recent_page(comic_service, pages::DEFAULT_RECENT_COUNT).await)
}

#[get("/recent/<count>")]
pub async fn recent_comics(comic_service: &State<ComicService>, count: i64) -> Template {
    render(pages::recent_page(comic_service, count).await)
}

#[catch(404)]
pub fn not_found() -> Template {
    render(ComicPage::error("Page not found.", None))
}

#[catch(422)]
pub fn unprocessable() -> Template {
    render(ComicPage::error("Invalid request.", None))
}
