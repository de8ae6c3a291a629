//! Builds the page shown for each route.
//!
//! Every builder returns a [`ComicPage`], so upstream failures and bad input
//! always end up as an `error` message on a normally rendered page.

use rand::Rng;

use crate::models::comic::ComicPage;
use crate::services::comic_service::ComicService;

pub const LATEST_UNAVAILABLE: &str =
    "Sorry, we couldn't fetch the comic right now. Please try again later.";
pub const INVALID_NUMBER: &str = "Invalid comic number. Comics start at #1.";
pub const RANDOM_NO_LATEST: &str = "Unable to fetch the latest comic to choose a random one.";
pub const RANDOM_FAILED: &str = "Could not fetch a random comic. Please try again.";
pub const NO_PREVIOUS: &str = "This is the first comic; there is no previous comic.";
pub const PREVIOUS_NOT_FOUND: &str = "Unable to locate a previous comic.";
pub const NO_NEXT: &str = "This is the latest comic; there is no next comic yet.";
pub const NEXT_NOT_FOUND: &str = "Unable to locate the next comic.";
pub const INVALID_SEARCH: &str = "Please enter a valid comic number.";
pub const RECENT_UNAVAILABLE: &str = "Unable to fetch recent comics right now.";

pub const DEFAULT_RECENT_COUNT: i64 = 5;
pub const MAX_RECENT_COUNT: i64 = 10;

pub fn not_found(num: i64) -> String {
    format!("Comic #{} could not be found. It may not exist.", num)
}

pub async fn latest_page(service: &ComicService) -> ComicPage {
    match service.fetch_latest().await.ok() {
        Some(comic) => {
            let latest_num = Some(comic.num);
            ComicPage::comic(comic, latest_num)
        }
        None => ComicPage::error(LATEST_UNAVAILABLE, None),
    }
}

pub async fn comic_page(service: &ComicService, num: i64) -> ComicPage {
    if num < 1 {
        return ComicPage::error(INVALID_NUMBER, service.latest_num().await);
    }

    let comic = service.fetch_by_number(num).await.ok();
    let latest_num = service.latest_num().await;

    match comic {
        Some(comic) => ComicPage::comic(comic, latest_num),
        None => ComicPage::error(not_found(num), latest_num),
    }
}

pub async fn random_page<R: Rng>(service: &ComicService, rng: &mut R) -> ComicPage {
    let latest_num = match service.latest_num().await {
        Some(latest_num) if latest_num >= 1 => latest_num,
        _ => return ComicPage::error(RANDOM_NO_LATEST, None),
    };

    let num = rng.gen_range(1..=latest_num);
    tracing::debug!(num, latest_num, "picked random comic");

    match service.fetch_by_number(num).await.ok() {
        Some(comic) => ComicPage::comic(comic, Some(latest_num)),
        None => ComicPage::error(RANDOM_FAILED, Some(latest_num)),
    }
}

pub async fn previous_page(service: &ComicService, num: i64) -> ComicPage {
    if num <= 1 {
        return ComicPage::error(NO_PREVIOUS, None);
    }

    for target in (1..num).rev() {
        if let Some(comic) = service.fetch_by_number(target).await.ok() {
            let latest_num = service.latest_num().await;
            return ComicPage::comic(comic, latest_num);
        }
    }

    ComicPage::error(PREVIOUS_NOT_FOUND, None)
}

pub async fn next_page(service: &ComicService, num: i64) -> ComicPage {
    let latest_num = match service.latest_num().await {
        Some(latest_num) if num < latest_num => latest_num,
        latest_num => return ComicPage::error(NO_NEXT, latest_num),
    };

    for target in (num + 1)..=latest_num {
        if let Some(comic) = service.fetch_by_number(target).await.ok() {
            return ComicPage::comic(comic, Some(latest_num));
        }
    }

    ComicPage::error(NEXT_NOT_FOUND, Some(latest_num))
}

pub async fn search_page(service: &ComicService, raw: &str) -> ComicPage {
    match raw.trim().parse::<i64>() {
        Ok(num) => comic_page(service, num).await,
        Err(_) => ComicPage::error(INVALID_SEARCH, service.latest_num().await),
    }
}

pub fn clamp_recent_count(count: i64) -> usize {
    // Always in 1..=MAX_RECENT_COUNT, so the cast cannot truncate.
    count.clamp(1, MAX_RECENT_COUNT) as usize
}

pub async fn recent_page(service: &ComicService, count: i64) -> ComicPage {
    let count = clamp_recent_count(count);

    let latest_num = match service.latest_num().await {
        Some(latest_num) => latest_num,
        None => return ComicPage::error(RECENT_UNAVAILABLE, None),
    };

    let mut comics = Vec::with_capacity(count);
    for num in (1..=latest_num).rev() {
        if let Some(comic) = service.fetch_by_number(num).await.ok() {
            comics.push(comic);
        }
        if comics.len() >= count {
            break;
        }
    }

    if comics.is_empty() {
        return ComicPage::error(RECENT_UNAVAILABLE, Some(latest_num));
    }

    tracing::debug!(collected = comics.len(), latest_num, "built recent comics list");
    ComicPage::recent(comics, latest_num)
}
