use rand::{Rng, distr::Alphanumeric};

use crate::types::{ArtistRef, Image};

/// Seed genres used when none of the ranked genres survive the valid-seed
/// filter.
pub const DEFAULT_SEED_GENRES: [&str; 3] = ["pop", "rock", "hip-hop"];

const SEED_GENRE_LIMIT: usize = 3;
const SESSION_ID_LENGTH: usize = 64;

pub fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Selects the genre seeds for the recommendations query.
///
/// Ranks `genres` by frequency (ties keep first-seen order), takes the top
/// three, drops those missing from `valid`, and falls back to
/// [`DEFAULT_SEED_GENRES`] when nothing survives.
pub fn select_seed_genres(genres: &[String], valid: &[String]) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for genre in genres {
        match counts.iter_mut().find(|(name, _)| *name == genre.as_str()) {
            Some(entry) => entry.1 += 1,
            None => counts.push((genre.as_str(), 1)),
        }
    }
    // Stable sort: equally frequent genres stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let seeds: Vec<String> = counts
        .iter()
        .take(SEED_GENRE_LIMIT)
        .map(|(genre, _)| (*genre).to_string())
        .filter(|genre| valid.contains(genre))
        .collect();

    if seeds.is_empty() {
        return DEFAULT_SEED_GENRES
            .iter()
            .map(|genre| (*genre).to_string())
            .collect();
    }
    seeds
}

pub fn join_artist_names(artists: &[ArtistRef]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// URL of the first image, if the array is present and non-empty.
pub fn primary_image(images: &Option<Vec<Image>>) -> Option<String> {
    images
        .as_ref()
        .and_then(|images| images.first())
        .map(|image| image.url.clone())
}
