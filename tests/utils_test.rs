use tunescope::types::{ArtistRef, Image};
use tunescope::utils::*;

// Helper to build owned genre lists from literals
fn genres(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_generate_session_id() {
    let id = generate_session_id();

    // Should be exactly 64 characters
    assert_eq!(id.len(), 64);

    // Should contain only alphanumeric characters
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated ids should be different
    let id2 = generate_session_id();
    assert_ne!(id, id2);
}

#[test]
fn test_seed_genres_ranked_by_frequency() {
    // frequencies: pop 3, indie 2, jazz 1, lofi 1; jazz seen before lofi
    let listened = genres(&["pop", "indie", "jazz", "pop", "indie", "pop", "lofi"]);
    let valid = genres(&["pop", "indie", "jazz", "lofi"]);

    assert_eq!(
        select_seed_genres(&listened, &valid),
        genres(&["pop", "indie", "jazz"])
    );
}

#[test]
fn test_seed_genres_tie_broken_by_first_seen_order() {
    // All frequencies equal; selection keeps encounter order
    let listened = genres(&["jazz", "lofi", "pop", "indie"]);
    let valid = genres(&["jazz", "lofi", "pop", "indie"]);

    assert_eq!(
        select_seed_genres(&listened, &valid),
        genres(&["jazz", "lofi", "pop"])
    );
}

#[test]
fn test_seed_genres_filtered_against_valid_list() {
    // shoegaze ranks second but is not a valid seed
    let listened = genres(&["pop", "pop", "shoegaze", "shoegaze", "jazz"]);
    let valid = genres(&["pop", "jazz"]);

    assert_eq!(
        select_seed_genres(&listened, &valid),
        genres(&["pop", "jazz"])
    );
}

#[test]
fn test_seed_genres_fallback_when_nothing_survives() {
    let listened = genres(&["zeuhl", "dungeon-synth"]);
    let valid = genres(&["pop", "rock"]);

    assert_eq!(
        select_seed_genres(&listened, &valid),
        genres(&["pop", "rock", "hip-hop"])
    );
}

#[test]
fn test_seed_genres_empty_input_falls_back() {
    assert_eq!(
        select_seed_genres(&[], &genres(&["pop"])),
        genres(&["pop", "rock", "hip-hop"])
    );
}

#[test]
fn test_join_artist_names() {
    let artists = vec![
        ArtistRef {
            id: "a1".to_string(),
            name: "Alpha".to_string(),
        },
        ArtistRef {
            id: "a2".to_string(),
            name: "Beta".to_string(),
        },
    ];

    assert_eq!(join_artist_names(&artists), "Alpha, Beta");
    assert_eq!(join_artist_names(&[]), "");
}

#[test]
fn test_primary_image() {
    let images = Some(vec![
        Image {
            url: "https://img.example/a".to_string(),
        },
        Image {
            url: "https://img.example/b".to_string(),
        },
    ]);

    assert_eq!(
        primary_image(&images),
        Some("https://img.example/a".to_string())
    );
    assert_eq!(primary_image(&Some(Vec::new())), None);
    assert_eq!(primary_image(&None), None);
}
