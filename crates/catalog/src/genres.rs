//! Fixed genre table used to expand genre ids into names.

/// TMDB movie genre list.
const MOVIE_GENRES: &[(i64, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

/// Look up a single genre name.
pub fn genre_name(id: i64) -> Option<&'static str> {
    MOVIE_GENRES
        .iter()
        .find(|(genre_id, _)| *genre_id == id)
        .map(|(_, name)| *name)
}

/// Expand genre ids into names, keeping input order.
///
/// Ids missing from the table are dropped.
pub fn genre_names(ids: &[i64]) -> Vec<String> {
    ids.iter()
        .filter_map(|id| genre_name(*id))
        .map(str::to_string)
        .collect()
}
