//! Bundled sample data for [`crate::FixtureCatalog::sample`].

use chrono::{DateTime, Utc};

use crate::{DetailExtras, FixtureMovie, MovieId, Review, SummaryRecord};

struct Row {
    id: MovieId,
    title: &'static str,
    poster: &'static str,
    backdrop: &'static str,
    vote_average: f64,
    vote_count: u64,
    release_date: &'static str,
    overview: &'static str,
    genre_ids: &'static [i64],
    runtime: u32,
    tagline: &'static str,
    budget: u64,
    revenue: u64,
}

const MOVIES: &[Row] = &[
    Row {
        id: 475557,
        title: "Joker",
        poster: "/udDclJoHjfjb8Ekgsd4FDteOkCU.jpg",
        backdrop: "/n6bUvigpRFqSwmPp1m2YADdbRBc.jpg",
        vote_average: 8.2,
        vote_count: 24981,
        release_date: "2019-10-01",
        overview: "During the 1980s, a failed stand-up comedian is driven insane and turns to a life of crime and chaos in Gotham City.",
        genre_ids: &[80, 53, 18],
        runtime: 122,
        tagline: "Put on a happy face.",
        budget: 55_000_000,
        revenue: 1_074_458_282,
    },
    Row {
        id: 299534,
        title: "Avengers: Endgame",
        poster: "/or06FN3Dka5tukK1e9sl16pB3iy.jpg",
        backdrop: "/7RyHsO4yDXtBv1zUU3mTpHeQ0d5.jpg",
        vote_average: 8.3,
        vote_count: 25612,
        release_date: "2019-04-24",
        overview: "After the devastating events of Avengers: Infinity War, the universe is in ruins and the remaining Avengers assemble once more.",
        genre_ids: &[12, 878, 28],
        runtime: 181,
        tagline: "Avenge the fallen.",
        budget: 356_000_000,
        revenue: 2_800_000_000,
    },
    Row {
        id: 27205,
        title: "Inception",
        poster: "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
        backdrop: "/8ZTVqvKDQ8emSGUEMjsS4yHAwrp.jpg",
        vote_average: 8.4,
        vote_count: 36000,
        release_date: "2010-07-15",
        overview: "Cobb, a skilled thief who steals secrets from deep within the subconscious, is offered a chance at redemption.",
        genre_ids: &[28, 878, 12],
        runtime: 148,
        tagline: "Your mind is the scene of the crime.",
        budget: 160_000_000,
        revenue: 825_532_764,
    },
    Row {
        id: 155,
        title: "The Dark Knight",
        poster: "/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
        backdrop: "/nMKdUUepR0i5zn0y1T4CsSB5chy.jpg",
        vote_average: 8.5,
        vote_count: 32000,
        release_date: "2008-07-16",
        overview: "Batman raises the stakes in his war on crime, until a criminal mastermind known as the Joker plunges Gotham into anarchy.",
        genre_ids: &[18, 28, 80, 53],
        runtime: 152,
        tagline: "Welcome to a world without rules.",
        budget: 185_000_000,
        revenue: 1_004_558_444,
    },
    Row {
        id: 157336,
        title: "Interstellar",
        poster: "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
        backdrop: "/xJHokMbljvjADYdit5fK5VQsXEG.jpg",
        vote_average: 8.4,
        vote_count: 34000,
        release_date: "2014-11-05",
        overview: "A team of explorers travels through a wormhole in space in an attempt to ensure humanity's survival.",
        genre_ids: &[12, 18, 878],
        runtime: 169,
        tagline: "Mankind was born on Earth. It was never meant to die here.",
        budget: 165_000_000,
        revenue: 701_729_206,
    },
    Row {
        id: 496243,
        title: "Parasite",
        poster: "/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg",
        backdrop: "/TU9NIjwzjoKPwQHoHshkFcQUCG.jpg",
        vote_average: 8.5,
        vote_count: 18000,
        release_date: "2019-05-30",
        overview: "All unemployed, Ki-taek's family takes peculiar interest in the wealthy Parks for their livelihood.",
        genre_ids: &[35, 53, 18],
        runtime: 133,
        tagline: "Act like you own the place.",
        budget: 11_400_000,
        revenue: 257_591_776,
    },
    Row {
        id: 680,
        title: "Pulp Fiction",
        poster: "/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg",
        backdrop: "/suaEOtk1N1sgg2MTM7oZd2cfVp3.jpg",
        vote_average: 8.5,
        vote_count: 27000,
        release_date: "1994-09-10",
        overview: "A burger-loving hit man, his philosophical partner and a washed-up boxer converge in this sprawling crime caper.",
        genre_ids: &[53, 80],
        runtime: 154,
        tagline: "Just because you are a character doesn't mean you have character.",
        budget: 8_500_000,
        revenue: 213_900_000,
    },
    Row {
        id: 550,
        title: "Fight Club",
        poster: "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
        backdrop: "/hZkgoQYus5vegHoetLkCJzb17zJ.jpg",
        vote_average: 8.4,
        vote_count: 29000,
        release_date: "1999-10-15",
        overview: "A ticking-time-bomb insomniac and a slippery soap salesman channel primal male aggression into a shocking new form of therapy.",
        genre_ids: &[18],
        runtime: 139,
        tagline: "Mischief. Mayhem. Soap.",
        budget: 63_000_000,
        revenue: 100_853_753,
    },
    Row {
        id: 603,
        title: "The Matrix",
        poster: "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
        backdrop: "/ncEsesgOJDNrTUED89hYbA117wo.jpg",
        vote_average: 8.2,
        vote_count: 25000,
        release_date: "1999-03-30",
        overview: "A computer hacker learns about the true nature of his reality and his role in the war against its controllers.",
        genre_ids: &[28, 878],
        runtime: 136,
        tagline: "Welcome to the Real World.",
        budget: 63_000_000,
        revenue: 463_517_383,
    },
    Row {
        id: 13,
        title: "Forrest Gump",
        poster: "/arw2vcBveWOVZr6pxd9XTd1TdQa.jpg",
        backdrop: "/qdIMHd4sEfJSckfVJfKQvisL02a.jpg",
        vote_average: 8.5,
        vote_count: 27000,
        release_date: "1994-06-23",
        overview: "A man with a low IQ recounts the events of his extraordinary life to strangers at a bus stop.",
        genre_ids: &[35, 18, 10749],
        runtime: 142,
        tagline: "The world will never be the same once you've seen it through the eyes of Forrest Gump.",
        budget: 55_000_000,
        revenue: 677_387_716,
    },
    Row {
        id: 278,
        title: "The Shawshank Redemption",
        poster: "/9cqNxx0GxF0bflZmeSMuL5tnGzr.jpg",
        backdrop: "/kXfqcdQKsToO0OUXHcrrNCHDBzO.jpg",
        vote_average: 8.7,
        vote_count: 26000,
        release_date: "1994-09-23",
        overview: "Imprisoned in the 1940s for a double murder he didn't commit, banker Andy Dufresne begins a new life at Shawshank prison.",
        genre_ids: &[18, 80],
        runtime: 142,
        tagline: "Fear can hold you prisoner. Hope can set you free.",
        budget: 25_000_000,
        revenue: 28_341_469,
    },
    Row {
        id: 238,
        title: "The Godfather",
        poster: "/3bhkrj58Vtu7enYsRolD1fZdja1.jpg",
        backdrop: "/tmU7GeKVybMWFButWEGl2M4GeiP.jpg",
        vote_average: 8.7,
        vote_count: 20000,
        release_date: "1972-03-14",
        overview: "Spanning the years 1945 to 1955, a chronicle of the fictional Italian-American Corleone crime family.",
        genre_ids: &[18, 80],
        runtime: 175,
        tagline: "An offer you can't refuse.",
        budget: 6_000_000,
        revenue: 245_066_411,
    },
    Row {
        id: 129,
        title: "Spirited Away",
        poster: "/39wmItIWsg5sZMyRUHLkWBcuVCM.jpg",
        backdrop: "/Ab8mkHmkYADjU7wQiOkia9BzGvS.jpg",
        vote_average: 8.5,
        vote_count: 16000,
        release_date: "2001-07-20",
        overview: "A young girl wanders into a world ruled by gods, witches and spirits, where humans are changed into beasts.",
        genre_ids: &[16, 10751, 14],
        runtime: 125,
        tagline: "",
        budget: 19_000_000,
        revenue: 274_925_095,
    },
    Row {
        id: 120,
        title: "The Lord of the Rings: The Fellowship of the Ring",
        poster: "/6oom5QYQ2yQTMJIbnvbkBL9cHo6.jpg",
        backdrop: "/x2RS3uTcsJJ9IfjNPcgDmukoEcQ.jpg",
        vote_average: 8.4,
        vote_count: 25000,
        release_date: "2001-12-18",
        overview: "Young hobbit Frodo Baggins inherits a ring of unimaginable power and sets out to destroy it.",
        genre_ids: &[12, 14, 28],
        runtime: 179,
        tagline: "One ring to rule them all.",
        budget: 93_000_000,
        revenue: 871_368_364,
    },
    Row {
        id: 597,
        title: "Titanic",
        poster: "/9xjZS2rlVxm8SFx8kPC3aIGCOYQ.jpg",
        backdrop: "/rzdPqYx7Um4FUZeD8wpXqjAUcEm.jpg",
        vote_average: 7.9,
        vote_count: 25000,
        release_date: "1997-11-18",
        overview: "Seventeen-year-old Rose hails from an aristocratic family and is set to be married when she boards the Titanic.",
        genre_ids: &[18, 10749],
        runtime: 194,
        tagline: "Nothing on Earth could come between them.",
        budget: 200_000_000,
        revenue: 2_264_162_353,
    },
    Row {
        id: 24428,
        title: "The Avengers",
        poster: "/RYMX2wcKCBAr24UyPD7xwmjaTn.jpg",
        backdrop: "/9BBTo63ANSmhC4e6r62OJFuK2GL.jpg",
        vote_average: 7.7,
        vote_count: 31000,
        release_date: "2012-04-25",
        overview: "When an unexpected enemy emerges, Nick Fury assembles a team of heroes to save the world.",
        genre_ids: &[878, 28, 12],
        runtime: 143,
        tagline: "Some assembly required.",
        budget: 220_000_000,
        revenue: 1_518_815_515,
    },
    Row {
        id: 118340,
        title: "Guardians of the Galaxy",
        poster: "/r7vmZjiyZw9rpJMQJdXpjgiCOk9.jpg",
        backdrop: "/uLtVbjvS1O7gXL8lUOwsFOH4man.jpg",
        vote_average: 7.9,
        vote_count: 27000,
        release_date: "2014-07-30",
        overview: "Light years from Earth, a brash space adventurer finds himself the quarry of relentless bounty hunters.",
        genre_ids: &[28, 878, 12],
        runtime: 121,
        tagline: "All heroes start somewhere.",
        budget: 170_000_000,
        revenue: 772_776_600,
    },
    Row {
        id: 76341,
        title: "Mad Max: Fury Road",
        poster: "/hA2ple9q4qnwxp3hKVNhroipsir.jpg",
        backdrop: "/gqrnQA6Xppdl8vIb2eJc58VC1tW.jpg",
        vote_average: 7.6,
        vote_count: 22000,
        release_date: "2015-05-13",
        overview: "In a post-apocalyptic wasteland, Max teams up with Imperator Furiosa to flee a tyrant and his army.",
        genre_ids: &[28, 12, 878],
        runtime: 121,
        tagline: "What a lovely day.",
        budget: 150_000_000,
        revenue: 378_858_340,
    },
    Row {
        id: 872585,
        title: "Oppenheimer",
        poster: "/8Gxv8gSFCU0XGDykEGv7zR1n2ua.jpg",
        backdrop: "/neeNHeXjMF5fXoCJRsOmkNGC7q.jpg",
        vote_average: 8.1,
        vote_count: 9000,
        release_date: "2023-07-19",
        overview: "The story of J. Robert Oppenheimer's role in the development of the atomic bomb during World War II.",
        genre_ids: &[18, 36],
        runtime: 181,
        tagline: "The world forever changes.",
        budget: 100_000_000,
        revenue: 952_000_000,
    },
    Row {
        id: 346698,
        title: "Barbie",
        poster: "/iuFNMS8U5cb6xfzi51Dbkovj7vM.jpg",
        backdrop: "/nHf61UzkfFno5X1ofIhugCPus2R.jpg",
        vote_average: 7.0,
        vote_count: 9500,
        release_date: "2023-07-19",
        overview: "Barbie and Ken are having the time of their lives in Barbie Land until they get a chance to go to the real world.",
        genre_ids: &[35, 12, 14],
        runtime: 114,
        tagline: "She's everything. He's just Ken.",
        budget: 145_000_000,
        revenue: 1_441_000_000,
    },
];

/// (movie id, review id, author, content, created_at unix seconds, rating)
type ReviewRow = (
    MovieId,
    &'static str,
    &'static str,
    &'static str,
    i64,
    Option<f64>,
);

const REVIEWS: &[ReviewRow] = &[
    (
        475557,
        "5d966e9e5e1200000e5f4a2c",
        "msbreviews",
        "Phoenix delivers a stunning, unsettling performance that carries the whole film.",
        1570139718,
        Some(9.0),
    ),
    (
        475557,
        "5d987a8634e15200128c9a11",
        "Gimly",
        "Not the comic book movie anyone expected, and better for it.",
        1570273382,
        Some(8.0),
    ),
    (
        475557,
        "5e1d7c08397df00015c6d0a2",
        "SWITCH.",
        "A character study that lingers long after the credits.",
        1578990600,
        None,
    ),
    (
        27205,
        "4c4b1d6e5e73d63a6f000001",
        "tricksy",
        "Layered, loud and ambitious. The hallway fight alone is worth it.",
        1279989910,
        Some(8.5),
    ),
    (
        157336,
        "545fbe6fc3a3685aa8001c2a",
        "Frank Ochieng",
        "Visually overwhelming, emotionally uneven, never boring.",
        1415560364,
        Some(7.0),
    ),
    (
        872585,
        "64bfa1d0e9da690100c1a3b7",
        "Manuel São Bento",
        "Three hours that feel like a held breath.",
        1690280400,
        Some(9.5),
    ),
];

pub(crate) fn sample_movies() -> Vec<FixtureMovie> {
    MOVIES
        .iter()
        .map(|row| FixtureMovie {
            summary: SummaryRecord {
                id: row.id,
                title: row.title.to_string(),
                poster_path: Some(row.poster.to_string()),
                backdrop_path: Some(row.backdrop.to_string()),
                vote_average: row.vote_average,
                vote_count: row.vote_count,
                release_date: row.release_date.to_string(),
                overview: row.overview.to_string(),
                genre_ids: row.genre_ids.to_vec(),
            },
            extras: DetailExtras {
                runtime: row.runtime,
                status: "Released".to_string(),
                tagline: row.tagline.to_string(),
                revenue: row.revenue,
                budget: row.budget,
            },
        })
        .collect()
}

pub(crate) fn sample_reviews() -> Vec<(MovieId, Vec<Review>)> {
    let mut grouped: Vec<(MovieId, Vec<Review>)> = Vec::new();
    for &(movie_id, id, author, content, created_at, rating) in REVIEWS {
        let review = Review {
            id: id.to_string(),
            author: author.to_string(),
            content: content.to_string(),
            created_at: DateTime::<Utc>::from_timestamp(created_at, 0).unwrap_or_default(),
            rating,
        };
        match grouped.iter_mut().find(|(existing, _)| *existing == movie_id) {
            Some((_, reviews)) => reviews.push(review),
            None => grouped.push((movie_id, vec![review])),
        }
    }
    grouped
}
