//! Static catalog of cities, treks and posts.
//!
//! The catalog is built once at startup and handed to the app behind an
//! `Arc`. Nothing mutates it afterwards. `Catalog::builtin()` is the data set
//! the binary ships with; `Catalog::new` builds validated alternate fixtures.
use std::collections::{HashMap, HashSet};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Reasons a catalog fixture is rejected by [`Catalog::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("City '{0}' is listed more than once")]
    DuplicateCity(String),

    #[error("City '{0}' has no treks")]
    EmptyTrekList(String),

    #[error("Trek list given for unknown city '{0}'")]
    UnknownTrekCity(String),

    #[error("Post id {0} is used more than once")]
    DuplicatePostId(u32),

    #[error("Post {id} belongs to unknown city '{city}'")]
    UnknownPostCity { id: u32, city: String },
}

// ============================================================================
// Post
// ============================================================================

/// A single photo post in the feed.
///
/// `city` is the join key against the catalog's city list. `trek` should name
/// a trek under that city but this is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub author: String,
    pub city: String,
    pub trek: String,
    pub image_url: String,
    pub caption: String,
    pub likes: u32,
    pub comments: u32,
}

impl Post {
    #[allow(clippy::too_many_arguments)]
    fn builtin(
        id: u32,
        author: &str,
        city: &str,
        trek: &str,
        image_url: &str,
        caption: &str,
        likes: u32,
        comments: u32,
    ) -> Self {
        Self {
            id,
            author: author.to_string(),
            city: city.to_string(),
            trek: trek.to_string(),
            image_url: image_url.to_string(),
            caption: caption.to_string(),
            likes,
            comments,
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Read-only collections backing the feed screen.
#[derive(Debug, Clone)]
pub struct Catalog {
    cities: Vec<String>,
    treks: HashMap<String, Vec<String>>,
    posts: Vec<Post>,
}

const BUILTIN_TREKS: [(&str, [&str; 3]); 5] = [
    ("Mumbai", ["Karnala Fort", "Prabalmachi", "Mahuli"]),
    ("Pune", ["Sinhagad", "Rajgad", "Torna"]),
    ("Nashik", ["Kalsubai", "Harihar Fort", "Brahmagiri"]),
    ("Bangalore", ["Nandi Hills", "Skandagiri", "Savandurga"]),
    ("Manali", ["Hampta Pass", "Beas Kund", "Bhrigu Lake"]),
];

impl Catalog {
    /// The data set shipped with the binary.
    pub fn builtin() -> Self {
        let cities = BUILTIN_TREKS
            .iter()
            .map(|(city, _)| city.to_string())
            .collect();

        let treks = BUILTIN_TREKS
            .iter()
            .map(|(city, treks)| {
                (
                    city.to_string(),
                    treks.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect();

        let posts = vec![
            Post::builtin(
                1,
                "trekker_joy",
                "Pune",
                "Sinhagad",
                "https://images.unsplash.com/photo-1551632811-561732d1e306?q=80&w=1000&auto=format&fit=crop",
                "Beautiful sunrise at Sinhagad! 🌄 #trekking #pune",
                120,
                45,
            ),
            Post::builtin(
                2,
                "mountain_lover",
                "Manali",
                "Hampta Pass",
                "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?q=80&w=1000&auto=format&fit=crop",
                "Snowy trails of Hampta Pass. Cold but worth it. ❄️",
                340,
                89,
            ),
            Post::builtin(
                3,
                "weekend_wanderer",
                "Mumbai",
                "Karnala Fort",
                "https://images.unsplash.com/photo-1589308078059-be1415eab4c3?q=80&w=1000&auto=format&fit=crop",
                "Quick weekend getaway to Karnala. The bird sanctuary is amazing.",
                85,
                12,
            ),
            Post::builtin(
                4,
                "nature_seeker",
                "Bangalore",
                "Nandi Hills",
                "https://images.unsplash.com/photo-1571407970349-bc16e6961601?q=80&w=1000&auto=format&fit=crop",
                "Cloudy morning at Nandi Hills. ☁️",
                210,
                30,
            ),
        ];

        Self {
            cities,
            treks,
            posts,
        }
    }

    /// Build a catalog from caller-supplied data, checking its invariants.
    ///
    /// - city names are unique
    /// - every city maps to a non-empty trek list, and every trek list key is a city
    /// - post ids are unique and every post's city is known
    ///
    /// A post whose trek is not listed under its city is accepted.
    pub fn new(
        cities: Vec<String>,
        treks: HashMap<String, Vec<String>>,
        posts: Vec<Post>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !seen.insert(city.as_str()) {
                return Err(CatalogError::DuplicateCity(city.clone()));
            }
            match treks.get(city) {
                Some(list) if !list.is_empty() => {}
                _ => return Err(CatalogError::EmptyTrekList(city.clone())),
            }
        }

        if let Some(stray) = treks.keys().find(|k| !seen.contains(k.as_str())) {
            return Err(CatalogError::UnknownTrekCity(stray.clone()));
        }

        let mut ids = HashSet::with_capacity(posts.len());
        for post in &posts {
            if !ids.insert(post.id) {
                return Err(CatalogError::DuplicatePostId(post.id));
            }
            if !seen.contains(post.city.as_str()) {
                return Err(CatalogError::UnknownPostCity {
                    id: post.id,
                    city: post.city.clone(),
                });
            }
            let trek_listed = treks
                .get(&post.city)
                .is_some_and(|list| list.iter().any(|t| t == &post.trek));
            if !trek_listed {
                tracing::debug!(
                    post_id = post.id,
                    city = %post.city,
                    trek = %post.trek,
                    "Post trek is not listed under its city"
                );
            }
        }

        Ok(Self {
            cities,
            treks,
            posts,
        })
    }

    /// Known city names, in display order.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Treks for `city` in catalog order. Unknown cities yield an empty slice.
    pub fn treks_for(&self, city: &str) -> &[String] {
        self.treks.get(city).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All posts, in feed order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: u32) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn is_known_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Tests
// ============================================================================
