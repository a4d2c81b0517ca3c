//! Placeholder avatar URLs for seeded responses.
//!
//! Avatars come from a third-party placeholder image service; the `sig`
//! query parameter is a client-generated uniqueness token so each response
//! gets a distinct image. The URL is purely cosmetic and nothing else
//! depends on its shape.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

const BASE_URL: &str = "https://source.unsplash.com/random/40x40/?face";

/// Build a placeholder avatar URL with a fresh uniqueness token.
pub fn placeholder_url() -> String {
    format!("{BASE_URL}&sig={}", uuid::Uuid::new_v4().simple())
}
