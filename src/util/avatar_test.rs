use super::*;

#[test]
fn placeholder_url_points_at_the_image_service() {
    let url = placeholder_url();
    assert!(url.starts_with("https://source.unsplash.com/random/40x40/?face&sig="));
}

#[test]
fn placeholder_urls_are_unique() {
    let a = placeholder_url();
    let b = placeholder_url();
    assert_ne!(a, b);
}

#[test]
fn placeholder_url_token_is_nonempty_and_url_safe() {
    let url = placeholder_url();
    let token = url.rsplit_once("sig=").map(|(_, t)| t).unwrap_or_default();
    assert!(!token.is_empty());
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}
