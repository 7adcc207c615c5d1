use url::Url;

/// Returns `true` if `candidate` is an absolute `http` or `https` URL.
///
/// This is the only check standing between a category file and a redirect
/// target, so every other scheme (`javascript:`, `data:`, `ftp:`, ...) and
/// anything that fails to parse as an absolute URL is rejected.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
