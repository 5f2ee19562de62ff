use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ApiConfig::new("https://api.example.test/", "https://auth.example.test//");
    assert_eq!(cfg.api_base_url, "https://api.example.test");
    assert_eq!(cfg.auth_base_url, "https://auth.example.test");
}

#[test]
fn url_joins_with_single_slash() {
    let cfg = ApiConfig::new("https://api.example.test", "https://auth.example.test");
    assert_eq!(cfg.url(ApiBase::Api, "/product/list"), "https://api.example.test/product/list");
    assert_eq!(
        cfg.url(ApiBase::Api, "landowner/delete/amenities/3"),
        "https://api.example.test/landowner/delete/amenities/3"
    );
    assert_eq!(cfg.url(ApiBase::Auth, "/auth/signin"), "https://auth.example.test/auth/signin");
}

#[test]
fn default_uses_local_backend_for_both_bases() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.api_base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.auth_base_url, DEFAULT_BASE_URL);
}

#[test]
fn detect_without_browser_falls_back_to_default() {
    assert_eq!(ApiConfig::detect(), ApiConfig::default());
}
