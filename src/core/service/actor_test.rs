use crate::core::service::actor::endpoint;

#[test]
fn endpoints_are_joined_with_a_single_slash() {
    assert_eq!(
        endpoint("https://sn.ip", "api/links"),
        "https://sn.ip/api/links"
    );
    assert_eq!(
        endpoint("https://sn.ip/", "api/links"),
        "https://sn.ip/api/links"
    );
}

#[test]
fn slugs_are_embedded_verbatim() {
    assert_eq!(
        endpoint("https://sn.ip", &format!("api/links/{}", "abc123")),
        "https://sn.ip/api/links/abc123"
    );
    assert_eq!(
        endpoint("https://sn.ip", &format!("api/links/{}/qr", "abc123")),
        "https://sn.ip/api/links/abc123/qr"
    );
}
