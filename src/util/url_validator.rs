use std::net::IpAddr;
use thiserror::Error;
use url::Url;

/// Errors that can occur during URL validation.
#[derive(Error, Debug)]
pub enum UrlValidationError {
    /// The URL string could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    /// The URL points to a private/internal IP address.
    #[error("Private IP address not allowed: {0}")]
    PrivateIp(String),
    /// The URL points to localhost.
    #[error("Localhost not allowed")]
    Localhost,
}

/// Validates a URL string before it is handed to the system opener.
///
/// Rejects:
/// - Non-HTTP(S) schemes (e.g., `file://`, `javascript:`)
/// - Localhost addresses (`localhost`, `127.0.0.1`, `::1`)
/// - Private IP ranges (RFC 1918, link-local, unique local IPv6)
///
/// # Examples
///
/// ```
/// use trekgram::util::validate_url;
///
/// let url = validate_url("https://images.unsplash.com/photo.jpg").unwrap();
/// assert_eq!(url.host_str(), Some("images.unsplash.com"));
///
/// assert!(validate_url("http://localhost/photo.jpg").is_err());
/// assert!(validate_url("file:///etc/passwd").is_err());
/// ```
pub fn validate_url(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str)?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlValidationError::UnsupportedScheme(scheme.to_owned())),
    }

    if let Some(host) = url.host_str() {
        if host.eq_ignore_ascii_case("localhost") {
            return Err(UrlValidationError::Localhost);
        }

        let host_for_parse = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);

        if let Ok(ip) = host_for_parse.parse::<IpAddr>() {
            if ip.is_loopback() {
                return Err(UrlValidationError::Localhost);
            }
            if is_private_ip(&ip) {
                return Err(UrlValidationError::PrivateIp(ip.to_string()));
            }
        }
    }

    Ok(url)
}

/// Validate a post image URL for `open::that`, returning a status-bar ready
/// message on rejection.
pub fn validate_url_for_open(url_str: &str) -> Result<Url, String> {
    validate_url(url_str).map_err(|e| format!("Refusing to open image URL: {}", e))
}

fn is_private_ip(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(ipv4) => {
            ipv4.is_private() || ipv4.is_loopback() || ipv4.is_link_local() || ipv4.is_unspecified()
        }
        IpAddr::V6(ipv6) => {
            if ipv6.is_loopback() || ipv6.is_unspecified() {
                return true;
            }
            let segments = ipv6.segments();
            // Unique Local (fc00::/7)
            let is_unique_local = (segments[0] & 0xfe00) == 0xfc00;
            // Link-Local (fe80::/10)
            let is_link_local = (segments[0] & 0xffc0) == 0xfe80;
            is_unique_local || is_link_local
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_builtin_image_urls_are_valid() {
        for post in Catalog::builtin().posts() {
            assert!(
                validate_url(&post.image_url).is_ok(),
                "post {} image URL rejected",
                post.id
            );
        }
    }

    #[test]
    fn test_invalid_schemes() {
        assert!(matches!(
            validate_url("file:///etc/passwd"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
        assert!(validate_url("ftp://example.com/a.jpg").is_err());
        assert!(validate_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_unparseable_url() {
        assert!(matches!(
            validate_url("not a url"),
            Err(UrlValidationError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_localhost_rejected() {
        assert!(validate_url("http://localhost/a.jpg").is_err());
        assert!(validate_url("http://LOCALHOST/a.jpg").is_err());
        assert!(validate_url("http://127.0.0.1/a.jpg").is_err());
        assert!(validate_url("http://[::1]/a.jpg").is_err());
    }

    #[test]
    fn test_private_ips_rejected() {
        assert!(validate_url("http://192.168.1.1/a.jpg").is_err());
        assert!(validate_url("http://10.0.0.1:8080/a.jpg").is_err());
        assert!(validate_url("http://172.16.0.1/a.jpg").is_err());
        assert!(validate_url("http://169.254.1.1/a.jpg").is_err());
        assert!(validate_url("http://[fe80::1]/a.jpg").is_err());
        assert!(validate_url("http://0.0.0.0/a.jpg").is_err());
    }

    #[test]
    fn test_open_message_names_reason() {
        let msg = validate_url_for_open("file:///tmp/x.jpg").unwrap_err();
        assert!(msg.starts_with("Refusing to open image URL"));
        assert!(msg.contains("file"));
    }
}
