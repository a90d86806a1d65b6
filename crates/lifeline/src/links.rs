//! Deep-link construction.
//!
//! This module builds every URL the page hands to the platform: the `tel:`
//! dialer link, the map link embedding a coordinate pair, the chat-app
//! deep link carrying the map link as body text, and the `sms:` composer
//! link carrying an incident report. Free-text bodies are form-encoded
//! into a query parameter; everything else is fixed shape.

use url::Url;

use crate::error::{Error, Result};
use crate::location::Position;

/// Base URL for map links; the coordinate pair goes in the `q` parameter.
const MAP_BASE_URL: &str = "https://www.google.com/maps";

/// Base URL for the chat-app deep link; the recipient is the path segment.
const CHAT_BASE_URL: &str = "https://wa.me";

/// Build a dialer deep link for the given phone number.
///
/// # Errors
///
/// Returns an error if the number does not form a valid `tel:` URI.
pub fn dial_link(number: &str) -> Result<Url> {
    Url::parse(&format!("tel:{number}")).map_err(|e| Error::link("dial", e))
}

/// Build a map URL embedding the coordinate pair as a query parameter.
///
/// The pair is rendered as `q=latitude,longitude` with a literal comma,
/// the form any map-capable viewer accepts.
///
/// # Errors
///
/// Returns an error if the map base URL fails to parse (a bug rather than
/// an input condition).
pub fn map_link(position: &Position) -> Result<Url> {
    let mut url = Url::parse(MAP_BASE_URL).map_err(|e| Error::link("map", e))?;
    url.set_query(Some(&format!(
        "q={},{}",
        position.latitude, position.longitude
    )));
    Ok(url)
}

/// Build a chat-app deep link to the given recipient with a free-text body.
///
/// The body lands form-encoded in the `text` query parameter.
///
/// # Errors
///
/// Returns an error if the recipient does not form a valid URL path.
pub fn chat_link(recipient: &str, body: &str) -> Result<Url> {
    let mut url =
        Url::parse(&format!("{CHAT_BASE_URL}/{recipient}")).map_err(|e| Error::link("chat", e))?;
    url.query_pairs_mut().append_pair("text", body);
    Ok(url)
}

/// Build an SMS composer deep link to the given number with a free-text body.
///
/// The body lands form-encoded in the `body` query parameter.
///
/// # Errors
///
/// Returns an error if the number does not form a valid `sms:` URI.
pub fn sms_link(number: &str, body: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("sms:{number}")).map_err(|e| Error::link("sms", e))?;
    url.query_pairs_mut().append_pair("body", body);
    Ok(url)
}

/// Decode a named query parameter from a deep link.
///
/// Convenience for callers (and tests) that need to read back a
/// form-encoded body.
#[must_use]
pub fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dial_link_shape() {
        let url = dial_link("112").unwrap();
        assert_eq!(url.as_str(), "tel:112");
        assert_eq!(url.scheme(), "tel");
    }

    #[test]
    fn test_map_link_embeds_coordinates() {
        let position = Position::new(12.9716, 77.5946);
        let url = map_link(&position).unwrap();

        assert_eq!(url.as_str(), "https://www.google.com/maps?q=12.9716,77.5946");
        assert!(url.as_str().contains("12.9716"));
        assert!(url.as_str().contains("77.5946"));
    }

    #[test]
    fn test_map_link_negative_coordinates() {
        let position = Position::new(-33.8688, 151.2093);
        let url = map_link(&position).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.google.com/maps?q=-33.8688,151.2093"
        );
    }

    #[test]
    fn test_chat_link_targets_recipient() {
        let url = chat_link("919057301529", "hello").unwrap();
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/919057301529");
    }

    #[test]
    fn test_chat_link_body_round_trips() {
        let position = Position::new(12.9716, 77.5946);
        let map = map_link(&position).unwrap();
        let body = format!("My current location: {map}");

        let url = chat_link("919057301529", &body).unwrap();
        let decoded = query_param(&url, "text").unwrap();

        assert_eq!(decoded, body);
        assert!(decoded.contains(map.as_str()));
    }

    #[test]
    fn test_sms_link_targets_number() {
        let url = sms_link("112", "test").unwrap();
        assert_eq!(url.scheme(), "sms");
        assert!(url.as_str().starts_with("sms:112?"));
    }

    #[test]
    fn test_sms_link_body_round_trips() {
        let body = "Incident Report from Asha: Suspicious person following me";
        let url = sms_link("112", body).unwrap();

        let decoded = query_param(&url, "body").unwrap();
        assert_eq!(decoded, body);
    }

    #[test]
    fn test_sms_link_encodes_body() {
        let url = sms_link("112", "a b&c").unwrap();
        // The raw query must not contain an unencoded ampersand or space.
        let query = url.query().unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains("b&c"));
    }

    #[test]
    fn test_query_param_missing() {
        let url = sms_link("112", "test").unwrap();
        assert!(query_param(&url, "text").is_none());
    }
}
