//! Request primitives shared by every API call.
//!
//! A [`RequestSpec`] is built fresh for each call and consumed by
//! [`SdeClient::make_request`](crate::client::SdeClient::make_request).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::SdeError;

/// HTTP methods used by the SD Elements API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
}

impl RequestMethod {
    /// The method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestMethod {
    type Err = SdeError;

    /// Parse a method name. Anything other than GET, POST or PUT is rejected
    /// rather than treated as GET.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            _ => Err(SdeError::InvalidMethod(s.to_string())),
        }
    }
}

impl From<RequestMethod> for reqwest::Method {
    fn from(method: RequestMethod) -> Self {
        match method {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
        }
    }
}

/// A single outgoing request: absolute URL, method, headers and JSON body.
///
/// `body` is `None` for requests that carry no payload, such as plain GETs.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub url: String,
    pub method: RequestMethod,
    pub headers: BTreeMap<String, String>,
    pub body: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_methods() {
        assert_eq!("GET".parse::<RequestMethod>().unwrap(), RequestMethod::Get);
        assert_eq!("POST".parse::<RequestMethod>().unwrap(), RequestMethod::Post);
        assert_eq!("put".parse::<RequestMethod>().unwrap(), RequestMethod::Put);
    }

    #[test]
    fn rejects_unknown_method() {
        let err = "DELETE".parse::<RequestMethod>().unwrap_err();
        assert!(matches!(err, SdeError::InvalidMethod(ref m) if m == "DELETE"));

        assert!("".parse::<RequestMethod>().is_err());
        assert!("FETCH".parse::<RequestMethod>().is_err());
    }

    #[test]
    fn maps_to_reqwest_method() {
        assert_eq!(reqwest::Method::from(RequestMethod::Get), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(RequestMethod::Post), reqwest::Method::POST);
        assert_eq!(reqwest::Method::from(RequestMethod::Put), reqwest::Method::PUT);
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(RequestMethod::Post.to_string(), "POST");
    }
}
