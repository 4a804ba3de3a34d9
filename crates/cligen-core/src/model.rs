use std::fmt;

/// A fully parsed API route spec. Read-only once built by [`crate::parse`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSpec {
    pub name: String,
    pub base_url: String,
    pub routes: Vec<Route>,
    pub auth: Option<AuthConfig>,
}

impl ApiSpec {
    /// Base URL without trailing slashes.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// The auth scheme applied to every generated command.
    pub fn auth_kind(&self) -> AuthKind {
        self.auth
            .as_ref()
            .map(AuthConfig::kind)
            .unwrap_or(AuthKind::None)
    }
}

/// One API endpoint definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: String,
    pub method: HttpMethod,
    pub parameters: Vec<Parameter>,
    pub description: Option<String>,
    /// Per-route auth override. Advisory only.
    pub auth: Option<String>,
}

/// A declared route parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    /// Free-form type tag (`string`, `int`, ...). Not enforced at generation time.
    pub param_type: String,
    pub required: bool,
    pub description: Option<String>,
}

/// HTTP method, normalized to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    /// Any other method, stored upper-cased.
    Other(String),
}

impl HttpMethod {
    pub fn parse(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "PATCH" => HttpMethod::Patch,
            other => HttpMethod::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Other(method) => method,
        }
    }

    /// Verb suffix used in derived command names.
    pub fn verb(&self) -> String {
        match self {
            HttpMethod::Get => "get".to_string(),
            HttpMethod::Post => "create".to_string(),
            HttpMethod::Put => "update".to_string(),
            HttpMethod::Delete => "delete".to_string(),
            HttpMethod::Patch => "patch".to_string(),
            HttpMethod::Other(method) => method.to_lowercase(),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global authentication settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    /// Raw scheme tag as written in the spec.
    pub scheme: String,
    /// Informational header override; generation uses the fixed header for each kind.
    pub header: Option<String>,
}

impl AuthConfig {
    pub fn kind(&self) -> AuthKind {
        match self.scheme.as_str() {
            "bearer" => AuthKind::Bearer,
            "api-key" => AuthKind::ApiKey,
            _ => AuthKind::None,
        }
    }
}

/// The closed set of auth behaviours a generated client supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    Bearer,
    ApiKey,
    None,
}

impl AuthKind {
    /// Environment variable the generated client reads the credential from.
    pub fn env_var(&self) -> Option<&'static str> {
        match self {
            AuthKind::Bearer => Some("API_TOKEN"),
            AuthKind::ApiKey => Some("API_KEY"),
            AuthKind::None => None,
        }
    }

    /// Header the credential is attached under.
    pub fn header(&self) -> Option<&'static str> {
        match self {
            AuthKind::Bearer => Some("Authorization"),
            AuthKind::ApiKey => Some("X-API-Key"),
            AuthKind::None => None,
        }
    }

    /// Prefix placed before the credential in the header value.
    pub fn value_prefix(&self) -> &'static str {
        match self {
            AuthKind::Bearer => "Bearer ",
            AuthKind::ApiKey | AuthKind::None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_is_normalized() {
        assert_eq!(HttpMethod::parse("get"), HttpMethod::Get);
        assert_eq!(HttpMethod::parse("Patch"), HttpMethod::Patch);
        assert_eq!(
            HttpMethod::parse("options"),
            HttpMethod::Other("OPTIONS".to_string())
        );
        assert_eq!(HttpMethod::parse("options").as_str(), "OPTIONS");
    }

    #[test]
    fn test_method_verbs() {
        assert_eq!(HttpMethod::Get.verb(), "get");
        assert_eq!(HttpMethod::Post.verb(), "create");
        assert_eq!(HttpMethod::Put.verb(), "update");
        assert_eq!(HttpMethod::Delete.verb(), "delete");
        assert_eq!(HttpMethod::Patch.verb(), "patch");
        assert_eq!(HttpMethod::parse("head").verb(), "head");
    }

    #[test]
    fn test_auth_kind_from_scheme() {
        let auth = |scheme: &str| AuthConfig {
            scheme: scheme.to_string(),
            header: None,
        };
        assert_eq!(auth("bearer").kind(), AuthKind::Bearer);
        assert_eq!(auth("api-key").kind(), AuthKind::ApiKey);
        assert_eq!(auth("basic").kind(), AuthKind::None);
        assert_eq!(AuthKind::Bearer.env_var(), Some("API_TOKEN"));
        assert_eq!(AuthKind::ApiKey.header(), Some("X-API-Key"));
        assert_eq!(AuthKind::None.env_var(), None);
    }

    #[test]
    fn test_trimmed_base_url() {
        let spec = ApiSpec {
            name: "x".to_string(),
            base_url: "https://api.example.com//".to_string(),
            routes: vec![],
            auth: None,
        };
        assert_eq!(spec.trimmed_base_url(), "https://api.example.com");
        assert_eq!(spec.auth_kind(), AuthKind::None);
    }
}
