pub mod document;

use crate::error::ParseError;
use crate::model::{ApiSpec, AuthConfig, HttpMethod, Parameter, Route};
use document::{AuthDocument, ParameterDocument, RouteDocument, SpecDocument};

/// Parse an API route spec from JSON.
pub fn from_json(input: &str) -> Result<ApiSpec, ParseError> {
    let document: SpecDocument = serde_json::from_str(input)?;
    from_document(document)
}

/// Build an [`ApiSpec`] from an already deserialized document.
pub fn from_document(document: SpecDocument) -> Result<ApiSpec, ParseError> {
    let name = required(document.name, "name")?;
    let base_url = required(document.base_url, "baseUrl")?;

    let routes = document
        .routes
        .into_iter()
        .enumerate()
        .map(|(i, route)| build_route(route, &format!("routes[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let auth = document.auth.map(build_auth).transpose()?;

    log::debug!("parsed spec `{}` with {} routes", name, routes.len());

    Ok(ApiSpec {
        name,
        base_url,
        routes,
        auth,
    })
}

fn build_route(route: RouteDocument, at: &str) -> Result<Route, ParseError> {
    let path = required(route.path, &format!("{at}.path"))?;
    let method = required(route.method, &format!("{at}.method"))?;

    let parameters = route
        .parameters
        .into_iter()
        .enumerate()
        .map(|(i, param)| build_parameter(param, &format!("{at}.parameters[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Route {
        path,
        method: HttpMethod::parse(&method),
        parameters,
        description: route.description,
        auth: route.auth,
    })
}

fn build_parameter(param: ParameterDocument, at: &str) -> Result<Parameter, ParseError> {
    let name = required(param.name, &format!("{at}.name"))?;
    if name.is_empty() {
        return Err(ParseError::Invalid(format!("{at}.name must not be empty")));
    }

    Ok(Parameter {
        name,
        param_type: param.param_type,
        required: param.required,
        description: param.description,
    })
}

fn build_auth(auth: AuthDocument) -> Result<AuthConfig, ParseError> {
    Ok(AuthConfig {
        scheme: required(auth.scheme, "auth.type")?,
        header: auth.header,
    })
}

fn required(value: Option<String>, field: &str) -> Result<String, ParseError> {
    value.ok_or_else(|| ParseError::MissingField(field.to_string()))
}
