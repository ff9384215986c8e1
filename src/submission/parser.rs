use serde_json::{Map, Value};

/// Parse a request body into a field mapping based on the Content-Type header.
///
/// Dispatch is keyed on the declared content type: JSON and form-urlencoded
/// bodies are parsed as such; anything else (including a missing header) takes
/// the default branch and is parsed best-effort as URL-encoded query-string
/// syntax. Parsing never rejects the request — a body we cannot make sense of
/// yields an empty mapping and the secret/field checks decide the outcome.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Value {
    let ct = content_type.unwrap_or("");

    if ct.contains("application/json") {
        serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Map::new()))
    } else {
        parse_form_urlencoded(body)
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Value {
    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body) {
        map.insert(k.into_owned(), Value::String(v.into_owned()));
    }
    Value::Object(map)
}
