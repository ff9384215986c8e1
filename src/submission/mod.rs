pub mod parser;

use serde_json::Value;

/// One form submission, alive for the duration of a single request.
///
/// Empty strings count as absent, matching the required-field and
/// placeholder behavior callers rely on.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub site_secret: Option<String>,
    pub name: Option<String>,
    pub contact: Option<String>,
    pub link: Option<String>,
    pub message: Option<String>,
}

impl Submission {
    pub fn from_value(data: &Value) -> Self {
        Submission {
            site_secret: field(data, "site_secret"),
            name: field(data, "name"),
            contact: field(data, "contact"),
            link: field(data, "link"),
            message: field(data, "message"),
        }
    }

    /// `name` and `message` must both be present before a relay is attempted.
    pub fn has_required_fields(&self) -> bool {
        self.name.is_some() && self.message.is_some()
    }
}

fn field(data: &Value, key: &str) -> Option<String> {
    data.get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
