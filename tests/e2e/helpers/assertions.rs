use serde_json::Value;

/// Error body shape: `{ "error": "..." }`, plus `details` for upstream failures
pub fn assert_error_response(response: &Value, expect_details: bool) {
    assert!(
        response.get("error").and_then(|v| v.as_str()).is_some(),
        "Missing error field: {}",
        response
    );
    assert_eq!(
        response.get("details").is_some(),
        expect_details,
        "Unexpected details presence: {}",
        response
    );
}

pub fn assert_details_contains(response: &Value, expected: &str) {
    let details = response
        .get("details")
        .and_then(|v| v.as_str())
        .expect("Missing details field");
    assert!(
        details.contains(expected),
        "Expected details to contain '{}', but got '{}'",
        expected,
        details
    );
}

/// Parse an `application/x-www-form-urlencoded` body into ordered pairs
pub fn form_pairs(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (percent_decode(key), percent_decode(value))
        })
        .collect()
}

fn percent_decode(input: &str) -> String {
    urlencoding::decode(&input.replace('+', " "))
        .expect("form body is not valid UTF-8")
        .into_owned()
}
