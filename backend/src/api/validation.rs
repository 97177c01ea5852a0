//! Request validation: path ids, page parameters, and JSON bodies.
//!
//! Everything here rejects by returning a [`Rejection`] carrying the
//! complete envelope, so handlers can use `?` and never build failure
//! responses themselves. Body validation is data driven: each DTO declares
//! a rule table and the engine accumulates every violation before the
//! payload is deserialized into the typed DTO.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::models::{ApiResponse, Rejection};
use pagination::PageRequest;

/// Parse a path id segment; anything but an integer `>= 1` rejects.
pub fn parse_id(raw: &str) -> Result<i64, Rejection> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| {
            Rejection(ApiResponse::bad_request(
                "Invalid ID",
                json!({ "errors": ["Invalid ID"] }),
            ))
        })
}

/// Raw page/size query parameters, kept as strings so malformed values
/// reach our validator instead of the framework's deserializer.
#[derive(Debug, Default, serde::Deserialize)]
pub struct PageQuery {
    page: Option<String>,
    size: Option<String>,
}

impl PageQuery {
    /// Validate into a [`PageRequest`], rejecting the whole request on a
    /// bad value.
    pub fn parse(&self) -> Result<PageRequest, Rejection> {
        PageRequest::from_raw(self.page.as_deref(), self.size.as_deref()).map_err(|_| {
            Rejection(ApiResponse::bad_request(
                "Invalid page or size",
                Value::Null,
            ))
        })
    }
}

/// Value classes a body field may require.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Non-empty string with an inclusive character-length range.
    Text {
        /// Minimum length in characters.
        min: usize,
        /// Maximum length in characters.
        max: usize,
    },
    /// Email address.
    Email,
    /// Integer `>= 1`.
    PositiveInt,
    /// Calendar date in `YYYY-MM-DD` form.
    IsoDate,
    /// One of the account roles.
    Role,
}

/// One declarative constraint on a body field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// JSON key in the payload.
    pub name: &'static str,
    /// Human-readable field label used in violation messages.
    pub label: &'static str,
    /// Whether the field must be present.
    pub required: bool,
    /// Value class the field must satisfy.
    pub kind: FieldKind,
}

impl FieldRule {
    /// Declare a rule.
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            required: true,
            kind,
        }
    }

    /// The same rule with presence made optional (update DTOs).
    pub const fn optional(self) -> Self {
        Self {
            name: self.name,
            label: self.label,
            required: false,
            kind: self.kind,
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

fn missing_message(rule: &FieldRule) -> String {
    match rule.kind {
        FieldKind::Email => "Email is required".to_owned(),
        FieldKind::Role => "Role is required".to_owned(),
        _ => format!("The {} cannot be empty", rule.label),
    }
}

fn check_value(rule: &FieldRule, value: &Value, errors: &mut Vec<String>) {
    match rule.kind {
        FieldKind::Text { min, max } => match value.as_str() {
            Some(text) if text.is_empty() => errors.push(missing_message(rule)),
            Some(text) => {
                let length = text.chars().count();
                if length < min || length > max {
                    errors.push(format!(
                        "The {} must be between {min} and {max} characters",
                        rule.label
                    ));
                }
            }
            None => errors.push(format!("The {} must be a string", rule.label)),
        },
        FieldKind::Email => match value.as_str() {
            Some(text) if is_email(text) => {}
            Some(_) => errors.push("Invalid email".to_owned()),
            None => errors.push("Email must be a string".to_owned()),
        },
        FieldKind::PositiveInt => match value.as_i64() {
            Some(number) if number >= 1 => {}
            Some(_) => errors.push(format!("The {} must be greater than 0", rule.label)),
            None => errors.push(format!("The {} must be a number", rule.label)),
        },
        FieldKind::IsoDate => {
            let parsed = value
                .as_str()
                .and_then(|text| NaiveDate::parse_from_str(text, "%Y-%m-%d").ok());
            if parsed.is_none() {
                errors.push(format!(
                    "The {} must be a date in YYYY-MM-DD format",
                    rule.label
                ));
            }
        }
        FieldKind::Role => match value.as_str() {
            Some("USER" | "ADMIN") => {}
            _ => errors.push("Invalid role".to_owned()),
        },
    }
}

fn validation_failed(errors: Vec<String>) -> Rejection {
    Rejection(ApiResponse::bad_request(
        "Validation failed",
        json!({ "errors": errors }),
    ))
}

/// Validate a JSON payload against a rule table, then deserialize it.
///
/// Unknown keys reject (whitelist); every violation across all rules is
/// collected into one `Validation failed` envelope.
pub fn validate_body<T: DeserializeOwned>(
    rules: &[FieldRule],
    body: &Value,
) -> Result<T, Rejection> {
    let Some(object) = body.as_object() else {
        return Err(validation_failed(vec![
            "The request body must be an object".to_owned(),
        ]));
    };

    let mut errors = Vec::new();
    for key in object.keys() {
        if !rules.iter().any(|rule| rule.name == key) {
            errors.push(format!("property {key} should not exist"));
        }
    }
    for rule in rules {
        match object.get(rule.name) {
            None | Some(Value::Null) => {
                if rule.required {
                    errors.push(missing_message(rule));
                }
            }
            Some(value) => check_value(rule, value, &mut errors),
        }
    }
    if !errors.is_empty() {
        return Err(validation_failed(errors));
    }

    serde_json::from_value(body.clone())
        .map_err(|_| validation_failed(vec!["Invalid request body".to_owned()]))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::models::NewResearcher;

    const RULES: &[FieldRule] = &[
        FieldRule::new("name", "name", FieldKind::Text { min: 3, max: 64 }),
        FieldRule::new(
            "surname",
            "surname",
            FieldKind::Text { min: 3, max: 64 },
        ),
        FieldRule::new(
            "secSurname",
            "second surname",
            FieldKind::Text { min: 3, max: 64 },
        ),
        FieldRule::new(
            "university",
            "university",
            FieldKind::Text { min: 3, max: 64 },
        ),
    ];

    #[rstest]
    #[case("1", Some(1))]
    #[case("42", Some(42))]
    #[case("0", None)]
    #[case("-3", None)]
    #[case("1.5", None)]
    #[case("abc", None)]
    #[case("", None)]
    fn parse_id_accepts_positive_integers_only(#[case] raw: &str, #[case] expected: Option<i64>) {
        match (parse_id(raw), expected) {
            (Ok(id), Some(want)) => assert_eq!(id, want),
            (Err(rejection), None) => {
                assert_eq!(rejection.0.status, 400);
                assert_eq!(rejection.0.message, "Invalid ID");
                assert_eq!(rejection.0.data, json!({ "errors": ["Invalid ID"] }));
            }
            (got, want) => panic!("raw {raw:?}: got {got:?}, wanted {want:?}"),
        }
    }

    #[test]
    fn page_query_rejects_bad_values_with_null_data() {
        let query = PageQuery {
            page: Some("0".into()),
            size: None,
        };
        let rejection = query.parse().expect_err("zero page rejects");
        assert_eq!(rejection.0.message, "Invalid page or size");
        assert_eq!(rejection.0.data, Value::Null);
    }

    #[test]
    fn valid_body_deserializes() {
        let body = json!({
            "name": "Ana",
            "surname": "Ruiz",
            "secSurname": "Soto",
            "university": "UGR"
        });
        let dto: NewResearcher = validate_body(RULES, &body).expect("valid body");
        assert_eq!(dto.sec_surname, "Soto");
    }

    #[test]
    fn violations_accumulate_in_one_envelope() {
        let body = json!({
            "name": "Al",
            "surname": 7,
            "university": "UGR",
            "extra": true
        });
        let rejection =
            validate_body::<NewResearcher>(RULES, &body).expect_err("invalid body rejects");
        assert_eq!(rejection.0.message, "Validation failed");
        let errors = rejection.0.data["errors"]
            .as_array()
            .expect("errors list")
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect::<Vec<_>>();
        assert!(errors.contains(&"property extra should not exist".to_owned()));
        assert!(errors.contains(&"The name must be between 3 and 64 characters".to_owned()));
        assert!(errors.contains(&"The surname must be a string".to_owned()));
        assert!(errors.contains(&"The second surname cannot be empty".to_owned()));
    }

    #[test]
    fn non_object_body_rejects() {
        let rejection =
            validate_body::<NewResearcher>(RULES, &json!([1, 2])).expect_err("array rejects");
        assert_eq!(rejection.0.message, "Validation failed");
    }

    #[rstest]
    #[case("a@b.es", true)]
    #[case("first.last@sub.domain.org", true)]
    #[case("not-an-email", false)]
    #[case("@b.es", false)]
    #[case("a@nodot", false)]
    #[case("a@b..c", false)]
    #[case("a@.b.c", false)]
    #[case("a@b.c.", false)]
    #[case("a b@c.es", false)]
    fn email_shapes(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(is_email(value), ok);
    }
}
