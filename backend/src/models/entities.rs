//! Persistence records and the nested views returned by relational fetches.
//!
//! Field names mirror the wire contract: `secSurname` stays camel-cased,
//! foreign keys keep their `ref_` prefix.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Account role carried in credentials and tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Regular API consumer.
    #[serde(rename = "USER")]
    User,
    /// Administrative consumer.
    #[serde(rename = "ADMIN")]
    Admin,
}

/// A researcher record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Researcher {
    /// Store-assigned identifier.
    pub id: i64,
    /// Given name.
    pub name: String,
    /// First surname.
    pub surname: String,
    /// Second surname.
    #[serde(rename = "secSurname")]
    pub sec_surname: String,
    /// Affiliation.
    pub university: String,
}

/// Fields accepted when creating a researcher.
#[derive(Debug, Clone, Deserialize)]
pub struct NewResearcher {
    /// Given name.
    pub name: String,
    /// First surname.
    pub surname: String,
    /// Second surname.
    #[serde(rename = "secSurname")]
    pub sec_surname: String,
    /// Affiliation.
    pub university: String,
}

/// Partial update for a researcher; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResearcherPatch {
    /// Replacement given name.
    pub name: Option<String>,
    /// Replacement first surname.
    pub surname: Option<String>,
    /// Replacement second surname.
    #[serde(rename = "secSurname")]
    pub sec_surname: Option<String>,
    /// Replacement affiliation.
    pub university: Option<String>,
}

/// A conference record. Conference ids are client-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    /// Client-assigned identifier.
    pub id: i64,
    /// Conference name.
    pub name: String,
}

/// Partial update for a conference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConferencePatch {
    /// Replacement name.
    pub name: Option<String>,
}

/// A conference edition (one instance of a conference in a given year).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    /// Store-assigned identifier.
    pub id: i64,
    /// Edition year.
    pub year: i32,
    /// Date the edition takes place.
    pub date: NaiveDate,
    /// Host city.
    pub city: String,
    /// Owning conference id.
    pub ref_conference: i64,
}

/// Fields accepted when creating an edition.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEdition {
    /// Edition year.
    pub year: i32,
    /// Date the edition takes place.
    pub date: NaiveDate,
    /// Host city.
    pub city: String,
    /// Owning conference id.
    pub ref_conference: i64,
}

/// Partial update for an edition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditionPatch {
    /// Replacement year.
    pub year: Option<i32>,
    /// Replacement date.
    pub date: Option<NaiveDate>,
    /// Replacement host city.
    pub city: Option<String>,
    /// Replacement owning conference id.
    pub ref_conference: Option<i64>,
}

/// An article presented at an edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Store-assigned identifier.
    pub id: i64,
    /// Article title.
    pub title: String,
    /// Edition the article was presented at.
    pub ref_edition: i64,
}

/// Fields accepted when creating an article.
#[derive(Debug, Clone, Deserialize)]
pub struct NewArticle {
    /// Article title.
    pub title: String,
    /// Edition the article was presented at.
    pub ref_edition: i64,
}

/// Partial update for an article.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticlePatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement edition reference.
    pub ref_edition: Option<i64>,
}

/// Authorship link relating a researcher to an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Store-assigned identifier.
    pub id: i64,
    /// Linked article.
    pub ref_article: i64,
    /// Linked researcher.
    pub ref_researcher: i64,
}

/// Fields accepted when creating an authorship link.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAuthor {
    /// Linked article.
    pub ref_article: i64,
    /// Linked researcher.
    pub ref_researcher: i64,
}

/// Partial update for an authorship link.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorPatch {
    /// Replacement article reference.
    pub ref_article: Option<i64>,
    /// Replacement researcher reference.
    pub ref_researcher: Option<i64>,
}

/// Stored credential record. `password` holds the bcrypt digest, never the
/// raw secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Principal (the login email).
    pub username: String,
    /// One-way digest of the secret.
    pub password: String,
    /// Account role.
    pub role: Role,
}

/// A conference together with its editions, fetched in one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceEditions {
    /// The root conference.
    #[serde(flatten)]
    pub conference: Conference,
    /// Its editions.
    pub editions: Vec<Edition>,
}

/// A researcher with the full authorship chain down to the conference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearcherArticles {
    /// The root researcher.
    #[serde(flatten)]
    pub researcher: Researcher,
    /// Authorship links, each expanded with its article chain.
    pub authors: Vec<AuthorshipDetail>,
}

/// One authorship link expanded with its article chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorshipDetail {
    /// The link itself.
    #[serde(flatten)]
    pub author: Author,
    /// Referenced article, when still present.
    pub article: Option<ArticleDetail>,
}

/// An article expanded with its edition chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDetail {
    /// The article itself.
    #[serde(flatten)]
    pub article: Article,
    /// Referenced edition, when still present.
    pub edition: Option<EditionDetail>,
}

/// An edition expanded with its conference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionDetail {
    /// The edition itself.
    #[serde(flatten)]
    pub edition: Edition,
    /// Owning conference, when still present.
    pub conference: Option<Conference>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn researcher_uses_camel_cased_second_surname() {
        let researcher = Researcher {
            id: 1,
            name: "Ada".into(),
            surname: "Lovelace".into(),
            sec_surname: "Byron".into(),
            university: "London".into(),
        };
        let value = serde_json::to_value(&researcher).expect("serializes");
        assert_eq!(value.get("secSurname"), Some(&json!("Byron")));
        assert!(value.get("sec_surname").is_none());
    }

    #[test]
    fn role_round_trips_wire_spelling() {
        assert_eq!(
            serde_json::to_value(Role::Admin).expect("serializes"),
            json!("ADMIN")
        );
        let role: Role = serde_json::from_value(json!("USER")).expect("deserializes");
        assert_eq!(role, Role::User);
    }

    #[test]
    fn nested_views_flatten_the_root_record() {
        let view = ConferenceEditions {
            conference: Conference {
                id: 1,
                name: "ICSE".into(),
            },
            editions: vec![],
        };
        let value = serde_json::to_value(&view).expect("serializes");
        assert_eq!(value.get("id"), Some(&json!(1)));
        assert_eq!(value.get("name"), Some(&json!("ICSE")));
        assert_eq!(value.get("editions"), Some(&json!([])));
    }
}
