//! In-memory persistence adapter.
//!
//! One `RwLock`-guarded table set backs every store port. Tables are
//! `BTreeMap`s keyed by id so listings come back in insertion-id order,
//! matching what a sequential primary key would produce.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::ports::{
    AccountStore, ArticleStore, AuthorStore, ConferenceStore, EditionStore, ResearcherField,
    ResearcherStore, StoreError,
};
use crate::models::{
    Account, Article, ArticleDetail, ArticlePatch, Author, AuthorPatch, AuthorshipDetail,
    Conference, ConferenceEditions, ConferencePatch, Edition, EditionDetail, EditionPatch,
    NewArticle, NewAuthor, NewEdition, NewResearcher, Researcher, ResearcherArticles,
    ResearcherPatch, Role,
};

#[derive(Default)]
struct Tables {
    researchers: BTreeMap<i64, Researcher>,
    conferences: BTreeMap<i64, Conference>,
    editions: BTreeMap<i64, Edition>,
    articles: BTreeMap<i64, Article>,
    authors: BTreeMap<i64, Author>,
    accounts: Vec<Account>,
    researcher_seq: i64,
    edition_seq: i64,
    article_seq: i64,
    author_seq: i64,
}

/// Shared in-memory store implementing every persistence port.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Build an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables
            .read()
            .map_err(|_| StoreError::unknown("store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables
            .write()
            .map_err(|_| StoreError::unknown("store lock poisoned"))
    }
}

fn paginate<T>(items: Vec<T>, page: PageRequest) -> Vec<T> {
    let skip = usize::try_from(page.skip()).unwrap_or(usize::MAX);
    let take = usize::try_from(page.take()).unwrap_or(usize::MAX);
    items.into_iter().skip(skip).take(take).collect()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl ResearcherStore for MemoryStore {
    async fn insert(&self, new: NewResearcher) -> Result<Researcher, StoreError> {
        let mut tables = self.write()?;
        tables.researcher_seq += 1;
        let record = Researcher {
            id: tables.researcher_seq,
            name: new.name,
            surname: new.surname,
            sec_surname: new.sec_surname,
            university: new.university,
        };
        tables.researchers.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Researcher>, StoreError> {
        Ok(self.read()?.researchers.get(&id).cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Researcher>, StoreError> {
        let records = self.read()?.researchers.values().cloned().collect();
        Ok(paginate(records, page))
    }

    async fn search(
        &self,
        field: ResearcherField,
        needle: &str,
        page: PageRequest,
    ) -> Result<Vec<Researcher>, StoreError> {
        let records = self
            .read()?
            .researchers
            .values()
            .filter(|r| {
                let column = match field {
                    ResearcherField::Name => &r.name,
                    ResearcherField::Surname => &r.surname,
                    ResearcherField::SecSurname => &r.sec_surname,
                    ResearcherField::University => &r.university,
                };
                contains_ci(column, needle)
            })
            .cloned()
            .collect();
        Ok(paginate(records, page))
    }

    async fn find_with_articles(
        &self,
        name: &str,
        surname: &str,
        sec_surname: &str,
    ) -> Result<Option<ResearcherArticles>, StoreError> {
        let tables = self.read()?;
        let Some(researcher) = tables
            .researchers
            .values()
            .find(|r| r.name == name && r.surname == surname && r.sec_surname == sec_surname)
            .cloned()
        else {
            return Ok(None);
        };
        let authors = tables
            .authors
            .values()
            .filter(|a| a.ref_researcher == researcher.id)
            .map(|author| {
                let article = tables.articles.get(&author.ref_article).map(|article| {
                    let edition = tables.editions.get(&article.ref_edition).map(|edition| {
                        EditionDetail {
                            edition: edition.clone(),
                            conference: tables.conferences.get(&edition.ref_conference).cloned(),
                        }
                    });
                    ArticleDetail {
                        article: article.clone(),
                        edition,
                    }
                });
                AuthorshipDetail {
                    author: author.clone(),
                    article,
                }
            })
            .collect();
        Ok(Some(ResearcherArticles {
            researcher,
            authors,
        }))
    }

    async fn update(&self, id: i64, patch: ResearcherPatch) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        if let Some(record) = tables.researchers.get_mut(&id) {
            if let Some(name) = patch.name {
                record.name = name;
            }
            if let Some(surname) = patch.surname {
                record.surname = surname;
            }
            if let Some(sec_surname) = patch.sec_surname {
                record.sec_surname = sec_surname;
            }
            if let Some(university) = patch.university {
                record.university = university;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        Ok(u64::from(self.write()?.researchers.remove(&id).is_some()))
    }
}

#[async_trait]
impl ConferenceStore for MemoryStore {
    async fn insert(&self, new: Conference) -> Result<Conference, StoreError> {
        let mut tables = self.write()?;
        if tables.conferences.contains_key(&new.id) {
            return Err(StoreError::query_failed("duplicate conference id"));
        }
        tables.conferences.insert(new.id, new.clone());
        Ok(new)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Conference>, StoreError> {
        Ok(self.read()?.conferences.get(&id).cloned())
    }

    async fn find_and_count(
        &self,
        page: PageRequest,
    ) -> Result<(Vec<Conference>, u64), StoreError> {
        let tables = self.read()?;
        let total = tables.conferences.len() as u64;
        let records = tables.conferences.values().cloned().collect();
        Ok((paginate(records, page), total))
    }

    async fn find_with_editions(
        &self,
        id: i64,
    ) -> Result<Option<ConferenceEditions>, StoreError> {
        let tables = self.read()?;
        let Some(conference) = tables.conferences.get(&id).cloned() else {
            return Ok(None);
        };
        let editions = tables
            .editions
            .values()
            .filter(|e| e.ref_conference == id)
            .cloned()
            .collect();
        Ok(Some(ConferenceEditions {
            conference,
            editions,
        }))
    }

    async fn update(&self, id: i64, patch: ConferencePatch) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        if let Some(record) = tables.conferences.get_mut(&id)
            && let Some(name) = patch.name
        {
            record.name = name;
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        Ok(u64::from(self.write()?.conferences.remove(&id).is_some()))
    }
}

#[async_trait]
impl EditionStore for MemoryStore {
    async fn insert(&self, new: NewEdition) -> Result<Edition, StoreError> {
        let mut tables = self.write()?;
        tables.edition_seq += 1;
        let record = Edition {
            id: tables.edition_seq,
            year: new.year,
            date: new.date,
            city: new.city,
            ref_conference: new.ref_conference,
        };
        tables.editions.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Edition>, StoreError> {
        Ok(self.read()?.editions.get(&id).cloned())
    }

    async fn find_and_count(&self, page: PageRequest) -> Result<(Vec<Edition>, u64), StoreError> {
        let tables = self.read()?;
        let total = tables.editions.len() as u64;
        let records = tables.editions.values().cloned().collect();
        Ok((paginate(records, page), total))
    }

    async fn update(&self, id: i64, patch: EditionPatch) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        if let Some(record) = tables.editions.get_mut(&id) {
            if let Some(year) = patch.year {
                record.year = year;
            }
            if let Some(date) = patch.date {
                record.date = date;
            }
            if let Some(city) = patch.city {
                record.city = city;
            }
            if let Some(ref_conference) = patch.ref_conference {
                record.ref_conference = ref_conference;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        Ok(u64::from(self.write()?.editions.remove(&id).is_some()))
    }
}

#[async_trait]
impl ArticleStore for MemoryStore {
    async fn insert(&self, new: NewArticle) -> Result<Article, StoreError> {
        let mut tables = self.write()?;
        tables.article_seq += 1;
        let record = Article {
            id: tables.article_seq,
            title: new.title,
            ref_edition: new.ref_edition,
        };
        tables.articles.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, StoreError> {
        Ok(self.read()?.articles.get(&id).cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Article>, StoreError> {
        let records = self.read()?.articles.values().cloned().collect();
        Ok(paginate(records, page))
    }

    async fn update(&self, id: i64, patch: ArticlePatch) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        if let Some(record) = tables.articles.get_mut(&id) {
            if let Some(title) = patch.title {
                record.title = title;
            }
            if let Some(ref_edition) = patch.ref_edition {
                record.ref_edition = ref_edition;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        Ok(u64::from(self.write()?.articles.remove(&id).is_some()))
    }
}

#[async_trait]
impl AuthorStore for MemoryStore {
    async fn insert(&self, new: NewAuthor) -> Result<Author, StoreError> {
        let mut tables = self.write()?;
        tables.author_seq += 1;
        let record = Author {
            id: tables.author_seq,
            ref_article: new.ref_article,
            ref_researcher: new.ref_researcher,
        };
        tables.authors.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, StoreError> {
        Ok(self.read()?.authors.get(&id).cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Author>, StoreError> {
        let records = self.read()?.authors.values().cloned().collect();
        Ok(paginate(records, page))
    }

    async fn list_by_researcher(
        &self,
        researcher_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Author>, StoreError> {
        let records = self
            .read()?
            .authors
            .values()
            .filter(|a| a.ref_researcher == researcher_id)
            .cloned()
            .collect();
        Ok(paginate(records, page))
    }

    async fn list_by_article(
        &self,
        article_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Author>, StoreError> {
        let records = self
            .read()?
            .authors
            .values()
            .filter(|a| a.ref_article == article_id)
            .cloned()
            .collect();
        Ok(paginate(records, page))
    }

    async fn update(&self, id: i64, patch: AuthorPatch) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        if let Some(record) = tables.authors.get_mut(&id) {
            if let Some(ref_article) = patch.ref_article {
                record.ref_article = ref_article;
            }
            if let Some(ref_researcher) = patch.ref_researcher {
                record.ref_researcher = ref_researcher;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        Ok(u64::from(self.write()?.authors.remove(&id).is_some()))
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn find_by_username_and_role(
        &self,
        username: &str,
        role: Role,
    ) -> Result<Option<Account>, StoreError> {
        Ok(self
            .read()?
            .accounts
            .iter()
            .find(|a| a.username == username && a.role == role)
            .cloned())
    }

    async fn insert(&self, account: Account) -> Result<(), StoreError> {
        self.write()?.accounts.push(account);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;

    fn researcher(name: &str, surname: &str, university: &str) -> NewResearcher {
        NewResearcher {
            name: name.into(),
            surname: surname.into(),
            sec_surname: "Soto".into(),
            university: university.into(),
        }
    }

    #[actix_rt::test]
    async fn researcher_ids_are_monotonic() {
        let store = MemoryStore::new();
        let first = ResearcherStore::insert(&store, researcher("Ana", "Ruiz", "UGR"))
            .await
            .expect("insert");
        let second = ResearcherStore::insert(&store, researcher("Luis", "Mora", "UPM"))
            .await
            .expect("insert");
        assert_eq!((first.id, second.id), (1, 2));
    }

    #[rstest]
    #[case(ResearcherField::Name, "an", 1)]
    #[case(ResearcherField::Surname, "RUIZ", 1)]
    #[case(ResearcherField::University, "u", 2)]
    #[case(ResearcherField::Name, "zzz", 0)]
    #[actix_rt::test]
    async fn search_is_case_insensitive_substring(
        #[case] field: ResearcherField,
        #[case] needle: &str,
        #[case] hits: usize,
    ) {
        let store = MemoryStore::new();
        ResearcherStore::insert(&store, researcher("Ana", "Ruiz", "UGR"))
            .await
            .expect("insert");
        ResearcherStore::insert(&store, researcher("Luis", "Mora", "UPM"))
            .await
            .expect("insert");
        let found = store
            .search(field, needle, PageRequest::default())
            .await
            .expect("search");
        assert_eq!(found.len(), hits);
    }

    #[actix_rt::test]
    async fn duplicate_conference_id_is_a_query_failure() {
        let store = MemoryStore::new();
        let conference = Conference {
            id: 7,
            name: "ICSE".into(),
        };
        ConferenceStore::insert(&store, conference.clone())
            .await
            .expect("insert");
        let duplicate = ConferenceStore::insert(&store, conference).await;
        assert!(matches!(duplicate, Err(StoreError::QueryFailed { .. })));
    }

    #[actix_rt::test]
    async fn delete_reports_affected_rows() {
        let store = MemoryStore::new();
        let record = ResearcherStore::insert(&store, researcher("Ana", "Ruiz", "UGR"))
            .await
            .expect("insert");
        assert_eq!(
            ResearcherStore::delete(&store, record.id).await.expect("delete"),
            1
        );
        assert_eq!(
            ResearcherStore::delete(&store, record.id).await.expect("delete"),
            0
        );
    }

    #[actix_rt::test]
    async fn find_with_articles_expands_the_full_chain() {
        let store = MemoryStore::new();
        ConferenceStore::insert(
            &store,
            Conference {
                id: 1,
                name: "ICSE".into(),
            },
        )
        .await
        .expect("conference");
        let edition = EditionStore::insert(
            &store,
            NewEdition {
                year: 2024,
                date: NaiveDate::from_ymd_opt(2024, 4, 14).expect("valid date"),
                city: "Lisboa".into(),
                ref_conference: 1,
            },
        )
        .await
        .expect("edition");
        let article = ArticleStore::insert(
            &store,
            NewArticle {
                title: "On Testing".into(),
                ref_edition: edition.id,
            },
        )
        .await
        .expect("article");
        let who = ResearcherStore::insert(&store, researcher("Ana", "Ruiz", "UGR"))
            .await
            .expect("researcher");
        AuthorStore::insert(
            &store,
            NewAuthor {
                ref_article: article.id,
                ref_researcher: who.id,
            },
        )
        .await
        .expect("author");

        let view = store
            .find_with_articles("Ana", "Ruiz", "Soto")
            .await
            .expect("query")
            .expect("researcher exists");
        assert_eq!(view.authors.len(), 1);
        let chain = &view.authors[0];
        let article = chain.article.as_ref().expect("article linked");
        let edition = article.edition.as_ref().expect("edition linked");
        let conference = edition.conference.as_ref().expect("conference linked");
        assert_eq!(conference.name, "ICSE");
    }

    #[actix_rt::test]
    async fn pagination_slices_listings() {
        let store = MemoryStore::new();
        for i in 0..15 {
            ResearcherStore::insert(&store, researcher(&format!("Name{i}"), "Ruiz", "UGR"))
                .await
                .expect("insert");
        }
        let page = PageRequest::new(2, 10).expect("valid page");
        let second = ResearcherStore::list(&store, page).await.expect("list");
        assert_eq!(second.len(), 5);
        assert_eq!(second[0].id, 11);
    }
}
