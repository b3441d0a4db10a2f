use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, NaiveDateTime};
use log::warn;
use serde::Deserialize;

use super::{FetchedVacancy, SOURCE_HH};
use crate::config::Config;

const HH_VACANCIES_API_URL: &str = "https://api.hh.ru/vacancies";

#[derive(Debug, Deserialize)]
struct HhSearchResponse {
    items: Vec<HhItem>,
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct HhItem {
    id: String,
    name: Option<String>,
    alternate_url: Option<String>,
    salary: Option<HhSalary>,
    snippet: Option<HhSnippet>,
    employer: Option<HhEmployer>,
    area: Option<HhArea>,
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HhSalary {
    from: Option<i32>,
    to: Option<i32>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HhSnippet {
    requirement: Option<String>,
    responsibility: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HhEmployer {
    id: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HhArea {
    name: Option<String>,
}

pub struct HeadHunterClient {
    config: Arc<Config>,
}

impl HeadHunterClient {
    pub fn new(config: Arc<Config>) -> HeadHunterClient {
        HeadHunterClient { config }
    }

    /// Paginates through the text search until the board reports no more
    /// pages or the configured page cap is reached.
    pub async fn search(&self, query: &str) -> Result<Vec<FetchedVacancy>> {
        let client = reqwest::Client::new();
        let mut vacancies: Vec<FetchedVacancy> = Vec::new();

        for page in 0..self.config.max_pages {
            let response = client
                .get(HH_VACANCIES_API_URL)
                .query(&[
                    ("text", query.to_lowercase().as_str()),
                    ("page", &page.to_string()),
                    ("per_page", &self.config.per_page.to_string()),
                ])
                .send()
                .await?;

            let parsed: HhSearchResponse = response.json().await?;
            let total_pages = parsed.pages;

            if parsed.items.is_empty() {
                break;
            }

            for item in parsed.items {
                match item_into_vacancy(item) {
                    Some(vacancy) => vacancies.push(vacancy),
                    None => continue,
                }
            }

            if page + 1 >= total_pages {
                break;
            }
        }

        Ok(vacancies)
    }
}

fn item_into_vacancy(item: HhItem) -> Option<FetchedVacancy> {
    // The board occasionally returns stubs without the mandatory fields
    let title = match item.name {
        Some(name) if !name.is_empty() => name,
        _ => {
            warn!("skipping hh vacancy {} without a title", item.id);
            return None;
        }
    };
    let url = match item.alternate_url {
        Some(url) if !url.is_empty() => url,
        _ => {
            warn!("skipping hh vacancy {} without a url", item.id);
            return None;
        }
    };

    let (salary_from, salary_to, salary_currency) = match item.salary {
        Some(salary) => (
            salary.from,
            salary.to,
            salary.currency.map(|c| c.to_uppercase()),
        ),
        None => (None, None, None),
    };

    let (requirements, description) = match item.snippet {
        Some(snippet) => {
            let description = match (&snippet.requirement, &snippet.responsibility) {
                (Some(req), Some(resp)) => Some(format!("{req} {resp}")),
                (Some(req), None) => Some(req.clone()),
                (None, Some(resp)) => Some(resp.clone()),
                (None, None) => None,
            };
            (snippet.requirement, description)
        }
        None => (None, None),
    };

    let (employer_id, employer_name) = match item.employer {
        Some(employer) => (employer.id, employer.name),
        None => (None, None),
    };

    Some(FetchedVacancy {
        vacancy_id: format!("hh-{}", item.id),
        title,
        url: Some(url),
        salary_from,
        salary_to,
        salary_currency,
        description,
        requirements,
        area: item.area.and_then(|a| a.name),
        source: SOURCE_HH.to_string(),
        employer_id,
        employer_name,
        published_at: item.published_at.as_deref().and_then(parse_published_at),
    })
}

// HH timestamps look like "2024-02-20T16:48:00+0300"
fn parse_published_at(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
        .map(|dt| dt.naive_utc())
        .ok()
}

#[cfg(test)]
mod tests {
    use super::parse_published_at;

    #[test]
    fn parses_hh_timestamp() {
        let parsed = parse_published_at("2024-02-20T16:48:00+0300");
        assert!(parsed.is_some());
        assert_eq!(
            parsed.unwrap().format("%Y-%m-%d %H:%M").to_string(),
            "2024-02-20 13:48"
        );
    }

    #[test]
    fn rejects_garbage_timestamp() {
        assert!(parse_published_at("yesterday").is_none());
    }
}
