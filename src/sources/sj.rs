use std::sync::Arc;

use anyhow::Result;
use chrono::DateTime;
use log::warn;
use serde::Deserialize;
use serde_this_or_that::as_u64;

use super::{FetchedVacancy, SOURCE_SJ};
use crate::config::Config;

const SJ_VACANCIES_API_URL: &str = "https://api.superjob.ru/2.0/vacancies/";

#[derive(Debug, Deserialize)]
struct SjSearchResponse {
    objects: Vec<SjItem>,
    more: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct SjItem {
    id: u64,
    profession: Option<String>,
    link: Option<String>,
    // SuperJob sends payments as numbers or numeric strings, 0 meaning unset
    #[serde(default, deserialize_with = "as_u64")]
    payment_from: u64,
    #[serde(default, deserialize_with = "as_u64")]
    payment_to: u64,
    currency: Option<String>,
    candidat: Option<String>,
    work: Option<String>,
    firm_name: Option<String>,
    client: Option<SjClient>,
    town: Option<SjTown>,
    date_published: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct SjClient {
    id: Option<u64>,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SjTown {
    title: Option<String>,
}

pub struct SuperJobClient {
    config: Arc<Config>,
}

impl SuperJobClient {
    pub fn new(config: Arc<Config>) -> SuperJobClient {
        SuperJobClient { config }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<FetchedVacancy>> {
        let client = reqwest::Client::new();
        let mut vacancies: Vec<FetchedVacancy> = Vec::new();

        for page in 0..self.config.max_pages {
            let response = client
                .get(SJ_VACANCIES_API_URL)
                .header("X-Api-App-Id", &self.config.sj_api_key)
                .query(&[
                    ("keyword", query),
                    ("page", &page.to_string()),
                    ("count", &self.config.per_page.to_string()),
                ])
                .send()
                .await?;

            let parsed: SjSearchResponse = response.json().await?;
            let has_more = parsed.more.unwrap_or(false);

            if parsed.objects.is_empty() {
                break;
            }

            for item in parsed.objects {
                match item_into_vacancy(item) {
                    Some(vacancy) => vacancies.push(vacancy),
                    None => continue,
                }
            }

            if !has_more {
                break;
            }
        }

        Ok(vacancies)
    }
}

fn item_into_vacancy(item: SjItem) -> Option<FetchedVacancy> {
    let title = match item.profession {
        Some(profession) if !profession.is_empty() => profession,
        _ => {
            warn!("skipping sj vacancy {} without a profession", item.id);
            return None;
        }
    };

    let salary_from = payment_to_option(item.payment_from);
    let salary_to = payment_to_option(item.payment_to);

    // client.title is the canonical employer name, firm_name the fallback
    let (employer_id, employer_name) = match item.client {
        Some(client) => (
            client.id.map(|id| id.to_string()),
            client.title.or(item.firm_name),
        ),
        None => (None, item.firm_name),
    };

    Some(FetchedVacancy {
        vacancy_id: format!("sj-{}", item.id),
        title,
        url: item.link,
        salary_from,
        salary_to,
        salary_currency: item.currency.map(|c| c.to_uppercase()),
        description: item.work,
        requirements: item.candidat,
        area: item.town.and_then(|t| t.title),
        source: SOURCE_SJ.to_string(),
        employer_id,
        employer_name,
        published_at: item.date_published.and_then(|ts| {
            DateTime::from_timestamp(ts, 0).map(|dt| dt.naive_utc())
        }),
    })
}

fn payment_to_option(payment: u64) -> Option<i32> {
    if payment == 0 {
        None
    } else {
        i32::try_from(payment).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::payment_to_option;

    #[test]
    fn zero_payment_means_unset() {
        assert_eq!(payment_to_option(0), None);
        assert_eq!(payment_to_option(150_000), Some(150_000));
    }

    #[test]
    fn oversized_payment_is_dropped() {
        assert_eq!(payment_to_option(u64::MAX), None);
    }
}
