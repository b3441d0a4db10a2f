pub mod hh;
pub mod sj;

use std::sync::Arc;

use chrono::NaiveDateTime;
use log::{error, info};

use crate::config::Config;
use crate::models::vacancy::InsertableVacancy;

pub const SOURCE_HH: &str = "hh.ru";
pub const SOURCE_SJ: &str = "superjob.ru";

/// A vacancy as it comes back from a job board, before filtering,
/// deduplication and storage. `vacancy_id` is already source-qualified.
#[derive(Debug, Clone)]
pub struct FetchedVacancy {
    pub vacancy_id: String,
    pub title: String,
    pub url: Option<String>,
    pub salary_from: Option<i32>,
    pub salary_to: Option<i32>,
    pub salary_currency: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub area: Option<String>,
    pub source: String,
    pub employer_id: Option<String>,
    pub employer_name: Option<String>,
    pub published_at: Option<NaiveDateTime>,
}

impl FetchedVacancy {
    pub fn into_insertable(
        self,
        company_id: Option<i32>,
        search_query: &str,
    ) -> InsertableVacancy {
        InsertableVacancy {
            vacancy_id: self.vacancy_id,
            title: self.title,
            url: self.url,
            salary_from: self.salary_from,
            salary_to: self.salary_to,
            salary_currency: self.salary_currency,
            description: self.description,
            requirements: self.requirements,
            area: self.area,
            source: Some(self.source),
            published_at: self.published_at,
            company_id,
            search_query: Some(search_query.to_string()),
        }
    }
}

/// Queries both boards concurrently. A board that fails contributes nothing;
/// HeadHunter results come first in the combined batch.
pub async fn search_all(config: &Arc<Config>, query: &str) -> Vec<FetchedVacancy> {
    let hh_client = hh::HeadHunterClient::new(config.clone());
    let sj_client = sj::SuperJobClient::new(config.clone());

    let (hh_results, sj_results) = tokio::join!(hh_client.search(query), sj_client.search(query));

    let mut combined = match hh_results {
        Ok(v) => v,
        Err(e) => {
            error!("HeadHunter search failed: {:?}", e);
            Vec::new()
        }
    };

    match sj_results {
        Ok(v) => combined.extend(v),
        Err(e) => error!("SuperJob search failed: {:?}", e),
    }

    info!("fetched {} vacancies for '{}'", combined.len(), query);
    combined
}
