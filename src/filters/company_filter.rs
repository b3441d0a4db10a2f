use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::Result;
use diesel::prelude::*;
use diesel::sql_types::Text;
use log::{error, info, warn};

use crate::config::Config;
use crate::db::establish_connection;
use crate::sources::FetchedVacancy;
use crate::targets::{TARGET_HH_IDS, TARGET_SJ_IDS};

diesel::table! {
    temp_company_filter (vacancy_id) {
        vacancy_id -> Varchar,
        employer_id -> Nullable<Varchar>,
        source -> Varchar,
        original_index -> Int4,
    }
}

const CREATE_TEMP_TABLE_SQL: &str = "CREATE TEMP TABLE temp_company_filter ( \
     vacancy_id VARCHAR(255) PRIMARY KEY, \
     employer_id VARCHAR(50), \
     source VARCHAR(50), \
     original_index INTEGER \
 )";

#[derive(Insertable)]
#[diesel(table_name = temp_company_filter)]
struct FilterRow {
    vacancy_id: String,
    employer_id: Option<String>,
    source: String,
    original_index: i32,
}

#[derive(QueryableByName)]
struct VacancyIdRow {
    #[diesel(sql_type = Text)]
    vacancy_id: String,
}

/// Keeps only vacancies whose employer id belongs to a target company on the
/// matching board. Vacancies without an employer id are dropped, input order
/// is preserved. Fail-closed: any SQL error yields an empty batch.
pub fn filter_by_company_ids(
    config: &Arc<Config>,
    vacancies: Vec<FetchedVacancy>,
) -> Vec<FetchedVacancy> {
    if vacancies.is_empty() {
        return Vec::new();
    }

    let total = vacancies.len();

    match run_filter_query(config, &vacancies) {
        Ok(kept_ids) => {
            let filtered = rebuild_in_order(vacancies, &kept_ids);
            info!(
                "company id filter: {} -> {} vacancies",
                total,
                filtered.len()
            );
            filtered
        }
        Err(e) => {
            error!("company id filter failed: {:?}", e);
            Vec::new()
        }
    }
}

fn run_filter_query(
    config: &Arc<Config>,
    vacancies: &[FetchedVacancy],
) -> Result<Vec<String>> {
    let hh_ids = quoted_id_list(&TARGET_HH_IDS);
    let sj_ids = quoted_id_list(&TARGET_SJ_IDS);

    if hh_ids.is_empty() && sj_ids.is_empty() {
        warn!("no target company ids configured, dropping all vacancies");
        return Ok(Vec::new());
    }

    let mut connection = establish_connection(config)?;

    diesel::sql_query(CREATE_TEMP_TABLE_SQL).execute(&mut connection)?;

    let rows: Vec<FilterRow> = vacancies
        .iter()
        .enumerate()
        .map(|(index, vacancy)| FilterRow {
            vacancy_id: vacancy.vacancy_id.clone(),
            employer_id: vacancy.employer_id.clone(),
            source: vacancy.source.to_lowercase(),
            original_index: index as i32,
        })
        .collect();

    diesel::insert_into(temp_company_filter::table)
        .values(&rows)
        .execute(&mut connection)?;

    let mut branches: Vec<String> = Vec::new();
    if !hh_ids.is_empty() {
        branches.push(format!(
            "(source LIKE '%hh%' AND employer_id IN ({hh_ids}))"
        ));
    }
    if !sj_ids.is_empty() {
        branches.push(format!(
            "((source LIKE '%sj%' OR source LIKE '%superjob%') AND employer_id IN ({sj_ids}))"
        ));
    }

    // A source that names neither board is checked against every target set
    let unknown_source =
        "source NOT LIKE '%hh%' AND source NOT LIKE '%sj%' AND source NOT LIKE '%superjob%'";
    match (hh_ids.is_empty(), sj_ids.is_empty()) {
        (false, false) => branches.push(format!(
            "({unknown_source} AND (employer_id IN ({hh_ids}) OR employer_id IN ({sj_ids})))"
        )),
        (false, true) => branches.push(format!(
            "({unknown_source} AND employer_id IN ({hh_ids}))"
        )),
        (true, false) => branches.push(format!(
            "({unknown_source} AND employer_id IN ({sj_ids}))"
        )),
        (true, true) => {}
    }

    let query = format!(
        "SELECT vacancy_id \
         FROM temp_company_filter \
         WHERE employer_id IS NOT NULL AND ({}) \
         ORDER BY original_index",
        branches.join(" OR ")
    );

    let kept = diesel::sql_query(query)
        .load::<VacancyIdRow>(&mut connection)?
        .into_iter()
        .map(|row| row.vacancy_id)
        .collect();

    Ok(kept)
}

fn quoted_id_list(ids: &HashSet<&'static str>) -> String {
    let mut sorted: Vec<&str> = ids.iter().copied().collect();
    sorted.sort_unstable();
    sorted
        .iter()
        .map(|id| format!("'{id}'"))
        .collect::<Vec<String>>()
        .join(", ")
}

fn rebuild_in_order(vacancies: Vec<FetchedVacancy>, kept_ids: &[String]) -> Vec<FetchedVacancy> {
    let mut by_id: HashMap<String, FetchedVacancy> = vacancies
        .into_iter()
        .map(|vacancy| (vacancy.vacancy_id.clone(), vacancy))
        .collect();

    kept_ids
        .iter()
        .filter_map(|id| by_id.remove(id))
        .collect()
}
