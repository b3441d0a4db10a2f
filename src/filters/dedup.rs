use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use diesel::prelude::*;
use diesel::sql_types::Text;
use lazy_static::lazy_static;
use log::{error, info};
use regex::Regex;

use crate::config::Config;
use crate::db::establish_connection;
use crate::sources::FetchedVacancy;

diesel::table! {
    temp_dedup_vacancies (vacancy_id) {
        vacancy_id -> Varchar,
        title_normalized -> Text,
        employer_normalized -> Text,
        salary_from -> Nullable<Int4>,
        salary_to -> Nullable<Int4>,
        area_normalized -> Text,
        source_priority -> Int4,
        original_index -> Int4,
    }
}

const CREATE_TEMP_TABLE_SQL: &str = "CREATE TEMP TABLE temp_dedup_vacancies ( \
     vacancy_id VARCHAR(255) PRIMARY KEY, \
     title_normalized TEXT, \
     employer_normalized TEXT, \
     salary_from INTEGER, \
     salary_to INTEGER, \
     area_normalized TEXT, \
     source_priority INTEGER, \
     original_index INTEGER \
 )";

// One survivor per group of equal normalized keys; a better-ranked board
// wins, earliest input position breaks ties.
const DEDUP_QUERY_SQL: &str = "WITH ranked_vacancies AS ( \
     SELECT \
         vacancy_id, \
         original_index, \
         ROW_NUMBER() OVER ( \
             PARTITION BY title_normalized, employer_normalized, \
                          COALESCE(salary_from, -1), COALESCE(salary_to, -1), \
                          area_normalized \
             ORDER BY source_priority, original_index \
         ) AS row_num \
     FROM temp_dedup_vacancies \
 ) \
 SELECT vacancy_id \
 FROM ranked_vacancies \
 WHERE row_num = 1 \
 ORDER BY original_index";

#[derive(Insertable)]
#[diesel(table_name = temp_dedup_vacancies)]
struct DedupRow {
    vacancy_id: String,
    title_normalized: String,
    employer_normalized: String,
    salary_from: Option<i32>,
    salary_to: Option<i32>,
    area_normalized: String,
    source_priority: i32,
    original_index: i32,
}

#[derive(QueryableByName)]
struct VacancyIdRow {
    #[diesel(sql_type = Text)]
    vacancy_id: String,
}

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapses one vacancy per duplicate group, where a duplicate shares the
/// normalized title, employer, salary fork and area. HeadHunter postings win
/// over SuperJob ones, which win over anything else. Fail-open: any SQL
/// error returns the input unchanged.
pub fn deduplicate(config: &Arc<Config>, vacancies: Vec<FetchedVacancy>) -> Vec<FetchedVacancy> {
    if vacancies.is_empty() {
        return Vec::new();
    }

    let total = vacancies.len();

    match run_dedup_query(config, &vacancies) {
        Ok(unique_ids) => {
            let unique = rebuild_in_order(vacancies, &unique_ids);
            info!("deduplication: {} -> {} vacancies", total, unique.len());
            unique
        }
        Err(e) => {
            error!("deduplication failed, keeping all {} vacancies: {:?}", total, e);
            vacancies
        }
    }
}

fn run_dedup_query(config: &Arc<Config>, vacancies: &[FetchedVacancy]) -> Result<Vec<String>> {
    let mut connection = establish_connection(config)?;

    diesel::sql_query(CREATE_TEMP_TABLE_SQL).execute(&mut connection)?;

    let rows: Vec<DedupRow> = vacancies
        .iter()
        .enumerate()
        .map(|(index, vacancy)| DedupRow {
            vacancy_id: vacancy.vacancy_id.clone(),
            title_normalized: normalize_text(&vacancy.title),
            employer_normalized: normalize_text(
                vacancy.employer_name.as_deref().unwrap_or(""),
            ),
            salary_from: vacancy.salary_from,
            salary_to: vacancy.salary_to,
            area_normalized: normalize_text(vacancy.area.as_deref().unwrap_or("")),
            source_priority: source_priority(&vacancy.source),
            original_index: index as i32,
        })
        .collect();

    diesel::insert_into(temp_dedup_vacancies::table)
        .values(&rows)
        .execute(&mut connection)?;

    let unique = diesel::sql_query(DEDUP_QUERY_SQL)
        .load::<VacancyIdRow>(&mut connection)?
        .into_iter()
        .map(|row| row.vacancy_id)
        .collect();

    Ok(unique)
}

/// Board rank used as the survivor order inside a duplicate group.
pub fn source_priority(source: &str) -> i32 {
    let source = source.to_lowercase();
    if source.contains("hh") {
        1
    } else if source.contains("sj") || source.contains("superjob") {
        2
    } else {
        3
    }
}

/// Lowercases, strips punctuation and collapses whitespace so that cosmetic
/// differences between boards do not defeat the duplicate grouping. Cyrillic
/// letters are word characters and survive.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, " ");
    WHITESPACE.replace_all(stripped.trim(), " ").to_string()
}

fn rebuild_in_order(vacancies: Vec<FetchedVacancy>, unique_ids: &[String]) -> Vec<FetchedVacancy> {
    let mut by_id: HashMap<String, FetchedVacancy> = vacancies
        .into_iter()
        .map(|vacancy| (vacancy.vacancy_id.clone(), vacancy))
        .collect();

    unique_ids
        .iter()
        .filter_map(|id| by_id.remove(id))
        .collect()
}
