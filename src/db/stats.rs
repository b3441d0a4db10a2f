use std::sync::Arc;

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Nullable, Text, Timestamp};
use log::error;

use super::{establish_connection, schema::vacancies};
use crate::config::Config;
use crate::models::vacancy::Vacancy;

/// Salary used for ordering and averaging: midpoint of the fork, or the
/// single bound that is present.
const SALARY_MIDPOINT_SQL: &str = "CASE \
     WHEN salary_from IS NOT NULL AND salary_to IS NOT NULL \
         THEN (salary_from + salary_to) / 2.0 \
     WHEN salary_from IS NOT NULL THEN salary_from::float8 \
     ELSE salary_to::float8 \
 END";

const ROUBLE_FILTER_SQL: &str =
    "(salary_currency IS NULL OR UPPER(salary_currency) IN ('RUR', 'RUB'))";

#[derive(QueryableByName)]
struct AvgSalaryRow {
    #[diesel(sql_type = Nullable<Double>)]
    avg_salary: Option<f64>,
}

#[derive(Debug, QueryableByName)]
pub struct CompanyVacancyCount {
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = BigInt)]
    pub vacancy_count: i64,
}

#[derive(Debug, QueryableByName)]
pub struct DatabaseStats {
    #[diesel(sql_type = BigInt)]
    pub total_vacancies: i64,
    #[diesel(sql_type = BigInt)]
    pub companies_with_vacancies: i64,
    #[diesel(sql_type = BigInt)]
    pub vacancies_with_salary: i64,
    #[diesel(sql_type = Nullable<Timestamp>)]
    pub latest_published_at: Option<chrono::NaiveDateTime>,
}

/// Average rouble salary over all stored vacancies that state one.
pub fn average_salary(config: &Arc<Config>) -> Option<f64> {
    let mut connection = match establish_connection(config) {
        Ok(c) => c,
        Err(e) => {
            error!("error connecting to database: {:?}", e);
            return None;
        }
    };

    let query = format!(
        "SELECT AVG({SALARY_MIDPOINT_SQL}) AS avg_salary \
         FROM vacancies \
         WHERE (salary_from IS NOT NULL OR salary_to IS NOT NULL) \
           AND {ROUBLE_FILTER_SQL}"
    );

    match diesel::sql_query(query).get_result::<AvgSalaryRow>(&mut connection) {
        Ok(row) => row.avg_salary,
        Err(e) => {
            error!("error computing average salary: {:?}", e);
            None
        }
    }
}

/// All vacancies whose salary midpoint beats the overall average, best paid
/// first. Empty when the average itself cannot be computed.
pub fn vacancies_above_average(config: &Arc<Config>) -> Vec<Vacancy> {
    let average = match average_salary(config) {
        Some(avg) => avg,
        None => return Vec::new(),
    };

    let mut connection = match establish_connection(config) {
        Ok(c) => c,
        Err(e) => {
            error!("error connecting to database: {:?}", e);
            return Vec::new();
        }
    };

    let query = format!(
        "SELECT * FROM vacancies \
         WHERE (salary_from IS NOT NULL OR salary_to IS NOT NULL) \
           AND {ROUBLE_FILTER_SQL} \
           AND {SALARY_MIDPOINT_SQL} > $1 \
         ORDER BY {SALARY_MIDPOINT_SQL} DESC, title"
    );

    let result = diesel::sql_query(query)
        .bind::<Double, _>(average)
        .load::<Vacancy>(&mut connection);

    match result {
        Ok(v) => v,
        Err(e) => {
            error!("error loading vacancies above average: {:?}", e);
            Vec::new()
        }
    }
}

pub fn top_by_salary(config: &Arc<Config>, count: i64) -> Vec<Vacancy> {
    let mut connection = match establish_connection(config) {
        Ok(c) => c,
        Err(e) => {
            error!("error connecting to database: {:?}", e);
            return Vec::new();
        }
    };

    let query = format!(
        "SELECT * FROM vacancies \
         WHERE salary_from IS NOT NULL OR salary_to IS NOT NULL \
         ORDER BY {SALARY_MIDPOINT_SQL} DESC, title \
         LIMIT $1"
    );

    let result = diesel::sql_query(query)
        .bind::<BigInt, _>(count)
        .load::<Vacancy>(&mut connection);

    match result {
        Ok(v) => v,
        Err(e) => {
            error!("error loading top vacancies: {:?}", e);
            Vec::new()
        }
    }
}

/// Title search, case-insensitive substring match.
pub fn search_by_keyword(config: &Arc<Config>, keyword: &str) -> Vec<Vacancy> {
    if keyword.trim().is_empty() {
        return Vec::new();
    }

    let mut connection = match establish_connection(config) {
        Ok(c) => c,
        Err(e) => {
            error!("error connecting to database: {:?}", e);
            return Vec::new();
        }
    };

    let result = vacancies::table
        .filter(vacancies::title.ilike(format!("%{}%", keyword.trim())))
        .select(Vacancy::as_select())
        .order(vacancies::title.asc())
        .load(&mut connection);

    match result {
        Ok(v) => v,
        Err(e) => {
            error!("error searching vacancies by '{}': {:?}", keyword, e);
            Vec::new()
        }
    }
}

/// Vacancy count per target company, zero-vacancy companies included.
pub fn companies_and_vacancy_counts(config: &Arc<Config>) -> Vec<CompanyVacancyCount> {
    let mut connection = match establish_connection(config) {
        Ok(c) => c,
        Err(e) => {
            error!("error connecting to database: {:?}", e);
            return Vec::new();
        }
    };

    let query = "SELECT c.name AS name, COUNT(v.id) AS vacancy_count \
                 FROM companies c \
                 LEFT JOIN vacancies v ON v.company_id = c.id \
                 GROUP BY c.id, c.name \
                 ORDER BY vacancy_count DESC, name";

    match diesel::sql_query(query).load::<CompanyVacancyCount>(&mut connection) {
        Ok(rows) => rows,
        Err(e) => {
            error!("error loading company vacancy counts: {:?}", e);
            Vec::new()
        }
    }
}

pub fn database_stats(config: &Arc<Config>) -> Option<DatabaseStats> {
    let mut connection = match establish_connection(config) {
        Ok(c) => c,
        Err(e) => {
            error!("error connecting to database: {:?}", e);
            return None;
        }
    };

    let query = "SELECT \
         (SELECT COUNT(*) FROM vacancies) AS total_vacancies, \
         (SELECT COUNT(DISTINCT company_id) FROM vacancies \
             WHERE company_id IS NOT NULL) AS companies_with_vacancies, \
         (SELECT COUNT(*) FROM vacancies \
             WHERE salary_from IS NOT NULL OR salary_to IS NOT NULL) \
             AS vacancies_with_salary, \
         (SELECT MAX(published_at) FROM vacancies) AS latest_published_at";

    match diesel::sql_query(query).get_result::<DatabaseStats>(&mut connection) {
        Ok(stats) => Some(stats),
        Err(e) => {
            error!("error loading database stats: {:?}", e);
            None
        }
    }
}
