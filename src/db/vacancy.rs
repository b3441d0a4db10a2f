use std::sync::Arc;

use diesel::prelude::*;
use diesel::upsert::excluded;
use log::{error, info};

use super::{
    establish_connection,
    schema::{companies, vacancies},
};
use crate::config::Config;
use crate::models::vacancy::{InsertableVacancy, Vacancy};

/// Optional narrowing for [`load`]; unset fields do not constrain the query.
#[derive(Debug, Default, Clone)]
pub struct VacancyFilters {
    pub title: Option<String>,
    pub salary_from: Option<i32>,
    pub salary_to: Option<i32>,
    pub employer: Option<String>,
}

/// Inserts the batch, updating rows whose `vacancy_id` is already stored.
/// Returns the number of affected rows, 0 on error.
pub fn upsert_batch(config: &Arc<Config>, batch: &[InsertableVacancy]) -> usize {
    if batch.is_empty() {
        return 0;
    }

    let mut connection = match establish_connection(config) {
        Ok(c) => c,
        Err(e) => {
            error!("error connecting to database: {:?}", e);
            return 0;
        }
    };

    let result = diesel::insert_into(vacancies::table)
        .values(batch)
        .on_conflict(vacancies::vacancy_id)
        .do_update()
        .set((
            vacancies::title.eq(excluded(vacancies::title)),
            vacancies::url.eq(excluded(vacancies::url)),
            vacancies::salary_from.eq(excluded(vacancies::salary_from)),
            vacancies::salary_to.eq(excluded(vacancies::salary_to)),
            vacancies::salary_currency.eq(excluded(vacancies::salary_currency)),
            vacancies::description.eq(excluded(vacancies::description)),
            vacancies::requirements.eq(excluded(vacancies::requirements)),
            vacancies::area.eq(excluded(vacancies::area)),
            vacancies::source.eq(excluded(vacancies::source)),
            vacancies::published_at.eq(excluded(vacancies::published_at)),
            vacancies::company_id.eq(excluded(vacancies::company_id)),
            vacancies::search_query.eq(excluded(vacancies::search_query)),
            vacancies::updated_at.eq(diesel::dsl::now),
        ))
        .execute(&mut connection);

    match result {
        Ok(n) => {
            info!("upserted {} vacancies", n);
            n
        }
        Err(e) => {
            error!("error upserting vacancies: {:?}", e);
            0
        }
    }
}

pub fn load(
    config: &Arc<Config>,
    filters: &VacancyFilters,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Vec<Vacancy> {
    let mut connection = match establish_connection(config) {
        Ok(c) => c,
        Err(e) => {
            error!("error connecting to database: {:?}", e);
            return Vec::new();
        }
    };

    let mut query = vacancies::table
        .left_join(companies::table)
        .select(Vacancy::as_select())
        .into_boxed();

    if let Some(title) = &filters.title {
        query = query.filter(vacancies::title.ilike(format!("%{title}%")));
    }
    if let Some(salary_from) = filters.salary_from {
        query = query.filter(vacancies::salary_from.ge(salary_from));
    }
    if let Some(salary_to) = filters.salary_to {
        query = query.filter(vacancies::salary_to.le(salary_to));
    }
    if let Some(employer) = &filters.employer {
        query = query.filter(companies::name.ilike(format!("%{employer}%")));
    }

    query = query.order(vacancies::created_at.desc());

    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    if let Some(offset) = offset {
        query = query.offset(offset);
    }

    match query.load(&mut connection) {
        Ok(v) => v,
        Err(e) => {
            error!("error loading vacancies: {:?}", e);
            Vec::new()
        }
    }
}

pub fn exists(config: &Arc<Config>, target_vacancy_id: &str) -> bool {
    let mut connection = match establish_connection(config) {
        Ok(c) => c,
        Err(e) => {
            error!("error connecting to database: {:?}", e);
            return false;
        }
    };

    let found: Result<i64, diesel::result::Error> = vacancies::table
        .filter(vacancies::vacancy_id.eq(target_vacancy_id))
        .count()
        .get_result(&mut connection);

    match found {
        Ok(n) => n > 0,
        Err(e) => {
            error!("error checking vacancy {}: {:?}", target_vacancy_id, e);
            false
        }
    }
}

pub fn delete_by_id(config: &Arc<Config>, target_vacancy_id: &str) -> bool {
    let mut connection = match establish_connection(config) {
        Ok(c) => c,
        Err(e) => {
            error!("error connecting to database: {:?}", e);
            return false;
        }
    };

    let deletion = diesel::delete(
        vacancies::table.filter(vacancies::vacancy_id.eq(target_vacancy_id)),
    )
    .execute(&mut connection);

    match deletion {
        Ok(n) if n > 0 => {
            info!("deleted vacancy {}", target_vacancy_id);
            true
        }
        Ok(_) => false,
        Err(e) => {
            error!("error deleting vacancy {}: {:?}", target_vacancy_id, e);
            false
        }
    }
}

/// Deletes every vacancy whose title contains the keyword, case-insensitive.
pub fn delete_by_keyword(config: &Arc<Config>, keyword: &str) -> usize {
    if keyword.trim().is_empty() {
        return 0;
    }

    let mut connection = match establish_connection(config) {
        Ok(c) => c,
        Err(e) => {
            error!("error connecting to database: {:?}", e);
            return 0;
        }
    };

    let deletion = diesel::delete(
        vacancies::table.filter(vacancies::title.ilike(format!("%{}%", keyword.trim()))),
    )
    .execute(&mut connection);

    match deletion {
        Ok(n) => {
            info!("deleted {} vacancies matching '{}'", n, keyword);
            n
        }
        Err(e) => {
            error!("error deleting vacancies by keyword '{}': {:?}", keyword, e);
            0
        }
    }
}

pub fn delete_all(config: &Arc<Config>) -> bool {
    let mut connection = match establish_connection(config) {
        Ok(c) => c,
        Err(e) => {
            error!("error connecting to database: {:?}", e);
            return false;
        }
    };

    match diesel::delete(vacancies::table).execute(&mut connection) {
        Ok(n) => {
            info!("deleted all {} vacancies", n);
            true
        }
        Err(e) => {
            error!("error deleting vacancies: {:?}", e);
            false
        }
    }
}
