use std::sync::Arc;

use anyhow::Result;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use log::info;

use super::{establish_connection, schema::companies};
use crate::config::Config;
use crate::models::company::InsertableCompany;
use crate::targets::TARGET_COMPANIES;

const CREATE_TABLES_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS companies (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL UNIQUE,
    hh_id VARCHAR(50),
    sj_id VARCHAR(50)
);

CREATE TABLE IF NOT EXISTS vacancies (
    id SERIAL PRIMARY KEY,
    vacancy_id VARCHAR(255) UNIQUE NOT NULL,
    title TEXT NOT NULL,
    url TEXT,
    salary_from INTEGER,
    salary_to INTEGER,
    salary_currency VARCHAR(10),
    description TEXT,
    requirements TEXT,
    area TEXT,
    source VARCHAR(50),
    published_at TIMESTAMP,
    company_id INTEGER REFERENCES companies(id),
    search_query TEXT,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_vacancies_vacancy_id ON vacancies (vacancy_id);
CREATE INDEX IF NOT EXISTS idx_vacancies_title ON vacancies (title);
CREATE INDEX IF NOT EXISTS idx_vacancies_salary ON vacancies (salary_from, salary_to);
"#;

pub fn create_tables(config: &Arc<Config>) -> Result<()> {
    let mut connection = establish_connection(config)?;

    connection.batch_execute(CREATE_TABLES_SQL)?;

    info!("database schema checked");
    Ok(())
}

/// Seeds the companies table from the static target list. Existing rows are
/// left untouched, so re-running initialization is safe.
pub fn populate_companies(config: &Arc<Config>) -> Result<()> {
    let mut connection = establish_connection(config)?;

    let rows: Vec<InsertableCompany> = TARGET_COMPANIES
        .iter()
        .map(|company| InsertableCompany {
            name: company.name.to_string(),
            hh_id: company.hh_id.map(str::to_string),
            sj_id: company.sj_id.map(str::to_string),
        })
        .collect();

    let inserted = diesel::insert_into(companies::table)
        .values(&rows)
        .on_conflict(companies::name)
        .do_nothing()
        .execute(&mut connection)?;

    info!("companies table seeded, {} new rows", inserted);
    Ok(())
}
