use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::db::schema::vacancies;

/// A stored vacancy row. `vacancy_id` is the source-qualified posting id
/// (`hh-123` / `sj-456`) and is unique across the table; `company_id` is
/// null when the employer did not match any target company.
#[derive(Debug, Queryable, QueryableByName, Selectable, Clone)]
#[diesel(table_name = vacancies)]
pub struct Vacancy {
    pub id: i32,
    pub vacancy_id: String,
    pub title: String,
    pub url: Option<String>,
    pub salary_from: Option<i32>,
    pub salary_to: Option<i32>,
    pub salary_currency: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub area: Option<String>,
    pub source: Option<String>,
    pub published_at: Option<NaiveDateTime>,
    pub company_id: Option<i32>,
    pub search_query: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Vacancy {
    pub fn salary_midpoint(&self) -> Option<f64> {
        salary_midpoint(self.salary_from, self.salary_to)
    }
}

/// Midpoint of a salary fork; a single bound stands for itself.
pub fn salary_midpoint(salary_from: Option<i32>, salary_to: Option<i32>) -> Option<f64> {
    match (salary_from, salary_to) {
        (Some(from), Some(to)) => Some((from as f64 + to as f64) / 2.0),
        (Some(from), None) => Some(from as f64),
        (None, Some(to)) => Some(to as f64),
        (None, None) => None,
    }
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = vacancies)]
pub struct InsertableVacancy {
    pub vacancy_id: String,
    pub title: String,
    pub url: Option<String>,
    pub salary_from: Option<i32>,
    pub salary_to: Option<i32>,
    pub salary_currency: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub area: Option<String>,
    pub source: Option<String>,
    pub published_at: Option<NaiveDateTime>,
    pub company_id: Option<i32>,
    pub search_query: Option<String>,
}
