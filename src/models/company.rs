use crate::db::schema::companies;
use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = companies)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub hh_id: Option<String>,
    pub sj_id: Option<String>,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = companies)]
pub struct InsertableCompany {
    pub name: String,
    pub hh_id: Option<String>,
    pub sj_id: Option<String>,
}
