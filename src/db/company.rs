use std::collections::HashMap;
use std::sync::Arc;

use diesel::prelude::*;
use log::error;

use super::{establish_connection, schema::companies};
use crate::config::Config;
use crate::models::company::Company;

pub fn get_all(config: &Arc<Config>) -> Vec<Company> {
    let mut connection = match establish_connection(config) {
        Ok(c) => c,
        Err(e) => {
            error!("error connecting to database: {:?}", e);
            return Vec::new();
        }
    };

    let all_companies = companies::table
        .select(Company::as_select())
        .order(companies::name.asc())
        .load(&mut connection);

    match all_companies {
        Ok(c) => c,
        Err(e) => {
            error!("error loading companies: {:?}", e);
            Vec::new()
        }
    }
}

/// Maps board-level employer ids (both hh and sj) onto companies.id rows,
/// used to resolve the vacancy FK before saving.
pub fn id_mapping(config: &Arc<Config>) -> HashMap<String, i32> {
    let mut mapping = HashMap::new();

    for company in get_all(config) {
        if let Some(hh_id) = company.hh_id {
            mapping.insert(hh_id, company.id);
        }
        if let Some(sj_id) = company.sj_id {
            mapping.insert(sj_id, company.id);
        }
    }

    mapping
}
