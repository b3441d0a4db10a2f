pub mod display;

use std::io::{self, Write};
use std::sync::Arc;

use colored::Colorize;
use log::info;

use crate::config::Config;
use crate::db::{self, vacancy::VacancyFilters};
use crate::filters::{company_filter, dedup};
use crate::models::vacancy::InsertableVacancy;
use crate::sources;

/// Menu loop; returns when the user picks exit.
pub async fn run(config: Arc<Config>) {
    loop {
        print_menu();

        match prompt("Your choice: ").as_str() {
            "1" => search_and_store(&config).await,
            "2" => show_saved(&config),
            "3" => show_top_by_salary(&config),
            "4" => search_saved_by_keyword(&config),
            "5" => filter_saved_by_salary(&config),
            "6" => show_company_counts(&config),
            "7" => show_salary_analytics(&config),
            "8" => show_database_stats(&config),
            "9" => delete_menu(&config),
            "0" => break,
            _ => println!("{}", "Unknown option, try again".yellow()),
        }
    }

    println!("Bye");
}

fn print_menu() {
    println!();
    println!("{}", "=== rabota ===".bold());
    println!("1. Search vacancies and store them");
    println!("2. Show stored vacancies");
    println!("3. Top stored vacancies by salary");
    println!("4. Search stored vacancies by keyword");
    println!("5. Filter stored vacancies by salary range");
    println!("6. Vacancies per target company");
    println!("7. Average salary and vacancies above it");
    println!("8. Database statistics");
    println!("9. Delete stored vacancies");
    println!("0. Exit");
}

fn prompt(label: &str) -> String {
    print!("{label}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_number<T: std::str::FromStr>(label: &str) -> Option<T> {
    let raw = prompt(label);
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

async fn search_and_store(config: &Arc<Config>) {
    let query = prompt("Search query: ");
    if query.is_empty() {
        println!("{}", "Empty query, nothing to do".yellow());
        return;
    }

    let fetched = sources::search_all(config, &query).await;
    if fetched.is_empty() {
        println!("{}", "No vacancies found".yellow());
        return;
    }
    println!("Fetched {} vacancies", fetched.len());

    let filtered = if config.filter_to_target_companies {
        let narrowed = company_filter::filter_by_company_ids(config, fetched);
        println!("{} from target companies", narrowed.len());
        narrowed
    } else {
        fetched
    };

    let unique = dedup::deduplicate(config, filtered);
    if unique.is_empty() {
        println!("{}", "Nothing left to store".yellow());
        return;
    }

    let mapping = db::company::id_mapping(config);
    let batch: Vec<InsertableVacancy> = unique
        .into_iter()
        .map(|vacancy| {
            let company_id = vacancy
                .employer_id
                .as_deref()
                .and_then(|id| mapping.get(id))
                .copied();
            vacancy.into_insertable(company_id, &query)
        })
        .collect();

    let stored = db::vacancy::upsert_batch(config, &batch);
    info!("search '{}' stored {} vacancies", query, stored);
    println!("{} {} vacancies stored", "Done:".green(), stored);
}

fn show_saved(config: &Arc<Config>) {
    let limit = prompt_number::<i64>("How many to show (default 10): ").unwrap_or(10);
    let vacancies = db::vacancy::load(config, &VacancyFilters::default(), Some(limit), None);
    display::print_vacancies(&vacancies);
}

fn show_top_by_salary(config: &Arc<Config>) {
    let count = prompt_number::<i64>("Top how many (default 5): ").unwrap_or(5);
    let vacancies = db::stats::top_by_salary(config, count);
    display::print_vacancies(&vacancies);
}

fn search_saved_by_keyword(config: &Arc<Config>) {
    let keyword = prompt("Keyword: ");
    if keyword.is_empty() {
        return;
    }
    let vacancies = db::stats::search_by_keyword(config, &keyword);
    display::print_vacancies(&vacancies);
}

fn filter_saved_by_salary(config: &Arc<Config>) {
    let filters = VacancyFilters {
        salary_from: prompt_number::<i32>("Minimum salary (empty to skip): "),
        salary_to: prompt_number::<i32>("Maximum salary (empty to skip): "),
        ..VacancyFilters::default()
    };
    let vacancies = db::vacancy::load(config, &filters, None, None);
    display::print_vacancies(&vacancies);
}

fn show_company_counts(config: &Arc<Config>) {
    let counts = db::stats::companies_and_vacancy_counts(config);
    display::print_company_counts(&counts);
}

fn show_salary_analytics(config: &Arc<Config>) {
    match db::stats::average_salary(config) {
        Some(average) => println!("Average salary: {:.0} RUR", average),
        None => {
            println!("{}", "No salary data stored yet".yellow());
            return;
        }
    }

    let above = db::stats::vacancies_above_average(config);
    println!("{} vacancies above average:", above.len());
    display::print_vacancies(&above);
}

fn show_database_stats(config: &Arc<Config>) {
    match db::stats::database_stats(config) {
        Some(stats) => display::print_database_stats(&stats),
        None => println!("{}", "Statistics unavailable".yellow()),
    }
}

fn delete_menu(config: &Arc<Config>) {
    println!("1. Delete by vacancy id");
    println!("2. Delete by keyword");
    println!("3. Delete everything");
    println!("0. Back");

    match prompt("Your choice: ").as_str() {
        "1" => {
            let id = prompt("Vacancy id (e.g. hh-123): ");
            if id.is_empty() {
                return;
            }
            if db::vacancy::delete_by_id(config, &id) {
                println!("{}", "Deleted".green());
            } else {
                println!("{}", "Not found".yellow());
            }
        }
        "2" => {
            let keyword = prompt("Keyword: ");
            if keyword.is_empty() {
                return;
            }
            let matches = db::stats::search_by_keyword(config, &keyword);
            if matches.is_empty() {
                println!("{}", "Nothing matches".yellow());
                return;
            }
            display::print_vacancies(&matches);
            if confirm(&format!("Delete these {} vacancies?", matches.len())) {
                let deleted = db::vacancy::delete_by_keyword(config, &keyword);
                println!("Deleted {deleted} vacancies");
            }
        }
        "3" => {
            if confirm("Delete ALL stored vacancies?") {
                if db::vacancy::delete_all(config) {
                    println!("{}", "All vacancies deleted".green());
                } else {
                    println!("{}", "Deletion failed".red());
                }
            }
        }
        _ => {}
    }
}

fn confirm(question: &str) -> bool {
    let answer = prompt(&format!("{question} [y/N]: "));
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
