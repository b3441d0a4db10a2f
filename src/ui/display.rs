use colored::Colorize;

use crate::db::stats::{CompanyVacancyCount, DatabaseStats};
use crate::models::vacancy::Vacancy;

pub fn format_salary(
    salary_from: Option<i32>,
    salary_to: Option<i32>,
    currency: Option<&str>,
) -> String {
    let currency = currency.unwrap_or("RUR");
    match (salary_from, salary_to) {
        (Some(from), Some(to)) => format!("{from} - {to} {currency}"),
        (Some(from), None) => format!("from {from} {currency}"),
        (None, Some(to)) => format!("up to {to} {currency}"),
        (None, None) => "not specified".to_string(),
    }
}

pub fn print_vacancy(vacancy: &Vacancy, number: usize) {
    println!("{:3}. {}", number, vacancy.title.bold());
    println!(
        "     salary: {}",
        format_salary(
            vacancy.salary_from,
            vacancy.salary_to,
            vacancy.salary_currency.as_deref(),
        )
    );
    if let Some(area) = &vacancy.area {
        println!("     area: {area}");
    }
    if let Some(source) = &vacancy.source {
        println!("     source: {source}");
    }
    if let Some(url) = &vacancy.url {
        println!("     url: {url}");
    }
    println!("     id: {}", vacancy.vacancy_id.dimmed());
}

pub fn print_vacancies(vacancies: &[Vacancy]) {
    if vacancies.is_empty() {
        println!("{}", "Nothing found".yellow());
        return;
    }

    for (index, vacancy) in vacancies.iter().enumerate() {
        print_vacancy(vacancy, index + 1);
    }
    println!("Total: {}", vacancies.len());
}

pub fn print_company_counts(counts: &[CompanyVacancyCount]) {
    if counts.is_empty() {
        println!("{}", "No companies stored".yellow());
        return;
    }

    println!("{}", "Vacancies per target company".bold());
    for row in counts {
        println!("  {:<20} {}", row.name, row.vacancy_count);
    }
}

pub fn print_database_stats(stats: &DatabaseStats) {
    println!("{}", "Database statistics".bold());
    println!("  total vacancies:     {}", stats.total_vacancies);
    println!("  matched companies:   {}", stats.companies_with_vacancies);
    println!("  vacancies w/ salary: {}", stats.vacancies_with_salary);
    match stats.latest_published_at {
        Some(latest) => println!("  latest published:    {}", latest.format("%Y-%m-%d %H:%M")),
        None => println!("  latest published:    -"),
    }
}
