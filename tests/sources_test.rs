#[cfg(test)]
mod fetched_vacancies {
    use rabota::sources::{FetchedVacancy, SOURCE_HH, SOURCE_SJ};

    fn fetched(vacancy_id: &str, source: &str) -> FetchedVacancy {
        FetchedVacancy {
            vacancy_id: vacancy_id.to_string(),
            title: "Rust Developer".to_string(),
            url: Some("https://example.com/vacancy/1".to_string()),
            salary_from: Some(200_000),
            salary_to: Some(280_000),
            salary_currency: Some("RUR".to_string()),
            description: Some("Backend services".to_string()),
            requirements: Some("Rust, SQL".to_string()),
            area: Some("Moscow".to_string()),
            source: source.to_string(),
            employer_id: Some("1740".to_string()),
            employer_name: Some("Yandex".to_string()),
            published_at: None,
        }
    }

    #[test]
    fn vacancy_ids_are_source_qualified() {
        assert!(fetched("hh-42", SOURCE_HH).vacancy_id.starts_with("hh-"));
        assert!(fetched("sj-42", SOURCE_SJ).vacancy_id.starts_with("sj-"));
    }

    #[test]
    fn into_insertable_carries_fields_over() {
        let insertable = fetched("hh-42", SOURCE_HH).into_insertable(Some(7), "rust");

        assert_eq!(insertable.vacancy_id, "hh-42");
        assert_eq!(insertable.title, "Rust Developer");
        assert_eq!(insertable.salary_from, Some(200_000));
        assert_eq!(insertable.salary_to, Some(280_000));
        assert_eq!(insertable.source.as_deref(), Some(SOURCE_HH));
        assert_eq!(insertable.company_id, Some(7));
        assert_eq!(insertable.search_query.as_deref(), Some("rust"));
    }

    #[test]
    fn unmatched_employer_leaves_company_null() {
        let insertable = fetched("sj-7", SOURCE_SJ).into_insertable(None, "rust");
        assert_eq!(insertable.company_id, None);
    }
}
