#[cfg(test)]
mod target_companies {
    use std::collections::HashSet;

    use rabota::targets::{
        company_name_for_hh_id, company_name_for_sj_id, TARGET_COMPANIES, TARGET_HH_IDS,
        TARGET_SJ_IDS,
    };

    #[test]
    fn list_has_expected_size() {
        assert!(TARGET_COMPANIES.len() >= 12);
        assert!(TARGET_COMPANIES.len() <= 15);
    }

    #[test]
    fn company_names_are_unique() {
        let names: HashSet<&str> = TARGET_COMPANIES.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), TARGET_COMPANIES.len());
    }

    #[test]
    fn every_company_is_reachable_on_some_board() {
        for company in TARGET_COMPANIES {
            assert!(
                company.hh_id.is_some() || company.sj_id.is_some(),
                "{} has no board id",
                company.name
            );
        }
    }

    #[test]
    fn id_sets_cover_the_list() {
        let with_hh = TARGET_COMPANIES.iter().filter(|c| c.hh_id.is_some()).count();
        let with_sj = TARGET_COMPANIES.iter().filter(|c| c.sj_id.is_some()).count();
        assert_eq!(TARGET_HH_IDS.len(), with_hh);
        assert_eq!(TARGET_SJ_IDS.len(), with_sj);
    }

    #[test]
    fn lookup_by_board_id() {
        assert_eq!(company_name_for_hh_id("1740"), Some("Yandex"));
        assert_eq!(company_name_for_sj_id("19421"), Some("Yandex"));
        assert_eq!(company_name_for_hh_id("0"), None);
        assert_eq!(company_name_for_sj_id("0"), None);
    }
}
