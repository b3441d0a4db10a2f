#[cfg(test)]
mod dedup_keys {
    use rabota::filters::dedup::{normalize_text, source_priority};

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize_text("  Rust Developer  "), "rust developer");
    }

    #[test]
    fn normalize_strips_punctuation() {
        assert_eq!(
            normalize_text("Senior Rust-Developer (Backend)!"),
            "senior rust developer backend"
        );
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(
            normalize_text("Rust \t  Developer\n\nRemote"),
            "rust developer remote"
        );
    }

    #[test]
    fn normalize_keeps_cyrillic() {
        assert_eq!(
            normalize_text("Разработчик Rust (Москва)"),
            "разработчик rust москва"
        );
    }

    #[test]
    fn normalize_empty_is_empty() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn identical_titles_normalize_to_same_key() {
        let a = normalize_text("Rust Developer");
        let b = normalize_text("rust   developer!");
        assert_eq!(a, b);
    }

    #[test]
    fn priority_prefers_hh_over_sj_over_rest() {
        assert_eq!(source_priority("hh.ru"), 1);
        assert_eq!(source_priority("superjob.ru"), 2);
        assert_eq!(source_priority("sj"), 2);
        assert_eq!(source_priority("some-board.example"), 3);
        assert!(source_priority("hh.ru") < source_priority("superjob.ru"));
        assert!(source_priority("superjob.ru") < source_priority("other"));
    }

    #[test]
    fn priority_is_case_insensitive() {
        assert_eq!(source_priority("HH.RU"), 1);
        assert_eq!(source_priority("SuperJob.ru"), 2);
    }
}
