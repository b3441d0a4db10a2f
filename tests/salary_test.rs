#[cfg(test)]
mod salary {
    use rabota::models::vacancy::salary_midpoint;
    use rabota::ui::display::format_salary;

    #[test]
    fn midpoint_of_full_fork() {
        assert_eq!(salary_midpoint(Some(100_000), Some(150_000)), Some(125_000.0));
    }

    #[test]
    fn midpoint_of_single_bound() {
        assert_eq!(salary_midpoint(Some(90_000), None), Some(90_000.0));
        assert_eq!(salary_midpoint(None, Some(120_000)), Some(120_000.0));
    }

    #[test]
    fn midpoint_of_missing_salary() {
        assert_eq!(salary_midpoint(None, None), None);
    }

    #[test]
    fn average_of_midpoints_matches_manual_mean() {
        let forks = [
            (Some(100_000), Some(150_000)), // 125_000
            (Some(80_000), None),           // 80_000
            (None, Some(120_000)),          // 120_000
            (None, None),                   // skipped
        ];

        let midpoints: Vec<f64> = forks
            .iter()
            .filter_map(|(from, to)| salary_midpoint(*from, *to))
            .collect();
        let average: f64 = midpoints.iter().sum::<f64>() / midpoints.len() as f64;

        assert_eq!(average, (125_000.0 + 80_000.0 + 120_000.0) / 3.0);
    }

    #[test]
    fn formats_full_fork() {
        assert_eq!(
            format_salary(Some(100_000), Some(150_000), Some("RUR")),
            "100000 - 150000 RUR"
        );
    }

    #[test]
    fn formats_single_bounds() {
        assert_eq!(format_salary(Some(90_000), None, Some("RUB")), "from 90000 RUB");
        assert_eq!(format_salary(None, Some(70_000), Some("RUB")), "up to 70000 RUB");
    }

    #[test]
    fn formats_missing_salary_and_currency() {
        assert_eq!(format_salary(None, None, None), "not specified");
        assert_eq!(format_salary(Some(50_000), None, None), "from 50000 RUR");
    }
}
