use std::collections::HashSet;

use lazy_static::lazy_static;

/// One of the companies the aggregator restricts results to, together with
/// its employer ids on the two job boards. An id is `None` when the company
/// has no presence on that board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCompany {
    pub name: &'static str,
    pub hh_id: Option<&'static str>,
    pub sj_id: Option<&'static str>,
}

pub const TARGET_COMPANIES: &[TargetCompany] = &[
    TargetCompany {
        name: "Yandex",
        hh_id: Some("1740"),
        sj_id: Some("19421"),
    },
    TargetCompany {
        name: "VK",
        hh_id: Some("15478"),
        sj_id: Some("26624"),
    },
    TargetCompany {
        name: "Tinkoff",
        hh_id: Some("78638"),
        sj_id: Some("41631"),
    },
    TargetCompany {
        name: "Sber",
        hh_id: Some("3529"),
        sj_id: Some("12550"),
    },
    TargetCompany {
        name: "Alfa-Bank",
        hh_id: Some("80"),
        sj_id: Some("4585"),
    },
    TargetCompany {
        name: "Ozon",
        hh_id: Some("2180"),
        sj_id: Some("207008"),
    },
    TargetCompany {
        name: "Wildberries",
        hh_id: Some("64174"),
        sj_id: Some("653183"),
    },
    TargetCompany {
        name: "Avito",
        hh_id: Some("84585"),
        sj_id: None,
    },
    TargetCompany {
        name: "Kaspersky",
        hh_id: Some("1057"),
        sj_id: Some("21422"),
    },
    TargetCompany {
        name: "Rostelecom",
        hh_id: Some("2748"),
        sj_id: Some("9099"),
    },
    TargetCompany {
        name: "X5 Group",
        hh_id: Some("4934"),
        sj_id: None,
    },
    TargetCompany {
        name: "2GIS",
        hh_id: Some("64356"),
        sj_id: None,
    },
    TargetCompany {
        name: "Skyeng",
        hh_id: Some("1201321"),
        sj_id: None,
    },
];

lazy_static! {
    pub static ref TARGET_HH_IDS: HashSet<&'static str> = TARGET_COMPANIES
        .iter()
        .filter_map(|company| company.hh_id)
        .collect();
    pub static ref TARGET_SJ_IDS: HashSet<&'static str> = TARGET_COMPANIES
        .iter()
        .filter_map(|company| company.sj_id)
        .collect();
}

pub fn company_name_for_hh_id(hh_id: &str) -> Option<&'static str> {
    TARGET_COMPANIES
        .iter()
        .find(|company| company.hh_id == Some(hh_id))
        .map(|company| company.name)
}

pub fn company_name_for_sj_id(sj_id: &str) -> Option<&'static str> {
    TARGET_COMPANIES
        .iter()
        .find(|company| company.sj_id == Some(sj_id))
        .map(|company| company.name)
}
