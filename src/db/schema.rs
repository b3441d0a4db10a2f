diesel::table! {
    companies (id) {
        id -> Int4,
        name -> Varchar,
        hh_id -> Nullable<Varchar>,
        sj_id -> Nullable<Varchar>,
    }
}

diesel::table! {
    vacancies (id) {
        id -> Int4,
        vacancy_id -> Varchar,
        title -> Text,
        url -> Nullable<Text>,
        salary_from -> Nullable<Int4>,
        salary_to -> Nullable<Int4>,
        salary_currency -> Nullable<Varchar>,
        description -> Nullable<Text>,
        requirements -> Nullable<Text>,
        area -> Nullable<Text>,
        source -> Nullable<Varchar>,
        published_at -> Nullable<Timestamp>,
        company_id -> Nullable<Int4>,
        search_query -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::joinable!(vacancies -> companies (company_id));

diesel::allow_tables_to_appear_in_same_query!(companies, vacancies,);
