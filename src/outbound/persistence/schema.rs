//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match the migrations applied by the external migration tool;
//! `diesel print-schema` can regenerate them from a live database.

diesel::table! {
    /// Registered users. `email` carries a unique constraint.
    users (id) {
        id -> Int4,
        email -> Varchar,
        password -> Varchar,
        is_active -> Bool,
    }
}

diesel::table! {
    /// Planet reference data, pre-seeded.
    planets (id) {
        id -> Int4,
        name -> Varchar,
        climate -> Varchar,
        terrain -> Varchar,
        population -> Int8,
    }
}

diesel::table! {
    /// Character reference data, pre-seeded.
    people (id) {
        id -> Int4,
        name -> Varchar,
        gender -> Varchar,
        birth_year -> Varchar,
        eye_color -> Varchar,
    }
}

diesel::table! {
    /// Favourites join table. Exactly one of `planet_id`/`people_id` is set
    /// per row; the schema leaves both nullable, so adapters enforce it.
    favorites (id) {
        id -> Int4,
        user_id -> Int4,
        planet_id -> Nullable<Int4>,
        people_id -> Nullable<Int4>,
    }
}

diesel::joinable!(favorites -> users (user_id));
diesel::joinable!(favorites -> planets (planet_id));
diesel::joinable!(favorites -> people (people_id));

diesel::allow_tables_to_appear_in_same_query!(favorites, people, planets, users);
