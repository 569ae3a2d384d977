//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. When
//! migrations change the schema, regenerate this file with
//! `diesel print-schema` or update it by hand.

diesel::table! {
    /// User accounts.
    ///
    /// Every column except the `BIGSERIAL` primary key is nullable.
    users (id) {
        id -> Int8,
        name -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
        password -> Nullable<Varchar>,
        birth -> Nullable<Date>,
    }
}

diesel::table! {
    /// Order details. Identity only.
    order_details (id) {
        id -> Int8,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, order_details);
