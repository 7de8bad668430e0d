//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned row identifier.
        id -> BigInt,
        /// Non-empty display title.
        title -> Text,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Canonical priority string (`HIGH`, `MEDIUM`, `LOW`).
        priority -> Text,
        /// Optional due instant in epoch milliseconds.
        due_date -> Nullable<BigInt>,
        /// Completion flag.
        completed -> Bool,
    }
}
