//! Diesel schema for the history table.

diesel::table! {
    /// Append-only audit entries.
    histories (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Described task activity. Not a foreign key.
        task_id -> Int8,
        /// One of `create`, `update` or `delete`.
        #[max_length = 16]
        action -> Varchar,
        /// Human-readable summary.
        description -> Text,
        /// When the mutation was recorded.
        time -> Timestamptz,
    }
}
