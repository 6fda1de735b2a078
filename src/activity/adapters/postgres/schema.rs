//! Diesel schema for task activity persistence.

diesel::table! {
    /// Task activity records keyed by caller-assigned identifier.
    task_activities (task_id) {
        /// Caller-assigned identifier.
        task_id -> Int8,
        /// Insertion sequence used for newest-first listings.
        row_seq -> Int8,
        /// Task title.
        task_name -> Text,
        /// Task description.
        task_description -> Text,
        /// Activity type identifier.
        activity_type_id -> Int8,
        /// Activity type label.
        #[max_length = 64]
        activity_type_name -> Varchar,
        /// Activity sub-category identifier.
        activity_group_sub_category_id -> Int8,
        /// Activity sub-category label.
        #[max_length = 64]
        activity_group_sub_category_name -> Varchar,
        /// Activity group identifier.
        activity_group_id -> Int8,
        /// Activity group label.
        #[max_length = 64]
        activity_group_name -> Varchar,
        /// Stage identifier.
        stage_id -> Int8,
        /// Stage label.
        #[max_length = 64]
        stage_name -> Varchar,
        /// Core group category identifier.
        core_group_category_id -> Int8,
        /// Core group category label.
        #[max_length = 64]
        core_group_category -> Varchar,
        /// Core group identifier.
        core_group_id -> Int8,
        /// Core group name.
        core_group_name -> Text,
        /// Due date.
        due_date -> Date,
        /// Action label.
        #[max_length = 255]
        action_type -> Varchar,
        /// Related party name.
        #[max_length = 255]
        related_to -> Varchar,
        /// Related party picture.
        related_to_picture_id -> Int8,
        /// Related party email.
        #[max_length = 255]
        related_to_email -> Varchar,
        /// Related party company.
        #[max_length = 255]
        related_to_company -> Varchar,
        /// Assignee name.
        #[max_length = 255]
        assign_to -> Varchar,
        /// Assignee picture.
        assign_to_picture_id -> Int8,
        /// Assignee email.
        #[max_length = 255]
        assign_to_email -> Varchar,
        /// Assignee company.
        #[max_length = 255]
        assign_to_company -> Varchar,
        /// Notes.
        notes -> Text,
        /// Workflow status label.
        #[max_length = 64]
        status -> Varchar,
        /// Attachment reference.
        attachment_id -> Int8,
        /// Attachment descriptor.
        #[max_length = 255]
        attachments -> Varchar,
        /// Linked response reference.
        link_response_id -> Int8,
        /// Linked object reference.
        link_object_id -> Int8,
        /// Author.
        #[max_length = 255]
        created_by -> Varchar,
        /// Last write timestamp.
        created_on -> Timestamptz,
    }
}
