//! Enumeration-constrained classification axes of a task activity.
//!
//! Each axis serialises to the human-readable label used on the wire
//! (`"not started"`, `"stage history"`). Parsing is forgiving about case,
//! surrounding whitespace and snake_case spellings, so `"Not_Started"` and
//! `"not started"` both resolve to [`ActivityStatus::NotStarted`].

use super::ParseClassificationError;
use std::fmt;
use std::str::FromStr;

/// Lower-cases, trims and maps underscores to spaces.
fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace('_', " ")
}

macro_rules! classification {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the canonical wire label.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ParseClassificationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                let normalized = normalize(value);
                $(
                    if normalized == $wire $(|| normalized == $alias)* {
                        return Ok(Self::$variant);
                    }
                )+
                Err(ParseClassificationError::new($label, value))
            }
        }

        impl FromStr for $name {
            type Err = ParseClassificationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::try_from(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::try_from(raw.as_str()).map_err(serde::de::Error::custom)
            }
        }
    };
}

classification! {
    /// Kind of activity being tracked.
    ActivityName, "activity type" {
        /// A to-do item.
        Tasks => "tasks",
        /// An email exchange.
        Email => "email",
        /// A chat conversation.
        Chats => "chats",
        /// A free-form note.
        Notes => "notes",
        /// A meeting.
        Meetings => "meetings",
        /// A phone call.
        Calls => "calls",
        /// A log entry.
        Logs => "logs",
    }
}

classification! {
    /// Who the activity was carried out with.
    SubCategoryName, "activity sub-category" {
        /// Contact with a customer.
        CustomerContact => "customer contact",
        /// Contact with a partner.
        PartnerContact => "partner contact",
        /// Contact with an employee. Older clients send the misspelt label.
        EmployeeContact => "employee contact" | "emplopyee contact",
    }
}

classification! {
    /// Record group the activity is filed under.
    GroupName, "activity group" {
        /// Contact records.
        Contact => "contact",
        /// Engagement records.
        Engagement => "engagement",
        /// Product records.
        Products => "products",
        /// Partner records.
        Partners => "partners",
        /// Quotes.
        Quotes => "quotes",
        /// Notes.
        Notes => "notes",
        /// Stage transition history.
        StageHistory => "stage history",
        /// Approval history.
        ApprovalHistory => "approval history",
        /// Files.
        Files => "files",
    }
}

classification! {
    /// Sales pipeline stage.
    StageName, "stage" {
        /// Freshly opened.
        New => "new",
        /// Proposal being drafted.
        ProposalCreation => "proposal creation",
        /// Presenting to the prospect.
        Presentation => "presentation",
        /// Negotiating terms.
        Negotiation => "negotiation",
        /// Closed.
        Closed => "closed",
        /// Marked as completed.
        MarkAsCompleted => "mark as completed",
    }
}

classification! {
    /// Category of the core group the activity belongs to.
    GroupCategory, "core group category" {
        /// Contacts.
        Contacts => "contacts",
        /// Leads.
        Leads => "leads",
        /// Opportunities.
        Opportunity => "opportunity",
        /// Customers.
        Customers => "customers",
    }
}

classification! {
    /// Workflow status of a task activity.
    ActivityStatus, "status" {
        /// Work has not begun.
        NotStarted => "not started",
        /// Work is under way.
        InProgress => "in progress",
        /// Work is finished.
        Completed => "completed",
        /// Blocked on someone else.
        WaitingOn => "waiting on",
        /// Deferred to a later date.
        Differed => "differed",
    }
}
