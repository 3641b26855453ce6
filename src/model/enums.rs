//! Enumerated property types.
//!
//! Each enum is stored in a property map as an enum literal: its symbolic
//! name qualified by the enum's open metadata type name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An enumeration that maps onto an open metadata enum type.
pub trait OpenMetadataEnum: Copy {
    /// Open metadata type name of the enumeration.
    const TYPE_NAME: &'static str;

    fn ordinal(&self) -> i32;

    fn symbolic_name(&self) -> &'static str;
}

macro_rules! open_metadata_enum {
    (
        $(#[$meta:meta])*
        $name:ident = $type_name:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $ordinal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl OpenMetadataEnum for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn ordinal(&self) -> i32 {
                match self {
                    $( $name::$variant => $ordinal ),+
                }
            }

            fn symbolic_name(&self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant) ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.symbolic_name())
            }
        }
    };
}

open_metadata_enum! {
    /// Kind of comment attached to an element.
    CommentType = "CommentType" {
        StandardComment = 0,
        Question = 1,
        Answer = 2,
        Suggestion = 3,
        UsageExperience = 4,
        RequirementsComment = 5,
        Other = 99,
    }
}

open_metadata_enum! {
    /// Sort order of the values held in a data item.
    DataItemSortOrder = "DataItemSortOrder" {
        Unknown = 0,
        Ascending = 1,
        Descending = 2,
        Unsorted = 3,
        Other = 99,
    }
}

open_metadata_enum! {
    CollectionMemberStatus = "CollectionMemberStatus" {
        Unknown = 0,
        Discovered = 1,
        Proposed = 2,
        Imported = 3,
        Validated = 4,
        Deprecated = 5,
        Obsolete = 6,
        Other = 99,
    }
}

open_metadata_enum! {
    /// Status of a semantic assignment between an element and a glossary term.
    TermAssignmentStatus = "TermAssignmentStatus" {
        Discovered = 0,
        Proposed = 1,
        Imported = 2,
        Validated = 3,
        Deprecated = 4,
        Obsolete = 5,
        Other = 99,
    }
}

open_metadata_enum! {
    TermRelationshipStatus = "TermRelationshipStatus" {
        Draft = 0,
        Active = 1,
        Deprecated = 2,
        Obsolete = 3,
        Other = 99,
    }
}

open_metadata_enum! {
    /// Direction metadata may flow between the platform and a third party.
    PermittedSynchronization = "PermittedSynchronization" {
        BothDirections = 0,
        ToThirdParty = 1,
        FromThirdParty = 2,
        Other = 99,
    }
}

open_metadata_enum! {
    /// How a connector removes elements that disappear from a catalog target.
    DeleteMethod = "DeleteMethod" {
        LookForLineage = 0,
        Archive = 1,
        SoftDelete = 2,
    }
}

open_metadata_enum! {
    ActivityStatus = "ActivityStatus" {
        Requested = 0,
        Approved = 1,
        Waiting = 2,
        Activating = 3,
        InProgress = 4,
        Paused = 5,
        ForInformation = 6,
        Completed = 10,
        Invalid = 11,
        Ignored = 12,
        Failed = 13,
        Cancelled = 14,
        Other = 99,
    }
}

open_metadata_enum! {
    /// Which part of an element the most recent change touched.
    LatestChangeTarget = "LatestChangeTarget" {
        EntityStatus = 0,
        EntityProperty = 1,
        EntityClassification = 2,
        EntityRelationship = 3,
        Attachment = 4,
        AttachmentStatus = 5,
        AttachmentProperty = 6,
        AttachmentClassification = 7,
        AttachmentRelationship = 8,
        Other = 99,
    }
}

open_metadata_enum! {
    LatestChangeAction = "LatestChangeAction" {
        Created = 0,
        Updated = 1,
        Deleted = 2,
        Other = 99,
    }
}

open_metadata_enum! {
    /// Lifecycle status requested for a newly created element.
    ElementStatus = "ElementStatus" {
        Unknown = 0,
        Draft = 1,
        Prepared = 2,
        Proposed = 3,
        Approved = 4,
        Rejected = 5,
        ApprovedConcept = 6,
        UnderDevelopment = 7,
        DevelopmentComplete = 8,
        ApprovedForDeployment = 9,
        StandBy = 10,
        Active = 15,
        Failed = 16,
        Disabled = 17,
        Complete = 18,
        Deprecated = 19,
        Other = 50,
        Deleted = 99,
    }
}
