//! # Property Model
//!
//! The typed values a projection produces and the map that holds them.
//! These types cross every boundary: beans → projection → request → store.
//!
//! Design rule: this module is pure data. No I/O, no state, no bean types.

pub mod value;
pub mod property_map;
pub mod enums;
pub mod names;

pub use value::TypedValue;
pub use property_map::{PropertyMap, FromTypedValue, get_as};
pub use enums::{
    OpenMetadataEnum,
    CommentType, DataItemSortOrder, CollectionMemberStatus,
    TermAssignmentStatus, TermRelationshipStatus,
    PermittedSynchronization, DeleteMethod, ActivityStatus,
    LatestChangeTarget, LatestChangeAction, ElementStatus,
};
