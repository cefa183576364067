//! SeaORM entity definitions for every table owned by the portal.

pub mod attendee;
pub mod attendee_archive;
pub mod auth_token;
pub mod board_member;
pub mod content_block;
pub mod nomination;
pub mod nomination_archive;
pub mod registration;
pub mod registration_archive;
pub mod settings;
pub mod user;
pub mod user_role;

pub mod prelude {
    pub use super::attendee::Entity as Attendee;
    pub use super::attendee_archive::Entity as AttendeeArchive;
    pub use super::auth_token::Entity as AuthToken;
    pub use super::board_member::Entity as BoardMember;
    pub use super::content_block::Entity as ContentBlock;
    pub use super::nomination::Entity as Nomination;
    pub use super::nomination_archive::Entity as NominationArchive;
    pub use super::registration::Entity as Registration;
    pub use super::registration_archive::Entity as RegistrationArchive;
    pub use super::settings::Entity as Settings;
    pub use super::user::Entity as User;
    pub use super::user_role::Entity as UserRole;
}
