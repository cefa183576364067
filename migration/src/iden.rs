use sea_orm_migration::prelude::*;

// Define table names
#[derive(DeriveIden)]
pub enum Registration {
    Table,
    Id,
    Domain,
    Organization,
    ContactName,
    ContactEmail,
    ContactPhone,
    AttendeeCount,
    TotalFee,
}

#[derive(DeriveIden)]
pub enum Attendee {
    Table,
    Id,
    RegistrationId,
    Name,
    Title,
    Email,
}

#[derive(DeriveIden)]
pub enum Nomination {
    Table,
    Id,
    NomineeName,
    NomineeCity,
    District,
    Region,
    YearsOfService,
    Reason,
    NominatorName,
    NominatorEmail,
    Status,
}

#[derive(DeriveIden)]
pub enum Settings {
    Table,
    Id,
    Domain,
    IsActive,
    StartDate,
    EndDate,
    Fee,
    Location,
    Description,
}

#[derive(DeriveIden)]
pub enum BoardMember {
    Table,
    Id,
    Name,
    Title,
    District,
    Email,
    PhotoPath,
    SortOrder,
}

#[derive(DeriveIden)]
pub enum ContentBlock {
    Table,
    Id,
    Slug,
    Title,
    Body,
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    PasswordHash,
}

#[derive(DeriveIden)]
pub enum UserRole {
    Table,
    Id,
    UserId,
    Role,
}

#[derive(DeriveIden)]
pub enum AuthToken {
    Table,
    Id,
    UserId,
    TokenHash,
    ExpiresAt,
}

#[derive(DeriveIden)]
pub enum RegistrationArchive {
    Table,
    Id,
    ArchiveId,
    Domain,
    Organization,
    ContactName,
    ContactEmail,
    ContactPhone,
    AttendeeCount,
    TotalFee,
    RegisteredAt,
    ArchivedAt,
}

#[derive(DeriveIden)]
pub enum AttendeeArchive {
    Table,
    Id,
    ArchiveId,
    RegistrationId,
    Name,
    Title,
    Email,
    ArchivedAt,
}

#[derive(DeriveIden)]
pub enum NominationArchive {
    Table,
    Id,
    ArchiveId,
    NomineeName,
    NomineeCity,
    District,
    Region,
    YearsOfService,
    Reason,
    NominatorName,
    NominatorEmail,
    Status,
    SubmittedAt,
    ArchivedAt,
}
