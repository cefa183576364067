use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = table_auto(RegistrationArchive::Table)
            .col(pk_auto(RegistrationArchive::Id))
            .col(string(RegistrationArchive::ArchiveId))
            .col(string(RegistrationArchive::Domain))
            .col(string(RegistrationArchive::Organization))
            .col(string(RegistrationArchive::ContactName))
            .col(string(RegistrationArchive::ContactEmail))
            .col(string(RegistrationArchive::ContactPhone))
            .col(integer(RegistrationArchive::AttendeeCount))
            .col(double(RegistrationArchive::TotalFee))
            .col(timestamp(RegistrationArchive::RegisteredAt))
            .col(timestamp(RegistrationArchive::ArchivedAt))
            .to_owned();
        manager.create_table(table).await?;

        let table = table_auto(AttendeeArchive::Table)
            .col(pk_auto(AttendeeArchive::Id))
            .col(string(AttendeeArchive::ArchiveId))
            .col(integer(AttendeeArchive::RegistrationId))
            .col(string(AttendeeArchive::Name))
            .col(string_null(AttendeeArchive::Title))
            .col(string_null(AttendeeArchive::Email))
            .col(timestamp(AttendeeArchive::ArchivedAt))
            .to_owned();
        manager.create_table(table).await?;

        let table = table_auto(NominationArchive::Table)
            .col(pk_auto(NominationArchive::Id))
            .col(string(NominationArchive::ArchiveId))
            .col(string(NominationArchive::NomineeName))
            .col(string(NominationArchive::NomineeCity))
            .col(string(NominationArchive::District))
            .col(string(NominationArchive::Region))
            .col(integer(NominationArchive::YearsOfService))
            .col(text(NominationArchive::Reason))
            .col(string(NominationArchive::NominatorName))
            .col(string(NominationArchive::NominatorEmail))
            .col(string(NominationArchive::Status))
            .col(timestamp(NominationArchive::SubmittedAt))
            .col(timestamp(NominationArchive::ArchivedAt))
            .to_owned();
        manager.create_table(table).await?;

        // Archive lookups are always grouped by the rollover that produced them.
        manager
            .create_index(
                Index::create()
                    .name("idx_registration_archive_archive_id")
                    .table(RegistrationArchive::Table)
                    .col(RegistrationArchive::ArchiveId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_attendee_archive_archive_id")
                    .table(AttendeeArchive::Table)
                    .col(AttendeeArchive::ArchiveId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_nomination_archive_archive_id")
                    .table(NominationArchive::Table)
                    .col(NominationArchive::ArchiveId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RegistrationArchive::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttendeeArchive::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NominationArchive::Table).to_owned())
            .await?;

        Ok(())
    }
}
