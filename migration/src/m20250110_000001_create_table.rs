use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create Registration Table
        let table = table_auto(Registration::Table)
            .col(pk_auto(Registration::Id))
            .col(string(Registration::Domain))
            .col(string(Registration::Organization))
            .col(string(Registration::ContactName))
            .col(string(Registration::ContactEmail))
            .col(string(Registration::ContactPhone))
            .col(integer(Registration::AttendeeCount))
            .col(double(Registration::TotalFee))
            .to_owned();
        manager.create_table(table).await?;

        // Create Attendee Table
        let table = table_auto(Attendee::Table)
            .col(pk_auto(Attendee::Id))
            .col(integer(Attendee::RegistrationId))
            .col(string(Attendee::Name))
            .col(string_null(Attendee::Title))
            .col(string_null(Attendee::Email))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_attendee_registration")
                    .from(Attendee::Table, Attendee::RegistrationId)
                    .to(Registration::Table, Registration::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        // Create Nomination Table
        let table = table_auto(Nomination::Table)
            .col(pk_auto(Nomination::Id))
            .col(string(Nomination::NomineeName))
            .col(string(Nomination::NomineeCity))
            .col(string(Nomination::District))
            .col(string(Nomination::Region))
            .col(integer(Nomination::YearsOfService))
            .col(text(Nomination::Reason))
            .col(string(Nomination::NominatorName))
            .col(string(Nomination::NominatorEmail))
            .col(string(Nomination::Status).default("pending"))
            .to_owned();
        manager.create_table(table).await?;

        // Create Settings Table
        let table = table_auto(Settings::Table)
            .col(pk_auto(Settings::Id))
            .col(string(Settings::Domain))
            .col(boolean(Settings::IsActive).default(false))
            .col(date(Settings::StartDate))
            .col(date(Settings::EndDate))
            .col(double(Settings::Fee))
            .col(string_null(Settings::Location))
            .col(text_null(Settings::Description))
            .to_owned();
        manager.create_table(table).await?;

        // Create BoardMember Table
        let table = table_auto(BoardMember::Table)
            .col(pk_auto(BoardMember::Id))
            .col(string(BoardMember::Name))
            .col(string(BoardMember::Title))
            .col(string_null(BoardMember::District))
            .col(string_null(BoardMember::Email))
            .col(string_null(BoardMember::PhotoPath))
            .col(integer(BoardMember::SortOrder).default(0))
            .to_owned();
        manager.create_table(table).await?;

        // Create ContentBlock Table
        let table = table_auto(ContentBlock::Table)
            .col(pk_auto(ContentBlock::Id))
            .col(string_uniq(ContentBlock::Slug))
            .col(string(ContentBlock::Title))
            .col(text(ContentBlock::Body))
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendee::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Registration::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Nomination::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Settings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BoardMember::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContentBlock::Table).to_owned())
            .await?;

        Ok(())
    }
}
