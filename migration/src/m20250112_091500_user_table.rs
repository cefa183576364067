use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = table_auto(User::Table)
            .col(pk_auto(User::Id))
            .col(string_uniq(User::Email))
            .col(string(User::PasswordHash))
            .to_owned();
        manager.create_table(table).await?;

        let table = table_auto(UserRole::Table)
            .col(pk_auto(UserRole::Id))
            .col(integer_uniq(UserRole::UserId))
            .col(string(UserRole::Role).default("user"))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_user_role_user")
                    .from(UserRole::Table, UserRole::UserId)
                    .to(User::Table, User::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        let table = table_auto(AuthToken::Table)
            .col(pk_auto(AuthToken::Id))
            .col(integer(AuthToken::UserId))
            .col(string_uniq(AuthToken::TokenHash))
            .col(timestamp(AuthToken::ExpiresAt))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_auth_token_user")
                    .from(AuthToken::Table, AuthToken::UserId)
                    .to(User::Table, User::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthToken::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserRole::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}
