//! `blogs`, `wishlist` and `comments`; primary keys are the only indexes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Blogs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Blogs::Title).text().not_null())
                    .col(ColumnDef::new(Blogs::ImageUrl).text().not_null())
                    .col(ColumnDef::new(Blogs::ShortDescription).text().not_null())
                    .col(ColumnDef::new(Blogs::LongDescription).text().not_null())
                    .col(ColumnDef::new(Blogs::Category).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Wishlist::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Wishlist::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Wishlist::WishlistEmail).string().not_null())
                    .col(ColumnDef::new(Wishlist::Blog).json_binary().not_null())
                    .to_owned(),
            )
            .await?;

        // `blog_id` is text on purpose: no foreign key to `blogs`.
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Comments::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Comments::BlogId).string().not_null())
                    .col(ColumnDef::new(Comments::Content).json_binary().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Wishlist::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Id,
    Title,
    ImageUrl,
    ShortDescription,
    LongDescription,
    Category,
}

#[derive(DeriveIden)]
enum Wishlist {
    Table,
    Id,
    WishlistEmail,
    Blog,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    BlogId,
    Content,
}
