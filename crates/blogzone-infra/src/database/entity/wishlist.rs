//! Wishlist entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blogzone_core::domain::WishlistEntry;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wishlist")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub wishlist_email: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub blog: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for WishlistEntry {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            wishlist_email: model.wishlist_email,
            blog: super::into_object(model.blog),
        }
    }
}

impl From<WishlistEntry> for ActiveModel {
    fn from(entry: WishlistEntry) -> Self {
        Self {
            id: Set(entry.id),
            wishlist_email: Set(entry.wishlist_email),
            blog: Set(Json::Object(entry.blog)),
        }
    }
}
