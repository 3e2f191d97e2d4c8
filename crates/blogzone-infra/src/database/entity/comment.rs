//! Comment entity for SeaORM.
//!
//! `blog_id` is a text column, not a foreign key: comments reference posts
//! by the identifier string the client sent.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blogzone_core::domain::Comment;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub blog_id: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub content: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            blog_id: model.blog_id,
            content: super::into_object(model.content),
        }
    }
}

impl From<Comment> for ActiveModel {
    fn from(comment: Comment) -> Self {
        Self {
            id: Set(comment.id),
            blog_id: Set(comment.blog_id),
            content: Set(Json::Object(comment.content)),
        }
    }
}
