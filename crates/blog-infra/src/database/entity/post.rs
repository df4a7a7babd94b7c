//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use blog_core::domain::Post;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            content: model.content,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
///
/// A post without id leaves the key unset so the database assigns it.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: match post.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            title: Set(post.title),
            content: Set(post.content),
        }
    }
}
