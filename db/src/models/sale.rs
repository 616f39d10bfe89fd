use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::QuerySelect;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Alias, Expr};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{product, user};

/// An immutable record of a completed purchase. `total_price` is snapshotted
/// at creation and never recomputed, even if product pricing changes later.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
    pub quantity: i32,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// One row of the top-products rollup: total units sold per product.
#[derive(Debug, Clone)]
pub struct TopProduct {
    pub product_id: i64,
    pub total_quantity: i64,
    pub product: Option<product::Model>,
}

impl Model {
    pub async fn create(
        db: &DbConn,
        product_id: i64,
        user_id: i64,
        quantity: i32,
        total_price: f64,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let sale = ActiveModel {
            product_id: Set(product_id),
            user_id: Set(user_id),
            quantity: Set(quantity),
            total_price: Set(total_price),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        sale.insert(db).await
    }

    pub async fn list_with_related(
        db: &DbConn,
    ) -> Result<Vec<(Model, Option<product::Model>, Option<user::Model>)>, DbErr> {
        let sales = Entity::find()
            .find_also_related(product::Entity)
            .all(db)
            .await?;
        Self::attach_users(db, sales).await
    }

    pub async fn find_with_related(
        db: &DbConn,
        id: i64,
    ) -> Result<Option<(Model, Option<product::Model>, Option<user::Model>)>, DbErr> {
        let sale = Entity::find_by_id(id)
            .find_also_related(product::Entity)
            .one(db)
            .await?;
        let Some(pair) = sale else {
            return Ok(None);
        };
        Ok(Self::attach_users(db, vec![pair]).await?.pop())
    }

    /// Top five products by total units sold, descending, ties broken by
    /// product id ascending for determinism.
    pub async fn top_products(db: &DbConn) -> Result<Vec<TopProduct>, DbErr> {
        let rows: Vec<(i64, i64)> = Entity::find()
            .select_only()
            .column(Column::ProductId)
            .column_as(Column::Quantity.sum(), "total_quantity")
            .group_by(Column::ProductId)
            .order_by_desc(Expr::col(Alias::new("total_quantity")))
            .order_by_asc(Column::ProductId)
            .limit(5)
            .into_tuple()
            .all(db)
            .await?;

        let ids: Vec<i64> = rows.iter().map(|(product_id, _)| *product_id).collect();
        let mut products: HashMap<i64, product::Model> = product::Entity::find()
            .filter(product::Column::Id.is_in(ids))
            .all(db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        Ok(rows
            .into_iter()
            .map(|(product_id, total_quantity)| TopProduct {
                product_id,
                total_quantity,
                product: products.remove(&product_id),
            })
            .collect())
    }

    async fn attach_users(
        db: &DbConn,
        sales: Vec<(Model, Option<product::Model>)>,
    ) -> Result<Vec<(Model, Option<product::Model>, Option<user::Model>)>, DbErr> {
        let user_ids: Vec<i64> = sales.iter().map(|(sale, _)| sale.user_id).collect();
        let users: HashMap<i64, user::Model> = user::Entity::find()
            .filter(user::Column::Id.is_in(user_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(sales
            .into_iter()
            .map(|(sale, product)| {
                let user = users.get(&sale.user_id).cloned();
                (sale, product, user)
            })
            .collect())
    }
}
