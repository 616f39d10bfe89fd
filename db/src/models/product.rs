use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};

use super::rayon;

/// A product on the shelves, belonging to exactly one rayon.
///
/// `stock` is the only field mutated concurrently: reconciliation jobs
/// decrement it with a server-side column expression, never by loading and
/// re-saving the row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub rayon_id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i32,
    /// At or below this level the product shows up in low-stock reporting.
    pub stock_threshold: i32,
    pub is_popular: bool,
    pub is_on_sale: bool,
    /// Effective unit price while `is_on_sale` is set.
    pub sale_price: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rayon::Entity",
        from = "Column::RayonId",
        to = "super::rayon::Column::Id",
        on_delete = "Cascade"
    )]
    Rayon,

    #[sea_orm(has_many = "super::sale::Entity")]
    Sale,
}

impl Related<super::rayon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rayon.def()
    }
}

impl Related<super::sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sale.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for creating or fully replacing a product.
#[derive(Debug, Clone)]
pub struct ProductData {
    pub rayon_id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i32,
    pub stock_threshold: i32,
    pub is_popular: bool,
    pub is_on_sale: bool,
    pub sale_price: Option<f64>,
}

impl Model {
    pub async fn create(db: &DbConn, data: ProductData) -> Result<Model, DbErr> {
        let now = Utc::now();
        let product = ActiveModel {
            rayon_id: Set(data.rayon_id),
            name: Set(data.name),
            category: Set(data.category),
            price: Set(data.price),
            stock: Set(data.stock),
            stock_threshold: Set(data.stock_threshold),
            is_popular: Set(data.is_popular),
            is_on_sale: Set(data.is_on_sale),
            sale_price: Set(data.sale_price),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        product.insert(db).await
    }

    pub async fn update(db: &DbConn, id: i64, data: ProductData) -> Result<Model, DbErr> {
        let product = ActiveModel {
            id: Set(id),
            rayon_id: Set(data.rayon_id),
            name: Set(data.name),
            category: Set(data.category),
            price: Set(data.price),
            stock: Set(data.stock),
            stock_threshold: Set(data.stock_threshold),
            is_popular: Set(data.is_popular),
            is_on_sale: Set(data.is_on_sale),
            sale_price: Set(data.sale_price),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        product.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    pub async fn find_with_rayon(
        db: &DbConn,
        id: i64,
    ) -> Result<Option<(Model, Option<rayon::Model>)>, DbErr> {
        Entity::find_by_id(id)
            .find_also_related(rayon::Entity)
            .one(db)
            .await
    }

    pub async fn list_with_rayon(
        db: &DbConn,
    ) -> Result<Vec<(Model, Option<rayon::Model>)>, DbErr> {
        Entity::find().find_also_related(rayon::Entity).all(db).await
    }

    /// Substring match on name, exact match on category and rayon; filters
    /// that were not supplied are not applied at all.
    pub async fn search(
        db: &DbConn,
        name: Option<&str>,
        category: Option<&str>,
        rayon_id: Option<i64>,
    ) -> Result<Vec<(Model, Option<rayon::Model>)>, DbErr> {
        let mut query = Entity::find();

        if let Some(name) = name {
            query = query.filter(Column::Name.contains(name));
        }
        if let Some(category) = category {
            query = query.filter(Column::Category.eq(category));
        }
        if let Some(rayon_id) = rayon_id {
            query = query.filter(Column::RayonId.eq(rayon_id));
        }

        query.find_also_related(rayon::Entity).all(db).await
    }

    /// Despite the endpoint name, flags that are both set combine with AND,
    /// matching the behavior clients already depend on.
    pub async fn popular_or_on_sale(
        db: &DbConn,
        popular: bool,
        on_sale: bool,
    ) -> Result<Vec<(Model, Option<rayon::Model>)>, DbErr> {
        let mut query = Entity::find();

        if popular {
            query = query.filter(Column::IsPopular.eq(true));
        }
        if on_sale {
            query = query.filter(Column::IsOnSale.eq(true));
        }

        query.find_also_related(rayon::Entity).all(db).await
    }

    /// All products at or below their own threshold.
    pub async fn low_stock(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Expr::col(Column::Stock).lte(Expr::col(Column::StockThreshold)))
            .all(db)
            .await
    }

    /// Atomic, server-side `stock = stock - quantity`. Returns the number of
    /// rows touched; zero means the product no longer exists.
    pub async fn decrement_stock(
        db: &DbConn,
        product_id: i64,
        quantity: i32,
    ) -> Result<u64, DbErr> {
        let result = Entity::update_many()
            .col_expr(Column::Stock, Expr::col(Column::Stock).sub(quantity))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(product_id))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }
}
