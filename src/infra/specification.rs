//! Specifications: composable filter predicates rendered as SeaORM
//! conditions.

use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{ColumnTrait, Condition, IntoSimpleExpr};

use super::repositories::entities::{job_offer, transport_offer};
use crate::domain::{JobOfferFilter, TransportOfferFilter};

/// A filter that can be turned into a query condition.
///
/// Absent criteria match every row.
pub trait Specification {
    fn to_condition(&self) -> Condition;
}

/// Add `column = value` when the criterion is present.
fn equals<C, V>(condition: Condition, column: C, value: Option<V>) -> Condition
where
    C: ColumnTrait,
    V: Into<sea_orm::Value>,
{
    match value {
        Some(value) => condition.add(column.eq(value)),
        None => condition,
    }
}

const LIKE_ESCAPE: char = '\\';

/// Quote LIKE wildcards so the phrase matches literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Case-insensitive substring match, identical on PostgreSQL and SQLite.
fn contains_ignore_case<C: ColumnTrait>(column: C, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(column.into_simple_expr()))
        .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

/// Match a phrase against title or description.
fn phrase<C: ColumnTrait>(
    condition: Condition,
    title: C,
    description: C,
    phrase: Option<&str>,
) -> Condition {
    match phrase.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => {
            let pattern = format!("%{}%", escape_like(&p.to_lowercase()));
            condition.add(
                Condition::any()
                    .add(contains_ignore_case(title, &pattern))
                    .add(contains_ignore_case(description, &pattern)),
            )
        }
        None => condition,
    }
}

impl Specification for JobOfferFilter {
    fn to_condition(&self) -> Condition {
        use job_offer::Column;

        let mut condition = Condition::all();
        condition = equals(condition, Column::Mode, self.mode.map(|m| m.as_str()));
        condition = equals(condition, Column::Region, self.region.clone());
        condition = equals(condition, Column::City, self.city.clone());
        phrase(condition, Column::Title, Column::Description, self.phrase.as_deref())
    }
}

impl Specification for TransportOfferFilter {
    fn to_condition(&self) -> Condition {
        use transport_offer::Column;

        let mut condition = Condition::all();
        condition = equals(condition, Column::OriginRegion, self.origin_region.clone());
        condition = equals(condition, Column::OriginCity, self.origin_city.clone());
        condition = equals(condition, Column::DestinationRegion, self.destination_region.clone());
        condition = equals(condition, Column::DestinationCity, self.destination_city.clone());
        condition = equals(condition, Column::TransportDate, self.transport_date);
        if let Some(capacity) = self.capacity {
            condition = condition.add(Column::Capacity.gte(capacity));
        }
        phrase(condition, Column::Title, Column::Description, self.phrase.as_deref())
    }
}
