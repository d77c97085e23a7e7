//! FilterSpec → SQL 변환
//!
//! 구조화된 술어를 `sqlx::QueryBuilder`에 바인딩 파라미터로 밀어
//! 넣습니다. 컬럼 이름은 정책표의 `&'static str`만 오므로 식별자
//! 위치에 사용자 입력이 끼어들 수 없고, 값은 전부 바인딩됩니다.

use sqlx::{Postgres, QueryBuilder};

use crate::query::filter::{FilterSpec, Predicate};

/// 술어 집합을 `AND …` 절들로 밀어 넣습니다
///
/// 호출하는 쿼리는 `WHERE 1=1` 같은 항진 조건으로 시작해야 합니다.
/// `CONTAINS_CI`는 `ILIKE '%…%'`로, `EXACT`는 `=`로, `Never`는
/// 상수 `FALSE`로 변환됩니다.
pub fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, alias: &str, spec: &FilterSpec) {
    for filter in spec.filters() {
        builder.push(" AND ");
        match &filter.predicate {
            Predicate::ContainsCi(value) => {
                builder.push(format!("{}.{} ILIKE ", alias, filter.column));
                builder.push_bind(format!("%{}%", value));
            }
            Predicate::Exact(value) => {
                builder.push(format!("{}.{} = ", alias, filter.column));
                builder.push_bind(value.clone());
            }
            Predicate::ExactInt(value) => {
                builder.push(format!("{}.{} = ", alias, filter.column));
                builder.push_bind(*value);
            }
            Predicate::Never => {
                builder.push("FALSE");
            }
        }
    }
}

/// 페이지네이션 절(`ORDER BY … LIMIT … OFFSET …`)을 밀어 넣습니다
///
/// 정렬은 삽입 순서(기본 키 오름차순)로 고정합니다. 그 외의 정렬은
/// 이 시스템의 계약에 없습니다.
pub fn push_page(
    builder: &mut QueryBuilder<'_, Postgres>,
    alias: &str,
    page: &crate::query::PageRequest,
) {
    builder.push(format!(" ORDER BY {}.id LIMIT ", alias));
    builder.push_bind(page.limit());
    builder.push(" OFFSET ");
    builder.push_bind(page.offset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter::for_products;
    use crate::query::PageRequest;

    #[test]
    fn contains_ci_becomes_a_bound_ilike_clause() {
        let filters = for_products(Some("shirt"), None, None);
        let mut builder = QueryBuilder::new("SELECT count(*) FROM products p WHERE 1=1");

        push_filters(&mut builder, "p", &filters.product);

        assert_eq!(
            builder.into_sql(),
            "SELECT count(*) FROM products p WHERE 1=1 AND p.name ILIKE $1"
        );
    }

    #[test]
    fn exact_int_becomes_a_bound_equality() {
        let filters = for_products(None, Some("12"), None);
        let mut builder = QueryBuilder::new("SELECT count(*) FROM products p WHERE 1=1");

        push_filters(&mut builder, "p", &filters.product);

        assert_eq!(
            builder.into_sql(),
            "SELECT count(*) FROM products p WHERE 1=1 AND p.stock = $1"
        );
    }

    #[test]
    fn never_becomes_constant_false() {
        let filters = for_products(None, Some("not-a-number"), None);
        let mut builder = QueryBuilder::new("SELECT count(*) FROM products p WHERE 1=1");

        push_filters(&mut builder, "p", &filters.product);

        assert_eq!(
            builder.into_sql(),
            "SELECT count(*) FROM products p WHERE 1=1 AND FALSE"
        );
    }

    #[test]
    fn empty_spec_pushes_nothing() {
        let filters = for_products(None, None, None);
        let mut builder = QueryBuilder::new("SELECT count(*) FROM products p WHERE 1=1");

        push_filters(&mut builder, "p", &filters.product);

        assert_eq!(
            builder.into_sql(),
            "SELECT count(*) FROM products p WHERE 1=1"
        );
    }

    #[test]
    fn page_clause_binds_limit_and_offset() {
        let page = PageRequest::from_params(Some("2"), Some("5"));
        let mut builder = QueryBuilder::new("SELECT * FROM products p WHERE 1=1");

        push_page(&mut builder, "p", &page);

        assert_eq!(
            builder.into_sql(),
            "SELECT * FROM products p WHERE 1=1 ORDER BY p.id LIMIT $1 OFFSET $2"
        );
    }
}
