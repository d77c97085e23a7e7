//! 쿼리 파라미터 → 술어 변환기
//!
//! 리소스별 필드 정책표에 따라 요청의 쿼리 파라미터를 구조화된
//! [`FilterSpec`]으로 변환합니다. 규칙:
//!
//! - 없거나 빈 문자열인 파라미터는 어떤 술어도 만들지 않는다 (기본 필터 없음)
//! - 알 수 없는 파라미터는 역직렬화 단계에서 조용히 무시된다
//! - 숫자 필드(`stock`, `age`, `shopId`)에 숫자가 아닌 값이 들어오면
//!   어떤 행과도 일치하지 않는 [`Predicate::Never`]를 만든다 — 쿼리를
//!   실패시키지 않고, 400으로 거절하지도 않는다
//!
//! ## 필드 정책표
//!
//! | 리소스 | 필드 | 파라미터 | 매칭 |
//! |--------|------|----------|------|
//! | Product | name | `productName` | CONTAINS_CI |
//! | Product | stock | `stock` | EXACT |
//! | Product(상위 shop) | name | `shopName` | CONTAINS_CI |
//! | Shop | name | `shopName` | CONTAINS_CI |
//! | Shop | admin_email | `adminEmail` | CONTAINS_CI |
//! | Shop(하위 product) | name | `productName` | CONTAINS_CI |
//! | Shop(하위 product) | stock | `stock` | EXACT |
//! | Shop(소유 user) | name | `userName` | CONTAINS_CI |
//! | User | name | `name` | CONTAINS_CI |
//! | User | age | `age` | EXACT |
//! | User | role | `role` | EXACT |
//! | User | address | `address` | CONTAINS_CI |
//! | User | shop_id | `shopId` | EXACT |

/// 저장된 레코드의 한 필드가 만족해야 하는 조건
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// 문자열 완전 일치
    Exact(String),
    /// 정수 완전 일치
    ExactInt(i64),
    /// 대소문자 무시 부분 문자열 일치
    ContainsCi(String),
    /// 어떤 행과도 일치하지 않음 (숫자 필드에 숫자가 아닌 입력이 온 경우)
    Never,
}

impl Predicate {
    /// 문자열 값이 이 술어를 만족하는지 평가합니다
    ///
    /// SQL 변환과 동일한 의미를 가지며, 단위 테스트와 인메모리
    /// 리포지토리 구현에서 사용됩니다.
    pub fn matches_text(&self, candidate: &str) -> bool {
        match self {
            Predicate::Exact(value) => candidate == value,
            Predicate::ExactInt(value) => candidate.parse::<i64>() == Ok(*value),
            Predicate::ContainsCi(value) => candidate
                .to_lowercase()
                .contains(&value.to_lowercase()),
            Predicate::Never => false,
        }
    }

    /// 정수 값이 이 술어를 만족하는지 평가합니다
    ///
    /// 정책표는 정수 필드에 부분 일치를 적용하지 않고, SQL 변환도
    /// 정수 컬럼에 `ILIKE`를 내보내지 않습니다. `ContainsCi`는 여기서
    /// 어떤 값과도 일치하지 않습니다.
    pub fn matches_int(&self, candidate: i64) -> bool {
        match self {
            Predicate::Exact(value) => value.parse::<i64>() == Ok(candidate),
            Predicate::ExactInt(value) => *value == candidate,
            Predicate::ContainsCi(_) => false,
            Predicate::Never => false,
        }
    }
}

/// 컬럼 이름과 술어의 쌍
///
/// 컬럼 이름은 정책표에 있는 `&'static str`만 사용하므로 사용자 입력이
/// SQL 식별자 위치에 끼어들 수 없습니다.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    pub column: &'static str,
    pub predicate: Predicate,
}

/// 한 리소스(또는 연관 리소스)에 적용할 술어 집합
///
/// 요청마다 새로 만들어지고 쿼리 실행 후 폐기됩니다. 술어들은 AND로
/// 결합됩니다.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    filters: Vec<FieldFilter>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// 술어가 하나도 없는지 여부
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn filters(&self) -> &[FieldFilter] {
        &self.filters
    }

    /// 대소문자 무시 부분 일치 술어를 추가합니다
    ///
    /// 값이 없거나 빈 문자열이면 아무것도 추가하지 않습니다.
    pub fn contains_ci(mut self, column: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = present(value) {
            self.filters.push(FieldFilter {
                column,
                predicate: Predicate::ContainsCi(value.to_string()),
            });
        }
        self
    }

    /// 문자열 완전 일치 술어를 추가합니다
    pub fn exact(mut self, column: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = present(value) {
            self.filters.push(FieldFilter {
                column,
                predicate: Predicate::Exact(value.to_string()),
            });
        }
        self
    }

    /// 정수 완전 일치 술어를 추가합니다
    ///
    /// 값이 정수로 파싱되지 않으면 [`Predicate::Never`]를 추가합니다.
    /// 쿼리는 깨지지 않고, 해당 목록 조회는 빈 결과를 반환하게 됩니다.
    pub fn exact_int(mut self, column: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = present(value) {
            let predicate = match value.trim().parse::<i64>() {
                Ok(number) => Predicate::ExactInt(number),
                Err(_) => Predicate::Never,
            };
            self.filters.push(FieldFilter { column, predicate });
        }
        self
    }
}

/// 존재하면서 비어 있지 않은 파라미터만 통과시킵니다
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// 상품 목록 필터: 자체 필터와 상위 shop 필터
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    pub product: FilterSpec,
    pub shop: FilterSpec,
}

/// `GET /products` 쿼리 파라미터를 정책표대로 변환합니다
pub fn for_products(
    product_name: Option<&str>,
    stock: Option<&str>,
    shop_name: Option<&str>,
) -> ProductFilters {
    ProductFilters {
        product: FilterSpec::new()
            .contains_ci("name", product_name)
            .exact_int("stock", stock),
        shop: FilterSpec::new().contains_ci("name", shop_name),
    }
}

/// 상점 목록 필터: 자체 필터와 하위 product, 소유 user 필터
#[derive(Debug, Clone, Default)]
pub struct ShopFilters {
    pub shop: FilterSpec,
    pub product: FilterSpec,
    pub owner: FilterSpec,
}

/// `GET /shops` 쿼리 파라미터를 정책표대로 변환합니다
pub fn for_shops(
    shop_name: Option<&str>,
    admin_email: Option<&str>,
    product_name: Option<&str>,
    stock: Option<&str>,
    user_name: Option<&str>,
) -> ShopFilters {
    ShopFilters {
        shop: FilterSpec::new()
            .contains_ci("name", shop_name)
            .contains_ci("admin_email", admin_email),
        product: FilterSpec::new()
            .contains_ci("name", product_name)
            .exact_int("stock", stock),
        owner: FilterSpec::new().contains_ci("name", user_name),
    }
}

/// `GET /users` 쿼리 파라미터를 정책표대로 변환합니다
pub fn for_users(
    name: Option<&str>,
    age: Option<&str>,
    role: Option<&str>,
    address: Option<&str>,
    shop_id: Option<&str>,
) -> FilterSpec {
    FilterSpec::new()
        .contains_ci("name", name)
        .exact_int("age", age)
        .exact("role", role)
        .contains_ci("address", address)
        .exact_int("shop_id", shop_id)
}
