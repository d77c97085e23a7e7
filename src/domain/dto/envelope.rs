//! 응답 봉투
//!
//! 모든 엔드포인트가 공유하는 바깥 JSON 구조입니다:
//! `{status, message, isSuccess, data}`. 성공 응답은 이 모듈에서,
//! 실패 응답은 `AppError::error_response`에서 같은 모양으로 만듭니다.

use serde::Serialize;

/// 리소스 독립적인 응답 봉투
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    pub is_success: bool,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 성공 봉투를 만듭니다
    pub fn success(message: &str, data: T) -> Self {
        Self {
            status: "Success",
            message: message.to_string(),
            is_success: true,
            data: Some(data),
        }
    }

    /// 데이터 없는 성공 봉투를 만듭니다 (삭제 응답 등)
    pub fn success_empty(message: &str) -> Self {
        Self {
            status: "Success",
            message: message.to_string(),
            is_success: true,
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_has_the_contract_shape() {
        let body = serde_json::to_value(ApiResponse::success(
            "Success get products data",
            serde_json::json!({ "totalData": 0 }),
        ))
        .unwrap();

        assert_eq!(body["status"], "Success");
        assert_eq!(body["isSuccess"], true);
        assert_eq!(body["message"], "Success get products data");
        assert_eq!(body["data"]["totalData"], 0);
    }
}
