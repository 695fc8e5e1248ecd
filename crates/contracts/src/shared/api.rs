use serde::Deserialize;
use thiserror::Error;

/// Ошибка обращения к REST API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("request timed out")]
    TimedOut,

    /// Запрос прерван, потому что экран уже закрыт
    #[error("request cancelled")]
    Cancelled,
}

/// Тело ошибки, которое возвращает backend (`message` или `error`)
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiError {
    /// Строит ошибку статуса из кода и (необязательного) JSON-тела ответа
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        ApiError::Status { status, message }
    }

    /// Результат нужно молча отбросить
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// Текст для уведомления пользователю
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Status { status: 400, .. } => "Dữ liệu gửi lên không hợp lệ".to_string(),
            ApiError::Status { status: 404, .. } => "Không tìm thấy dữ liệu".to_string(),
            ApiError::Status { status: 409, .. } => "Dữ liệu bị trùng lặp".to_string(),
            ApiError::Status { status, .. } if *status >= 500 => {
                "Máy chủ gặp sự cố, vui lòng thử lại sau".to_string()
            }
            ApiError::Status { status, .. } => format!("Yêu cầu thất bại (mã {status})"),
            ApiError::Network(_) => "Không thể kết nối tới máy chủ".to_string(),
            ApiError::Decode(_) => "Phản hồi từ máy chủ không hợp lệ".to_string(),
            ApiError::TimedOut => "Máy chủ phản hồi quá lâu".to_string(),
            ApiError::Cancelled => "Yêu cầu đã bị hủy".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_body() {
        let err = ApiError::from_status(422, r#"{"message":"Email đã tồn tại"}"#);
        assert_eq!(err.user_message(), "Email đã tồn tại");

        let err = ApiError::from_status(400, r#"{"error":"bad payload"}"#);
        assert_eq!(err.user_message(), "bad payload");
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(
            ApiError::from_status(404, "not json").user_message(),
            "Không tìm thấy dữ liệu"
        );
        assert_eq!(
            ApiError::from_status(503, r#"{"message":"  "}"#).user_message(),
            "Máy chủ gặp sự cố, vui lòng thử lại sau"
        );
        assert_eq!(
            ApiError::from_status(418, "").user_message(),
            "Yêu cầu thất bại (mã 418)"
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::Status {
            status: 500,
            message: Some("boom".into()),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert_eq!(ApiError::from_status(500, "").to_string(), "HTTP 500");
        assert!(ApiError::Cancelled.is_cancelled());
        assert!(!ApiError::TimedOut.is_cancelled());
    }
}
