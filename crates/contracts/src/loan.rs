use serde::{Deserialize, Serialize};

/// Тело ответа `POST /loan-application`
///
/// Every field is optional on the wire: an accepted application carries
/// `application_id`, a rejected one carries `detail`, and an empty body
/// still deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoanSubmitReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub application_id: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_accepted_payload() {
        let reply: LoanSubmitReply = serde_json::from_str(
            r#"{"success":true,"message":"Application submitted successfully","application_id":"APP-004271"}"#,
        )
        .unwrap();
        assert!(reply.success);
        assert_eq!(reply.application_id.as_deref(), Some("APP-004271"));
        assert!(reply.detail.is_none());
    }

    #[test]
    fn parses_rejected_payload() {
        let reply: LoanSubmitReply =
            serde_json::from_str(r#"{"success":false,"detail":"Invalid ZIP"}"#).unwrap();
        assert!(!reply.success);
        assert_eq!(reply.detail.as_deref(), Some("Invalid ZIP"));
    }

    #[test]
    fn parses_empty_body() {
        let reply: LoanSubmitReply = serde_json::from_str("{}").unwrap();
        assert!(!reply.success);
        assert!(reply.message.is_none());
        assert!(reply.application_id.is_none());
        assert!(reply.detail.is_none());
    }
}
