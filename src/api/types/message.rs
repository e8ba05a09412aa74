use serde::{Deserialize, Serialize};

/// The `{"msg": ...}` envelope used for acknowledgements and errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&MessageResponse::new("Registrado")).unwrap();
        assert_eq!(json, r#"{"msg":"Registrado"}"#);
    }
}
