pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
        let json = serde_json::to_string(&h).expect("serialize health");
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}
