//! Reusable config and API response bodies.

use serde_json::{json, Value};

pub const HELP_HINT: &str = "for help, please reach out to us on discord";

pub fn python_config(api_url: &str) -> String {
    format!("language = \"python\"\napi-url = \"{}\"\n", api_url)
}

/// Three versions: 1 success (active), 2 success, 3 failure.
pub fn version_listing() -> Value {
    json!({
        "versions": [
            {
                "version": 1,
                "language": "python",
                "compile_status": "success",
                "compiled_at": "2026-10-01T12:00:00Z",
                "submitted_at": "2026-10-01T11:59:00Z"
            },
            {
                "version": 2,
                "language": "python",
                "compile_status": "success",
                "compiled_at": "2026-10-02T08:30:00Z",
                "submitted_at": "2026-10-02T08:29:00Z"
            },
            {
                "version": 3,
                "language": "python",
                "compile_status": "failure",
                "compiled_at": "2026-10-03T17:10:00Z",
                "submitted_at": "2026-10-03T17:09:00Z"
            }
        ],
        "active_version": 1
    })
}

pub fn compilation(success: bool, error_message: Option<&str>, build_log: &str) -> Value {
    json!({
        "status": if success { "success" } else { "failure" },
        "result": {
            "success": success,
            "error_message": error_message,
            "build_log": build_log
        }
    })
}

pub fn pending_compilation() -> Value {
    json!({
        "status": "pending",
        "result": {"success": false, "build_log": ""}
    })
}
