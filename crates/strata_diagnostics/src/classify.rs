//! Fatal-diagnostic filtering over raw compiler output.

use crate::raw::RawDiagnostic;
use serde_json::Value;

/// Filters the fatal diagnostics out of a compiler's raw output.
///
/// Inspects `data["errors"]`, which may be absent or empty on a clean
/// compile. Structured records are fatal only at `error` severity, legacy
/// strings unless they mention `Warning`; entries matching neither schema
/// generation are ignored, like any non-`error` severity. The returned list
/// being empty is the sole success signal; callers must not infer success
/// from the absence of an `errors` field alone.
pub fn detect_compile_errors(data: &Value) -> Vec<String> {
    let Some(entries) = data.get("errors").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut fatal = Vec::new();

    for entry in entries {
        let Ok(diag) = serde_json::from_value::<RawDiagnostic>(entry.clone()) else {
            continue;
        };

        if diag.is_fatal() {
            fatal.push(
                diag.text()
                    .map(str::to_string)
                    .unwrap_or_else(|| entry.to_string()),
            );
        }
    }

    fatal
}
