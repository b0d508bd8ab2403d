//! Event context payloads.

use serde::{Deserialize, Serialize};

/// Snapshot the editor sends along with every lifecycle notification.
///
/// Field names match the keys the bundled init.vim collects before calling
/// back into the shell, hence the camelCase rename.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventContext {
    /// Absolute path of the current buffer, empty for unnamed buffers.
    pub buffer_full_path: String,

    /// Buffer number.
    pub buffer_number: u64,

    /// Whether the buffer has unsaved changes.
    pub modified: bool,

    /// Cursor line (1-based).
    pub line: u64,

    /// Cursor column (1-based).
    pub column: u64,

    /// Byte offset of the cursor within the buffer.
    pub byte: u64,

    /// Buffer filetype, e.g. "rust".
    pub filetype: String,

    /// Window number.
    pub window_number: u64,

    /// Cursor column within the window.
    pub wincol: u64,

    /// Cursor line within the window.
    pub winline: u64,

    /// First visible buffer line in the window.
    pub window_top_line: u64,

    /// Last visible buffer line in the window.
    pub window_bottom_line: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_editor_payload() {
        let ctx: EventContext = serde_json::from_str(
            r#"{
                "bufferFullPath": "/tmp/scratch.rs",
                "bufferNumber": 3,
                "modified": true,
                "line": 12,
                "column": 4,
                "byte": 240,
                "filetype": "rust",
                "windowNumber": 1,
                "wincol": 4,
                "winline": 12,
                "windowTopLine": 1,
                "windowBottomLine": 40
            }"#,
        )
        .unwrap();

        assert_eq!(ctx.buffer_full_path, "/tmp/scratch.rs");
        assert_eq!(ctx.line, 12);
        assert!(ctx.modified);
    }

    #[test]
    fn test_missing_fields_default() {
        let ctx: EventContext = serde_json::from_str(r#"{"line": 5}"#).unwrap();
        assert_eq!(ctx.line, 5);
        assert_eq!(ctx.buffer_number, 0);
        assert!(ctx.filetype.is_empty());
    }
}
