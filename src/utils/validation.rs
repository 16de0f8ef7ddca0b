use crate::utils::error::{Result, UtilsError};

/// Characters that may not appear in file or folder names.
pub const RESERVED_CHARS: [char; 13] = [
    '|', '\\', '?', '*', '<', '"', ':', '>', '+', '[', ']', '/', '\'',
];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(UtilsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(UtilsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UtilsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects empty names and names containing any of [`RESERVED_CHARS`].
pub fn validate_entry_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(UtilsError::InvalidName {
            name: name.to_string(),
            reason: "name cannot be empty".to_string(),
        });
    }

    if let Some(c) = name.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return Err(UtilsError::InvalidName {
            name: name.to_string(),
            reason: format!(
                "'{}' is reserved; names cannot contain any of:{}",
                c,
                reserved_chars_listing()
            ),
        });
    }

    Ok(())
}

fn reserved_chars_listing() -> String {
    RESERVED_CHARS.iter().map(|c| format!(" {}", c)).collect()
}
