use serde::{Deserialize, Serialize};

/// Selects how [`crate::core::sort::sort`] parses and orders records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum SortKind {
    /// Records are `i64` ids, smallest first.
    IdAscending,
    IdDescending,
    /// Ordinal string order, a to z.
    StringAscending,
    StringDescending,
    /// `dd.MM.yyyy` dates, oldest first.
    DateOldToNew,
    DateNewToOld,
}

impl SortKind {
    pub fn is_descending(self) -> bool {
        matches!(
            self,
            SortKind::IdDescending | SortKind::StringDescending | SortKind::DateNewToOld
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoragePermission {
    ReadExternalStorage,
    WriteExternalStorage,
}

/// Outcome code handed back by the platform after a settings screen closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityResult {
    Ok,
    Canceled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantResult {
    Granted,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    /// A (new) request was issued; the answer arrives through a result callback.
    Requested,
    /// The callback did not concern storage permissions.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_kind_serde_names() {
        let json = serde_json::to_string(&SortKind::DateNewToOld).unwrap();
        assert_eq!(json, "\"date_new_to_old\"");
        let kind: SortKind = serde_json::from_str("\"id_ascending\"").unwrap();
        assert_eq!(kind, SortKind::IdAscending);
    }

    #[test]
    fn test_sort_kind_direction() {
        assert!(SortKind::IdDescending.is_descending());
        assert!(!SortKind::StringAscending.is_descending());
        assert!(!SortKind::DateOldToNew.is_descending());
    }
}
