use crate::core::PermissionPlatform;
use crate::domain::model::{ActivityResult, GrantResult, PermissionStatus, StoragePermission};
use crate::utils::error::Result;

/// Request code used for the all-files-access settings screen on API R.
pub const REQUEST_CODE_API_R: i32 = 1;

/// Request code used for runtime storage permissions below API R.
pub const REQUEST_CODE_API_BELOW_R: i32 = 2;

/// Android 11.
pub const API_R: u32 = 30;

const STORAGE_PERMISSIONS: [StoragePermission; 2] = [
    StoragePermission::ReadExternalStorage,
    StoragePermission::WriteExternalStorage,
];

pub struct PermissionManager<P: PermissionPlatform> {
    platform: P,
}

impl<P: PermissionPlatform> PermissionManager<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    fn is_api_r(&self) -> bool {
        self.platform.sdk_version() == API_R
    }

    pub fn check_storage_permissions(&self) -> bool {
        if self.is_api_r() {
            self.platform.is_external_storage_manager()
        } else {
            STORAGE_PERMISSIONS
                .iter()
                .all(|permission| self.platform.is_granted(*permission))
        }
    }

    /// Requests storage access unless it is already granted.
    pub fn ask_for_storage_permissions(&self) -> Result<PermissionStatus> {
        if self.check_storage_permissions() {
            tracing::info!("Permissions Granted");
            return Ok(PermissionStatus::Granted);
        }
        self.request_storage_permissions()?;
        Ok(PermissionStatus::Requested)
    }

    /// Handles the result of the all-files-access screen opened on API R.
    pub fn manage_activity_result(
        &self,
        request_code: i32,
        result: ActivityResult,
    ) -> Result<PermissionStatus> {
        if result != ActivityResult::Ok || request_code != REQUEST_CODE_API_R || !self.is_api_r() {
            return Ok(PermissionStatus::Ignored);
        }

        if self.platform.is_external_storage_manager() {
            tracing::info!("Permissions Granted: Android 11");
            Ok(PermissionStatus::Granted)
        } else {
            self.request_storage_permissions()?;
            Ok(PermissionStatus::Requested)
        }
    }

    /// Handles the runtime permission answer below API R. Only the first grant
    /// result (read access) decides the outcome.
    pub fn manage_request_permissions_result(
        &self,
        request_code: i32,
        grant_results: &[GrantResult],
    ) -> Result<PermissionStatus> {
        let Some(first) = grant_results.first() else {
            return Ok(PermissionStatus::Ignored);
        };
        if request_code != REQUEST_CODE_API_BELOW_R {
            return Ok(PermissionStatus::Ignored);
        }

        if *first == GrantResult::Granted {
            tracing::info!("Permissions Granted: Android 10 and below");
            Ok(PermissionStatus::Granted)
        } else {
            self.request_storage_permissions()?;
            Ok(PermissionStatus::Requested)
        }
    }

    fn request_storage_permissions(&self) -> Result<()> {
        if self.is_api_r() {
            let package = self.platform.package_name();
            if let Err(e) = self
                .platform
                .open_app_all_files_settings(&package, REQUEST_CODE_API_R)
            {
                tracing::warn!(
                    "Could not open all-files settings for {}: {}; falling back to generic screen",
                    package,
                    e
                );
                self.platform.open_all_files_settings(REQUEST_CODE_API_R)?;
            }
            Ok(())
        } else {
            self.platform
                .request_permissions(&STORAGE_PERMISSIONS, REQUEST_CODE_API_BELOW_R)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::UtilsError;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        AppSettings(String, i32),
        GenericSettings(i32),
        Request(Vec<StoragePermission>, i32),
    }

    struct FakePlatform {
        sdk: u32,
        storage_manager: bool,
        granted: Vec<StoragePermission>,
        app_settings_fail: bool,
        calls: RefCell<Vec<Call>>,
    }

    impl FakePlatform {
        fn new(sdk: u32) -> Self {
            Self {
                sdk,
                storage_manager: false,
                granted: Vec::new(),
                app_settings_fail: false,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl PermissionPlatform for FakePlatform {
        fn sdk_version(&self) -> u32 {
            self.sdk
        }

        fn is_external_storage_manager(&self) -> bool {
            self.storage_manager
        }

        fn is_granted(&self, permission: StoragePermission) -> bool {
            self.granted.contains(&permission)
        }

        fn package_name(&self) -> String {
            "de.example.app".to_string()
        }

        fn open_app_all_files_settings(&self, package: &str, request_code: i32) -> Result<()> {
            if self.app_settings_fail {
                return Err(UtilsError::PermissionError {
                    message: "activity not found".to_string(),
                });
            }
            self.calls
                .borrow_mut()
                .push(Call::AppSettings(package.to_string(), request_code));
            Ok(())
        }

        fn open_all_files_settings(&self, request_code: i32) -> Result<()> {
            self.calls.borrow_mut().push(Call::GenericSettings(request_code));
            Ok(())
        }

        fn request_permissions(&self, permissions: &[StoragePermission], request_code: i32) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(Call::Request(permissions.to_vec(), request_code));
            Ok(())
        }
    }

    #[test]
    fn test_granted_below_r_needs_both_permissions() {
        let mut platform = FakePlatform::new(29);
        platform.granted = vec![StoragePermission::ReadExternalStorage];
        let manager = PermissionManager::new(platform);
        assert!(!manager.check_storage_permissions());

        let mut platform = FakePlatform::new(29);
        platform.granted = STORAGE_PERMISSIONS.to_vec();
        let manager = PermissionManager::new(platform);
        assert!(manager.check_storage_permissions());
        assert_eq!(
            manager.ask_for_storage_permissions().unwrap(),
            PermissionStatus::Granted
        );
        assert!(manager.platform().calls.borrow().is_empty());
    }

    #[test]
    fn test_ask_below_r_requests_runtime_permissions() {
        let manager = PermissionManager::new(FakePlatform::new(28));
        assert_eq!(
            manager.ask_for_storage_permissions().unwrap(),
            PermissionStatus::Requested
        );
        assert_eq!(
            *manager.platform().calls.borrow(),
            vec![Call::Request(STORAGE_PERMISSIONS.to_vec(), REQUEST_CODE_API_BELOW_R)]
        );
    }

    #[test]
    fn test_ask_on_r_opens_app_settings() {
        let manager = PermissionManager::new(FakePlatform::new(API_R));
        assert_eq!(
            manager.ask_for_storage_permissions().unwrap(),
            PermissionStatus::Requested
        );
        assert_eq!(
            *manager.platform().calls.borrow(),
            vec![Call::AppSettings("de.example.app".to_string(), REQUEST_CODE_API_R)]
        );
    }

    #[test]
    fn test_ask_on_r_falls_back_to_generic_settings() {
        let mut platform = FakePlatform::new(API_R);
        platform.app_settings_fail = true;
        let manager = PermissionManager::new(platform);
        manager.ask_for_storage_permissions().unwrap();
        assert_eq!(
            *manager.platform().calls.borrow(),
            vec![Call::GenericSettings(REQUEST_CODE_API_R)]
        );
    }

    #[test]
    fn test_manage_activity_result() {
        let mut platform = FakePlatform::new(API_R);
        platform.storage_manager = true;
        let manager = PermissionManager::new(platform);
        assert_eq!(
            manager
                .manage_activity_result(REQUEST_CODE_API_R, ActivityResult::Ok)
                .unwrap(),
            PermissionStatus::Granted
        );
        assert_eq!(
            manager
                .manage_activity_result(REQUEST_CODE_API_R, ActivityResult::Canceled)
                .unwrap(),
            PermissionStatus::Ignored
        );
        assert_eq!(
            manager
                .manage_activity_result(REQUEST_CODE_API_BELOW_R, ActivityResult::Ok)
                .unwrap(),
            PermissionStatus::Ignored
        );

        let manager = PermissionManager::new(FakePlatform::new(API_R));
        assert_eq!(
            manager
                .manage_activity_result(REQUEST_CODE_API_R, ActivityResult::Ok)
                .unwrap(),
            PermissionStatus::Requested
        );
    }

    #[test]
    fn test_manage_request_permissions_result() {
        let manager = PermissionManager::new(FakePlatform::new(29));
        assert_eq!(
            manager
                .manage_request_permissions_result(REQUEST_CODE_API_BELOW_R, &[])
                .unwrap(),
            PermissionStatus::Ignored
        );
        assert_eq!(
            manager
                .manage_request_permissions_result(REQUEST_CODE_API_R, &[GrantResult::Granted])
                .unwrap(),
            PermissionStatus::Ignored
        );
        assert_eq!(
            manager
                .manage_request_permissions_result(
                    REQUEST_CODE_API_BELOW_R,
                    &[GrantResult::Granted, GrantResult::Denied]
                )
                .unwrap(),
            PermissionStatus::Granted
        );
        assert_eq!(
            manager
                .manage_request_permissions_result(REQUEST_CODE_API_BELOW_R, &[GrantResult::Denied])
                .unwrap(),
            PermissionStatus::Requested
        );
        assert_eq!(manager.platform().calls.borrow().len(), 1);
    }
}
