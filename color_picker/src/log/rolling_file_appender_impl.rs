// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::{ColorPickerError, CommonResult};

/// Create a (never rotating) file appender for `path_str`. The parent directory is
/// created if it does not exist, and the file is created eagerly.
///
/// Note that if you wrap this up in a non blocking writer, it doesn't work.
///
/// # Errors
///
/// Returns [`ColorPickerError::LogFileCouldNotBeCreated`] if:
/// - The path has no file name.
/// - The file or its parent directory can't be created (eg: permissions).
pub fn try_create_log_file_appender(path_str: &str) -> CommonResult<RollingFileAppender> {
    let path = PathBuf::from(path_str);
    let error = || ColorPickerError::LogFileCouldNotBeCreated {
        path: path_str.to_string(),
    };

    let file_name = path
        .file_name()
        .and_then(|it| it.to_str())
        .ok_or_else(error)?;

    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it.to_path_buf(),
        _ => PathBuf::from("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(parent)
        .map_err(|_| error().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_creates_file() {
        let dir = std::env::temp_dir().join(format!(
            "r3bl_color_picker_appender_{}",
            std::process::id()
        ));
        let file_path = dir.join("appender_test.log");
        let file_path_str = file_path.to_str().unwrap();

        let appender = try_create_log_file_appender(file_path_str);
        assert!(appender.is_ok());
        assert!(file_path.exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_no_file_name() {
        let report = try_create_log_file_appender("/").unwrap_err();
        assert_eq2!(
            report.downcast_ref::<ColorPickerError>(),
            Some(&ColorPickerError::LogFileCouldNotBeCreated {
                path: "/".to_string()
            })
        );
    }
}
