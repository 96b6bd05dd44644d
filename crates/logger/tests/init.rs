// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use mathlib_logger::{log_info, LogLevel, Logger, LoggerError};

#[test]
fn test_init_only_once() {
    Logger::init(LogLevel::Debug).unwrap();
    log_info!("logger ready at {}", LogLevel::Debug);

    assert!(matches!(
        Logger::init(LogLevel::Info),
        Err(LoggerError::AlreadyInitialized)
    ));
}
