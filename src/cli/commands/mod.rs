//! CLI command implementations

pub mod ensure;
pub mod init;
pub mod validate;

/// Process exit codes shared by the commands
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const CONFIGURATION: i32 = 2;
    pub const CONNECTION: i32 = 4;
    pub const FATAL: i32 = 5;
}
