// ABOUTME: PostgreSQL utilities module
// ABOUTME: Exports connection management and extension catalog operations

pub mod connection;
pub mod extensions;

pub use connection::{connect, connect_with_notice_handler, connect_with_retry};
pub use extensions::{
    create_extension_if_not_exists, emit_startup_notice, get_available_extension_names,
    get_installed_extensions, missing_required_extensions, Extension, REQUIRED_EXTENSIONS,
    STARTUP_NOTICE,
};
