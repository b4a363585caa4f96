/// vCard version emitted on every card (RFC 2426).
pub const VCARD_VERSION: &str = "3.0";

pub const PRODUCT_NAME: &str = "pococard";

/// Product identifier written to the `PRODID` line unless configured otherwise.
pub const DEFAULT_PRODUCT_ID: &str =
    const_str::concat!("-//", PRODUCT_NAME, "//Portable Contacts vCard Export//EN");

/// Maximum number of characters in one physical content line before folding.
pub const FOLD_WIDTH: usize = 75;

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "POCOCARD";

/// Optional configuration file, resolved relative to the working directory.
pub const CONFIG_FILE: &str = const_str::concat!(PRODUCT_NAME, ".toml");
