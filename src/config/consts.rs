// src/config/consts.rs

// Tokens on the captured tableau
pub const BYE: &str = "BYE";
pub const REF_MARKER: &str = "Ref";
pub const WINNER_COLUMN: &str = "Winner";

// Pools
pub const POOL_LABEL_PREFIX: &str = "Pool #";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const MATCHES_FILE: &str = "tableau_matches";
pub const FENCERS_FILE: &str = "fencers";
pub const POOL_BOUTS_FILE: &str = "poules_matches";
pub const POOL_SUMMARY_FILE: &str = "poules_summary";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const VERBOSE_LOG_FILTER: &str = "debug";
