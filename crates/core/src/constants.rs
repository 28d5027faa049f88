/// CSP source expressions and Feature-Policy allow-list values.
pub mod source {
    pub const DATA: &str = "data:";
    pub const MEDIASTREAM: &str = "mediastream:";
    pub const HTTPS: &str = "https:";
    pub const BLOB: &str = "blob:";
    pub const FILESYSTEM: &str = "filesystem:";
    pub const NONE: &str = "'none'";
    pub const SELF: &str = "'self'";
    pub const STRICT_DYNAMIC: &str = "'strict-dynamic'";
    pub const UNSAFE_EVAL: &str = "'unsafe-eval'";
    pub const UNSAFE_INLINE: &str = "'unsafe-inline'";
    pub const WILDCARD: &str = "*";
}

/// Durations in seconds for `max-age` style directives.
pub mod time {
    pub const FIVE_MINUTES: u64 = 60 * 5;
    pub const ONE_DAY: u64 = 60 * 60 * 24;
    pub const ONE_WEEK: u64 = ONE_DAY * 7;
    pub const ONE_MONTH: u64 = ONE_DAY * 30;
    pub const ONE_YEAR: u64 = ONE_DAY * 365;
    pub const TWO_YEARS: u64 = ONE_YEAR * 2;
}
