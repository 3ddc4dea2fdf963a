/// Connection settings for the wishlist database.
///
/// Every field is kept as the raw string read from the environment; parsing
/// happens in [`crate::create_pool`].
#[derive(Debug, Clone, Default)]
pub struct DbConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub sslmode: String,
}

impl DbConfig {
    /// Read connection settings from the environment.
    ///
    /// | Env Var      | Field      |
    /// |--------------|------------|
    /// | `DB_HOST`    | `host`     |
    /// | `DB_PORT`    | `port`     |
    /// | `DB_USER`    | `user`     |
    /// | `DB_PASS`    | `password` |
    /// | `DB_NAME`    | `dbname`   |
    /// | `DB_SSLMODE` | `sslmode`  |
    ///
    /// Unset variables read as empty strings.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).unwrap_or_default();
        Self {
            host: get("DB_HOST"),
            port: get("DB_PORT"),
            user: get("DB_USER"),
            password: get("DB_PASS"),
            dbname: get("DB_NAME"),
            sslmode: get("DB_SSLMODE"),
        }
    }
}
