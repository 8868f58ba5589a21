use std::time::Duration;

use clap::{Parser, ValueEnum};
use merchant_core::domain::common::{DatabaseConfig, DatabaseDriver, MerchantConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "merchant-api", version, about = "Merchant directory HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub request: RequestArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(id = "server-host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server-port", long = "server-port", env = "SERVER_PORT", default_value_t = 1080)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatabaseDriverArg {
    Mysql,
    Postgres,
}

impl From<DatabaseDriverArg> for DatabaseDriver {
    fn from(driver: DatabaseDriverArg) -> Self {
        match driver {
            DatabaseDriverArg::Mysql => DatabaseDriver::Mysql,
            DatabaseDriverArg::Postgres => DatabaseDriver::Postgres,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(
        long = "database-driver",
        env = "DATABASE_DRIVER",
        value_enum,
        default_value_t = DatabaseDriverArg::Mysql
    )]
    pub driver: DatabaseDriverArg,

    #[arg(id = "database-host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database-port", long = "database-port", env = "DATABASE_PORT", default_value_t = 3306)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "root")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "merchant")]
    pub name: String,

    #[arg(
        long = "database-max-connections",
        env = "DATABASE_MAX_CONNECTIONS",
        default_value_t = 10
    )]
    pub max_connections: u32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// `tracing_subscriber::EnvFilter` directive.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RequestArgs {
    /// Deadline of a single store call, in seconds.
    #[arg(long = "context-timeout", env = "CONTEXT_TIMEOUT", default_value_t = 2)]
    pub timeout_secs: u64,
}

impl From<Args> for MerchantConfig {
    fn from(args: Args) -> Self {
        MerchantConfig {
            database: DatabaseConfig {
                driver: args.database.driver.into(),
                host: args.database.host,
                port: args.database.port,
                username: args.database.user,
                password: args.database.password,
                name: args.database.name,
                max_connections: args.database.max_connections,
            },
            request_timeout: Duration::from_secs(args.request.timeout_secs),
        }
    }
}
