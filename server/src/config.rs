//! Startup configuration from command-line flags and environment.

use clap::Parser;

use crate::store::IdPolicy;

#[derive(Clone, Debug, Parser)]
#[command(name = "todo-server", version, about = "In-memory todo CRUD service")]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// How new todo ids are numbered.
    #[arg(long, env = "TODO_ID_POLICY", value_enum, default_value_t = IdPolicy::LengthDerived)]
    pub id_policy: IdPolicy,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[arg(long, env = "TODO_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "todo-server",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--id-policy",
            "monotonic",
            "--log-filter",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:9000");
        assert_eq!(config.id_policy, IdPolicy::Monotonic);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn length_policy_is_accepted_by_name() {
        let config = Config::try_parse_from(["todo-server", "--id-policy", "length"]).unwrap();
        assert_eq!(config.id_policy, IdPolicy::LengthDerived);
    }

    #[test]
    fn unknown_id_policy_is_rejected() {
        assert!(Config::try_parse_from(["todo-server", "--id-policy", "random"]).is_err());
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        assert!(Config::try_parse_from(["todo-server", "--port", "http"]).is_err());
    }
}
