/// Settings of the backend, every field can also be set through the
/// environment or a `.env` file.
#[derive(clap::Parser, Debug, Clone)]
#[command(name = "backend")]
#[command(about = "Loads tournament and replay data and serves the league leaderboards")]
pub struct Config {
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    #[arg(long, env = "TOORNAMENT_URL", default_value = "https://api.toornament.com")]
    pub toornament_url: String,

    #[arg(long, env = "TOORNAMENT_API_KEY", hide_env_values = true)]
    pub toornament_api_key: String,

    #[arg(long, env = "TOORNAMENT_CLIENT_ID")]
    pub toornament_client_id: String,

    #[arg(long, env = "TOORNAMENT_CLIENT_SECRET", hide_env_values = true)]
    pub toornament_client_secret: String,

    #[arg(long, env = "BALLCHASING_URL", default_value = "https://ballchasing.com/api")]
    pub ballchasing_url: String,

    #[arg(long, env = "BALLCHASING_API_KEY", hide_env_values = true)]
    pub ballchasing_api_key: String,

    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:3000")]
    pub listen_addr: std::net::SocketAddr,

    /// Run at most one reload per source at a time.
    #[arg(long, env = "EXCLUSIVE_RELOADS", default_value_t = true, action = clap::ArgAction::Set)]
    pub exclusive_reloads: bool,
}

impl Config {
    pub fn reload_policy(&self) -> crate::reload::ReloadPolicy {
        if self.exclusive_reloads {
            crate::reload::ReloadPolicy::Exclusive
        } else {
            crate::reload::ReloadPolicy::Unguarded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;

    const REQUIRED: [&str; 11] = [
        "backend",
        "--database-url",
        "postgres://localhost/league",
        "--toornament-api-key",
        "key",
        "--toornament-client-id",
        "id",
        "--toornament-client-secret",
        "secret",
        "--ballchasing-api-key",
        "bc-key",
    ];

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(REQUIRED).unwrap();

        assert_eq!("https://api.toornament.com", config.toornament_url);
        assert_eq!("https://ballchasing.com/api", config.ballchasing_url);
        assert_eq!(3000, config.listen_addr.port());
        assert_eq!(crate::reload::ReloadPolicy::Exclusive, config.reload_policy());
    }

    #[test]
    fn unguarded_reloads() {
        let args = REQUIRED.iter().copied().chain(["--exclusive-reloads", "false"]);
        let config = Config::try_parse_from(args).unwrap();

        assert_eq!(crate::reload::ReloadPolicy::Unguarded, config.reload_policy());
    }
}
