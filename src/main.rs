//! Signboard entry point.
//!
//! ```text
//! signboard [--env dev] [--port 8080]
//! signboard --hash-password <password>
//! ```

use signboard::auth::hash_password;
use signboard::config::AppConfig;

fn get_flag_value(names: &[&str]) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if names.contains(&args[i].as_str()) && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn get_env() -> String {
    get_flag_value(&["--env", "-e"]).unwrap_or_else(|| "dev".to_string())
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    get_flag_value(&["--port"]).and_then(|p| p.parse().ok())
}

fn main() -> anyhow::Result<()> {
    if let Some(password) = get_flag_value(&["--hash-password"]) {
        println!("{}", hash_password(&password)?);
        return Ok(());
    }

    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = signboard::logging::init_logging(&app_config);

    tracing::info!(
        "Starting signboard {} in {} mode",
        env!("CARGO_PKG_VERSION"),
        env
    );

    let port = get_port_override().unwrap_or(app_config.gateway.port);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(signboard::gateway::run_server(&app_config, port))
        .inspect_err(|e| tracing::error!("Gateway stopped: {:#}", e))
}
