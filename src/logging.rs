use env_logger::Env;

/// Line-oriented diagnostics on stderr. `RUST_LOG` selects the level,
/// `info` when unset; per-file progress sits at `debug`, per-decision
/// detail at `trace`.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
