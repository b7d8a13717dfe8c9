/// Configuration system
///
/// TOML file (`data/config.toml` by default) with embedded defaults,
/// `RPC_URL` from the environment (or `.env`) on top, and the `--rpc-url`
/// flag on top of that.
mod macros;
mod schemas;
mod utils;

pub use schemas::{Config, RpcConfig};
pub use utils::{
    apply_rpc_url_override, load_config_from_path,
    read_config_file, set_rpc_url, with_config, CONFIG, CONFIG_FILE_PATH, RPC_URL_ENV,
};
