/// `config_struct!` defines a config section and its defaults in one place
///
/// ```ignore
/// config_struct! {
///     pub struct RpcConfig {
///         url: String = "https://api.mainnet-beta.solana.com".to_string(),
///         timeout_secs: u64 = 30,
///     }
/// }
/// ```
///
/// Expands to a struct with public fields, a `Default` impl using the given
/// values, and serde support with `#[serde(default)]` so partial TOML files
/// fill the gaps from the defaults.
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
