/// Log tags identify the subsystem a message comes from
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Rpc,
    Security,
    Pool,
    Decoder,
}

impl LogTag {
    /// Key used by `--debug <tag>`
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Config => "config".to_string(),
            LogTag::Rpc => "rpc".to_string(),
            LogTag::Security => "security".to_string(),
            LogTag::Pool => "pool".to_string(),
            LogTag::Decoder => "decoder".to_string(),
        }
    }

    /// Uppercase label printed in the log prefix
    pub fn to_plain_string(&self) -> String {
        self.to_debug_key().to_uppercase()
    }
}

impl fmt::Display for LogTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_and_labels() {
        assert_eq!(LogTag::Security.to_debug_key(), "security");
        assert_eq!(LogTag::Decoder.to_plain_string(), "DECODER");
        assert_eq!(LogTag::Config.to_plain_string(), "CONFIG");
    }
}
