use serde::{Deserialize, Serialize};

use crate::domain_label::DEFAULT_CHARSET;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdnaConfig {
    /// Charset assumed for label input and output when none is given per call.
    #[serde(default = "default_charset")]
    pub default_charset: String,
}

impl Default for IdnaConfig {
    fn default() -> Self {
        Self {
            default_charset: default_charset(),
        }
    }
}

fn default_charset() -> String {
    DEFAULT_CHARSET.to_string()
}
