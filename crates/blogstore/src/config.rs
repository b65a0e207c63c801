//! # Configuration
//!
//! Store settings are loaded with [`confique`], layered in priority order:
//! 1. **Environment variables**: `BLOG_DEFAULT_PAGE_SIZE`, `BLOG_MAX_PAGE_SIZE`,
//!    `BLOG_SEED_SAMPLE_POSTS`.
//! 2. **TOML file**: optional, path chosen by the embedding process.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_page_size` | `10` | Page size used when a request gives none |
//! | `max_page_size` | `100` | Upper bound applied to every requested page size |
//! | `seed_sample_posts` | `false` | Start the store with the sample posts |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ValidationErrors};
use crate::query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlogConfig {
    /// Page size used when a listing or search request does not give one.
    #[config(default = 10, env = "BLOG_DEFAULT_PAGE_SIZE")]
    pub default_page_size: usize,

    /// Requested page sizes above this are cut down to it.
    #[config(default = 100, env = "BLOG_MAX_PAGE_SIZE")]
    pub max_page_size: usize,

    /// Load the sample posts into the store at start-up.
    #[config(default = false, env = "BLOG_SEED_SAMPLE_POSTS")]
    pub seed_sample_posts: bool,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            seed_sample_posts: false,
        }
    }
}

impl BlogConfig {
    /// Loads from the environment, then `file` if given (a missing file is
    /// skipped), then defaults. The result is validated.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        let config = builder.load()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = ValidationErrors::default();
        if self.max_page_size == 0 {
            errors.push("max_page_size", "must be at least 1");
        }
        if self.default_page_size == 0 {
            errors.push("default_page_size", "must be at least 1");
        } else if self.default_page_size > self.max_page_size {
            errors.push("default_page_size", "must not exceed max_page_size");
        }
        errors.into_result()
    }
}
