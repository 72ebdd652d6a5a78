//! Configuration for the codec driver

use crate::reed_solomon::{Result, Rs4x2, Rs8x2, SymbolCodec};
use std::fmt;
use std::str::FromStr;

/// Supported (code length, message length) pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeShape {
    /// Eight symbols, two message symbols, corrects three errors
    #[default]
    Rs8x2,
    /// Four symbols, two message symbols, corrects one error
    Rs4x2,
}

impl FromStr for CodeShape {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "8x2" => Ok(CodeShape::Rs8x2),
            "4x2" => Ok(CodeShape::Rs4x2),
            other => Err(format!("Unknown code shape: {}", other)),
        }
    }
}

impl fmt::Display for CodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeShape::Rs8x2 => write!(f, "8x2"),
            CodeShape::Rs4x2 => write!(f, "4x2"),
        }
    }
}

/// Configuration for encode/decode runs
#[derive(Debug, Clone, Default)]
pub struct CodecConfig {
    pub code: CodeShape,
}

impl CodecConfig {
    pub fn new(code: CodeShape) -> Self {
        Self { code }
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let code = matches
            .get_one::<String>("code")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self::new(code)
    }

    /// Build the selected code, including its syndrome table
    pub fn build(&self) -> Result<Box<dyn SymbolCodec>> {
        let codec: Box<dyn SymbolCodec> = match self.code {
            CodeShape::Rs8x2 => Box::new(Rs8x2::new()?),
            CodeShape::Rs4x2 => Box::new(Rs4x2::new()?),
        };
        Ok(codec)
    }
}
