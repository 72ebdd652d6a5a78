//! rs8 driver: encode, decode and corrupt short transmissions from the shell

use anyhow::{Context, Result};
use rs8::reed_solomon::{Gf8, SymbolCodec};
use rs8::CodecConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = rs8::parse_args();
    let config = CodecConfig::from_args(&matches);
    let codec = config
        .build()
        .with_context(|| format!("Failed to build {} code", config.code))?;

    match matches.subcommand() {
        Some(("encode", sub)) => {
            let message = *sub
                .get_one::<u32>("message")
                .context("Message is required")?;
            let transmission = codec
                .encode(message)
                .with_context(|| format!("Failed to encode {}", message))?;
            println!("{}", hex::encode(transmission));
        }
        Some(("decode", sub)) => {
            let transmission = sub
                .get_one::<Vec<u8>>("transmission")
                .context("Transmission is required")?;
            let message = codec.decode(transmission).context("Failed to decode")?;
            println!("{}", message);
        }
        Some(("corrupt", sub)) => {
            let transmission = sub
                .get_one::<Vec<u8>>("transmission")
                .context("Transmission is required")?;
            let index = *sub.get_one::<usize>("symbol").context("Symbol is required")?;
            let value = *sub.get_one::<u8>("value").context("Value is required")?;
            let value = Gf8::try_from(value)?;
            let corrupted = codec.replace_symbol(transmission, index, value)?;
            println!("{}", hex::encode(corrupted));
        }
        Some(("info", _)) => {
            println!("Code: {}", config.code);
            println!("Code length: {}", codec.code_length());
            println!("Message length: {}", codec.message_length());
            println!("Parity dimension: {}", codec.parity_dim());
            println!("Minimum distance: {}", codec.distance());
            println!("Correctable symbols: {}", codec.correctable());
            println!("Messages: 0..{}", codec.message_limit());
            println!("Transmission bytes: {}", codec.transmission_len());
            println!("Syndrome table entries: {}", codec.syndrome_entries());
        }
        _ => anyhow::bail!("No subcommand given"),
    }

    Ok(())
}
