// src/main.rs
mod args;
mod codec;
mod error;
mod files;
mod padding;
mod tea;

use anyhow::Result;
use args::{Args, Operation};
use clap::Parser;
use std::process;
use tea::TeaKey;

fn main() {
    let args = match Args::try_parse() {
        Ok(a) => a,
        Err(e) => {
            // clap exits 2 on its own; every failure here must exit 1
            let _ = e.print();
            process::exit(1);
        }
    };
    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let key = TeaKey::derive(args.key.as_bytes());
    let data = files::read_file(&args.input_file)?;

    match args.operation {
        Operation::Encrypt => {
            let original = data.len();
            let out = codec::encrypt_buffer(data, &key);
            files::write_file(&args.output_file, &out)?;
            println!("File encrypted successfully to {}", args.output_file.display());
            println!(
                "Original size: {} bytes, Padded size: {} bytes",
                original,
                out.len()
            );
        }
        Operation::Decrypt => {
            let encrypted = data.len();
            let out = codec::decrypt_buffer(data, &key)?;
            files::write_file(&args.output_file, &out)?;
            println!("File decrypted successfully to {}", args.output_file.display());
            println!(
                "Encrypted size: {} bytes, Original size: {} bytes",
                encrypted,
                out.len()
            );
        }
    }
    Ok(())
}
