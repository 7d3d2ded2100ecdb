//! Build script for regfifo-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates device.toml and exports the device identity to rustc

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Identity fields read from the `[identity]` table, with their env names
const IDENTITY_FIELDS: [(&str, &str); 4] = [
    ("manufacturer", "REGFIFO_MANUFACTURER"),
    ("model", "REGFIFO_MODEL"),
    ("serial", "REGFIFO_SERIAL"),
    ("hardware_version", "REGFIFO_HW_VERSION"),
];

/// Longest response line the firmware can send, CRLF included
const TX_LINE_MAX: usize = 64;

fn main() {
    setup_linker();
    export_identity();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate device.toml and pass the identity on as `rustc-env` variables
fn export_identity() {
    println!("cargo:rerun-if-changed=device.toml");

    let config_path = Path::new("device.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: device.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a device.toml identity file.              ║\n\
            ║  Please create one in the regfifo-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read device.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in device.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let values = validate_identity(&config);

    for ((_, env_name), value) in IDENTITY_FIELDS.iter().zip(&values) {
        println!("cargo:rustc-env={}={}", env_name, value);
    }
}

/// Check the `[identity]` table and return its values in field order
fn validate_identity(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();
    let mut values = Vec::new();

    let identity = match config.get("identity") {
        Some(toml::Value::Table(t)) => Some(t),
        Some(_) => {
            errors.push("[identity] must be a table".to_string());
            None
        }
        None => {
            errors.push("Missing [identity] section".to_string());
            None
        }
    };

    if let Some(identity) = identity {
        for (field, _) in IDENTITY_FIELDS {
            match identity.get(field) {
                Some(toml::Value::String(s)) if s.is_empty() => {
                    errors.push(format!("[identity] '{}' cannot be empty", field));
                }
                Some(toml::Value::String(s)) if !s.is_ascii() || s.contains(['\r', '\n']) => {
                    errors.push(format!("[identity] '{}' must be single-line ASCII", field));
                }
                Some(toml::Value::String(s)) => values.push(s.clone()),
                Some(_) => errors.push(format!("[identity] '{}' must be a string", field)),
                None => errors.push(format!("[identity] missing '{}'", field)),
            }
        }
    }

    if errors.is_empty() {
        // "<mfg>, <model>, <serial>, <fw>/<hw>\r\n"
        let firmware_version = env::var("CARGO_PKG_VERSION").unwrap_or_default();
        let line_len = values.iter().map(String::len).sum::<usize>()
            + firmware_version.len()
            + ", ".len() * 3
            + "/".len()
            + "\r\n".len();
        if line_len > TX_LINE_MAX {
            errors.push(format!(
                "identity line is {} bytes, limit is {}",
                line_len, TX_LINE_MAX
            ));
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid identity in device.toml                          ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    values
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
