//! Build script for tremor-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates sampler.toml and turns it into `config.rs` in OUT_DIR

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let settings = validate_config();
    generate_config(&settings);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Values pulled out of sampler.toml
struct Settings {
    probe_retry_ms: u32,
    sample_period_ms: u32,
    max_probe_attempts: Option<u32>,
    window: usize,
    range: &'static str,
    rate: &'static str,
    transport: Transport,
}

#[derive(Clone, Copy, PartialEq)]
enum Transport {
    Spi,
    I2c,
}

const RANGES: &[(&str, &str)] = &[
    ("250dps", "Dps250"),
    ("500dps", "Dps500"),
    ("2000dps", "Dps2000"),
];

const RATES: &[(&str, &str)] = &[
    ("95hz", "Hz95"),
    ("190hz", "Hz190"),
    ("380hz", "Hz380"),
    ("760hz", "Hz760"),
];

/// Validate sampler.toml and collect its settings
fn validate_config() -> Settings {
    println!("cargo:rerun-if-changed=sampler.toml");

    let config_path = Path::new("sampler.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: sampler.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a sampler.toml configuration file.        ║\n\
            ║  Please create one in the tremor-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read sampler.toml                              ║\n\
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
                ║  ERROR: Invalid TOML syntax in sampler.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let probe_retry_ms = positive(&config, "acquisition", "probe_retry_ms", Some(100), &mut errors);
    let sample_period_ms =
        positive(&config, "acquisition", "sample_period_ms", Some(50), &mut errors);
    let max_probe_attempts = match lookup(&config, "acquisition", "max_probe_attempts") {
        None => None,
        Some(_) => Some(positive(&config, "acquisition", "max_probe_attempts", None, &mut errors)),
    };
    let window = positive(&config, "filter", "window", Some(10), &mut errors);
    if window > 256 {
        errors.push("[filter] window must be at most 256".to_string());
    }

    let range = choice(&config, "gyroscope", "range", "250dps", RANGES, &mut errors);
    let rate = choice(&config, "gyroscope", "rate", "380hz", RATES, &mut errors);
    let transport = match choice(
        &config,
        "gyroscope",
        "transport",
        "spi",
        &[("spi", "spi"), ("i2c", "i2c")],
        &mut errors,
    ) {
        "i2c" => Transport::I2c,
        _ => Transport::Spi,
    };

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid settings in sampler.toml                         ║\n\
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

    println!("cargo:warning=sampler.toml validated successfully");

    Settings {
        probe_retry_ms,
        sample_period_ms,
        max_probe_attempts,
        window: window as usize,
        range,
        rate,
        transport,
    }
}

fn lookup<'a>(config: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    config.get(section).and_then(|s| s.get(key))
}

/// Read a strictly positive integer, falling back to `default` when absent
fn positive(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: Option<u32>,
    errors: &mut Vec<String>,
) -> u32 {
    match lookup(config, section, key) {
        None => match default {
            Some(value) => value,
            None => {
                errors.push(format!("[{}] missing '{}'", section, key));
                0
            }
        },
        Some(toml::Value::Integer(n)) if *n > 0 && *n <= i64::from(u32::MAX) => *n as u32,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be a positive integer", section, key));
            0
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            0
        }
    }
}

/// Read a string from a fixed set, returning the mapped name
fn choice(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: &str,
    options: &[(&str, &'static str)],
    errors: &mut Vec<String>,
) -> &'static str {
    let value = match lookup(config, section, key) {
        None => default.to_string(),
        Some(toml::Value::String(s)) => s.to_lowercase(),
        Some(_) => {
            errors.push(format!("[{}] {} must be a string", section, key));
            return options[0].1;
        }
    };

    match options.iter().find(|(name, _)| *name == value) {
        Some(&(_, mapped)) => mapped,
        None => {
            let names: Vec<_> = options.iter().map(|(name, _)| format!("'{}'", name)).collect();
            errors.push(format!("[{}] {} must be one of {}", section, key, names.join(", ")));
            options[0].1
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `config.rs` for `include!` from src/config.rs
fn generate_config(settings: &Settings) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let mut acquisition = format!(
        "AcquisitionConfig::new()\n    \
         .with_probe_retry_ms({})\n    \
         .with_sample_period_ms({})\n    \
         .with_range(Range::{})\n    \
         .with_rate(Rate::{})",
        settings.probe_retry_ms, settings.sample_period_ms, settings.range, settings.rate
    );
    if let Some(limit) = settings.max_probe_attempts {
        acquisition.push_str(&format!("\n    .with_max_probe_attempts({})", limit));
    }

    let source = format!(
        "// Generated from sampler.toml by build.rs\n\n\
         /// Acquisition timing and sensor settings\n\
         pub const ACQUISITION: AcquisitionConfig = {};\n\n\
         /// Moving-average window per axis\n\
         pub const WINDOW: usize = {};\n",
        acquisition, settings.window
    );

    let mut f = File::create(out_dir.join("config.rs")).unwrap();
    f.write_all(source.as_bytes()).unwrap();

    println!("cargo:rustc-check-cfg=cfg(transport_i2c)");
    if settings.transport == Transport::I2c {
        println!("cargo:rustc-cfg=transport_i2c");
    }
}
