use saw_tables::{generate_file, GeneratorConfig, TableError};

use tempfile::TempDir;

use std::fs;
use std::path::PathBuf;

fn config_in(dir: &TempDir) -> GeneratorConfig {
    GeneratorConfig {
        output: dir.path().join("tables").join("saw_tables.c"),
        ..GeneratorConfig::default()
    }
}

#[test]
fn creates_directory_and_file() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    generate_file(&config).unwrap();
    assert!(config.output.is_file());
}

#[test]
fn listing_has_expected_layout() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    generate_file(&config).unwrap();
    let text = fs::read_to_string(&config.output).unwrap();

    // 7 header line breaks, then per table 2 for the opening brace, one per
    // data line and 2 for the closing brace
    assert_eq!(text.matches('\n').count(), 7 + 59 * (2 + 32 + 2));
    assert!(text.contains("\n#define MAX_TABLE 58\n"));
    assert!(text.contains("\nconst uint8_t saw_tables[59][256] PROGMEM = {\n"));
    assert!(text.ends_with("    },\n};"));

    let data_lines: Vec<&str> = text.lines()
        .filter(|l| l.starts_with("        0x"))
        .collect();
    assert_eq!(data_lines.len(), 59 * 32);
    for line in &data_lines {
        assert_eq!(line.matches("0x").count(), 8);
        assert!(line.ends_with(", "));
    }
    assert_eq!(text.matches("0x").count(), 59 * 256);
}

#[test]
fn braces_are_balanced() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    generate_file(&config).unwrap();
    let text = fs::read_to_string(&config.output).unwrap();

    let mut depth = 0;
    let mut max_depth = 0;
    let mut tables = 0;
    for c in text.chars() {
        match c {
            '{' => {
                depth += 1;
                if depth == 2 {
                    tables += 1;
                }
                max_depth = std::cmp::max(max_depth, depth);
            }
            '}' => depth -= 1,
            _ => (),
        }
    }
    assert_eq!(depth, 0);
    assert_eq!(max_depth, 2);
    assert_eq!(tables, 59);
}

#[test]
fn output_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    generate_file(&config).unwrap();
    let first = fs::read(&config.output).unwrap();
    generate_file(&config).unwrap();
    let second = fs::read(&config.output).unwrap();
    assert_eq!(first, second);

    let threaded = GeneratorConfig {
        output: dir.path().join("threaded.c"),
        num_threads: 3,
        ..GeneratorConfig::default()
    };
    generate_file(&threaded).unwrap();
    assert_eq!(first, fs::read(&threaded.output).unwrap());
}

#[test]
fn last_table_has_wider_range_than_first() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let tables = generate_file(&config).unwrap();
    assert!(tables.peak_to_peak(58).unwrap() > tables.peak_to_peak(0).unwrap());
}

#[test]
fn unwritable_destination_is_reported() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("tables");
    fs::write(&blocker, "not a directory").unwrap();
    let config = GeneratorConfig {
        output: blocker.join("saw_tables.c"),
        ..GeneratorConfig::default()
    };
    match generate_file(&config) {
        Err(TableError::Io(_)) => (),
        other => panic!("Expected I/O error, got {:?}", other),
    }
}

#[test]
fn config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let output: PathBuf = dir.path().join("small.c");
    let config_path = dir.path().join("config.json");
    let json = format!(r#"{{"harmonic_limit": 5, "num_samples": 64, "output": {:?}}}"#, output);
    fs::write(&config_path, json).unwrap();

    let config = GeneratorConfig::from_file(&config_path).unwrap();
    generate_file(&config).unwrap();
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("#define MAX_TABLE 3\n"));
    assert!(text.contains("saw_tables[4][64] PROGMEM"));
    assert_eq!(text.matches("0x").count(), 4 * 64);
}
