use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use wirebox_cli::{Args, Emit, run};

/// Collects all .blk files from a directory
fn collect_blk_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("blk")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos live at the workspace root, not in the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        emit: Emit::Svg,
        strict: false,
        log_level: "off".to_string(),
    }
}

fn svg_path(dir: &Path, input: &Path) -> PathBuf {
    dir.join(format!(
        "{}.svg",
        input.file_stem().unwrap().to_string_lossy()
    ))
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_blk_files(demos_dir());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_path = svg_path(temp_dir.path(), demo_path);

        match run(&args_for(demo_path, &output_path)) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("SVG was not written");
                assert!(svg.contains("<svg"), "{} is not an SVG", output_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_blk_files(demos_dir().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = svg_path(temp_dir.path(), demo_path);

        if run(&args_for(demo_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(!output_path.exists(), "No SVG should be written on error");
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_strict_demos_fail_only_in_strict_mode() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let strict_demos = collect_blk_files(demos_dir().join("strict"));
    assert!(!strict_demos.is_empty(), "No demos found in demos/strict/");

    for demo_path in &strict_demos {
        let output_path = svg_path(temp_dir.path(), demo_path);
        let mut args = args_for(demo_path, &output_path);

        assert!(
            run(&args).is_ok(),
            "{} should render leniently",
            demo_path.display()
        );

        args.strict = true;
        assert!(
            run(&args).is_err(),
            "{} should be rejected in strict mode",
            demo_path.display()
        );
    }
}

#[test]
fn e2e_text_dumps_do_not_write_svg() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("frame.blk");
    let output_path = temp_dir.path().join("frame.svg");

    for emit in [Emit::Tree, Emit::Grid] {
        let mut args = args_for(&input, &output_path);
        args.emit = emit;

        run(&args).expect("Dump failed");
        assert!(!output_path.exists());
    }
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[style]\nbackground_color = \"ivory\"\nrect_width = 50\n",
    )
    .unwrap();

    let input = demos_dir().join("frame.blk");
    let output_path = temp_dir.path().join("frame.svg");
    let mut args = args_for(&input, &output_path);
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("Render with config failed");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("ivory"));
    // 3 columns of 50 + 2 * 1
    assert!(svg.contains(r#"viewBox="0 0 156 60""#));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("absent.blk");
    let output_path = temp_dir.path().join("absent.svg");

    let err = run(&args_for(&input, &output_path)).unwrap_err();
    assert!(matches!(err, wirebox::WireboxError::Io(_)));
}
