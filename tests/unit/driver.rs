use super::*;

fn ok_probe() -> Result<(), MissingCapability> {
    Ok(())
}

fn lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8(buf.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn standard_set_is_16_48_128_in_order() {
    let set = IconSet::standard();
    let pairs: Vec<_> = set
        .jobs
        .iter()
        .map(|j| (j.size, j.filename.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![(16, "icon16.png"), (48, "icon48.png"), (128, "icon128.png")]
    );
}

#[test]
fn success_prints_created_lines_then_summary() {
    let mut out = Vec::new();
    let mut seen = Vec::new();
    let outcome = run_with(
        &IconSet::standard(),
        Path::new("out"),
        ok_probe,
        &mut out,
        |job, path| {
            seen.push((job.size, path.to_path_buf()));
            Ok(())
        },
    )
    .unwrap();

    assert_eq!(
        lines(&out),
        vec![
            "Created icon16.png",
            "Created icon48.png",
            "Created icon128.png",
            "All icons created successfully!",
        ]
    );
    assert_eq!(
        seen,
        vec![
            (16, PathBuf::from("out/icon16.png")),
            (48, PathBuf::from("out/icon48.png")),
            (128, PathBuf::from("out/icon128.png")),
        ]
    );
    assert_eq!(
        outcome,
        DriverOutcome::Completed(seen.into_iter().map(|(_, p)| p).collect())
    );
}

#[test]
fn failed_probe_prints_remediation_and_renders_nothing() {
    let mut out = Vec::new();
    let mut calls = 0;
    let outcome = run_with(
        &IconSet::standard(),
        Path::new("."),
        || Err(MissingCapability::png()),
        &mut out,
        |_, _| {
            calls += 1;
            Ok(())
        },
    )
    .unwrap();

    assert_eq!(calls, 0);
    assert_eq!(lines(&out), MissingCapability::png().remediation_lines());
    assert_eq!(
        outcome,
        DriverOutcome::MissingCapability(MissingCapability::png())
    );
}

#[test]
fn missing_capability_mid_run_aborts_remaining_jobs() {
    let mut out = Vec::new();
    let mut calls = Vec::new();
    let outcome = run_with(
        &IconSet::standard(),
        Path::new("."),
        ok_probe,
        &mut out,
        |job, _| {
            calls.push(job.size);
            if job.size == 48 {
                return Err(MissingCapability::png().into());
            }
            Ok(())
        },
    )
    .unwrap();

    assert_eq!(calls, vec![16, 48]);
    let mut expected = vec!["Created icon16.png".to_string()];
    expected.extend(MissingCapability::png().remediation_lines());
    assert_eq!(lines(&out), expected);
    assert!(matches!(outcome, DriverOutcome::MissingCapability(_)));
}

#[test]
fn other_errors_propagate_without_summary() {
    let mut out = Vec::new();
    let err = run_with(
        &IconSet::standard(),
        Path::new("."),
        ok_probe,
        &mut out,
        |job, _| {
            if job.size == 128 {
                return Err(IconError::raster("disk full"));
            }
            Ok(())
        },
    )
    .unwrap_err();

    assert!(matches!(err, IconError::Raster(_)));
    assert_eq!(
        lines(&out),
        vec!["Created icon16.png", "Created icon48.png"]
    );
}
