use std::path::Path;

use anyhow::Result;
use distcheck_core::{DistributionDescriptor, ProjectLayout};
use distcheck_fixture::{FixtureStore, TestFiles, EXPECTED_DIR_NAME};
use distcheck_verify::{verify_packaged_distributions, VerifiedDistribution};

use crate::build_ops::BuildRunner;
use crate::render::{current_output_style, render_status_line, OutputStyle};

pub(crate) fn run_prepare_command(
    store: &FixtureStore,
    descriptor: &DistributionDescriptor,
    case: &str,
) -> Result<()> {
    let output_style = current_output_style();
    let prepared = store.prepare(case, descriptor)?;
    for line in format_prepared_lines(&prepared, output_style) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_verify_command(
    store: &FixtureStore,
    descriptor: &DistributionDescriptor,
    case: &str,
    project_root: &Path,
) -> Result<()> {
    let output_style = current_output_style();
    let expected_root = store.case_dir(case)?.join(EXPECTED_DIR_NAME);
    let layout = ProjectLayout::new(project_root);
    let verified = verify_packaged_distributions(&layout, descriptor, &expected_root)?;
    for line in format_verified_lines(&verified, output_style) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_case_command(
    store: &FixtureStore,
    descriptor: &DistributionDescriptor,
    runner: &dyn BuildRunner,
    case: &str,
) -> Result<()> {
    let output_style = current_output_style();

    let prepared = store.prepare(case, descriptor)?;
    for line in format_prepared_lines(&prepared, output_style) {
        println!("{line}");
    }

    runner.run_build(&prepared.project_root)?;
    println!(
        "{}",
        render_status_line(output_style, "step", "build completed")
    );

    let layout = ProjectLayout::new(&prepared.project_root);
    let verified = verify_packaged_distributions(&layout, descriptor, &prepared.expected_root)?;
    for line in format_verified_lines(&verified, output_style) {
        println!("{line}");
    }
    println!(
        "{}",
        render_status_line(output_style, "ok", &format!("test case '{case}' passed"))
    );
    Ok(())
}

pub(crate) fn format_prepared_lines(prepared: &TestFiles, style: OutputStyle) -> Vec<String> {
    vec![
        render_status_line(
            style,
            "step",
            &format!("prepared project at {}", prepared.project_root.display()),
        ),
        render_status_line(
            style,
            "step",
            &format!("expected fixture at {}", prepared.expected_root.display()),
        ),
    ]
}

pub(crate) fn format_verified_lines(
    verified: &[VerifiedDistribution],
    style: OutputStyle,
) -> Vec<String> {
    verified
        .iter()
        .map(|distribution| {
            let message = match &distribution.variant {
                Some(variant) => format!(
                    "verified variant '{}' archive {}",
                    variant,
                    distribution.archive_path.display()
                ),
                None => format!("verified archive {}", distribution.archive_path.display()),
            };
            render_status_line(style, "ok", &message)
        })
        .collect()
}
