//! The FastDL generation run: scrape, scan, map, emit, write.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::asset::{AssetKind, ScanReport, resource_paths, scan_assets};
use crate::logger::{Status, StatusReporter};
use crate::output::{Destination, OutputWriter};
use crate::root::resolve_root;
use crate::script::EmittedScript;
use crate::workshop::{WorkshopEntry, WorkshopSource, scrape_collection};
use crate::{debug, debug_do, log};

use super::Cli;
use super::prompt::Prompt;

/// Settings for one run, taken from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Workshop collection ID, `0` for none
    pub workshop: u64,
    /// Candidate content root tried before prompting
    pub root: PathBuf,
    /// Skip the "continue without workshop" question
    pub assume_yes: bool,
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            workshop: cli.workshop,
            root: cli.root.clone(),
            assume_yes: cli.yes,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Operator chose not to continue without a workshop ID
    Declined,
    /// Operator cancelled the content root prompt
    Cancelled,
    /// Script produced
    Written {
        destination: Destination,
        declarations: usize,
    },
}

/// Run every stage in order.
pub fn run_fastdl<R: BufRead, W: Write>(
    options: &RunOptions,
    prompt: &mut Prompt<R, W>,
    source: &dyn WorkshopSource,
    status: &mut dyn StatusReporter,
    writer: &OutputWriter,
) -> Result<Outcome> {
    let workshop = if options.workshop == 0 {
        if !options.assume_yes
            && !prompt.confirm(
                "No '--workshop' ID specified, would you like to continue anyway? (y/N)",
            )?
        {
            return Ok(Outcome::Declined);
        }
        Vec::new()
    } else {
        scrape_step(source, options.workshop, status)
    };

    let Some(root) = resolve_root(&options.root, prompt)? else {
        return Ok(Outcome::Cancelled);
    };

    let addons = root.addons_dir();
    status.step(&format!(
        "Scanning recursively for fastdl files in {}/addons/*",
        root.display()
    ));
    let report = scan_assets(&addons);
    finish_scan(&report, status);
    debug_do! {
        let counts: Vec<String> = AssetKind::ALL
            .iter()
            .map(|&kind| format!("{}({})", kind.extension(), report.count(kind)))
            .collect();
        debug!("scan"; "{} asset file(s) found: {}", report.files.len(), counts.join(" "));
    }

    let resources = resource_paths(&report.files, &addons);
    let script = EmittedScript::new(&workshop, &resources);
    let declarations = script.declarations().count();

    let destination = writer.write(&root, &script, status);
    Ok(Outcome::Written {
        destination,
        declarations,
    })
}

/// Tag the scan step; unreadable entries downgrade it to a warning.
fn finish_scan(report: &ScanReport, status: &mut dyn StatusReporter) {
    if report.is_clean() {
        status.finish(Status::Success);
        return;
    }
    status.finish(Status::Warning);
    for error in &report.errors {
        log!("scan"; "{}", error);
    }
}

/// Scrape the collection; failures leave the workshop block empty.
fn scrape_step(
    source: &dyn WorkshopSource,
    id: u64,
    status: &mut dyn StatusReporter,
) -> Vec<WorkshopEntry> {
    status.step("Scanning workshop content");
    match scrape_collection(source, id) {
        Ok(entries) => {
            status.finish(Status::Success);
            entries
        }
        Err(e) => {
            status.finish(Status::Fail);
            debug!("workshop"; "{:#}", anyhow::Error::from(e));
            Vec::new()
        }
    }
}
