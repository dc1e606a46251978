use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use ncaa_checkver::cli::orchestration;
use ncaa_checkver::config::{SiteConfig, SiteOverrides};
use ncaa_checkver::git::SystemRunner;
use ncaa_checkver::{logging, ui, CheckverError};

#[derive(clap::Parser)]
#[command(
    name = "ncaa-checkver",
    version,
    about = "Show the branch or tag a module is pinned to in the site makefile",
    after_help = "Options not given on the command line are read from NCAA_BARCA_SITE_REPO_PATH, \
NCAA_BARCA_SITE_MAKEFILE and NCAA_BARCA_SITE_BRANCH when set."
)]
struct Args {
    #[arg(help = "Module to look up")]
    module: Option<String>,

    #[arg(
        short = 'r',
        long,
        value_name = "PATH",
        help = "Path to the site (app) repo where the makefile resides [default: ~/Repos/ncaa-barcelona]"
    )]
    site_repo: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Filename of the *.make file to read [default: barcelona.make]"
    )]
    site_makefile: Option<String>,

    #[arg(
        short = 'b',
        long,
        value_name = "BRANCH",
        help = "Branch of the site repo to check version in (dev|qa|master) [default: master]"
    )]
    site_branch: Option<String>,

    #[arg(
        long,
        value_name = "NAME",
        help = "Remote the branch is read from [default: origin]"
    )]
    remote: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

impl From<Args> for SiteOverrides {
    fn from(args: Args) -> Self {
        SiteOverrides {
            repo_path: args.site_repo,
            makefile: args.site_makefile,
            branch: args.site_branch,
            remote: args.remote,
            module: args.module,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match SiteConfig::resolve(args.into()) {
        Ok(cfg) => cfg,
        Err(e) => fail(e),
    };

    match orchestration::run(&config, SystemRunner) {
        Ok(report) => {
            ui::display_outcome(&report.outcome);
            if let Some(e) = report.restore_error {
                fail(e);
            }
        }
        Err(e) => fail(e),
    }

    Ok(())
}

fn fail(err: CheckverError) -> ! {
    if let Some(output) = err.command_output() {
        ui::display_command_output(output);
    }
    ui::display_error(&err.to_string());
    std::process::exit(1);
}
