//! Command line interface.
//!
//! Every command works on a project file when one is given and otherwise on
//! an empty design built from the persisted grid settings.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use osdesigner_designer::{DesignerState, GridConfig, StlFormat, StlOptions};
use osdesigner_settings::SettingsPersistence;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

/// Grid layout designer for modular organizer panels
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a summary of the design
    Info(ProjectArgs),
    /// Print the screw hole map (`o` visible, `.` covered)
    Holes(ProjectArgs),
    /// Export the frame outline as SVG
    Svg(SvgArgs),
    /// Export the frame solid as STL
    Stl(StlArgs),
    /// Create an empty project from the saved grid settings
    New(NewArgs),
    /// Show or change the saved grid settings
    Grid(GridArgs),
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        let settings = self.load_settings()?;
        match &self.command {
            Command::Info(args) => {
                let state = load_state(args.project.as_deref(), &settings)?;
                print!("{}", describe(&state));
                Ok(())
            }
            Command::Holes(args) => {
                let state = load_state(args.project.as_deref(), &settings)?;
                println!("{}", state.screw_holes());
                Ok(())
            }
            Command::Svg(args) => args.execute(&settings).map(|_| ()),
            Command::Stl(args) => args.execute(&settings).map(|_| ()),
            Command::New(args) => args.execute(&settings),
            Command::Grid(args) => {
                let mut settings = settings;
                args.execute(&mut settings)
            }
        }
    }

    fn load_settings(&self) -> Result<SettingsPersistence> {
        let settings = match &self.settings {
            Some(path) => SettingsPersistence::load_from_file(path),
            None => SettingsPersistence::load_default(),
        };
        settings.context("Failed to load settings")
    }
}

/// Optional project file argument
#[derive(Args, Debug, Default)]
pub struct ProjectArgs {
    /// Project file; without one the saved grid settings are used
    #[arg(value_name = "PROJECT")]
    pub project: Option<PathBuf>,
}

/// Open `project`, or start an empty design from the saved settings
pub fn load_state(project: Option<&Path>, settings: &SettingsPersistence) -> Result<DesignerState> {
    match project {
        Some(path) => {
            let mut state = DesignerState::new();
            state.open_project(path)?;
            Ok(state)
        }
        None => {
            let mut state = DesignerState::with_grid(settings.grid_config());
            state.set_palette(settings.palette().iter().cloned());
            state.is_modified = false;
            Ok(state)
        }
    }
}

/// Multi-line summary of `state`
pub fn describe(state: &DesignerState) -> String {
    let holes = state.screw_holes();
    let mut out = String::new();
    let _ = writeln!(out, "{}", state.grid().info());
    let _ = writeln!(out, "Border:     {}", state.grid().border_color);
    let _ = writeln!(out, "Shapes:     {}", state.catalog().len());
    let _ = writeln!(out, "Placed:     {}", state.placements().len());
    let _ = writeln!(out, "Library:    {}", state.library().len());
    let _ = writeln!(
        out,
        "Holes:      {} visible, {} covered",
        holes.visible_count(),
        holes.occluded_count()
    );
    out
}

#[derive(Args, Debug)]
pub struct SvgArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output file (defaults to the suggested name in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SvgArgs {
    /// Write the SVG and return its path
    pub fn execute(&self, settings: &SettingsPersistence) -> Result<PathBuf> {
        let state = load_state(self.project.project.as_deref(), settings)?;
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(state.svg_file_name()));

        std::fs::write(&output, state.export_svg())
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!("Wrote {}", output.display());
        Ok(output)
    }
}

#[derive(Args, Debug)]
pub struct StlArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Frame thickness in millimetres
    #[arg(short, long, default_value_t = 3.0)]
    pub thickness: f64,

    /// Keep the centre solid and drill every screw hole
    #[arg(long)]
    pub fill_center: bool,

    /// Write ASCII STL instead of binary
    #[arg(long)]
    pub ascii: bool,

    /// Output file (defaults to the suggested name in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl StlArgs {
    pub fn options(&self) -> StlOptions {
        StlOptions {
            thickness_mm: self.thickness,
            fill_center: self.fill_center,
            format: if self.ascii {
                StlFormat::Ascii
            } else {
                StlFormat::Binary
            },
        }
    }

    /// Write the STL and return its path
    pub fn execute(&self, settings: &SettingsPersistence) -> Result<PathBuf> {
        let state = load_state(self.project.project.as_deref(), settings)?;
        let export = state.export_stl(&self.options())?;
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&export.file_name));

        std::fs::write(&output, &export.bytes)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!(
            "Wrote {} ({} triangles)",
            output.display(),
            export.triangle_count
        );
        Ok(output)
    }
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Project file to create
    #[arg(value_name = "PROJECT")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl NewArgs {
    pub fn execute(&self, settings: &SettingsPersistence) -> Result<()> {
        if self.path.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.path.display()
            );
        }
        let mut state = load_state(None, settings)?;
        state.save_project(&self.path)?;
        Ok(())
    }
}

#[derive(Args, Debug, Default)]
pub struct GridArgs {
    /// Grid width in 40 mm units
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid height in 40 mm units
    #[arg(long)]
    pub height: Option<u32>,

    /// Screw hole diameter in millimetres
    #[arg(long)]
    pub screw: Option<f64>,

    /// Left and right border in centimetres
    #[arg(long)]
    pub border_lr: Option<f64>,

    /// Top and bottom border in centimetres
    #[arg(long)]
    pub border_tb: Option<f64>,

    /// Border colour
    #[arg(long)]
    pub color: Option<String>,
}

impl GridArgs {
    fn has_changes(&self) -> bool {
        self.width.is_some()
            || self.height.is_some()
            || self.screw.is_some()
            || self.border_lr.is_some()
            || self.border_tb.is_some()
            || self.color.is_some()
    }

    /// Saved grid with the given overrides applied and validated
    pub fn candidate(&self, current: &GridConfig) -> Result<GridConfig> {
        let grid = GridConfig::new(
            self.width.unwrap_or(current.width_units),
            self.height.unwrap_or(current.height_units),
            self.screw.unwrap_or(current.screw_diameter_mm),
            self.border_lr.unwrap_or(current.border_left_right_cm),
            self.border_tb.unwrap_or(current.border_top_bottom_cm),
        )?
        .with_border_color(
            self.color
                .clone()
                .unwrap_or_else(|| current.border_color.clone()),
        );
        Ok(grid)
    }

    pub fn execute(&self, settings: &mut SettingsPersistence) -> Result<()> {
        if self.has_changes() {
            let grid = self.candidate(&settings.grid_config())?;
            settings.set_grid_config(&grid);
            settings
                .save()
                .with_context(|| format!("Failed to save {}", settings.path().display()))?;
        }
        println!("{}", settings.grid_config().info());
        Ok(())
    }
}
