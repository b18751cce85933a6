use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use drawstroke::config::Config;
use drawstroke::draw::augment::MAX_WEIGHT;
use drawstroke::draw::{
    ColorTheme, DrawShape, ShapeUtil, ShapeUtils, checked_resize, export_bounds,
};
use drawstroke::svg::svg_document;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "drawstroke")]
#[command(version, about = "Freehand stroke geometry and SVG export")]
struct Cli {
    /// Config file to use instead of ~/.config/drawstroke/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export a shape as a standalone SVG document
    Export {
        #[command(flatten)]
        input: Input,

        /// Resolve colors against the dark palette
        #[arg(long)]
        dark: bool,

        /// Write the document here instead of stdout
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Print the hit-test geometry as JSON
    Geometry {
        #[command(flatten)]
        input: Input,
    },
    /// Print the selection indicator path data
    Indicator {
        #[command(flatten)]
        input: Input,

        /// Skip the sketchy width jitter
        #[arg(long)]
        force_solid: bool,
    },
    /// Print per-point density and corner estimates as JSON
    Augment {
        #[command(flatten)]
        input: Input,
    },
    /// Render the augmentation overlay as an SVG document
    Debug {
        #[command(flatten)]
        input: Input,
    },
    /// Scale a shape's points and print the resized shape as JSON
    Resize {
        #[command(flatten)]
        input: Input,

        #[arg(long, value_name = "FACTOR", allow_negative_numbers = true)]
        scale_x: f64,

        #[arg(long, value_name = "FACTOR", allow_negative_numbers = true)]
        scale_y: f64,
    },
}

#[derive(Args, Debug)]
struct Input {
    /// Shape JSON document, or - for stdin
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

impl Input {
    fn read_shape(&self) -> Result<DrawShape> {
        let json = if self.file == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read shape from stdin")?;
            buf
        } else {
            fs::read_to_string(&self.file)
                .with_context(|| format!("Failed to read shape from {}", self.file.display()))?
        };

        let shape = DrawShape::from_json(&json)?;
        log::debug!(
            "Loaded shape {} ({} segments)",
            shape.id,
            shape.props.segments.len()
        );
        Ok(shape)
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{contents}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let utils = ShapeUtils::from_config(&config);

    match cli.command {
        Command::Export {
            input,
            dark,
            output,
        } => {
            let shape = input.read_shape()?;
            let theme = if dark {
                ColorTheme::default_for(true)
            } else {
                config.color_theme()
            };

            let node = utils
                .draw
                .to_svg(&shape, &theme)
                .with_context(|| format!("Failed to export shape {}", shape.id))?;
            let bounds = export_bounds(
                &shape.props.checked_points()?,
                utils.draw.stroke_width(&shape),
                config.render.export_padding,
            )?;
            let background = config
                .render
                .export_background
                .as_ref()
                .and_then(|spec| spec.to_color(&theme));

            write_output(output.as_deref(), &svg_document(&node, bounds, background))?;
        }
        Command::Geometry { input } => {
            let shape = input.read_shape()?;
            let geometry = utils.draw.geometry(&shape)?;
            println!("{}", serde_json::to_string_pretty(&geometry)?);
        }
        Command::Indicator { input, force_solid } => {
            let shape = input.read_shape()?;
            let force_solid = force_solid || config.render.force_solid_indicator;
            let node = utils.draw.indicator(&shape, force_solid)?;
            for path in node.paths() {
                println!("{}", path.d.trim_end());
            }
        }
        Command::Augment { input } => {
            let shape = input.read_shape()?;
            let augmented = utils.draw.augment(&shape)?;
            println!("{}", serde_json::to_string_pretty(&augmented)?);
        }
        Command::Debug { input } => {
            let shape = input.read_shape()?;
            let node = utils.draw.debug_overlay(&shape, &config.debug)?;
            let max_marker = config.debug.marker_base_radius
                + config.debug.marker_weight_scale * MAX_WEIGHT;
            let bounds = export_bounds(
                &shape.props.checked_points()?,
                max_marker.max(config.debug.tick_length),
                config.render.export_padding,
            )?;
            print!("{}", svg_document(&node, bounds, None));
        }
        Command::Resize {
            input,
            scale_x,
            scale_y,
        } => {
            let mut shape = input.read_shape()?;
            shape.props.segments = checked_resize(&shape.props.segments, scale_x, scale_y)?;
            log::debug!("Resized {} by {}x{}", shape.id, scale_x, scale_y);
            println!("{}", serde_json::to_string_pretty(&shape)?);
        }
    }

    Ok(())
}
