use log::*;
use plinth::{load_document, reconstruct, Annotation, LogDiagnostics, ReconstructionSettings};
use serde::Serialize;
use std::{fs::File, io, path::PathBuf};
use structopt::StructOpt;

#[derive(StructOpt, Clone)]
#[structopt(
    name = "plinth",
    about = "Recovers the camera, the base and the blocks of a sculpture from one annotated photograph"
)]
struct Opt {
    /// The file where the marked points are specified.
    ///
    /// This is in the format of `plinth::Annotation`. The built-in photograph is used if absent.
    #[structopt(short, long)]
    annotation: Option<PathBuf>,
    /// The file where settings are specified.
    ///
    /// This is in the format of `plinth::ReconstructionSettings`.
    #[structopt(short, long)]
    settings: Option<PathBuf>,
    /// Write the scene geometry here instead of stdout.
    #[structopt(short, long)]
    output: Option<PathBuf>,
    /// Write every intermediate result, not just the scene geometry.
    #[structopt(long)]
    full: bool,
}

fn write(output: Option<&PathBuf>, value: &impl Serialize) -> Result<(), String> {
    let written = match output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("unable to create {}: {}", path.display(), e))?;
            serde_json::to_writer_pretty(file, value)
        }
        None => serde_json::to_writer_pretty(io::stdout().lock(), value),
    };
    written.map_err(|e| format!("unable to write scene geometry: {}", e))
}

fn main() {
    pretty_env_logger::init_timed();
    let opt = Opt::from_args();

    let annotation: Annotation = match load_document(opt.annotation.as_deref(), "annotation") {
        Ok(annotation) => annotation,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let settings: ReconstructionSettings = match load_document(opt.settings.as_deref(), "settings")
    {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let reconstruction = match reconstruct(&annotation, &settings, &mut LogDiagnostics) {
        Ok(reconstruction) => reconstruction,
        Err(e) => {
            error!("reconstruction failed: {}", e);
            std::process::exit(1);
        }
    };

    let written = if opt.full {
        write(opt.output.as_ref(), &reconstruction)
    } else {
        write(opt.output.as_ref(), &reconstruction.scene)
    };
    if let Err(e) = written {
        error!("{}", e);
        std::process::exit(1);
    }
}
