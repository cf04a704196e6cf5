//! pbdto command line driver.
//!
//! Locates the protoc-generated pb.go file for a service, runs DTO
//! generation, and writes the dto file. All path conventions live here; the
//! generation pipeline itself is in `pbdto-codegen`.

use anyhow::{Context, bail};
use clap::Parser;
use pbdto_codegen::{GenerateConfig, generate_from_source};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Generate dto structs and grpc bindings from a pb.go file.
#[derive(Parser, Debug)]
#[command(name = "pbdto", version, about = "Generate dto from pb.go")]
struct Cli {
    /// Name of the service
    #[arg(short = 's', long = "service")]
    service: String,

    /// Name of the target struct in pb.go that you want to generate dto for
    #[arg(short = 'x', long = "target-struct")]
    target_struct: Option<String>,
}

/// Path conventions for one service tree.
///
/// Input:  `<service>/pkg/grpc/pb/z_<service>.pb.go`
/// Output: `<service>/pkg/<service>/dto/z_<service>_dto.go`
struct ServicePaths {
    pb_go_file: PathBuf,
    dto_dir: PathBuf,
    dto_file: PathBuf,
    pb_import_path: String,
}

impl ServicePaths {
    fn new(base: &Path, service: &str) -> Self {
        let pb_go_file = base
            .join(service)
            .join("pkg")
            .join("grpc")
            .join("pb")
            .join(format!("z_{service}.pb.go"));
        let dto_dir = base.join(service).join("pkg").join(service).join("dto");
        let dto_file = dto_dir.join(format!("z_{service}_dto.go"));

        Self {
            pb_go_file,
            dto_dir,
            dto_file,
            pb_import_path: format!("{service}/pkg/grpc/pb"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    run(Path::new("."), &cli.service, cli.target_struct.as_deref())
}

fn run(base: &Path, service: &str, target_struct: Option<&str>) -> anyhow::Result<()> {
    info!(service, "looking for pb.go");
    warn!(
        "current limitations: a pb.go file must exist before running; in-place update is not \
         supported and generation fails if the dto file already exists; nested collections such \
         as map[string][]string or []map[string]string are not supported"
    );

    match target_struct {
        Some(name) => info!(struct_name = name, "targeting specific struct in pb.go"),
        None => info!("no target struct specified, generating for all *Request/*Response structs"),
    }

    let paths = ServicePaths::new(base, service);

    if !paths.pb_go_file.exists() {
        bail!(
            "pb.go file does not exist at {}, need pb.go file to auto gen dto",
            paths.pb_go_file.display()
        );
    }
    if paths.dto_file.exists() {
        bail!(
            "dto file already exists at {}, in-place update is not supported",
            paths.dto_file.display()
        );
    }

    let src = fs::read_to_string(&paths.pb_go_file)
        .with_context(|| format!("reading pb.go file at {}", paths.pb_go_file.display()))?;

    let config = GenerateConfig::new("dto", paths.pb_import_path.clone())
        .with_target(target_struct.map(str::to_string));
    let output = generate_from_source(&src, &config)?;

    fs::create_dir_all(&paths.dto_dir)
        .with_context(|| format!("creating dto directory at {}", paths.dto_dir.display()))?;
    fs::write(&paths.dto_file, output)
        .with_context(|| format!("writing dto file at {}", paths.dto_file.display()))?;

    info!(file = %paths.dto_file.display(), "wrote dto file");
    Ok(())
}
