use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use zoneforge::assembler::{Assembler, Role};
use zoneforge::catalog::{RoleFilter, ZoneCatalog};
use zoneforge::config::{self, Settings};
use zoneforge::error::Result;
use zoneforge::reload;
use zoneforge::tsig::TsigKey;
use zoneforge::writer::FsWriter;

#[derive(Parser)]
#[command(
    name = "zoneforge",
    version,
    about = "Generate BIND zone configuration for OpenDNSSEC deployments"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Output options shared by both roles.
#[derive(Args)]
struct OutputArgs {
    /// Directory BIND reads the generated files from at runtime
    #[arg(long, default_value = "/etc/bind")]
    bind_dir: PathBuf,

    /// Directory to write generated files to (defaults to the working directory)
    #[arg(short = 'd', long)]
    dest_dir: Option<PathBuf>,

    /// Name of the top-level include file
    #[arg(long, default_value = config::DEFAULT_CONF_FILE_NAME)]
    conf_file_name: String,

    /// Run `rndc reload` after all files are written
    #[arg(long)]
    reload: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate configuration for a signing master deployment
    Master {
        /// YAML file listing the managed zones
        zone_configuration: PathBuf,

        /// TSIG private key used to read signed zones from the signer
        tsig_key_file: PathBuf,

        /// Name of the reader key in the generated configuration
        #[arg(long, default_value = config::DEFAULT_READER_KEY_NAME)]
        tsig_key_name: String,

        /// Signer daemon address
        #[arg(long, default_value = config::LOCAL_SIGNER_IP)]
        signer_ip: String,

        /// Transfer port of an external signer
        #[arg(long, default_value_t = config::STANDARD_TRANSFER_PORT)]
        signer_port: u16,

        /// TSIG private key an external signer presents to read unsigned
        /// zones; configuring it switches to the external-signer layout
        #[arg(long)]
        tsig_out_key_file: Option<PathBuf>,

        /// Name of the outbound key in the generated configuration
        #[arg(long, default_value = config::DEFAULT_OUTBOUND_KEY_NAME)]
        tsig_out_key_name: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate configuration for a slave deployment
    Slave {
        /// YAML file listing the managed zones
        zone_configuration: PathBuf,

        /// Address of the master this deployment replicates from
        master_ip: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(Cli::parse()) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Master {
            zone_configuration,
            tsig_key_file,
            tsig_key_name,
            signer_ip,
            signer_port,
            tsig_out_key_file,
            tsig_out_key_name,
            output,
        } => {
            let settings = settings_from(&output, signer_ip, signer_port);
            let catalog = ZoneCatalog::load(&zone_configuration, RoleFilter::Master)?;
            let outbound_key = match &tsig_out_key_file {
                Some(path) => Some(TsigKey::from_file(path, &tsig_out_key_name)?),
                None => None,
            };
            let reader_key = TsigKey::from_file(&tsig_key_file, &tsig_key_name)?;
            generate(
                &settings,
                &catalog,
                &Role::Master {
                    reader_key,
                    outbound_key,
                },
                output.reload,
            )
        }
        Commands::Slave {
            zone_configuration,
            master_ip,
            output,
        } => {
            let settings = settings_from(
                &output,
                config::LOCAL_SIGNER_IP.to_string(),
                config::STANDARD_TRANSFER_PORT,
            );
            let catalog = ZoneCatalog::load(&zone_configuration, RoleFilter::Slave)?;
            generate(
                &settings,
                &catalog,
                &Role::Slave {
                    master_addr: master_ip,
                },
                output.reload,
            )
        }
    }
}

fn settings_from(output: &OutputArgs, signer_ip: String, signer_port: u16) -> Settings {
    Settings {
        bind_dir: output.bind_dir.clone(),
        dest_dir: output.dest_dir.clone(),
        conf_file_name: output.conf_file_name.clone(),
        signer_ip,
        signer_port,
        ..Settings::default()
    }
}

fn generate(
    settings: &Settings,
    catalog: &ZoneCatalog,
    role: &Role,
    reload_after: bool,
) -> Result<()> {
    let directives = Assembler::new(settings).assemble(catalog, role);
    let writer = FsWriter::from_privilege(config::OWNER_NAME, config::GROUP_NAME);
    writer.write_all(&directives)?;
    if reload_after {
        reload::reload_server();
    }
    info!("All done, {} file(s) written", directives.len());
    Ok(())
}
