use anyhow::Result;
use clap::Parser;

#[derive(clap::Parser)]
#[command(
    name = "ccver",
    about = "Compute the next semantic version from conventional commits",
    version
)]
struct Args {
    #[arg(default_value = ".", help = "Path to the git repository")]
    path: String,

    #[arg(
        short = 't',
        long,
        help = "Print the bump category (major, minor, patch, none) instead of the version"
    )]
    version_type: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let output = if args.version_type {
        ccver::next_version_type(&args.path)
    } else {
        ccver::next_version(&args.path)
    };

    match output {
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
