use clap::Parser;

/// Convert a PNG file to a Base64 string
#[derive(Parser, Debug)]
#[command(name = "png2base64")]
#[command(version)]
#[command(about = "Convert a PNG file to a Base64 string", long_about = None)]
pub struct Args {
    /// Path to the file to encode
    pub path: String,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
