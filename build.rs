use std::fs;
use std::path::Path;

#[allow(dead_code)]
#[path = "src/constants.rs"]
mod constants;

#[allow(dead_code)]
#[path = "src/cli/download.rs"]
mod download;

#[allow(dead_code)]
#[path = "src/cli/media_types.rs"]
mod media_types;

fn render_man(cmd: clap::Command, out_file: &Path) -> std::io::Result<()> {
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;
    fs::write(out_file, buffer)
}

fn main() -> std::io::Result<()> {
    let out_dir = Path::new("man");
    if !out_dir.exists() {
        fs::create_dir_all(out_dir)?;
    }

    render_man(download::Args::build_command(), &out_dir.join("download_media_type_files.1"))?;

    // clap_mangen only lists subcommands by name, so inline the detailed help
    // into a flat command instead.
    let cmd = media_types::Args::build_command();
    let after_help = cmd.get_after_help().map(|s| s.to_string()).unwrap_or_default();
    let man_cmd = clap::Command::new("media-types")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check, update and query the bundled media type list")
        .after_help(after_help);
    render_man(man_cmd, &out_dir.join("media-types.1"))?;

    println!("cargo:rerun-if-changed=src/cli/download.rs");
    println!("cargo:rerun-if-changed=src/cli/media_types.rs");
    println!("cargo:rerun-if-changed=src/constants.rs");

    Ok(())
}
