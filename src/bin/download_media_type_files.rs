use media_type_sync::invoke::invoke;
use media_type_sync::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _guard = logging::init_logging("download_media_type_files.log");

    let result = invoke(std::env::args_os().skip(1));
    if result.success() {
        print!("{}", result.output);
    } else {
        eprint!("{}", result.output);
    }

    ExitCode::from(u8::try_from(result.exit_code).unwrap_or(1))
}
