use std::process::ExitCode;

fn main() -> ExitCode {
    match decode_utf8::run(std::env::args_os().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("decode-utf8: {error}");
            eprintln!("{}", decode_utf8::USAGE);
            ExitCode::FAILURE
        }
    }
}
